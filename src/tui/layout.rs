use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::{Category, CategoryFilter, Entry, ViewMode};
use crate::gallery::OverlayKind;
use crate::query::PageControl;
use crate::tui::app::{InputMode, PagerTarget, TuiApp};
use crate::tui::overlay;

/// Lines per entry in the list layout.
const ROW_HEIGHT: u16 = 4;
/// Rows per card in the grid layout, borders included.
const CARD_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    app.hits.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter, search, sort, view
            Constraint::Min(5),    // Items
            Constraint::Length(1), // Pager
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_toolbar(frame, app, chunks[0], colors);
    match app.gallery.state().view {
        ViewMode::List => render_list(frame, app, chunks[1], colors),
        ViewMode::Grid => render_grid(frame, app, chunks[1], colors),
    }
    render_pager(frame, app, chunks[2], colors);
    render_status_bar(frame, app, chunks[3], colors);

    if app.gallery.overlays().is_open(OverlayKind::Detail) {
        overlay::render_detail(frame, app, colors);
    }
    if app.gallery.overlays().is_open(OverlayKind::Image) {
        overlay::render_image(frame, app, colors);
    }
}

fn render_toolbar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let state = app.gallery.state();
    let filters = std::iter::once(CategoryFilter::All)
        .chain(Category::KNOWN.into_iter().map(CategoryFilter::Only));

    let mut spans = Vec::new();
    for filter in filters {
        let style = if filter == state.filter {
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.description)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    let searching = app.input_mode == InputMode::Search;
    let cursor = if searching { "▏" } else { "" };
    spans.push(Span::raw("│ Search: "));
    spans.push(Span::styled(
        format!("{}{}", app.search_input, cursor),
        Style::default().fg(colors.search),
    ));
    spans.push(Span::raw(format!(
        "  │ Sort: {}  │ View: {}",
        state.sort.label(),
        state.view
    )));

    let border = if searching {
        colors.active_border
    } else {
        colors.inactive_border
    };
    let block = Block::default()
        .title(" Vitrine ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn items_block(app: &TuiApp, colors: &ColorConfig) -> Block<'static> {
    let active = app.gallery.overlays().active().is_none() && app.input_mode == InputMode::Browse;
    let border = if active {
        colors.active_border
    } else {
        colors.inactive_border
    };
    Block::default()
        .title(format!(" Entries ({}) ", app.gallery.match_count()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_empty(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let paragraph = Paragraph::new("No entries match the current filter and search.")
        .style(Style::default().fg(colors.description));
    frame.render_widget(paragraph, area);
}

fn badge<'a>(entry: &'a Entry, colors: &ColorConfig) -> Span<'a> {
    Span::styled(
        format!(" {} ", entry.category_name()),
        Style::default().fg(colors.badge_fg).bg(colors.badge_bg),
    )
}

fn render_list(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let block = items_block(app, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.page_len() == 0 {
        render_empty(frame, inner, colors);
        return;
    }

    let visible = usize::from(inner.height / ROW_HEIGHT).max(1);
    app.ensure_visible(app.cursor, visible);

    let page = app.gallery.page_entries();
    for (slot, (index, entry)) in page
        .iter()
        .enumerate()
        .skip(app.offset)
        .take(visible)
        .enumerate()
    {
        let rect = Rect::new(
            inner.x,
            inner.y + slot as u16 * ROW_HEIGHT,
            inner.width,
            ROW_HEIGHT.min(inner.height),
        );
        let selected = index == app.cursor;
        let marker = if selected { "▶ " } else { "  " };

        let lines = vec![
            Line::from(vec![
                Span::raw(marker),
                badge(entry, colors),
                Span::raw(" "),
                Span::styled(
                    entry.title.as_str(),
                    Style::default()
                        .fg(colors.title)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", entry.display_date(), entry.author),
                    Style::default().fg(colors.metadata),
                ),
                Span::styled(
                    format!("  ▣ {}", entry.thumbnail),
                    Style::default().fg(colors.image_ref),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", entry.description),
                Style::default().fg(colors.description),
            )),
            Line::from(Span::styled(
                format!(
                    "  {}",
                    entry
                        .tags
                        .iter()
                        .map(|tag| format!("#{}", tag))
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
                Style::default().fg(colors.tag),
            )),
        ];

        let mut paragraph = Paragraph::new(lines);
        if selected {
            paragraph = paragraph.style(Style::default().bg(colors.selection_bg));
        }
        frame.render_widget(paragraph, rect);
        app.hits.items.push((rect, entry.id.clone()));
    }
}

fn render_grid(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let block = items_block(app, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.page_len() == 0 {
        render_empty(frame, inner, colors);
        return;
    }

    let columns = app.grid_columns.max(1);
    let card_width = inner.width / columns as u16;
    let visible_rows = usize::from(inner.height / CARD_HEIGHT).max(1);
    app.ensure_visible(app.cursor / columns, visible_rows);

    let page = app.gallery.page_entries();
    for (index, entry) in page.iter().enumerate() {
        let row = index / columns;
        if row < app.offset || row >= app.offset + visible_rows {
            continue;
        }
        let col = index % columns;
        let rect = Rect::new(
            inner.x + col as u16 * card_width,
            inner.y + (row - app.offset) as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT.min(inner.height),
        );
        let selected = index == app.cursor;

        let border = if selected {
            colors.active_border
        } else {
            colors.inactive_border
        };
        let card = Block::default()
            .title(Span::styled(
                format!(" {} ", entry.title),
                Style::default()
                    .fg(colors.title)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let lines = vec![
            Line::from(Span::styled(
                format!("▣ {}", entry.thumbnail),
                Style::default().fg(colors.image_ref),
            )),
            Line::from(Span::styled(
                entry.description.as_str(),
                Style::default().fg(colors.description),
            )),
        ];

        let mut paragraph = Paragraph::new(lines)
            .block(card)
            .wrap(Wrap { trim: true });
        if selected {
            paragraph = paragraph.style(Style::default().bg(colors.selection_bg));
        }
        frame.render_widget(paragraph, rect);
        app.hits.items.push((rect, entry.id.clone()));
    }
}

fn render_pager(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let pagination = app.gallery.pagination();
    if !pagination.visible {
        return;
    }

    let enabled = Style::default().fg(colors.title);
    let disabled = Style::default().fg(colors.pager_disabled);
    let mut x = area.x;
    let mut spans = Vec::new();
    let mut push = |text: String, style: Style, target: Option<PagerTarget>| {
        let width = text.chars().count() as u16;
        if let Some(target) = target {
            app.hits.pager.push((Rect::new(x, area.y, width, 1), target));
        }
        x = x.saturating_add(width);
        spans.push(Span::styled(text, style));
    };

    if pagination.prev_enabled {
        push("‹ Prev".into(), enabled, Some(PagerTarget::Prev));
    } else {
        push("‹ Prev".into(), disabled, None);
    }
    push("  ".into(), Style::default(), None);

    for control in &pagination.controls {
        match *control {
            PageControl::Page { number, active } => {
                let style = if active {
                    Style::default()
                        .fg(colors.selection_fg)
                        .bg(colors.pager_active)
                        .add_modifier(Modifier::BOLD)
                } else {
                    enabled
                };
                push(format!(" {} ", number), style, Some(PagerTarget::Page(number)));
            }
            PageControl::Ellipsis => push(" … ".into(), disabled, None),
        }
    }

    push("  ".into(), Style::default(), None);
    if pagination.next_enabled {
        push("Next ›".into(), enabled, Some(PagerTarget::Next));
    } else {
        push("Next ›".into(), disabled, None);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let info = app.gallery.page_info();
    let summary = if info.total_pages == 0 {
        "0 results".to_string()
    } else {
        format!(
            "{} results · page {} of {}",
            info.total_items, info.current, info.total_pages
        )
    };

    let hints = if app.input_mode == InputMode::Search {
        "Type to search  Enter:Apply  Esc:Done"
    } else {
        match app.gallery.overlays().active() {
            Some(OverlayKind::Image) => "o:Open in viewer  x/Esc:Close",
            Some(OverlayKind::Detail) => "h/l:Image  Enter:View image  j/k:Scroll  x/Esc:Close",
            None => "j/k:Nav  Enter:Open  /:Search  f:Filter  s:Sort  v:View  n/p:Page  q:Quit",
        }
    };

    let status = match app.status() {
        Some(msg) => format!("{} │ {}", summary, msg),
        None => format!("{} │ {}", summary, hints),
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
