use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::TuiApp;

/// Most image lines listed before the rest are summarized.
const MAX_IMAGE_LINES: usize = 5;

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_detail(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let Some(entry) = app.gallery.detail() else {
        return;
    };

    let area = centered(frame.area(), 80, 80);
    app.hits.detail_box = Some(area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", entry.title),
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.overlay_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = entry.images.len().min(MAX_IMAGE_LINES);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Meta
            Constraint::Length(shown as u16 + 2), // Images
            Constraint::Min(1),                   // Content
        ])
        .split(inner);

    let meta = Line::from(vec![
        Span::styled(entry.display_date(), Style::default().fg(colors.metadata)),
        Span::raw(" · "),
        Span::styled(entry.author.as_str(), Style::default().fg(colors.metadata)),
        Span::raw(" · "),
        Span::styled(
            format!(" {} ", entry.category_name()),
            Style::default().fg(colors.badge_fg).bg(colors.badge_bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(meta), chunks[0]);

    let images = chunks[1];
    let header = format!("Images ({})", entry.images.len());
    frame.render_widget(
        Paragraph::new(header).style(Style::default().add_modifier(Modifier::BOLD)),
        Rect::new(images.x, images.y, images.width, 1.min(images.height)),
    );

    let first = app.image_cursor.saturating_sub(shown.saturating_sub(1));
    for (slot, (index, url)) in entry
        .images
        .iter()
        .enumerate()
        .skip(first)
        .take(shown)
        .enumerate()
    {
        let y = images.y + 1 + slot as u16;
        if y >= images.y + images.height {
            break;
        }
        let rect = Rect::new(images.x, y, images.width, 1);
        let style = if index == app.image_cursor {
            Style::default()
                .fg(colors.selection_fg)
                .bg(colors.selection_bg)
        } else {
            Style::default().fg(colors.image_ref)
        };
        frame.render_widget(Paragraph::new(format!("▸ {}", url)).style(style), rect);
        app.hits.detail_images.push((rect, index));
    }

    let content = Paragraph::new(entry.display_content())
        .style(Style::default().fg(colors.description))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(content, chunks[2]);
}

pub fn render_image(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let Some(image) = app.gallery.image() else {
        return;
    };

    let full = frame.area();
    let mut area = centered(full, 60, 30);
    area.height = area.height.max(7).min(full.height);
    area.y = full.y + (full.height - area.height) / 2;
    app.hits.image_box = Some(area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Image ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.overlay_border));

    let lines = vec![
        Line::from(Span::styled(
            image.caption.as_str(),
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("▣ {}", image.url),
            Style::default().fg(colors.image_ref),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "o: open in system viewer",
            Style::default().fg(colors.metadata),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
