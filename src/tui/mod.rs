pub mod app;
pub mod event;
pub mod layout;
pub mod overlay;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::debounce::{debounce, Debouncer};
use crate::domain::{Entry, ViewState};
use crate::gallery::{Command, Gallery, OverlayKind};

use self::app::{InputMode, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run(ctx: &AppContext) -> Result<()> {
    let entries = ctx.loader.load().await;
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, entries, &ctx.config).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, entries: Vec<Entry>, config: &Config) -> Result<()> {
    let state = ViewState::with_preferences(config.gallery.default_sort, config.gallery.default_view);
    let mut tui_app = TuiApp::new(Gallery::new(entries, state), config.gallery.grid_columns);

    let (settled_tx, settled_rx) = mpsc::unbounded_channel();
    let mut search = search_debouncer(settled_tx, config.gallery.search_debounce());
    let mut events = EventHandler::new(TICK_RATE, settled_rx);

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        match events.next().await? {
            AppEvent::Key(key) => handle_key(&mut tui_app, key, config, &mut search),
            AppEvent::Mouse(mouse) => handle_mouse(&mut tui_app, mouse),
            AppEvent::SearchSettled(term) => apply_search(&mut tui_app, term),
            AppEvent::Resize => {}
            AppEvent::Tick => tui_app.expire_status(Instant::now()),
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Debouncer that forwards settled search terms to the event loop.
fn search_debouncer(tx: UnboundedSender<String>, delay: Duration) -> Debouncer<String> {
    debounce(
        move |term: String| {
            // The receiver only goes away when the loop has exited.
            let _ = tx.send(term);
        },
        delay,
    )
}

fn handle_key(app: &mut TuiApp, key: KeyEvent, config: &Config, search: &mut Debouncer<String>) {
    if app.gallery.overlays().active().is_some() {
        // Overlays take the keyboard even if the search box was focused.
        app.input_mode = InputMode::Browse;
    } else if app.input_mode == InputMode::Search {
        handle_search_key(app, key, search);
        return;
    }

    let action = config.keybindings.get_action(&key);
    match app.gallery.overlays().active() {
        Some(OverlayKind::Image) => match action {
            Action::Quit => app.should_quit = true,
            Action::Back => {
                app.apply(Command::Escape);
            }
            Action::Close => {
                app.apply(Command::CloseImage);
            }
            Action::OpenExternal | Action::Select => open_external(app, config),
            _ => {}
        },
        Some(OverlayKind::Detail) => match action {
            Action::Quit => app.should_quit = true,
            Action::MoveUp => app.detail_scroll = app.detail_scroll.saturating_sub(1),
            Action::MoveDown => app.detail_scroll = app.detail_scroll.saturating_add(1),
            Action::MoveLeft => app.move_image_cursor(-1),
            Action::MoveRight => app.move_image_cursor(1),
            Action::Select => app.open_selected_image(),
            Action::OpenExternal => open_external(app, config),
            Action::Back => {
                app.apply(Command::Escape);
            }
            Action::Close => {
                app.apply(Command::CloseDetail);
            }
            _ => {}
        },
        None => {
            let command = match action {
                Action::Quit => {
                    app.should_quit = true;
                    None
                }
                Action::MoveUp => {
                    app.move_up();
                    None
                }
                Action::MoveDown => {
                    app.move_down();
                    None
                }
                Action::MoveLeft => {
                    app.move_cursor(-1);
                    None
                }
                Action::MoveRight => {
                    app.move_cursor(1);
                    None
                }
                Action::Select => {
                    app.open_selected();
                    None
                }
                Action::Search => {
                    app.input_mode = InputMode::Search;
                    None
                }
                Action::NextPage => Some(Command::NextPage),
                Action::PrevPage => Some(Command::PrevPage),
                Action::GoToPage(page) => Some(Command::GoToPage(page)),
                Action::CycleFilter => Some(Command::CycleFilter),
                Action::CycleSort => Some(Command::CycleSort),
                Action::ToggleView => Some(Command::ToggleView),
                Action::Back | Action::Close | Action::OpenExternal | Action::None => None,
            };
            if let Some(command) = command {
                app.apply(command);
            }
        }
    }
}

fn handle_search_key(app: &mut TuiApp, key: KeyEvent, search: &mut Debouncer<String>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('u') if ctrl => {
            app.search_input.clear();
            search.call(String::new());
        }
        KeyCode::Char(c) if !ctrl => {
            app.search_input.push(c);
            search.call(app.search_input.clone());
        }
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                search.call(app.search_input.clone());
            }
        }
        KeyCode::Enter => {
            search.cancel();
            app.input_mode = InputMode::Browse;
            let term = app.search_input.clone();
            apply_search(app, term);
        }
        KeyCode::Esc => app.input_mode = InputMode::Browse,
        _ => {}
    }
}

/// Run a search unless `term` is already the active one.
fn apply_search(app: &mut TuiApp, term: String) {
    if term != app.gallery.state().search {
        app.apply(Command::SetSearch(term));
    }
}

fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(command) = app.command_for_click(mouse.column, mouse.row) {
                if let Command::OpenDetail(id) = &command {
                    app.select_item(id);
                    app.input_mode = InputMode::Browse;
                }
                app.apply(command);
            }
        }
        MouseEventKind::ScrollDown => match app.gallery.overlays().active() {
            Some(OverlayKind::Detail) => app.detail_scroll = app.detail_scroll.saturating_add(1),
            Some(OverlayKind::Image) => {}
            None => app.move_down(),
        },
        MouseEventKind::ScrollUp => match app.gallery.overlays().active() {
            Some(OverlayKind::Detail) => app.detail_scroll = app.detail_scroll.saturating_sub(1),
            Some(OverlayKind::Image) => {}
            None => app.move_up(),
        },
        _ => {}
    }
}

/// Hand the image under focus to the system viewer.
fn open_external(app: &mut TuiApp, config: &Config) {
    let url = match app.gallery.image() {
        Some(image) => Some(image.url.clone()),
        None => app
            .gallery
            .detail()
            .and_then(|entry| entry.images.get(app.image_cursor).cloned()),
    };
    let Some(url) = url else {
        return;
    };

    let target = config.gallery.resolve_image(&url);
    match open::that(&target) {
        Ok(()) => app.set_status(format!("Opened {}", target)),
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", target, e);
            app.set_status(format!("Failed to open {}: {}", target, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::numbered;
    use crate::source::fallback_entries;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fallback_app() -> TuiApp {
        TuiApp::new(Gallery::new(fallback_entries(), ViewState::default()), 3)
    }

    fn debouncer() -> (Debouncer<String>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (search_debouncer(tx, Config::default().gallery.search_debounce()), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_runs_one_query() {
        let config = Config::default();
        let mut app = fallback_app();
        let (mut search, mut rx) = debouncer();

        handle_key(&mut app, key(KeyCode::Char('/')), &config, &mut search);
        assert_eq!(app.input_mode, InputMode::Search);

        let before = app.gallery.queries();
        for c in "field".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), &config, &mut search);
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(app.gallery.queries(), before);
        assert_eq!(app.search_input, "field");

        tokio::time::sleep(Duration::from_millis(300)).await;
        let term = rx.recv().await.unwrap();
        assert!(rx.try_recv().is_err());

        app.apply(Command::SetSearch(term));
        assert_eq!(app.gallery.queries(), before + 1);
        assert_eq!(app.gallery.state().search, "field");
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_applies_search_immediately() {
        let config = Config::default();
        let mut app = fallback_app();
        let (mut search, mut rx) = debouncer();

        handle_key(&mut app, key(KeyCode::Char('/')), &config, &mut search);
        for c in "bug".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), &config, &mut search);
        }
        handle_key(&mut app, key(KeyCode::Enter), &config, &mut search);

        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(!search.is_pending());
        let titles: Vec<&str> = app
            .gallery
            .page_entries()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Bug Monitoring System Setup"]);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_escape_closes_topmost_overlay() {
        let config = Config::default();
        let mut app = fallback_app();
        let (mut search, _rx) = debouncer();

        handle_key(&mut app, key(KeyCode::Enter), &config, &mut search);
        assert!(app.gallery.overlays().is_open(OverlayKind::Detail));
        handle_key(&mut app, key(KeyCode::Enter), &config, &mut search);
        assert!(app.gallery.overlays().is_open(OverlayKind::Image));

        handle_key(&mut app, key(KeyCode::Esc), &config, &mut search);
        assert_eq!(app.gallery.overlays().active(), Some(OverlayKind::Detail));
        handle_key(&mut app, key(KeyCode::Esc), &config, &mut search);
        assert_eq!(app.gallery.overlays().active(), None);
    }

    #[tokio::test]
    async fn test_browse_keys_drive_gallery() {
        let config = Config::default();
        let mut app = TuiApp::new(Gallery::new(numbered(25), ViewState::default()), 3);
        let (mut search, _rx) = debouncer();

        handle_key(&mut app, key(KeyCode::Char('j')), &config, &mut search);
        assert_eq!(app.cursor, 1);

        handle_key(&mut app, key(KeyCode::Char('n')), &config, &mut search);
        assert_eq!(app.gallery.state().page, 2);
        assert_eq!(app.cursor, 0);

        handle_key(&mut app, key(KeyCode::Char('3')), &config, &mut search);
        assert_eq!(app.gallery.state().page, 3);

        handle_key(&mut app, key(KeyCode::Char('s')), &config, &mut search);
        assert_eq!(app.gallery.state().page, 1);

        handle_key(&mut app, key(KeyCode::Char('q')), &config, &mut search);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_detail_keys_scroll_and_pick_image() {
        let config = Config::default();
        let mut app = TuiApp::new(Gallery::new(numbered(3), ViewState::default()), 3);
        let (mut search, _rx) = debouncer();

        app.open_selected();
        handle_key(&mut app, key(KeyCode::Char('j')), &config, &mut search);
        handle_key(&mut app, key(KeyCode::Char('j')), &config, &mut search);
        assert_eq!(app.detail_scroll, 2);
        assert_eq!(app.cursor, 0);

        handle_key(&mut app, key(KeyCode::Char('l')), &config, &mut search);
        assert_eq!(app.image_cursor, 1);

        handle_key(&mut app, key(KeyCode::Char('x')), &config, &mut search);
        assert_eq!(app.gallery.overlays().active(), None);
    }

    #[tokio::test]
    async fn test_overlay_takes_keys_from_search_box() {
        let config = Config::default();
        let mut app = fallback_app();
        let (mut search, _rx) = debouncer();

        handle_key(&mut app, key(KeyCode::Char('/')), &config, &mut search);
        assert_eq!(app.input_mode, InputMode::Search);
        app.apply(Command::OpenDetail("post-001".into()));

        handle_key(&mut app, key(KeyCode::Char('z')), &config, &mut search);
        assert!(app.search_input.is_empty());

        handle_key(&mut app, key(KeyCode::Esc), &config, &mut search);
        assert_eq!(app.gallery.overlays().active(), None);
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[tokio::test]
    async fn test_click_on_item_leaves_search_box() {
        let mut app = fallback_app();
        app.input_mode = InputMode::Search;
        app.hits
            .items
            .push((ratatui::layout::Rect::new(0, 3, 80, 4), "post-002".into()));

        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 5,
                row: 4,
                modifiers: KeyModifiers::NONE,
            },
        );

        assert_eq!(app.gallery.overlays().active(), Some(OverlayKind::Detail));
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_unchanged_search_does_not_requery() {
        let mut app = TuiApp::new(Gallery::new(numbered(25), ViewState::default()), 3);
        app.apply(Command::NextPage);
        let queries = app.gallery.queries();

        apply_search(&mut app, String::new());
        assert_eq!(app.gallery.queries(), queries);
        assert_eq!(app.gallery.state().page, 2);

        apply_search(&mut app, "entry 1".into());
        assert_eq!(app.gallery.queries(), queries + 1);
        assert_eq!(app.gallery.state().page, 1);
    }
}
