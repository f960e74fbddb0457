use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::app::{Result, VitrineError};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// A search term that has been quiet for the debounce period.
    SearchSettled(String),
    Resize,
    Tick,
}

/// Merges terminal input, settled search terms and a periodic tick.
pub struct EventHandler {
    input: EventStream,
    settled: UnboundedReceiver<String>,
    tick: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, settled: UnboundedReceiver<String>) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            input: EventStream::new(),
            settled,
            tick,
        }
    }

    pub async fn next(&mut self) -> Result<AppEvent> {
        tokio::select! {
            event = self.input.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
                Some(Ok(Event::Mouse(mouse))) => Ok(AppEvent::Mouse(mouse)),
                Some(Ok(Event::Resize(_, _))) => Ok(AppEvent::Resize),
                Some(Ok(_)) => Ok(AppEvent::Tick),
                Some(Err(e)) => Err(e.into()),
                None => Err(VitrineError::Other("terminal input closed".into())),
            },
            Some(term) = self.settled.recv() => Ok(AppEvent::SearchSettled(term)),
            _ = self.tick.tick() => Ok(AppEvent::Tick),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextPage,
    PrevPage,
    GoToPage(usize),
    Select,
    Back,
    Close,
    Search,
    CycleFilter,
    CycleSort,
    ToggleView,
    OpenExternal,
    None,
}
