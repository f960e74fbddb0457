//! Trailing-edge debouncing on top of tokio timers.
//!
//! Each call schedules the action after the quiet period and aborts whatever
//! was scheduled before, so a burst of calls runs the action once with the
//! last value.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet period for search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Debouncer<T> {
    delay: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

/// Wrap `action` so that it only runs once calls have been quiet for `delay`.
pub fn debounce<T, F>(action: F, delay: Duration) -> Debouncer<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer::new(delay, action)
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Restart the quiet period with `value`. Must run inside a tokio runtime.
    pub fn call(&mut self, value: T) {
        self.cancel();

        let action = self.action.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(value);
        }));
    }

    /// Drop the scheduled action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once_with_last_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let counter = calls.clone();
        let mut debouncer = debounce(
            move |term: String| {
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(term);
            },
            SEARCH_DEBOUNCE,
        );

        for term in ["b", "bu", "bug", "bugs", "bugs!"] {
            debouncer.call(term.to_string());
            sleep(Duration::from_millis(20)).await;
        }
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        sleep(SEARCH_DEBOUNCE).await;
        assert_eq!(rx.try_recv().unwrap(), "bugs!");

        sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_each_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = debounce(
            move |n: u32| {
                let _ = tx.send(n);
            },
            Duration::from_millis(100),
        );

        debouncer.call(1);
        sleep(Duration::from_millis(150)).await;
        debouncer.call(2);
        sleep(Duration::from_millis(150)).await;

        assert_eq!(rx.try_recv().unwrap(), 1);
        assert_eq!(rx.try_recv().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = debounce(
            move |n: u32| {
                let _ = tx.send(n);
            },
            Duration::from_millis(100),
        );

        debouncer.call(7);
        debouncer.cancel();
        sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut debouncer = debounce(
                move |n: u32| {
                    let _ = tx.send(n);
                },
                Duration::from_millis(100),
            );
            debouncer.call(1);
        }
        sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
