use std::time::Duration;
use tracing::debug;

use crate::tui::state::AppState;

/// Start the gamepad poll task if it is not already running.
///
/// The task wakes on the configured interval, takes the state lock,
/// and applies one poll tick. Both the monitoring flag and the epoch
/// are checked under the lock, so `stop_gamepad_monitor` fully severs
/// delivery: a tick that already holds the lock finishes before the
/// flag can flip, and every later tick sees the flag down and exits
/// without touching the tables. The epoch keeps a stale task from a
/// previous start/stop cycle from coming back to life.
pub async fn start_gamepad_monitor(state: &AppState) {
    let epoch = {
        let mut ed = state.editor.lock().await;
        if ed.monitoring {
            return;
        }
        ed.monitoring = true;
        ed.monitor_epoch += 1;
        ed.monitor_epoch
    };

    debug!(epoch, "Starting gamepad monitor");
    let editor = state.editor.clone();
    let interval = state.config.internal.refresh_interval;

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(interval)).await;
            let mut ed = editor.lock().await;
            if !ed.monitoring || ed.monitor_epoch != epoch {
                break;
            }
            ed.gamepad_tick();
        }
        debug!(epoch, "Gamepad monitor stopped");
    });
}

/// Stop the gamepad poll task. Safe to call when it is not running.
pub async fn stop_gamepad_monitor(state: &AppState) {
    let mut ed = state.editor.lock().await;
    ed.monitoring = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, InputProfile};
    use crate::core::{GamepadSource, PadState};
    use crate::tui::state::EditorState;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Counts polls; always reports no connected device.
    struct CountingSource {
        polls: Arc<AtomicUsize>,
    }

    impl GamepadSource for CountingSource {
        fn poll(&mut self) -> Vec<PadState> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            Vec::new()
        }
    }

    fn fast_state(polls: Arc<AtomicUsize>) -> AppState {
        let mut config = AppConfig::default();
        config.internal.refresh_interval = 5;
        let config = Arc::new(config);
        let editor = EditorState::with_source(
            config.clone(),
            InputProfile::default(),
            Box::new(CountingSource { polls }),
        );
        AppState {
            editor: Arc::new(Mutex::new(editor)),
            config,
            colors: crate::config::Theme::Default.colors(),
        }
    }

    #[tokio::test]
    async fn monitor_polls_while_running() {
        let polls = Arc::new(AtomicUsize::new(0));
        let state = fast_state(polls.clone());

        start_gamepad_monitor(&state).await;
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(polls.load(Ordering::SeqCst) > 0);
        stop_gamepad_monitor(&state).await;
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let polls = Arc::new(AtomicUsize::new(0));
        let state = fast_state(polls.clone());

        start_gamepad_monitor(&state).await;
        let epoch = state.editor.lock().await.monitor_epoch;
        start_gamepad_monitor(&state).await;
        assert_eq!(state.editor.lock().await.monitor_epoch, epoch);

        stop_gamepad_monitor(&state).await;
    }

    #[tokio::test]
    async fn no_polls_after_stop_returns() {
        let polls = Arc::new(AtomicUsize::new(0));
        let state = fast_state(polls.clone());

        start_gamepad_monitor(&state).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        stop_gamepad_monitor(&state).await;

        let after_stop = polls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(polls.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test]
    async fn stop_when_not_running_is_a_no_op() {
        let polls = Arc::new(AtomicUsize::new(0));
        let state = fast_state(polls.clone());

        stop_gamepad_monitor(&state).await;
        stop_gamepad_monitor(&state).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(polls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn restart_after_stop_resumes_polling() {
        let polls = Arc::new(AtomicUsize::new(0));
        let state = fast_state(polls.clone());

        start_gamepad_monitor(&state).await;
        stop_gamepad_monitor(&state).await;
        start_gamepad_monitor(&state).await;

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(polls.load(Ordering::SeqCst) > 0);
        stop_gamepad_monitor(&state).await;
    }
}
