use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

use crate::controller::cms::{CmsClient, fetch_snapshot};
use crate::controller::standings::{build_board, flatten_live_results};
use crate::model::{LiveResult, LoadState, PresentationMode, RefreshSettings};

/// Keeps one event's board fresh. Lives in its own task; callers hold a
/// [`RefreshHandle`].
pub struct RefreshController {
    client: Arc<dyn CmsClient>,
    event_id: i64,
    settings: watch::Receiver<RefreshSettings>,
    state_tx: watch::Sender<LoadState>,
    results_tx: watch::Sender<Vec<LiveResult>>,
    published_results: String,
    cancel: CancellationToken,
}

/// Owner side of a running controller. Dropping it stops the task.
pub struct RefreshHandle {
    state: watch::Receiver<LoadState>,
    results: watch::Receiver<Vec<LiveResult>>,
    settings: watch::Sender<RefreshSettings>,
    task: JoinHandle<()>,
    _guard: DropGuard,
}

impl RefreshController {
    /// Starts the controller. The first fetch happens immediately.
    #[must_use]
    pub fn spawn(
        client: Arc<dyn CmsClient>,
        event_id: i64,
        settings: RefreshSettings,
        cancel: CancellationToken,
    ) -> RefreshHandle {
        let (settings_tx, settings_rx) = watch::channel(settings);
        let (state_tx, state_rx) = watch::channel(LoadState::Loading);
        let (results_tx, results_rx) = watch::channel(Vec::new());

        let controller = Self {
            client,
            event_id,
            settings: settings_rx,
            state_tx,
            results_tx,
            published_results: "[]".to_string(),
            cancel: cancel.clone(),
        };

        RefreshHandle {
            state: state_rx,
            results: results_rx,
            settings: settings_tx,
            task: tokio::spawn(controller.run()),
            _guard: cancel.drop_guard(),
        }
    }

    async fn run(mut self) {
        info!(event_id = self.event_id, "refresh controller starting");

        if self.refresh_once().await {
            loop {
                // Any settings change tears the timer down and starts a new one.
                let wait = self.settings.borrow_and_update().poll_interval();
                tokio::select! {
                    () = self.cancel.cancelled() => break,
                    changed = self.settings.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    () = sleep_or_forever(wait) => {
                        if !self.refresh_once().await {
                            break;
                        }
                    }
                }
            }
        }

        info!(event_id = self.event_id, "refresh controller stopped");
    }

    /// Fetches, aggregates and publishes one cycle. Returns `false` when the
    /// controller was cancelled part way through.
    async fn refresh_once(&mut self) -> bool {
        let fetched = tokio::select! {
            () = self.cancel.cancelled() => return false,
            fetched = fetch_snapshot(self.client.as_ref(), self.event_id) => fetched,
        };

        let (event, tee_times) = match fetched {
            Ok(snapshot) => snapshot,
            Err(failure) => {
                warn!(
                    event_id = self.event_id,
                    stage = ?failure.stage,
                    error = %failure.message,
                    "refresh failed, keeping last good board"
                );
                let last_good = self.state_tx.borrow().board().cloned();
                self.state_tx
                    .send_replace(LoadState::Failed { failure, last_good });
                return true;
            }
        };

        let board = build_board(&event, &tee_times, Utc::now());

        let delay = self.settings.borrow().mode.apply_delay();
        if !delay.is_zero() {
            debug!(event_id = self.event_id, ?delay, "deferring update while auto-scrolling");
            tokio::select! {
                () = self.cancel.cancelled() => return false,
                () = tokio::time::sleep(delay) => {}
            }
        }

        self.publish_results(flatten_live_results(&board.clubs));
        debug!(
            event_id = self.event_id,
            clubs = board.clubs.len(),
            "board refreshed"
        );
        self.state_tx.send_replace(LoadState::Ready(Arc::new(board)));
        true
    }

    fn publish_results(&mut self, results: Vec<LiveResult>) {
        let serialized = match serde_json::to_string(&results) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "could not serialize live results");
                return;
            }
        };
        if serialized == self.published_results {
            debug!(event_id = self.event_id, "live results unchanged, not publishing");
            return;
        }
        info!(
            event_id = self.event_id,
            results = results.len(),
            "publishing live results"
        );
        self.published_results = serialized;
        self.results_tx.send_replace(results);
    }
}

async fn sleep_or_forever(wait: Option<Duration>) {
    match wait {
        Some(wait) => tokio::time::sleep(wait).await,
        None => std::future::pending().await,
    }
}

pub async fn wait_for_first_load(mut rx: watch::Receiver<LoadState>) -> LoadState {
    if let Ok(state) = rx.wait_for(|s| !s.is_loading()).await {
        return state.clone();
    }
    // The controller stopped before finishing a load.
    rx.borrow().clone()
}

impl RefreshHandle {
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<LoadState> {
        self.state.clone()
    }

    #[must_use]
    pub fn subscribe_results(&self) -> watch::Receiver<Vec<LiveResult>> {
        self.results.clone()
    }

    pub fn set_mode(&self, mode: PresentationMode) {
        self.settings.send_if_modified(|s| {
            let changed = s.mode != mode;
            s.mode = mode;
            changed
        });
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        self.settings.send_if_modified(|s| {
            let changed = s.auto_refresh != enabled;
            s.auto_refresh = enabled;
            changed
        });
    }

    /// Waits for the first fetch to finish, successfully or not.
    pub async fn first_load(&self) -> LoadState {
        wait_for_first_load(self.state.clone()).await
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
