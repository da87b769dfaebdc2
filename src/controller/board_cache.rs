use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::controller::cms::CmsClient;
use crate::controller::refresh::{RefreshController, RefreshHandle, wait_for_first_load};
use crate::model::{LiveResult, LoadState, RefreshSettings, STANDARD_POLL_INTERVAL};

/// Boards nobody asked for in this long are stopped.
pub const IDLE_EVICTION: Duration = Duration::from_secs(STANDARD_POLL_INTERVAL.as_secs() * 5);

pub struct BoardEntry {
    handle: RefreshHandle,
    /// Milliseconds since the registry was created.
    last_access_ms: AtomicU64,
}

impl BoardEntry {
    fn touch(&self, now_ms: u64) {
        self.last_access_ms.fetch_max(now_ms, Ordering::Relaxed);
    }

    fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }
}

pub type BoardMap = Arc<RwLock<HashMap<i64, BoardEntry>>>;

/// One refresh controller per event, started on the first request for it.
/// Unknown events are dropped after their first load and idle boards are
/// evicted, so the map only holds events someone is watching.
#[derive(Clone)]
pub struct BoardRegistry {
    client: Arc<dyn CmsClient>,
    boards: BoardMap,
    cancel: CancellationToken,
    epoch: Instant,
    idle_after: Duration,
}

impl BoardRegistry {
    #[must_use]
    pub fn new(client: Arc<dyn CmsClient>, cancel: CancellationToken) -> Self {
        Self::with_idle_eviction(client, cancel, IDLE_EVICTION)
    }

    #[must_use]
    pub fn with_idle_eviction(
        client: Arc<dyn CmsClient>,
        cancel: CancellationToken,
        idle_after: Duration,
    ) -> Self {
        Self {
            client,
            boards: Arc::new(RwLock::new(HashMap::new())),
            cancel,
            epoch: Instant::now(),
            idle_after,
        }
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    async fn ensure_started(&self, event_id: i64) {
        let now_ms = self.now_ms();
        {
            let boards = self.boards.read().await;
            if let Some(entry) = boards.get(&event_id).filter(|e| e.is_live()) {
                entry.touch(now_ms);
                return;
            }
        }

        let mut boards = self.boards.write().await;
        // Another request may have started it while we waited for the write lock.
        if let Some(entry) = boards.get(&event_id).filter(|e| e.is_live()) {
            entry.touch(now_ms);
            return;
        }
        self.evict_idle(&mut boards, now_ms);

        info!(event_id, "starting board");
        let handle = RefreshController::spawn(
            Arc::clone(&self.client),
            event_id,
            RefreshSettings::default(),
            self.cancel.child_token(),
        );
        boards.insert(
            event_id,
            BoardEntry {
                handle,
                last_access_ms: AtomicU64::new(now_ms),
            },
        );
    }

    fn evict_idle(&self, boards: &mut HashMap<i64, BoardEntry>, now_ms: u64) {
        let idle_ms = u64::try_from(self.idle_after.as_millis()).unwrap_or(u64::MAX);
        boards.retain(|event_id, entry| {
            let last = entry.last_access_ms.load(Ordering::Relaxed);
            let keep = entry.is_live() && now_ms.saturating_sub(last) < idle_ms;
            if !keep {
                debug!(event_id, "evicting idle board");
            }
            keep
        });
    }

    /// Stops idle and finished boards. Dropping an entry cancels its controller.
    pub async fn sweep(&self) {
        let now_ms = self.now_ms();
        let mut boards = self.boards.write().await;
        self.evict_idle(&mut boards, now_ms);
    }

    /// Sweeps once per standard poll interval until the registry shuts down.
    #[must_use]
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(STANDARD_POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = registry.cancel.cancelled() => break,
                    _ = ticker.tick() => registry.sweep().await,
                }
            }
        })
    }

    /// Current state of an event's board; waits for the first load if the
    /// board was just started.
    pub async fn state_for(&self, event_id: i64) -> LoadState {
        self.ensure_started(event_id).await;
        let rx = {
            let boards = self.boards.read().await;
            boards
                .get(&event_id)
                .map(|entry| entry.handle.subscribe_state())
        };
        let Some(rx) = rx else {
            return LoadState::Loading;
        };

        let state = wait_for_first_load(rx).await;
        if state.board().is_none() && state.failure().is_some_and(|f| f.not_found) {
            // Nothing to poll for; the next request starts over.
            info!(event_id, "event not found, dropping board");
            self.boards.write().await.remove(&event_id);
        }
        state
    }

    /// Last published flattened results for an event.
    pub async fn results_for(&self, event_id: i64) -> Vec<LiveResult> {
        let state = self.state_for(event_id).await;
        if state.is_loading() {
            return Vec::new();
        }
        let boards = self.boards.read().await;
        boards
            .get(&event_id)
            .map(|entry| entry.handle.subscribe_results().borrow().clone())
            .unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.boards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn shutdown(&self) {
        info!("stopping all boards");
        self.cancel.cancel();
    }
}
