use std::time::Duration;

pub const STANDARD_POLL_INTERVAL: Duration = Duration::from_secs(60);
pub const TV_SCROLLING_POLL_INTERVAL: Duration = Duration::from_secs(120);
pub const TV_SCROLLING_APPLY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Regular,
    Tv {
        scrolling: bool,
    },
}

impl PresentationMode {
    #[must_use]
    pub fn is_tv(self) -> bool {
        matches!(self, Self::Tv { .. })
    }

    #[must_use]
    pub fn is_auto_scrolling(self) -> bool {
        matches!(self, Self::Tv { scrolling: true })
    }

    #[must_use]
    pub fn poll_interval(self) -> Duration {
        if self.is_auto_scrolling() {
            TV_SCROLLING_POLL_INTERVAL
        } else {
            STANDARD_POLL_INTERVAL
        }
    }

    /// How long a computed update waits before it is applied.
    #[must_use]
    pub fn apply_delay(self) -> Duration {
        if self.is_auto_scrolling() {
            TV_SCROLLING_APPLY_DELAY
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    pub auto_refresh: bool,
    pub mode: PresentationMode,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            mode: PresentationMode::Regular,
        }
    }
}

impl RefreshSettings {
    /// `None` means no timer: only the initial load happens.
    #[must_use]
    pub fn poll_interval(self) -> Option<Duration> {
        self.auto_refresh.then(|| self.mode.poll_interval())
    }
}
