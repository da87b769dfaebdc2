//! Marquee scroll physics for the TV view.
//!
//! The engine is clock-free: callers pass a monotonic timestamp in
//! milliseconds to every call, so motion depends on elapsed time only and
//! not on how often frames arrive. Units are whatever the renderer measures
//! heights in (rows for the terminal board).

/// Wait this long after mount before measuring content.
pub const SETTLE_DELAY_MS: f64 = 300.0;
/// Give up on measuring after this long and start anyway.
pub const SETTLE_TIMEOUT_MS: f64 = 2_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    Initializing { mounted_at_ms: f64 },
    Ready,
}

#[derive(Debug, Clone)]
pub struct ScrollEngine {
    phase: ScrollPhase,
    scrolling: bool,
    /// Signed units per second; negative moves content upwards.
    velocity: f64,
    offset: f64,
    content_height: f64,
    container_height: f64,
    needs_duplication: bool,
    /// Set by the first measurement of non-empty content.
    measured: bool,
    last_frame_ms: Option<f64>,
}

impl ScrollEngine {
    /// A freshly mounted engine. It scrolls as soon as it is ready.
    #[must_use]
    pub fn new(velocity: f64, now_ms: f64) -> Self {
        Self {
            phase: ScrollPhase::Initializing {
                mounted_at_ms: now_ms,
            },
            scrolling: true,
            velocity,
            offset: 0.0,
            content_height: 0.0,
            container_height: 0.0,
            needs_duplication: false,
            measured: false,
            last_frame_ms: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == ScrollPhase::Ready
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn needs_duplication(&self) -> bool {
        self.needs_duplication
    }

    /// How many back-to-back copies of the content to render.
    #[must_use]
    pub fn copies(&self) -> usize {
        if self.needs_duplication { 2 } else { 1 }
    }

    /// True once the settle delay has passed and no measurement was taken yet.
    #[must_use]
    pub fn wants_measurement(&self, now_ms: f64) -> bool {
        match self.phase {
            ScrollPhase::Initializing { mounted_at_ms } => {
                now_ms - mounted_at_ms >= SETTLE_DELAY_MS
            }
            ScrollPhase::Ready => false,
        }
    }

    /// First measurement pass. Content shorter than two viewports is
    /// duplicated so the loop has no visible seam. The duplication decision
    /// is made once, on the first non-empty content, even when the settle
    /// timeout already forced the engine ready.
    pub fn measure(&mut self, content_height: f64, container_height: f64) {
        if self.measured {
            self.set_content_height(content_height, container_height);
            return;
        }
        self.content_height = content_height.max(0.0);
        self.container_height = container_height.max(0.0);
        self.measured = self.content_height > 0.0;
        self.needs_duplication =
            self.measured && self.content_height < 2.0 * self.container_height;
        self.phase = ScrollPhase::Ready;
    }

    /// Later size changes (refreshed data, resized terminal). The offset
    /// and the duplication decision are kept.
    pub fn set_content_height(&mut self, content_height: f64, container_height: f64) {
        self.content_height = content_height.max(0.0);
        self.container_height = container_height.max(0.0);
    }

    fn max_scroll(&self) -> f64 {
        (self.content_height - self.container_height).max(0.0)
    }

    /// Advances the integrator to `now_ms` and returns the new offset.
    /// Frames keep arriving while paused so resuming does not jump.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let elapsed_ms = self
            .last_frame_ms
            .map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame_ms = Some(now_ms);

        if let ScrollPhase::Initializing { mounted_at_ms } = self.phase {
            if now_ms - mounted_at_ms >= SETTLE_TIMEOUT_MS {
                self.phase = ScrollPhase::Ready;
            }
            return self.offset;
        }

        if !self.scrolling {
            return self.offset;
        }

        self.offset += self.velocity * elapsed_ms / 1000.0;

        let loop_length = if self.needs_duplication {
            self.content_height
        } else {
            self.max_scroll()
        };
        if self.offset <= -loop_length {
            self.offset = 0.0;
        } else if self.offset > 0.0 {
            self.offset = -loop_length;
        }

        self.offset
    }

    pub fn pause(&mut self) {
        self.scrolling = false;
        // Inside the second copy: move to the same spot in the first one.
        if self.needs_duplication && self.offset < -self.content_height {
            self.offset += self.content_height;
        }
    }

    pub fn resume(&mut self) {
        self.scrolling = true;
    }

    pub fn toggle(&mut self) {
        if self.scrolling {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Manual scroll while paused. Positive `delta` scrolls down the page.
    /// Returns whether the offset moved.
    pub fn wheel(&mut self, delta: f64) -> bool {
        if self.scrolling || !self.is_ready() {
            return false;
        }
        let before = self.offset;
        self.offset = (self.offset - delta).clamp(-self.max_scroll(), 0.0);
        (self.offset - before).abs() > f64::EPSILON
    }

    /// Index of the first visible row for the current offset.
    #[must_use]
    pub fn first_visible_row(&self) -> usize {
        let row = (-self.offset).max(0.0).floor();
        // Offsets are bounded by content height, well within usize.
        row as usize
    }
}
