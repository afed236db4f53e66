//! Render-pass timing and profiling instrumentation.
//!
//! Every canvas redraw is bracketed by [`PerfMonitor::begin_frame`] /
//! [`PerfMonitor::end_frame`], which keeps a rolling window of pass times and
//! a running count of passes. Hot paths (hit testing, pointer handling) use
//! the `profile_scope!` macro, which compiles to nothing unless the
//! `profiling` feature is enabled:
//!
//! ```ignore
//! fn handle_pointer_down(&mut self, pos: Point) {
//!     profile_scope!("handle_pointer_down");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (e.g., 2.0 = warn if a pass takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, 0.0);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Rolling render-pass statistics.
pub struct PerfMonitor {
    /// Recent pass times in milliseconds
    frame_times: VecDeque<f64>,
    /// When the current pass started
    frame_start: Option<Instant>,
    /// Count of passes that exceeded the warning threshold
    slow_frame_count: u64,
    /// Total passes tracked
    total_frames: u64,
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a pass and record its timing in milliseconds.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow render pass"
            );
        }

        Some(ms)
    }

    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    /// Number of completed passes since creation or the last reset.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn slow_frame_count(&self) -> u64 {
        self.slow_frame_count
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.slow_frame_count = 0;
        self.total_frames = 0;
    }
}

/// Logs a `debug!` line when dropped if the scope took longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms >= self.threshold_ms {
            debug!(elapsed_ms = format!("{:.3}", ms), "{}", self.name);
        }
    }
}
