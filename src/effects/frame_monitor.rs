const WINDOW_MS: f64 = 1000.0;
const MIN_FPS: u32 = 30;

/// Counts frames in one-second windows and latches into degraded mode the
/// first time a window comes in under 30 fps.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMonitor {
    frames: u32,
    window_start: f64,
    degraded: bool,
}

impl FrameMonitor {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start: now_ms,
            degraded: false,
        }
    }

    /// Records a frame. Returns the fps figure whenever a window closes.
    pub fn record(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        if now_ms - self.window_start < WINDOW_MS {
            return None;
        }
        let fps = self.frames;
        self.frames = 0;
        self.window_start = now_ms;
        if fps < MIN_FPS {
            self.degraded = true;
        }
        Some(fps)
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(monitor: &mut FrameMonitor, start: f64, frames: u32, span_ms: f64) -> Option<u32> {
        let mut last = None;
        for i in 1..=frames {
            let now = start + span_ms * i as f64 / frames as f64;
            if let Some(fps) = monitor.record(now) {
                last = Some(fps);
            }
        }
        last
    }

    #[test]
    fn smooth_sixty_fps_stays_healthy() {
        let mut monitor = FrameMonitor::new(0.0);
        assert_eq!(run(&mut monitor, 0.0, 60, 1000.0), Some(60));
        assert!(!monitor.is_degraded());
    }

    #[test]
    fn slow_window_latches_degraded() {
        let mut monitor = FrameMonitor::new(0.0);
        assert_eq!(run(&mut monitor, 0.0, 20, 1000.0), Some(20));
        assert!(monitor.is_degraded());

        run(&mut monitor, 1000.0, 60, 1000.0);
        assert!(monitor.is_degraded());
    }

    #[test]
    fn no_report_mid_window() {
        let mut monitor = FrameMonitor::new(0.0);
        assert_eq!(monitor.record(16.0), None);
        assert_eq!(monitor.record(500.0), None);
    }
}
