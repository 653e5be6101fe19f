//! Output surface size and the resize debouncer.
//!
//! Resize notifications arrive in bursts while the user drags; each
//! signal cancels the pending deadline and rearms it, so a burst
//! collapses into one applied update `delay_ms` after the last signal.

pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// A single-slot debounced value: `signal` replaces any pending value and
/// restarts the delay, `poll` hands the value out once its deadline has
/// passed. Time flows in from the caller, so the type has no timer of its
/// own and tests drive it with plain numbers.
pub struct Debounce<T> {
    delay_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: f64) -> Self {
        Debounce {
            delay_ms,
            pending: None,
        }
    }

    pub fn signal(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_last_value() {
        let mut debounce = Debounce::new(88.0);
        debounce.signal((800u32, 600u32), 0.0);
        debounce.signal((1024, 768), 10.0);

        assert_eq!(debounce.poll(50.0), None);
        assert_eq!(debounce.poll(97.9), None, "deadline is 10 + 88 = 98");
        assert_eq!(debounce.poll(98.0), Some((1024, 768)));
        assert_eq!(debounce.poll(500.0), None, "fires at most once");
    }

    #[test]
    fn resignal_after_fire_rearms() {
        let mut debounce = Debounce::new(88.0);
        debounce.signal(1, 0.0);
        assert_eq!(debounce.poll(100.0), Some(1));
        debounce.signal(2, 100.0);
        assert!(debounce.is_pending());
        assert_eq!(debounce.poll(188.0), Some(2));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut debounce = Debounce::new(10.0);
        debounce.signal(7, 0.0);
        debounce.cancel();
        assert_eq!(debounce.poll(1000.0), None);
    }

    #[test]
    fn viewport_aspect_guards_zero_height() {
        let viewport = Viewport::new(1280, 0);
        assert_eq!(viewport.height, 1);
        assert!(viewport.aspect().is_finite());
    }
}
