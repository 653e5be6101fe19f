//! Millisecond stopwatch for perf metrics.
//!
//! wasm32 has no `Instant`, so the host clock (`Date.now`) is used there;
//! natively a process-local `Instant` epoch keeps the same f64-ms shape.

pub(crate) struct Stopwatch {
    started_at_ms: f64,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Stopwatch {
            started_at_ms: clock_ms(),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        clock_ms() - self.started_at_ms
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}
