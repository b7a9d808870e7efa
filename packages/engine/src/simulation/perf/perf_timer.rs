//! Step timing for `PerfStats`

/// Milliseconds since an arbitrary, fixed origin.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    // std::time::Instant is unavailable on wasm32-unknown-unknown
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    /// A running timer when metrics are on, `None` otherwise.
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { start_ms: now_ms() })
    }

    /// Never negative; `Date.now()` can step backwards.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
