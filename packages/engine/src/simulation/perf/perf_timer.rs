/// Lap timer for the phases of one step.
/// Reads `Date.now()` in the browser and `Instant` natively.
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    last_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    last: std::time::Instant,
    total_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer {
            #[cfg(target_arch = "wasm32")]
            last_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            last: std::time::Instant::now(),
            total_ms: 0.0,
        }
    }

    /// Milliseconds since `start` or the previous lap
    pub(crate) fn lap(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let elapsed = {
            let now = js_sys::Date::now();
            let elapsed = now - self.last_ms;
            self.last_ms = now;
            elapsed
        };
        #[cfg(not(target_arch = "wasm32"))]
        let elapsed = {
            let now = std::time::Instant::now();
            let elapsed = now.duration_since(self.last).as_secs_f64() * 1000.0;
            self.last = now;
            elapsed
        };
        self.total_ms += elapsed;
        elapsed
    }

    pub(crate) fn total_ms(&self) -> f64 {
        self.total_ms
    }
}
