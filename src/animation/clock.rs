use tokio::time::Instant;

/// Source of the current frame time in milliseconds.
pub trait FrameClock: Send + Sync {
    fn now_ms(&self) -> f64;
}

/// Milliseconds elapsed since the clock was created, on tokio's time source.
///
/// Follows tokio's paused clock in tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Default for TokioClock {
    fn default() -> Self { Self::new() }
}

impl FrameClock for TokioClock {
    fn now_ms(&self) -> f64 { self.origin.elapsed().as_secs_f64() * 1000.0 }
}
