//! Per-pixel observation hook for the blur passes.
//!
//! The reference tool printed one diagnostic line per computed pixel. The
//! passes instead report each computed pixel to a [`BlurObserver`], which
//! defaults to a no-op so the core stays pure; the CLI forwards events to
//! `log::trace!` when tracing is enabled.

/// Which pass produced a trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One computed pixel: position, value before and after, and the five
/// samples the kernel read (left-to-right or top-to-bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelTrace {
    pub axis: Axis,
    pub row: usize,
    pub col: usize,
    pub original: i32,
    pub blurred: i32,
    pub neighbors: [i32; 5],
}

/// Receives one event per blurred pixel. Border pixels are copied, not
/// computed, and produce no event.
pub trait BlurObserver {
    fn on_pixel(&mut self, trace: &PixelTrace);
}

/// Default observer: ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BlurObserver for NoopObserver {
    fn on_pixel(&mut self, _trace: &PixelTrace) {}
}

impl<F: FnMut(&PixelTrace)> BlurObserver for F {
    fn on_pixel(&mut self, trace: &PixelTrace) {
        self(trace)
    }
}
