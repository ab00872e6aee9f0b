//! World observer trait for progress reporting and data collection.

use crate::Vehicle;

/// Callbacks invoked by [`World::run_ticks`][crate::World::run_ticks] at
/// every tick boundary.
///
/// This is the presentation seam: renderers, trace writers, and progress
/// printers implement it instead of the world knowing about any output
/// format.  All methods have default no-op implementations so implementors
/// only override what they care about.
///
/// # Example — position printer
///
/// ```rust,ignore
/// struct PositionPrinter { interval: u64 }
///
/// impl WorldObserver for PositionPrinter {
///     fn on_tick_end(&mut self, tick: u64, vehicles: &[Vehicle]) {
///         if tick % self.interval == 0 {
///             for v in vehicles {
///                 println!("tick {tick}: {} at {}", v.id(), v.entity.pos);
///             }
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called before any processing of the tick.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called after the tick completes, with read-only access to every
    /// vehicle's updated state.
    fn on_tick_end(&mut self, _tick: u64, _vehicles: &[Vehicle]) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
