//! Tick observer trait for progress reporting and event collection.

use sb_core::{Section, Tick};

/// Callbacks invoked by
/// [`SignalBox::move_trains_observed`](crate::SignalBox::move_trains_observed)
/// at key points in a tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — movement printer
///
/// ```rust,ignore
/// struct MovementPrinter;
///
/// impl TickObserver for MovementPrinter {
///     fn on_hop(&mut self, tick: Tick, train: &str, from: Section, to: Section) {
///         println!("{tick}: {train} {from} -> {to}");
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called once per tick before planning.  `candidates` counts the
    /// nominated trains still on the yard.
    fn on_tick_start(&mut self, _tick: Tick, _candidates: usize) {}

    /// A train advanced one section.  Called during the commit, in
    /// candidate order.
    fn on_hop(&mut self, _tick: Tick, _train: &str, _from: Section, _to: Section) {}

    /// A train left the yard from its destination.
    fn on_exit(&mut self, _tick: Tick, _train: &str, _from: Section) {}

    /// Called once per tick after the commit with the number of confirmed
    /// actions (hops and exits both count).
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}
}

/// A [`TickObserver`] that does nothing.  Used by
/// [`SignalBox::move_trains`](crate::SignalBox::move_trains) when the caller
/// doesn't want callbacks.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
