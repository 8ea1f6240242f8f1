// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities: the data source queried by the control and the
//! delegate it notifies.
//!
//! Both traits are narrow, duck-typed seams. The control never stores a
//! reference to either; hosts pass them in per call, which keeps ownership
//! acyclic (the host owns the control, never the other way around). All
//! delegate methods default to no-ops so hosts implement only what they
//! listen to, and `()` implements the trait for callers that listen to
//! nothing at all.

use dotstrip_indicator::IndicatorImage;
use kurbo::Point;
use peniko::Color;

/// Supplies per-index visual content for an indicator strip.
///
/// Queried during [`configure`](crate::PagingControl::configure) when the
/// indicator sequence is rebuilt. `I` is the host's image handle type.
pub trait IndicatorSource<I> {
    /// Base/border tint for the indicator at `index`.
    fn indicator_color(&self, index: usize) -> Color;

    /// Optional image override for the indicator at `index`.
    ///
    /// Defaults to no override: the indicator renders as a plain shape.
    fn indicator_image(&self, index: usize) -> Option<IndicatorImage<I>> {
        let _ = index;
        None
    }
}

/// Receives selection and touch-lifecycle notifications from a control.
///
/// Every method defaults to a no-op.
pub trait PagingDelegate {
    /// A new index was committed as the current page.
    fn page_changed(&mut self, index: usize) {
        let _ = index;
    }

    /// A touch session began at `point` (control-local coordinates).
    fn touch_down(&mut self, point: Point) {
        let _ = point;
    }

    /// The touch session ended with a normal release.
    fn touch_ended(&mut self) {}

    /// The touch session was cancelled by the system.
    fn touch_cancelled(&mut self) {}

    /// Gesture recognition failed for the touch session.
    fn touch_failed(&mut self) {}
}

/// A delegate that ignores every notification.
impl PagingDelegate for () {}
