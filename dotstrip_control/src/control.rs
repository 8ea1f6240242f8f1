// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging control state machine.
//!
//! [`PagingControl`] tracks one strip of indicators, the committed current
//! page, and an optional in-flight touch session. A session walks a small
//! state machine:
//!
//! ```text
//! Idle --begin_touch--> Active --update_touch--> Active
//!                         |
//!          end / cancel / fail
//!                         v
//!                       Idle
//! ```
//!
//! While a session is active the control carries a live magnification
//! profile; on any exit path the profile is dropped and indicators return to
//! rest. Selection commits are synchronous and symmetric between gesture and
//! programmatic paths: clear the old indicator's selected flag, set the new
//! one, pulse haptics when enabled, notify the delegate.
//!
//! Invalid inputs never fail: out-of-range indices and gestures against an
//! empty strip are silent no-ops, and pointer coordinates outside the strip
//! clamp to the nearest index.

use alloc::vec::Vec;

use dotstrip_indicator::{Indicator, IndicatorImage, IndicatorVisual};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::axis::Axis;
use crate::haptics::{HapticDriver, NoHaptics};
use crate::host::{IndicatorSource, PagingDelegate};
use crate::layout::{Slot, SlotProfile, StripMetrics};

/// Configuration surface of a [`PagingControl`].
///
/// Passing a params value to [`PagingControl::configure`] tears down and
/// rebuilds the indicator sequence; there are no implicit rebuild triggers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripParams {
    /// Number of indicators. Zero is valid and yields an empty strip.
    pub page_count: usize,
    /// Side length of each (square) indicator at rest.
    pub indicator_size: f64,
    /// Gap between consecutive indicators and at both strip ends.
    pub spacing: f64,
    /// Layout direction of the strip.
    pub axis: Axis,
    /// Outline width applied to every rebuilt indicator.
    pub border_width: f64,
}

impl StripParams {
    /// Creates params for `page_count` pages with default geometry.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            ..Self::default()
        }
    }
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            page_count: 0,
            indicator_size: 8.0,
            spacing: 6.8,
            axis: Axis::default(),
            border_width: 2.0,
        }
    }
}

/// A gesture-driven paging indicator strip.
///
/// `I` is the host's image handle type (see
/// [`IndicatorImage`]); `H` is the haptic driver, defaulting to
/// [`NoHaptics`].
///
/// The control owns no host references. The data source and delegate are
/// borrowed per call, so the host can own the control without a reference
/// cycle. Hosts are expected to deliver gesture events strictly serialized
/// (press, zero or more moves, exactly one of end/cancel/fail); a second
/// press while a session is active replaces the stale session.
#[derive(Clone, Debug)]
pub struct PagingControl<I, H = NoHaptics> {
    metrics: StripMetrics,
    axis: Axis,
    border_width: f64,
    indicators: Vec<Indicator<I>>,
    current: Option<usize>,
    live: Option<SlotProfile>,
    drag_active: bool,
    haptics: H,
    haptics_enabled: bool,
    revision: u64,
}

impl<I: Clone> PagingControl<I> {
    /// Creates a control with no haptic feedback.
    #[must_use]
    pub fn new(params: StripParams, source: &impl IndicatorSource<I>) -> Self {
        Self::with_haptics(params, source, NoHaptics)
    }
}

impl<I: Clone, H: HapticDriver> PagingControl<I, H> {
    /// Creates a control with the given haptic driver.
    #[must_use]
    pub fn with_haptics(params: StripParams, source: &impl IndicatorSource<I>, haptics: H) -> Self {
        let mut control = Self {
            metrics: StripMetrics::new(params.indicator_size, params.spacing),
            axis: params.axis,
            border_width: params.border_width,
            indicators: Vec::new(),
            current: None,
            live: None,
            drag_active: false,
            haptics,
            haptics_enabled: true,
            revision: 0,
        };
        control.configure(params, source);
        control
    }

    /// Applies new geometry and rebuilds the indicator sequence.
    ///
    /// The rebuild is synchronous and total: every indicator is recreated and
    /// refreshed from the source; there is no incremental diffing. An active
    /// touch session is abandoned (the haptic generator is released, no
    /// lifecycle event is emitted). The committed page is clamped to the new
    /// last index, or cleared when the strip becomes empty; no notification
    /// or haptic pulse accompanies this programmatic adjustment.
    pub fn configure(&mut self, params: StripParams, source: &impl IndicatorSource<I>) {
        if self.drag_active {
            self.drag_active = false;
            self.live = None;
            self.haptics.release();
        }

        self.metrics = StripMetrics::new(params.indicator_size, params.spacing);
        self.axis = params.axis;
        self.border_width = params.border_width;

        self.indicators.clear();
        self.indicators.reserve(params.page_count);
        for index in 0..params.page_count {
            let mut indicator = Indicator::new(source.indicator_color(index), params.border_width);
            indicator.set_image(source.indicator_image(index));
            self.indicators.push(indicator);
        }

        self.current = match params.page_count {
            0 => None,
            count => self.current.map(|page| page.min(count - 1)),
        };
        if let Some(page) = self.current {
            self.indicators[page].set_selected(true);
        }
        self.revision += 1;
    }

    /// Begins a touch session at `point` (control-local coordinates).
    ///
    /// Primes the haptic generator, commits the index under the pointer,
    /// emits [`touch_down`](PagingDelegate::touch_down), and applies the live
    /// magnification profile. A no-op on an empty strip. If a session is
    /// already active it is replaced: the stale session's geometry and haptic
    /// state are reset without emitting a lifecycle event.
    pub fn begin_touch(&mut self, point: Point, delegate: &mut impl PagingDelegate) {
        if self.indicators.is_empty() {
            return;
        }
        if self.drag_active {
            self.live = None;
            self.haptics.release();
        }

        self.drag_active = true;
        self.haptics.prepare();

        let major = self.axis.major(point);
        if let Some(index) = self.metrics.index_at(major, self.indicators.len()) {
            self.commit(index, delegate);
        }
        delegate.touch_down(point);
        self.live = Some(self.metrics.magnified_slots(self.indicators.len(), major));
    }

    /// Updates an active touch session with a new pointer position.
    ///
    /// Recomputes the magnification profile and commits an index change if
    /// the pointer moved into a different bucket. Emits no lifecycle event;
    /// the only possible notification is
    /// [`page_changed`](PagingDelegate::page_changed). Ignored while no
    /// session is active.
    pub fn update_touch(&mut self, point: Point, delegate: &mut impl PagingDelegate) {
        if !self.drag_active {
            return;
        }
        let major = self.axis.major(point);
        if let Some(index) = self.metrics.index_at(major, self.indicators.len()) {
            self.commit(index, delegate);
        }
        self.live = Some(self.metrics.magnified_slots(self.indicators.len(), major));
    }

    /// Ends the active touch session with a normal release.
    ///
    /// Resets all indicators to rest geometry, releases the haptic
    /// generator, and emits [`touch_ended`](PagingDelegate::touch_ended).
    /// Ignored while no session is active.
    pub fn end_touch(&mut self, delegate: &mut impl PagingDelegate) {
        if self.finish_session() {
            delegate.touch_ended();
        }
    }

    /// Ends the active touch session after a system cancellation.
    ///
    /// Same geometry and haptic teardown as [`end_touch`](Self::end_touch),
    /// but emits [`touch_cancelled`](PagingDelegate::touch_cancelled).
    pub fn cancel_touch(&mut self, delegate: &mut impl PagingDelegate) {
        if self.finish_session() {
            delegate.touch_cancelled();
        }
    }

    /// Ends the active touch session after gesture recognition failed.
    ///
    /// Same geometry and haptic teardown as [`end_touch`](Self::end_touch),
    /// but emits [`touch_failed`](PagingDelegate::touch_failed).
    pub fn fail_touch(&mut self, delegate: &mut impl PagingDelegate) {
        if self.finish_session() {
            delegate.touch_failed();
        }
    }

    /// Programmatically selects a page.
    ///
    /// Out-of-range indices are ignored entirely: no state change, no
    /// notification. Valid changes commit symmetrically with gesture-driven
    /// selection, including the haptic pulse when enabled.
    pub fn set_current_page(&mut self, index: usize, delegate: &mut impl PagingDelegate) {
        if index >= self.indicators.len() {
            return;
        }
        self.commit(index, delegate);
    }

    /// Commits `index` as the current page if it differs from the committed
    /// one. The caller has already validated the index.
    fn commit(&mut self, index: usize, delegate: &mut impl PagingDelegate) {
        if self.current == Some(index) {
            return;
        }
        if let Some(old) = self.current {
            self.indicators[old].set_selected(false);
        }
        self.indicators[index].set_selected(true);
        self.current = Some(index);
        self.revision += 1;
        if self.haptics_enabled {
            self.haptics.pulse();
        }
        delegate.page_changed(index);
    }

    /// Tears down the active session. Returns `false` when idle.
    fn finish_session(&mut self) -> bool {
        if !self.drag_active {
            return false;
        }
        self.drag_active = false;
        self.live = None;
        self.haptics.release();
        true
    }

    /// Number of pages (indicators).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.indicators.len()
    }

    /// The committed page, or `None` before any selection (and always for an
    /// empty strip).
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        self.current
    }

    /// Returns `true` while a touch session is active.
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Layout direction of the strip.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Geometry parameters of the strip.
    #[must_use]
    pub fn metrics(&self) -> StripMetrics {
        self.metrics
    }

    /// Total major-axis extent of the strip at rest.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.metrics.total_extent(self.indicators.len())
    }

    /// Monotonically increasing change counter.
    ///
    /// Bumped by rebuilds, committed selection changes, and per-index
    /// mutations; a cheap "did anything change?" marker for hosts deciding
    /// whether to re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The rest layout profile (one slot per indicator).
    #[must_use]
    pub fn rest_slots(&self) -> SlotProfile {
        self.metrics.rest_slots(self.indicators.len())
    }

    /// The live magnification profile, while a touch session is active.
    #[must_use]
    pub fn live_slots(&self) -> Option<&[Slot]> {
        self.live.as_deref()
    }

    /// The profile a renderer should draw right now: live while dragging,
    /// rest otherwise.
    #[must_use]
    pub fn slots(&self) -> SlotProfile {
        match &self.live {
            Some(live) => live.clone(),
            None => self.rest_slots(),
        }
    }

    /// Host-space frames for the current profile.
    ///
    /// `breadth` is the control's minor-axis extent; every indicator is
    /// centered on its midline.
    pub fn frames(&self, breadth: f64) -> impl Iterator<Item = Rect> {
        let axis = self.axis;
        self.slots()
            .into_iter()
            .map(move |slot| axis.frame(slot, breadth))
    }

    /// The indicator at `index`, if in range.
    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<&Indicator<I>> {
        self.indicators.get(index)
    }

    /// Resolved rendering descriptors, one per indicator in page order.
    pub fn visuals(&self) -> impl Iterator<Item = IndicatorVisual<I>> + '_ {
        self.indicators.iter().map(Indicator::visual)
    }

    /// Replaces the tint of the indicator at `index`.
    ///
    /// Out-of-range indices are ignored. Takes effect immediately, including
    /// on the selected indicator's fill.
    pub fn set_indicator_tint(&mut self, index: usize, tint: Color) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.set_tint(tint);
            self.revision += 1;
        }
    }

    /// Sets or clears the image override of the indicator at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_indicator_image(&mut self, index: usize, image: Option<IndicatorImage<I>>) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.set_image(image);
            self.revision += 1;
        }
    }

    /// Sets the outline width of the indicator at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_indicator_border_width(&mut self, index: usize, border_width: f64) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.set_border_width(border_width);
            self.revision += 1;
        }
    }

    /// Enables or disables haptic pulses on committed page changes.
    ///
    /// The prepare/release session lifecycle is unaffected; only pulses are
    /// gated.
    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        self.haptics_enabled = enabled;
    }

    /// Returns `true` if commits pulse the haptic driver.
    #[must_use]
    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    /// The haptic driver.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainSource;

    impl IndicatorSource<u32> for PlainSource {
        fn indicator_color(&self, _index: usize) -> Color {
            Color::WHITE
        }
    }

    fn control(count: usize) -> PagingControl<u32> {
        PagingControl::new(StripParams::new(count), &PlainSource)
    }

    #[test]
    fn new_control_has_no_selection() {
        let c = control(4);
        assert_eq!(c.page_count(), 4);
        assert_eq!(c.current_page(), None);
        assert!(!c.is_drag_active());
        assert!(c.live_slots().is_none());
    }

    #[test]
    fn empty_control_ignores_gestures() {
        let mut c = control(0);
        c.begin_touch(Point::new(0.0, 10.0), &mut ());
        assert!(!c.is_drag_active());
        c.update_touch(Point::new(0.0, 20.0), &mut ());
        c.end_touch(&mut ());
        assert_eq!(c.current_page(), None);
    }

    #[test]
    fn set_current_page_out_of_range_is_a_noop() {
        let mut c = control(4);
        c.set_current_page(0, &mut ());
        let rev = c.revision();

        c.set_current_page(4, &mut ());
        c.set_current_page(usize::MAX, &mut ());
        assert_eq!(c.current_page(), Some(0));
        assert_eq!(c.revision(), rev);
    }

    #[test]
    fn commit_moves_the_selected_flag() {
        let mut c = control(3);
        c.set_current_page(1, &mut ());
        assert!(c.indicator(1).unwrap().is_selected());

        c.set_current_page(2, &mut ());
        assert!(!c.indicator(1).unwrap().is_selected());
        assert!(c.indicator(2).unwrap().is_selected());

        let selected = c.indicators.iter().filter(|i| i.is_selected()).count();
        assert_eq!(selected, 1, "exactly one indicator selected at rest");
    }

    #[test]
    fn recommitting_the_same_page_is_silent() {
        let mut c = control(3);
        c.set_current_page(1, &mut ());
        let rev = c.revision();
        c.set_current_page(1, &mut ());
        assert_eq!(c.revision(), rev);
    }

    #[test]
    fn configure_shrink_clamps_current_page() {
        let mut c = control(5);
        c.set_current_page(4, &mut ());

        c.configure(StripParams::new(2), &PlainSource);
        assert_eq!(c.current_page(), Some(1));
        assert!(c.indicator(1).unwrap().is_selected());

        c.configure(StripParams::new(0), &PlainSource);
        assert_eq!(c.current_page(), None);
    }

    #[test]
    fn configure_grow_keeps_current_page() {
        let mut c = control(2);
        c.set_current_page(1, &mut ());
        c.configure(StripParams::new(6), &PlainSource);
        assert_eq!(c.current_page(), Some(1));
        assert!(c.indicator(1).unwrap().is_selected());
    }

    #[test]
    fn configure_abandons_an_active_session() {
        let mut c = control(4);
        c.begin_touch(Point::new(0.0, 0.0), &mut ());
        assert!(c.is_drag_active());

        c.configure(StripParams::new(4), &PlainSource);
        assert!(!c.is_drag_active());
        assert!(c.live_slots().is_none());
    }

    #[test]
    fn drag_applies_and_clears_live_geometry() {
        let mut c = control(4);
        c.begin_touch(Point::new(0.0, 10.8), &mut ());
        assert!(c.is_drag_active());
        let live = c.live_slots().expect("live profile during drag");
        assert_eq!(live.len(), 4);
        assert!(live[0].size > c.metrics().indicator_size);

        c.end_touch(&mut ());
        assert!(!c.is_drag_active());
        assert!(c.live_slots().is_none());
        assert_eq!(c.slots(), c.rest_slots());
    }

    #[test]
    fn horizontal_axis_resolves_along_x() {
        let mut c = PagingControl::new(
            StripParams {
                page_count: 4,
                axis: Axis::Horizontal,
                ..StripParams::default()
            },
            &PlainSource,
        );
        // Large y must not affect resolution on a horizontal strip.
        c.begin_touch(Point::new(1000.0, 3.0), &mut ());
        assert_eq!(c.current_page(), Some(3));
        c.end_touch(&mut ());
    }

    #[test]
    fn total_extent_round_trip() {
        let c = PagingControl::new(
            StripParams {
                page_count: 5,
                indicator_size: 8.0,
                spacing: 6.8,
                ..StripParams::default()
            },
            &PlainSource,
        );
        assert!((c.total_extent() - 80.8).abs() < 1e-12);
    }

    #[test]
    fn per_index_mutations_ignore_out_of_range() {
        let mut c = control(2);
        let rev = c.revision();
        c.set_indicator_tint(9, Color::WHITE);
        c.set_indicator_image(9, None);
        c.set_indicator_border_width(9, 4.0);
        assert_eq!(c.revision(), rev);

        c.set_indicator_border_width(1, 4.0);
        assert_eq!(c.indicator(1).unwrap().border_width(), 4.0);
        assert!(c.revision() > rev);
    }
}
