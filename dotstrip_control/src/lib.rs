// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dotstrip_control --heading-base-level=0

//! Dotstrip Control: a gesture-driven paging indicator state machine.
//!
//! A paging control is a strip of small per-page indicators the user can
//! press and drag across. Indicators near the pointer magnify, and the index
//! under the pointer becomes the committed current page, with an optional
//! haptic pulse on each change. This crate models the geometry and the state
//! machine; it draws nothing. A host surface routes raw pointer events into
//! the four gesture entry points and renders whatever geometry and visual
//! descriptors it reads back.
//!
//! The pieces are:
//!
//! - [`StripMetrics`] and [`Slot`]: one-dimensional layout along the strip's
//!   major axis: rest positions, pointer-to-index bucket resolution, and
//!   the magnification profile with its cascading offsets.
//! - [`Axis`]: which point coordinate is the major axis, and slot-to-frame
//!   conversion with minor-axis centering.
//! - [`PagingControl`]: the aggregate. It owns the indicator sequence, the
//!   committed page, the touch-session state machine, and commit semantics.
//! - [`IndicatorSource`] / [`PagingDelegate`]: the host capability seams,
//!   borrowed per call so the host can own the control without cycles.
//! - [`HapticDriver`]: platform feedback as a session-scoped resource.
//!
//! Per-indicator visual state (tint, image override, selection resolution)
//! lives in [`dotstrip_indicator`] and is re-exported here.
//!
//! ## Minimal example
//!
//! ```rust
//! use dotstrip_control::{IndicatorSource, PagingControl, StripParams};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! struct Uniform;
//!
//! impl IndicatorSource<u32> for Uniform {
//!     fn indicator_color(&self, _index: usize) -> Color {
//!         Color::WHITE
//!     }
//! }
//!
//! let mut control = PagingControl::new(StripParams::new(4), &Uniform);
//!
//! // Press at the top of a vertical strip: page 0 commits.
//! control.begin_touch(Point::new(0.0, 0.0), &mut ());
//! assert_eq!(control.current_page(), Some(0));
//!
//! // Drag far past the end: the index clamps to the last page and nearby
//! // indicators magnify.
//! control.update_touch(Point::new(0.0, 100.0), &mut ());
//! assert_eq!(control.current_page(), Some(3));
//! assert!(control.live_slots().is_some());
//!
//! // Release: geometry returns to rest, the selection stays committed.
//! control.end_touch(&mut ());
//! assert!(control.live_slots().is_none());
//! assert_eq!(control.current_page(), Some(3));
//! ```
//!
//! ## Event ordering
//!
//! The control assumes the host delivers gesture events strictly serialized:
//! one press, zero or more moves, then exactly one of end/cancel/fail. It
//! has no defense against overlapping sessions beyond treating a second
//! press as session replacement. All operations are synchronous and
//! single-threaded; nothing blocks or awaits.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod control;
mod haptics;
mod host;
mod layout;

pub use axis::Axis;
pub use control::{PagingControl, StripParams};
pub use haptics::{HapticDriver, NoHaptics};
pub use host::{IndicatorSource, PagingDelegate};
pub use layout::{GROWTH_SPAN, MAGNIFY_REACH, MAX_GROWTH_RATIO, Slot, SlotProfile, StripMetrics};

pub use dotstrip_indicator::{Indicator, IndicatorImage, IndicatorVisual};
