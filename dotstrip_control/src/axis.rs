// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis selection: which point coordinate carries the indicator sequence.
//!
//! The strip lays its indicators out along one axis (the *major* axis) and
//! centers them on the perpendicular (*minor*) axis. [`Axis`] maps between
//! 2D host coordinates and the 1D layout space of
//! [`StripMetrics`](crate::StripMetrics).

use kurbo::{Point, Rect};

use crate::layout::Slot;

/// Layout direction of an indicator strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Indicators run top to bottom; the major coordinate is `y`.
    #[default]
    Vertical,
    /// Indicators run left to right; the major coordinate is `x`.
    Horizontal,
}

impl Axis {
    /// Extracts the major-axis coordinate of a point.
    #[must_use]
    pub fn major(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Extracts the minor-axis coordinate of a point.
    #[must_use]
    pub fn minor(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.x,
            Self::Horizontal => point.y,
        }
    }

    /// Converts a [`Slot`] into a host-space rectangle.
    ///
    /// `breadth` is the control's minor-axis extent; the square indicator is
    /// centered on the minor-axis midline regardless of its live size, so a
    /// magnified indicator grows outward evenly.
    #[must_use]
    pub fn frame(self, slot: Slot, breadth: f64) -> Rect {
        let minor = (breadth - slot.size) / 2.0;
        match self {
            Self::Vertical => Rect::new(
                minor,
                slot.offset,
                minor + slot.size,
                slot.offset + slot.size,
            ),
            Self::Horizontal => Rect::new(
                slot.offset,
                minor,
                slot.offset + slot.size,
                minor + slot.size,
            ),
        }
    }
}
