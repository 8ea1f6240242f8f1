// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip layout: rest geometry, pointer-to-index resolution, and the
//! magnification profile.
//!
//! All math here is one-dimensional, expressed along the major axis of the
//! strip. [`StripMetrics`] captures the two geometry parameters (square
//! indicator side length and the gap between indicators, which also pads both
//! ends) and derives everything else from them:
//!
//! - The strip is divided into buckets of one *segment*
//!   (`indicator_size + spacing`) each; a pointer coordinate resolves to the
//!   bucket it falls in, clamped into the valid index range.
//! - While a drag is active, indicators near the pointer grow. The growth
//!   ratio is linear in pointer distance, from [`MAX_GROWTH_RATIO`] directly
//!   under the pointer down to `1.0` at [`StripMetrics::max_distance`] and
//!   beyond. Distances are measured against *rest* centers; live offsets are
//!   then re-accumulated front to back, so one indicator growing pushes every
//!   later indicator further along the axis.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `abs` under no_std
use smallvec::SmallVec;

/// Growth added at zero pointer distance, on top of the base ratio of `1.0`.
pub const GROWTH_SPAN: f64 = 2.5;

/// Growth ratio of an indicator directly under the pointer.
pub const MAX_GROWTH_RATIO: f64 = 1.0 + GROWTH_SPAN;

/// Multiple of the indicator size contributing to the magnification reach.
pub const MAGNIFY_REACH: f64 = 1.5;

/// Per-indicator layout along the major axis: leading offset and side length.
///
/// The minor-axis coordinate is not part of a slot; indicators are always
/// centered on the strip's minor-axis midline regardless of their live size
/// (see [`Axis::frame`](crate::Axis::frame)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Leading edge along the major axis.
    pub offset: f64,
    /// Side length of the (square) indicator.
    pub size: f64,
}

impl Slot {
    /// Returns the center coordinate along the major axis.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.offset + self.size / 2.0
    }
}

/// A full per-indicator layout profile, one [`Slot`] per index.
///
/// Inline capacity covers typical page counts without allocating.
pub type SlotProfile = SmallVec<[Slot; 8]>;

/// Geometry parameters of an indicator strip.
///
/// Both fields are expected to be positive; the derived formulas divide by
/// the segment length and the magnification reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripMetrics {
    /// Side length of each (square) indicator at rest.
    pub indicator_size: f64,
    /// Gap between consecutive indicators and at both ends of the strip.
    pub spacing: f64,
}

impl StripMetrics {
    /// Creates strip metrics from an indicator size and spacing.
    #[must_use]
    pub const fn new(indicator_size: f64, spacing: f64) -> Self {
        Self {
            indicator_size,
            spacing,
        }
    }

    /// One bucket of the strip: an indicator plus its trailing gap.
    #[must_use]
    pub fn segment(&self) -> f64 {
        self.indicator_size + self.spacing
    }

    /// Total major-axis extent of a strip with `count` indicators at rest.
    ///
    /// Equals `spacing + count × (indicator_size + spacing)`: every indicator
    /// carries a trailing gap, plus one leading gap for the whole strip.
    #[must_use]
    pub fn total_extent(&self, count: usize) -> f64 {
        self.spacing + count as f64 * self.segment()
    }

    /// Rest position (leading edge) of the indicator at `index`.
    #[must_use]
    pub fn rest_offset(&self, index: usize) -> f64 {
        self.spacing + index as f64 * self.segment()
    }

    /// Rest center of the indicator at `index`.
    #[must_use]
    pub fn rest_center(&self, index: usize) -> f64 {
        self.rest_offset(index) + self.indicator_size / 2.0
    }

    /// Resolves a major-axis pointer coordinate to an indicator index.
    ///
    /// The leading gap belongs to bucket 0 and every subsequent bucket is one
    /// segment wide; out-of-bounds coordinates clamp to the first or last
    /// index. Returns `None` for an empty strip.
    #[must_use]
    pub fn index_at(&self, major: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let bucket = ((major - self.spacing).max(0.0) / self.segment()).floor();
        let clamped = bucket.min((count - 1) as f64);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "bucket is non-negative and clamped below `count`"
        )]
        Some(clamped as usize)
    }

    /// Pointer distance beyond which an indicator is unaffected by
    /// magnification.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        MAGNIFY_REACH * self.indicator_size + self.spacing
    }

    /// Growth ratio for an indicator whose rest center sits `distance` away
    /// from the pointer.
    ///
    /// Linear from [`MAX_GROWTH_RATIO`] at zero distance down to `1.0` at
    /// [`max_distance`](Self::max_distance); distances beyond the reach are
    /// saturated, so the ratio never drops below `1.0`.
    #[must_use]
    pub fn growth_ratio(&self, distance: f64) -> f64 {
        let max_distance = self.max_distance();
        let clamped = distance.min(max_distance);
        1.0 + GROWTH_SPAN * (1.0 - clamped / max_distance)
    }

    /// Layout profile with every indicator at rest.
    #[must_use]
    pub fn rest_slots(&self, count: usize) -> SlotProfile {
        (0..count)
            .map(|i| Slot {
                offset: self.rest_offset(i),
                size: self.indicator_size,
            })
            .collect()
    }

    /// Layout profile under magnification for a pointer at `pointer_major`.
    ///
    /// Sizes are derived from each indicator's *rest* center distance to the
    /// pointer; offsets are then re-accumulated front to back, so growth of
    /// one indicator pushes all later indicators further along the axis.
    #[must_use]
    pub fn magnified_slots(&self, count: usize, pointer_major: f64) -> SlotProfile {
        let mut slots = SlotProfile::with_capacity(count);
        let mut offset = self.spacing;
        for i in 0..count {
            let distance = (self.rest_center(i) - pointer_major).abs();
            let size = self.indicator_size * self.growth_ratio(distance);
            slots.push(Slot { offset, size });
            offset += size + self.spacing;
        }
        slots
    }
}
