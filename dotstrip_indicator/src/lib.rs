// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dotstrip_indicator --heading-base-level=0

//! Dotstrip Indicator: per-indicator visual state resolution.
//!
//! A paging control shows one indicator per page. Each indicator carries a
//! small amount of state (a tint, an optional image override, a selected
//! flag, and a border width) and resolves it to a rendering descriptor that
//! any renderer can draw. This crate models exactly that state and its
//! resolution; it knows nothing about layout, gestures, or pixels.
//!
//! The core types are:
//!
//! - [`Indicator`]: the per-index state container, generic over a host image
//!   handle type `I` so applications can plug in texture IDs, asset keys, or
//!   any other reference they already use.
//! - [`IndicatorImage`]: an image handle plus an optional tint to use while
//!   the indicator is selected.
//! - [`IndicatorVisual`]: the resolved descriptor. Either an outlined shape
//!   (filled with the tint when selected, transparent otherwise) or a tinted
//!   image that replaces the shape entirely.
//!
//! Resolution is a pure function of the current state and is recomputed on
//! every [`Indicator::visual`] call, so changing the tint while selected can
//! never leave a stale fill behind.
//!
//! ## Minimal example
//!
//! ```rust
//! use dotstrip_indicator::{Indicator, IndicatorImage, IndicatorVisual};
//! use peniko::Color;
//!
//! let orange = Color::from_rgb8(0xff, 0x8c, 0x00);
//!
//! // A plain shape indicator: outline only until selected.
//! let mut dot = Indicator::<u32>::new(orange, 2.0);
//! assert!(matches!(dot.visual(), IndicatorVisual::Shape { fill: None, .. }));
//!
//! dot.set_selected(true);
//! assert!(matches!(dot.visual(), IndicatorVisual::Shape { fill: Some(c), .. } if c == orange));
//!
//! // An image override suppresses the shape. With no selected tint set, the
//! // base tint is used in both states.
//! dot.set_image(Some(IndicatorImage::new(7_u32)));
//! assert_eq!(dot.visual(), IndicatorVisual::Image { image: 7, tint: orange });
//! ```
//!
//! This crate is `no_std` and has no dependencies beyond [`peniko`].

#![no_std]

use peniko::Color;

/// An image override for an indicator: a host image handle plus an optional
/// tint to apply while the indicator is selected.
///
/// The handle type `I` is supplied by the host; this crate never inspects it.
/// When `selected_tint` is `None`, the indicator's base tint is used in the
/// selected state as well.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorImage<I> {
    /// Opaque host image handle.
    pub image: I,
    /// Tint applied while selected; falls back to the indicator tint.
    pub selected_tint: Option<Color>,
}

impl<I> IndicatorImage<I> {
    /// Creates an image override with no selected-state tint.
    pub const fn new(image: I) -> Self {
        Self {
            image,
            selected_tint: None,
        }
    }

    /// Creates an image override with a dedicated selected-state tint.
    pub const fn with_selected_tint(image: I, tint: Color) -> Self {
        Self {
            image,
            selected_tint: Some(tint),
        }
    }
}

/// Per-indicator state: tint, optional image override, selection flag, and
/// border width.
///
/// An `Indicator` does not know its own position or size; the owning control
/// tracks geometry separately and rebuilds the indicator sequence whenever
/// its configuration changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Indicator<I> {
    tint: Color,
    image: Option<IndicatorImage<I>>,
    selected: bool,
    border_width: f64,
}

impl<I> Indicator<I> {
    /// Creates a deselected indicator with the given tint and border width.
    #[must_use]
    pub const fn new(tint: Color, border_width: f64) -> Self {
        Self {
            tint,
            image: None,
            selected: false,
            border_width,
        }
    }

    /// Returns the base tint.
    #[must_use]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Sets the base tint.
    ///
    /// Takes effect on the next [`visual`](Self::visual) call, including
    /// while the indicator is selected.
    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    /// Returns the image override, if any.
    #[must_use]
    pub fn image(&self) -> Option<&IndicatorImage<I>> {
        self.image.as_ref()
    }

    /// Sets or clears the image override.
    pub fn set_image(&mut self, image: Option<IndicatorImage<I>>) {
        self.image = image;
    }

    /// Returns `true` if this indicator is the committed selection.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns the border width used for the shape outline.
    #[must_use]
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Sets the border width used for the shape outline.
    pub fn set_border_width(&mut self, border_width: f64) {
        self.border_width = border_width;
    }
}

impl<I: Clone> Indicator<I> {
    /// Resolves the current state to a rendering descriptor.
    ///
    /// With no image override this is an outlined shape in the tint color,
    /// filled with the tint while selected and transparent otherwise. With an
    /// image override the shape is suppressed and the image is drawn instead,
    /// tinted with the base tint when deselected and with the override's
    /// `selected_tint` (falling back to the base tint) when selected.
    #[must_use]
    pub fn visual(&self) -> IndicatorVisual<I> {
        match &self.image {
            Some(img) => {
                let tint = if self.selected {
                    img.selected_tint.unwrap_or(self.tint)
                } else {
                    self.tint
                };
                IndicatorVisual::Image {
                    image: img.image.clone(),
                    tint,
                }
            }
            None => IndicatorVisual::Shape {
                border: self.tint,
                border_width: self.border_width,
                fill: self.selected.then_some(self.tint),
            },
        }
    }
}

/// Resolved rendering descriptor for a single indicator.
///
/// The two variants are mutually exclusive: when an image override is
/// present, the shape is not drawn at all.
#[derive(Clone, Debug, PartialEq)]
pub enum IndicatorVisual<I> {
    /// Outlined shape. `fill` is the tint while selected, `None` otherwise.
    Shape {
        /// Outline color (always the indicator tint).
        border: Color,
        /// Outline stroke width.
        border_width: f64,
        /// Fill color, present only while selected.
        fill: Option<Color>,
    },
    /// Tinted image replacing the shape.
    Image {
        /// Host image handle.
        image: I,
        /// Resolved tint for the current selection state.
        tint: Color,
    },
}
