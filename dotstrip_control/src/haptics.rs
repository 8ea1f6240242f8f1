// Copyright 2025 the Dotstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback as a scoped session resource.
//!
//! Platforms that offer tactile feedback usually want their generator
//! "primed" ahead of the first pulse to minimize latency. The control drives
//! that lifecycle for one touch session at a time: [`prepare`] once when the
//! session begins, [`pulse`] on each committed page change, and [`release`]
//! on every exit path (end, cancel, or fail).
//!
//! [`prepare`]: HapticDriver::prepare
//! [`pulse`]: HapticDriver::pulse
//! [`release`]: HapticDriver::release

/// Driver for a platform haptic feedback generator.
///
/// All methods default to no-ops; drivers implement whichever parts their
/// platform supports. Within a touch session calls are strictly paired:
/// every `prepare` is matched by exactly one `release`, with zero or more
/// `pulse` calls in between. Programmatic selection may also `pulse` outside
/// a session; drivers must tolerate unprimed pulses.
pub trait HapticDriver {
    /// Prime the generator for low-latency pulses.
    fn prepare(&mut self) {}

    /// Emit one feedback pulse.
    fn pulse(&mut self) {}

    /// Let the generator idle again; the session is over.
    fn release(&mut self) {}
}

/// A driver that produces no feedback.
///
/// The default driver for [`PagingControl`](crate::PagingControl); useful on
/// platforms without haptics and in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHaptics;

impl HapticDriver for NoHaptics {}
