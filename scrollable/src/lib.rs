//! A headless overlay-scrollbar engine for custom scrollable containers.
//!
//! The host renders a viewport with native scrolling and overlays synthetic
//! scrollbar tracks/thumbs; this crate keeps thumb size, position, and
//! interactions in sync with the viewport's real scroll state: it derives the
//! scroll-to-scrollbar coordinate mapping from measured geometry, coalesces
//! visual updates to the host's paint cycle, and translates pointer gestures
//! on the synthetic scrollbar back into native scroll commands.
//!
//! It is UI-agnostic. A DOM/GUI/TUI layer is expected to provide:
//! - measured geometry (viewport, scrollable content, and track sizes)
//! - scroll notifications and positioned pointer events
//! - a per-frame callback, requested when the engine asks for one
//!
//! The engine answers with typed [`HostOp`] writes applied through a
//! [`HostSink`]. For adapter-level utilities (smooth track-jump tweens, frame
//! driving), see the `scrollable-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod gesture;
mod host;
mod options;
mod orientation;
mod scheduler;
mod scrollable;
mod state;
mod theme;
mod types;


pub use geometry::AxisGeometry;
pub use host::{HostOp, HostSink};
pub use options::{ConfigAttribute, ScrollableOptions, ScrollbarPlacement, ScrollbarVisibility};
pub use orientation::{AxisPair, Orientation};
pub use scrollable::Scrollable;
pub use theme::{STYLE_VARIABLES, StyleVariable, style_variable_default};
pub use types::{
    AxisMeasurement, BoundingBox, Edge, Measurements, Point, PointerEvent, PointerId,
    ScrollBehavior, ScrollPositions,
};
