//! Adapter utilities for the `scrollable` crate.
//!
//! The `scrollable` crate is UI-agnostic and focuses on the core sync math
//! and state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A [`Controller`] that drives the engine from a frame loop and turns
//!   animated track-jump commands into tween-driven scroll writes, for hosts
//!   without native smooth scrolling
//! - Tween-based smooth scrolling helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{Easing, Tween};
