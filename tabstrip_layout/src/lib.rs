// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Layout: a horizontal bar layout for tab/paging bars.
//!
//! [`HorizontalLayout`] lays host-owned bar buttons out sequentially along
//! the horizontal axis of a container, optionally with thin separators
//! between them, and answers the focus-area queries a bar framework issues
//! once per scroll/animation frame. It combines:
//!
//! - the element ordering and index bookkeeping of `tabstrip_sequence`,
//! - the fractional-position interpolation of `tabstrip_focus`,
//! - frame computation with inter-button spacing and two content modes
//!   ([`ContentMode::Intrinsic`] natural sizing, [`ContentMode::Fit`]
//!   equal-width sizing).
//!
//! The layout owns no views. Hosts describe each button with a
//! [`ButtonSpec`] (id plus natural width), read the computed frames back
//! after mutations, and apply them to their own widgets.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use tabstrip_layout::{ButtonSpec, HorizontalLayout};
//!
//! let mut layout = HorizontalLayout::new();
//! layout.layout_in(Rect::new(0.0, 0.0, 320.0, 40.0));
//! layout
//!     .insert(&[ButtonSpec::new(0_u32, 50.0), ButtonSpec::new(1, 70.0)], 0)
//!     .unwrap();
//!
//! // Halfway between the two buttons the indicator area has a halfway
//! // lerped width, pinned to the container's full height.
//! let area = layout.focus_area(0.5, 2);
//! assert_eq!(area.width(), 60.0);
//! assert_eq!(area.height(), 40.0);
//!
//! // Style changes that reshape the sequence raise a reload signal.
//! if layout.set_show_separators(true) {
//!     layout.reload();
//! }
//! assert_eq!(layout.sequence().len(), 4);
//! ```
//!
//! All operations are synchronous and single-threaded; the host applies
//! mutations strictly in call order and only queries geometry between
//! batches.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod layout;

pub use config::{
    ContentMode, DEFAULT_INTER_BUTTON_SPACING, MINIMUM_RECOMMENDED_BUTTON_WIDTH, SEPARATOR_WIDTH,
};
pub use layout::{ButtonSpec, HorizontalLayout};
