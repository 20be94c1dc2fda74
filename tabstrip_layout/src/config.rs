// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration: content modes and default metrics.

/// Default spacing between adjacent arranged elements.
pub const DEFAULT_INTER_BUTTON_SPACING: f64 = 16.0;

/// Width of a separator element.
pub const SEPARATOR_WIDTH: f64 = 0.5;

/// Buttons narrower than this are hard to hit reliably; hosts using
/// [`ContentMode::Fit`](crate::ContentMode::Fit) in narrow containers may
/// want to compare their equal-share width against it.
pub const MINIMUM_RECOMMENDED_BUTTON_WIDTH: f64 = 40.0;

/// How button widths are distributed along the container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ContentMode {
    /// Each button takes its natural (intrinsic) width.
    #[default]
    Intrinsic,
    /// All buttons share the container width equally.
    Fit,
}
