// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Focus: selection-indicator geometry for tab/paging bars.
//!
//! As the user swipes between pages, the bar's scroll position moves
//! continuously: position `2.35` means "35% of the way from button 2 to
//! button 3". This crate turns such a fractional position into the concrete
//! rectangle a host places its selection indicator in, by interpolating
//! between the frames of the two adjacent buttons:
//!
//! - [`local_index_range`]: clamps a continuous position into a valid
//!   adjacent-pair [`IndexRange`] within `[minimum, maximum]`, collapsing to
//!   a single index at the upper boundary so no out-of-range neighbor is ever
//!   referenced.
//! - [`local_progress`]: the fractional part of a position, used as the
//!   interpolation weight.
//! - [`lerp_rect`]: componentwise linear interpolation between two frames
//!   (origin and size each lerped independently).
//! - [`focus_area`]: the whole pipeline, producing a rectangle pinned to the
//!   container's top edge and spanning its full height.
//!
//! Everything here is a pure function of its inputs; frames come from
//! whatever layout the host runs (see `tabstrip_layout` for one).
//!
//! ## Minimal example
//!
//! Halfway between two buttons, the focus area slides and resizes smoothly:
//!
//! ```rust
//! use kurbo::Rect;
//! use tabstrip_focus::focus_area;
//!
//! let frames = [
//!     Rect::new(0.0, 0.0, 50.0, 40.0),
//!     Rect::new(50.0, 0.0, 120.0, 40.0),
//! ];
//!
//! // At position 0.0 the area is exactly button 0's horizontal extent…
//! assert_eq!(focus_area(0.0, 2, &frames, 40.0), Rect::new(0.0, 0.0, 50.0, 40.0));
//! // …and halfway across, origin and width are both halfway lerped.
//! assert_eq!(focus_area(0.5, 2, &frames, 40.0), Rect::new(25.0, 0.0, 85.0, 40.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Rect;

/// An adjacent pair of button indices bracketing a continuous position.
///
/// `lower == upper` at the boundaries of the valid range, where interpolation
/// collapses to a single button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IndexRange {
    /// Index of the button at or before the position.
    pub lower: usize,
    /// Index of the adjacent button after the position (clamped).
    pub upper: usize,
}

impl IndexRange {
    /// Returns `true` if the range has collapsed to a single index.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.lower == self.upper
    }
}

/// Clamps a continuous position into a valid adjacent-pair index range.
///
/// `lower` is `floor(position)` clamped into `[minimum, maximum]`; `upper` is
/// `lower + 1`, also clamped to `maximum`. Non-finite positions clamp to
/// `minimum`.
///
/// `minimum` must not exceed `maximum`.
#[must_use]
pub fn local_index_range(position: f64, minimum: usize, maximum: usize) -> IndexRange {
    debug_assert!(
        minimum <= maximum,
        "degenerate index range: minimum={minimum}, maximum={maximum}"
    );
    let lower = if position.is_finite() {
        let floor = floor(position);
        if floor <= minimum as f64 {
            minimum
        } else if floor >= maximum as f64 {
            maximum
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "Value is clamped into [minimum, maximum] before the cast"
            )]
            let index = floor as usize;
            index
        }
    } else {
        minimum
    };
    IndexRange {
        lower,
        upper: lower.saturating_add(1).min(maximum),
    }
}

/// Returns the fractional part of a position, the interpolation weight
/// between the two indices of its [`IndexRange`].
///
/// Exact integer positions yield `0.0`. Non-finite positions yield `0.0`.
#[must_use]
pub fn local_progress(position: f64) -> f64 {
    if position.is_finite() {
        position - floor(position)
    } else {
        0.0
    }
}

/// `f64::floor` restricted to finite inputs, usable without `std` or `libm`.
fn floor(x: f64) -> f64 {
    // Above 2^52 every representable f64 is already an integer.
    const INTEGER_THRESHOLD: f64 = 4_503_599_627_370_496.0;
    if x >= INTEGER_THRESHOLD || x <= -INTEGER_THRESHOLD {
        return x;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Magnitude is bounded by INTEGER_THRESHOLD"
    )]
    let truncated = x as i64 as f64;
    if truncated > x { truncated - 1.0 } else { truncated }
}

/// Linearly interpolates between two rectangles at fraction `progress`.
///
/// Origin x, origin y, width, and height are each lerped independently, so at
/// `progress == 0.0` the result is `from` and at `progress == 1.0` it is `to`.
#[must_use]
pub fn lerp_rect(from: Rect, to: Rect, progress: f64) -> Rect {
    let x = lerp(from.x0, to.x0, progress);
    let y = lerp(from.y0, to.y0, progress);
    let width = lerp(from.width(), to.width(), progress);
    let height = lerp(from.height(), to.height(), progress);
    Rect::new(x, y, x + width, y + height)
}

fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Computes the focus rectangle for a fractional position over a row of
/// buttons.
///
/// - `position`: continuous logical position, `k.f` meaning fraction `f` of
///   the way from button `k` to button `k + 1`.
/// - `capacity`: total logical button count; used only to clamp the index
///   range, never to index `frames`.
/// - `frames`: the live button frames (buttons only, separators excluded, in
///   sequence order), in container-local coordinates.
/// - `container_height`: full height of the container; the result always
///   spans it, pinned to `y = 0`.
///
/// Returns [`Rect::ZERO`] when `capacity` is zero, `position` is non-finite,
/// or `frames` is too short for the clamped upper index. The latter guards
/// against transient inconsistency between the host's reported capacity and
/// the actually rendered buttons.
///
/// Positions below zero clamp to button 0; positions at or above
/// `capacity - 1` collapse the range to the last button, so the result stays
/// stable past either end.
#[must_use]
pub fn focus_area(position: f64, capacity: usize, frames: &[Rect], container_height: f64) -> Rect {
    if capacity == 0 || !position.is_finite() {
        return Rect::ZERO;
    }
    let position = position.max(0.0);
    let range = local_index_range(position, 0, capacity - 1);
    if frames.len() <= range.upper {
        return Rect::ZERO;
    }

    let lower = frames[range.lower];
    let upper = frames[range.upper];
    let progress = local_progress(position);
    let blended = lerp_rect(lower, upper, progress);

    Rect::new(blended.x0, 0.0, blended.x0 + blended.width(), container_height)
}
