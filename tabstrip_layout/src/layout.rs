// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The horizontal layout controller.

use alloc::vec::Vec;
use kurbo::Rect;
use smallvec::SmallVec;
use tabstrip_sequence::{Element, ElementSequence, SequenceError};

use crate::config::{ContentMode, DEFAULT_INTER_BUTTON_SPACING, SEPARATOR_WIDTH};

/// Geometry input for one host-owned button.
///
/// The host keeps ownership of the actual button view; the layout only needs
/// its id and natural width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonSpec<K> {
    /// Host-chosen button identifier.
    pub id: K,
    /// Natural width of the button, used in [`ContentMode::Intrinsic`].
    pub intrinsic_width: f64,
}

impl<K> ButtonSpec<K> {
    /// Creates a spec for the given button.
    ///
    /// Widths are expected to be finite; finite negative values are clamped
    /// to `0.0`.
    #[must_use]
    pub fn new(id: K, intrinsic_width: f64) -> Self {
        debug_assert!(
            intrinsic_width.is_finite(),
            "ButtonSpec widths must be finite; got {intrinsic_width:?}"
        );
        Self {
            id,
            intrinsic_width: if intrinsic_width.is_sign_negative() {
                0.0
            } else {
                intrinsic_width
            },
        }
    }
}

/// Lays bar buttons out sequentially along the horizontal axis.
///
/// This type:
/// - owns the [`ElementSequence`] and the logical button list,
/// - stores container bounds, inter-button spacing, separator and content-mode
///   options,
/// - caches computed element frames behind a dirty flag,
/// - answers focus-area queries for fractional scroll positions.
///
/// It does *not* know about any widget/view system; host frameworks are
/// expected to wrap this, own the button views, and apply the computed frames
/// after each mutation.
///
/// Frames are in container-local coordinates: the first element starts at
/// `x = 0` and every frame spans the container's full height. Queries that
/// consult the frame cache take `&mut self` so the cache can be refreshed
/// in place.
///
/// Toggling [`set_show_separators`](Self::set_show_separators) changes the
/// shape of the sequence, so it only raises a reload signal; the host
/// finishes the change by calling [`reload`](Self::reload).
#[derive(Clone, Debug)]
pub struct HorizontalLayout<K> {
    sequence: ElementSequence<K>,
    buttons: Vec<ButtonSpec<K>>,
    container: Rect,
    spacing: f64,
    show_separators: bool,
    content_mode: ContentMode,

    needs_reload: bool,
    dirty: bool,
    frames: SmallVec<[Rect; 8]>,
}

impl<K: Copy + Eq> HorizontalLayout<K> {
    /// Creates an empty layout with default options and a zero container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequence: ElementSequence::new(),
            buttons: Vec::new(),
            container: Rect::ZERO,
            spacing: DEFAULT_INTER_BUTTON_SPACING,
            show_separators: false,
            content_mode: ContentMode::Intrinsic,
            needs_reload: false,
            dirty: true,
            frames: SmallVec::new(),
        }
    }

    /// Binds (or rebinds) the container the elements are arranged in.
    pub fn layout_in(&mut self, container: Rect) {
        self.container = container;
        self.dirty = true;
    }

    /// Returns the current container bounds.
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// Returns the spacing between adjacent arranged elements.
    #[must_use]
    pub const fn inter_button_spacing(&self) -> f64 {
        self.spacing
    }

    /// Sets the spacing between adjacent arranged elements.
    ///
    /// Spacing is expected to be finite; finite negative values are clamped
    /// to `0.0`.
    pub fn set_inter_button_spacing(&mut self, spacing: f64) {
        debug_assert!(
            spacing.is_finite(),
            "inter-button spacing must be finite; got {spacing:?}"
        );
        self.spacing = if spacing.is_sign_negative() {
            0.0
        } else {
            spacing
        };
        self.dirty = true;
    }

    /// Returns the current content mode.
    #[must_use]
    pub const fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Sets the content mode.
    pub fn set_content_mode(&mut self, mode: ContentMode) {
        if self.content_mode != mode {
            self.content_mode = mode;
            self.dirty = true;
        }
    }

    /// Returns `true` if separators are shown between buttons.
    #[must_use]
    pub const fn show_separators(&self) -> bool {
        self.show_separators
    }

    /// Enables or disables separators between buttons.
    ///
    /// Changing the flag changes the shape of the element sequence, so the
    /// sequence is not patched in place. Returns `true` (and raises the
    /// reload signal) when the value changed; the host completes the change
    /// with [`reload`](Self::reload).
    pub fn set_show_separators(&mut self, show: bool) -> bool {
        if self.show_separators == show {
            return false;
        }
        self.show_separators = show;
        self.needs_reload = true;
        true
    }

    /// Returns `true` if a full rebuild has been requested and not yet run.
    #[must_use]
    pub const fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    /// Tears the element sequence down and rebuilds it from the logical
    /// button list under the current options.
    pub fn reload(&mut self) {
        self.sequence.clear();
        if !self.buttons.is_empty() {
            let ids: SmallVec<[K; 8]> = self.buttons.iter().map(|spec| spec.id).collect();
            // Reinserting the full logical list into an empty sequence
            // cannot fail.
            let _ = self.sequence.insert(&ids, 0, self.show_separators);
        }
        self.needs_reload = false;
        self.dirty = true;
    }

    /// Returns the logical button list, in order.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonSpec<K>] {
        &self.buttons
    }

    /// Returns the element sequence, separators included.
    #[must_use]
    pub const fn sequence(&self) -> &ElementSequence<K> {
        &self.sequence
    }

    /// Inserts a batch of buttons starting at `logical_index`.
    ///
    /// Separators are created per the current
    /// [`show_separators`](Self::show_separators) value.
    ///
    /// # Errors
    ///
    /// Propagates [`SequenceError`] from the underlying sequence; the layout
    /// is left untouched on error.
    pub fn insert(
        &mut self,
        buttons: &[ButtonSpec<K>],
        logical_index: usize,
    ) -> Result<(), SequenceError> {
        let ids: SmallVec<[K; 8]> = buttons.iter().map(|spec| spec.id).collect();
        self.sequence
            .insert(&ids, logical_index, self.show_separators)?;
        for (offset, spec) in buttons.iter().enumerate() {
            self.buttons.insert(logical_index + offset, *spec);
        }
        self.dirty = true;
        debug_assert_eq!(
            self.sequence.logical_len(),
            self.buttons.len(),
            "sequence and logical list out of step"
        );
        Ok(())
    }

    /// Removes the given buttons (and their trailing separators).
    ///
    /// Buttons not part of the layout are skipped. Returns the number of
    /// buttons actually removed.
    pub fn remove(&mut self, ids: &[K]) -> usize {
        let removed = self.sequence.remove(ids);
        if removed > 0 {
            self.buttons.retain(|spec| !ids.contains(&spec.id));
            self.dirty = true;
        }
        removed
    }

    /// Returns the computed frames for all elements, in sequence order.
    pub fn frames(&mut self) -> &[Rect] {
        self.ensure_frames();
        &self.frames
    }

    /// Returns the computed frame of the given button, if attached.
    pub fn frame_of(&mut self, id: K) -> Option<Rect> {
        self.ensure_frames();
        let position = self.sequence.position_of(id)?;
        self.frames.get(position).copied()
    }

    /// Computes the focus rectangle for a fractional logical position.
    ///
    /// `capacity` is the host's total logical button count; see
    /// [`tabstrip_focus::focus_area`] for the clamping and defensive-return
    /// contract.
    pub fn focus_area(&mut self, position: f64, capacity: usize) -> Rect {
        self.ensure_frames();
        let frames: SmallVec<[Rect; 8]> = self
            .sequence
            .elements()
            .iter()
            .zip(&self.frames)
            .filter(|(element, _)| !element.is_separator())
            .map(|(_, frame)| *frame)
            .collect();
        tabstrip_focus::focus_area(
            position,
            capacity,
            &frames,
            self.container.height().max(0.0),
        )
    }

    fn ensure_frames(&mut self) {
        if !self.dirty {
            return;
        }
        self.frames.clear();

        let height = self.container.height().max(0.0);
        let element_count = self.sequence.len();
        let button_count = self.sequence.logical_len();
        let fit_width = match self.content_mode {
            ContentMode::Intrinsic => None,
            ContentMode::Fit => {
                let gaps = element_count.saturating_sub(1) as f64 * self.spacing;
                let separators = (element_count - button_count) as f64 * SEPARATOR_WIDTH;
                let available = self.container.width() - gaps - separators;
                Some(if button_count == 0 {
                    0.0
                } else {
                    (available / button_count as f64).max(0.0)
                })
            }
        };

        let mut intrinsic = self.buttons.iter();
        let mut cursor = 0.0;
        for element in self.sequence.elements() {
            let width = match (element, fit_width) {
                (Element::Separator(_), _) => SEPARATOR_WIDTH,
                (Element::Button(_), Some(width)) => width,
                (Element::Button(_), None) => intrinsic
                    .next()
                    .map_or(0.0, |spec| spec.intrinsic_width.max(0.0)),
            };
            self.frames.push(Rect::new(cursor, 0.0, cursor + width, height));
            cursor += width + self.spacing;
        }
        self.dirty = false;
    }
}

impl<K: Copy + Eq> Default for HorizontalLayout<K> {
    fn default() -> Self {
        Self::new()
    }
}
