// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered element sequence and its mutation operations.

use alloc::vec::Vec;
use core::fmt;

use crate::element::{Element, SeparatorId};

/// Maps a logical button index to its position within the element sequence.
///
/// Logical indices count buttons only; sequence positions count every element.
/// With separators enabled each button occupies two slots (itself plus its
/// trailing separator), so the mapping is `2 * logical_index`; without
/// separators the two index spaces coincide.
///
/// The mapping assumes a sequence of uniform shape. Hosts that toggle
/// separators must rebuild the sequence under the new flag before relying on
/// it again.
#[must_use]
pub const fn sequence_index(logical_index: usize, separators: bool) -> usize {
    if separators {
        logical_index.saturating_mul(2)
    } else {
        logical_index
    }
}

/// Errors reported by fallible [`ElementSequence`] mutations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SequenceError {
    /// The logical insertion index was outside `0..=logical_len`.
    IndexOutOfBounds {
        /// The rejected logical index.
        index: usize,
        /// The logical button count at the time of the call.
        len: usize,
    },
    /// A button in the batch is already part of the sequence, or appears
    /// twice within the batch itself.
    AlreadyAttached,
    /// The insertion batch was empty.
    EmptyBatch,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "logical index {index} out of bounds for {len} buttons")
            }
            Self::AlreadyAttached => write!(f, "button is already attached to the sequence"),
            Self::EmptyBatch => write!(f, "insertion batch is empty"),
        }
    }
}

impl core::error::Error for SequenceError {}

/// The ordered, mutable arrangement of buttons and separators.
///
/// The sequence upholds two invariants across all mutations:
///
/// - The button-only projection, in order, equals the host's logical button
///   list, in order.
/// - When separators are enabled, every button except possibly the last is
///   immediately followed by exactly one separator; when disabled, no
///   separators exist.
///
/// Whether separators are created is decided per [`insert`](Self::insert)
/// call, so a host that toggles its separator style rebuilds the sequence
/// (clear + re-insert) rather than patching it in place.
#[derive(Clone, Debug)]
pub struct ElementSequence<K> {
    elements: Vec<Element<K>>,
    next_separator: u32,
}

impl<K> Default for ElementSequence<K> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            next_separator: 0,
        }
    }
}

impl<K: Copy + Eq> ElementSequence<K> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_separator: 0,
        }
    }

    /// Returns the number of elements, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of buttons, ignoring separators.
    #[must_use]
    pub fn logical_len(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| !e.is_separator())
            .count()
    }

    /// Returns the elements in visual left-to-right order.
    #[must_use]
    pub fn elements(&self) -> &[Element<K>] {
        &self.elements
    }

    /// Iterates over the button-only projection, in order.
    pub fn buttons(&self) -> impl Iterator<Item = K> + '_ {
        self.elements.iter().filter_map(Element::as_button)
    }

    /// Returns `true` if the given button is part of the sequence.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the sequence position of the given button, if attached.
    #[must_use]
    pub fn position_of(&self, id: K) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.as_button() == Some(id))
    }

    /// Inserts a batch of buttons starting at `logical_index`, creating a
    /// trailing separator per button when `separators` is set.
    ///
    /// Each button's target position is computed from the *running* insertion
    /// index (advancing by two per button when separators are enabled), so
    /// later buttons in the batch land after earlier ones. Positions beyond
    /// the current length append instead.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyBatch`] if `buttons` is empty.
    /// - [`SequenceError::IndexOutOfBounds`] if `logical_index` exceeds the
    ///   current logical length.
    /// - [`SequenceError::AlreadyAttached`] if any button is already attached
    ///   or appears twice in the batch.
    ///
    /// The sequence is left untouched on error.
    pub fn insert(
        &mut self,
        buttons: &[K],
        logical_index: usize,
        separators: bool,
    ) -> Result<(), SequenceError> {
        if buttons.is_empty() {
            return Err(SequenceError::EmptyBatch);
        }
        let logical_len = self.logical_len();
        if logical_index > logical_len {
            return Err(SequenceError::IndexOutOfBounds {
                index: logical_index,
                len: logical_len,
            });
        }
        for (i, id) in buttons.iter().enumerate() {
            if self.contains(*id) || buttons[..i].contains(id) {
                return Err(SequenceError::AlreadyAttached);
            }
        }

        let mut current = sequence_index(logical_index, separators);
        for &id in buttons {
            let separator = separators.then(|| self.alloc_separator());
            if current >= self.elements.len() {
                self.elements.push(Element::Button(id));
                if let Some(separator) = separator {
                    self.elements.push(Element::Separator(separator));
                }
            } else {
                self.elements.insert(current, Element::Button(id));
                if let Some(separator) = separator {
                    self.elements.insert(current + 1, Element::Separator(separator));
                }
            }
            current += if separator.is_some() { 2 } else { 1 };
        }
        Ok(())
    }

    /// Removes the given buttons from the sequence.
    ///
    /// The separator immediately following a removed button is removed with
    /// it, so the separator-placement invariant holds after any removal
    /// pattern. Buttons not attached to the sequence are skipped.
    ///
    /// Returns the number of buttons actually removed.
    pub fn remove(&mut self, buttons: &[K]) -> usize {
        let mut removed = 0;
        for &id in buttons {
            let Some(position) = self.position_of(id) else {
                continue;
            };
            self.elements.remove(position);
            if self
                .elements
                .get(position)
                .is_some_and(Element::is_separator)
            {
                self.elements.remove(position);
            }
            removed += 1;
        }
        removed
    }

    /// Removes all elements. Separator ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn alloc_separator(&mut self) -> SeparatorId {
        let id = SeparatorId(self.next_separator);
        self.next_separator = self.next_separator.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{ElementSequence, SequenceError, sequence_index};
    use crate::element::Element;

    fn buttons_of(sequence: &ElementSequence<char>) -> Vec<char> {
        sequence.buttons().collect()
    }

    /// Checks the separator-placement invariant for the given flag.
    fn assert_separator_placement(sequence: &ElementSequence<char>, separators: bool) {
        let elements = sequence.elements();
        if !separators {
            assert!(
                elements.iter().all(|e| !e.is_separator()),
                "no separators expected when disabled"
            );
            return;
        }
        for pair in elements.windows(2) {
            assert!(
                !(pair[0].is_separator() && pair[1].is_separator()),
                "adjacent separators"
            );
        }
        assert!(
            elements.first().is_none_or(|e| !e.is_separator()),
            "sequence must not start with a separator"
        );
        for (i, element) in elements.iter().enumerate() {
            if element.is_separator() {
                continue;
            }
            let last_button = elements[i + 1..].iter().all(Element::is_separator);
            assert!(
                last_button || elements.get(i + 1).is_some_and(Element::is_separator),
                "button at {i} lacks a trailing separator"
            );
        }
    }

    #[test]
    fn mapping_doubles_with_separators() {
        assert_eq!(sequence_index(0, false), 0);
        assert_eq!(sequence_index(3, false), 3);
        assert_eq!(sequence_index(0, true), 0);
        assert_eq!(sequence_index(3, true), 6);
        assert_eq!(sequence_index(usize::MAX, true), usize::MAX);
    }

    #[test]
    fn batch_insert_into_empty_sequence_with_separators() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'b'], 0, true).unwrap();

        // [a, sep, b, sep]
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.logical_len(), 2);
        assert_eq!(buttons_of(&sequence), vec!['a', 'b']);
        assert!(matches!(sequence.elements()[0], Element::Button('a')));
        assert!(sequence.elements()[1].is_separator());
        assert!(matches!(sequence.elements()[2], Element::Button('b')));
        assert!(sequence.elements()[3].is_separator());
        assert_separator_placement(&sequence, true);
    }

    #[test]
    fn batch_insert_into_middle_keeps_order() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'd'], 0, false).unwrap();
        sequence.insert(&['b', 'c'], 1, false).unwrap();

        assert_eq!(buttons_of(&sequence), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn batch_insert_into_middle_with_separators() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'd'], 0, true).unwrap();
        sequence.insert(&['b', 'c'], 1, true).unwrap();

        assert_eq!(buttons_of(&sequence), vec!['a', 'b', 'c', 'd']);
        assert_eq!(sequence.len(), 8);
        assert_separator_placement(&sequence, true);
    }

    #[test]
    fn insert_without_separators_creates_none() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'b', 'c'], 0, false).unwrap();

        assert_eq!(sequence.len(), 3);
        assert_separator_placement(&sequence, false);
    }

    #[test]
    fn insert_rejects_out_of_range_index() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a'], 0, false).unwrap();

        assert_eq!(
            sequence.insert(&['b'], 2, false),
            Err(SequenceError::IndexOutOfBounds { index: 2, len: 1 })
        );
        // The failed call must not have touched the sequence.
        assert_eq!(buttons_of(&sequence), vec!['a']);
    }

    #[test]
    fn insert_rejects_attached_and_duplicate_buttons() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a'], 0, false).unwrap();

        assert_eq!(
            sequence.insert(&['a'], 1, false),
            Err(SequenceError::AlreadyAttached)
        );
        assert_eq!(
            sequence.insert(&['b', 'b'], 1, false),
            Err(SequenceError::AlreadyAttached)
        );
        assert_eq!(sequence.insert(&[], 0, false), Err(SequenceError::EmptyBatch));
        assert_eq!(buttons_of(&sequence), vec!['a']);
    }

    #[test]
    fn remove_takes_trailing_separator_along() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'b', 'c'], 0, true).unwrap();
        assert_eq!(sequence.len(), 6);

        // Removing the middle button must not leave its separator dangling.
        assert_eq!(sequence.remove(&['b']), 1);
        assert_eq!(buttons_of(&sequence), vec!['a', 'c']);
        assert_eq!(sequence.len(), 4);
        assert_separator_placement(&sequence, true);
    }

    #[test]
    fn remove_skips_absent_buttons() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'b'], 0, false).unwrap();

        assert_eq!(sequence.remove(&['x', 'b', 'y']), 1);
        assert_eq!(buttons_of(&sequence), vec!['a']);
        assert_eq!(sequence.remove(&['b']), 0);
    }

    #[test]
    fn ordering_invariant_under_mixed_mutation() {
        let mut sequence = ElementSequence::new();
        let mut logical: Vec<char> = Vec::new();

        sequence.insert(&['a', 'b', 'c'], 0, true).unwrap();
        logical.splice(0..0, ['a', 'b', 'c']);

        sequence.insert(&['d'], 1, true).unwrap();
        logical.insert(1, 'd');

        sequence.remove(&['a', 'c']);
        logical.retain(|&id| id != 'a' && id != 'c');

        sequence.insert(&['e', 'f'], 2, true).unwrap();
        logical.splice(2..2, ['e', 'f']);

        assert_eq!(buttons_of(&sequence), logical);
        assert_separator_placement(&sequence, true);
    }

    #[test]
    fn separator_ids_are_not_reused_after_clear() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a'], 0, true).unwrap();
        let first = sequence.elements()[1];
        sequence.clear();
        assert!(sequence.is_empty());

        sequence.insert(&['a'], 0, true).unwrap();
        assert_ne!(first, sequence.elements()[1]);
    }

    #[test]
    fn position_and_contains_queries() {
        let mut sequence = ElementSequence::new();
        sequence.insert(&['a', 'b'], 0, true).unwrap();

        assert!(sequence.contains('b'));
        assert!(!sequence.contains('z'));
        assert_eq!(sequence.position_of('a'), Some(0));
        assert_eq!(sequence.position_of('b'), Some(2));
    }
}
