// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element variants making up the visual arrangement.

/// Identifier for a separator created and owned by an
/// [`ElementSequence`](crate::ElementSequence).
///
/// Separator ids are unique within their owning sequence and are never reused,
/// so hosts can key recycled separator views off them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SeparatorId(pub(crate) u32);

impl SeparatorId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One slot in the left-to-right visual arrangement of a bar.
///
/// Buttons are owned by the host and referenced by a host-chosen id `K`;
/// separators are created and owned by the sequence itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Element<K> {
    /// A host-owned bar button.
    Button(K),
    /// A thin decorative separator between adjacent buttons.
    Separator(SeparatorId),
}

impl<K: Copy> Element<K> {
    /// Returns the button id if this element is a button.
    #[must_use]
    pub fn as_button(&self) -> Option<K> {
        match self {
            Self::Button(id) => Some(*id),
            Self::Separator(_) => None,
        }
    }

    /// Returns `true` if this element is a separator.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, SeparatorId};

    #[test]
    fn button_and_separator_projections() {
        let button: Element<u32> = Element::Button(7);
        let separator: Element<u32> = Element::Separator(SeparatorId(0));

        assert_eq!(button.as_button(), Some(7));
        assert!(!button.is_separator());
        assert_eq!(separator.as_button(), None);
        assert!(separator.is_separator());
        assert_eq!(SeparatorId(3).raw(), 3);
    }
}
