// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabstrip Sequence: the ordered element arrangement behind a tab/paging bar.
//!
//! A bar layout arranges host-owned *buttons* left to right, optionally with a
//! thin *separator* after each one. This crate owns the bookkeeping for that
//! arrangement:
//!
//! - [`Element`]: a tagged slot in the visual arrangement, either a button
//!   (identified by a host-chosen id `K`) or a [`SeparatorId`] allocated by
//!   the sequence itself.
//! - [`ElementSequence`]: the ordered, mutable arrangement, with batch
//!   [`insert`](ElementSequence::insert) / [`remove`](ElementSequence::remove)
//!   operations that keep it consistent with the host's *logical* button list
//!   (which does not count separators).
//! - [`sequence_index`]: the pure mapping from a logical button index to its
//!   position within the arrangement.
//!
//! The sequence is the source of truth for ordering; rendering is a projection
//! a host applies after each mutation. This crate knows nothing about widgets,
//! frames, or any particular UI framework — see `tabstrip_layout` for the
//! geometry side.
//!
//! ## Minimal example
//!
//! ```rust
//! use tabstrip_sequence::{Element, ElementSequence};
//!
//! let mut sequence = ElementSequence::new();
//! // Two buttons with separators enabled: [A, sep, B, sep].
//! sequence.insert(&['A', 'B'], 0, true).unwrap();
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(sequence.buttons().collect::<Vec<_>>(), vec!['A', 'B']);
//!
//! // Removing a button takes its trailing separator with it.
//! assert_eq!(sequence.remove(&['A']), 1);
//! assert_eq!(sequence.len(), 2);
//! assert!(matches!(sequence.elements()[0], Element::Button('B')));
//! ```
//!
//! The button ids are any small, copyable handle (`K: Copy + Eq`), matching
//! the conventions of the host frameworks this crate is meant to slot into.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod sequence;

pub use element::{Element, SeparatorId};
pub use sequence::{ElementSequence, SequenceError, sequence_index};
