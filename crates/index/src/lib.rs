//! Path index over stocked catalog variants.
//!
//! # Purpose
//!
//! Maps every reachable partial combination of value names to the in-stock variants that
//! agree with it, so a selection front-end can answer "is this choice still reachable?" with
//! a single hash lookup.
//!
//! # Mental Model
//!
//! 1. **Keys:** A [`PathKey`] is the ordered sequence of value names for a non-empty subset of
//!    dimensions, joined by the configured delimiter. Dimensions outside the subset are absent
//!    from the key; there is no wildcard.
//! 2. **Build:** [`PathIndexBuilder`] walks in-stock variants in catalog order and inserts every
//!    non-empty order-preserving subsequence of each variant's value names.
//! 3. **Consumption:** The resulting [`PathIndex`] is immutable and is shared behind an `Arc`
//!    by every selection controller opened on the same catalog.
//!
//! # Invariants
//!
//! - Out-of-stock variants never contribute a key.
//!   - Enforced in: [`PathIndexBuilder::build`].
//!   - Failure symptom: Sold-out choices stay clickable.
//!
//! - Every in-stock variant is listed under each of its keys; a shared full key resolves to the
//!   first-registered variant and the later ones are recorded as collisions.
//!   - Enforced in: [`PathIndexBuilder::build`], [`PathIndex::first`].
//!   - Failure symptom: Completion resolves to a different variant between builds.
//!
//! - Every stored entry is non-empty.
//!   - Enforced in: [`PathIndexBuilder::build`] (entries are created on first insert).

mod build;
mod key;
mod types;

pub use build::PathIndexBuilder;
pub use key::PathKey;
pub use types::{Collision, PathIndex};
