//! Selection state machine for multi-dimensional variant choice.
//!
//! # Purpose
//!
//! Tracks which value a user picked in each dimension, greys out values that would lead to no
//! stocked variant, and hands the resolved variant to a [`ChangeEmitter`] once every dimension
//! has a selection.
//!
//! # Mental Model
//!
//! 1. **Open:** [`SelectionController::new`] deep-copies the catalog dimensions into a
//!    [`SelectionState`] and computes the initial `disabled` flags from a shared
//!    [`picker_index::PathIndex`].
//! 2. **Act:** The presentation layer calls [`SelectionController::toggle`] once per user
//!    interaction. The call runs to completion: mutate, recompute every flag, check for
//!    completion, emit.
//! 3. **Resolve:** On completion the full key is looked up in the index and the first variant
//!    is turned into a [`VariantSummary`] by the [`VariantResolver`].
//!
//! # Invariants
//!
//! - At most one value per dimension is selected.
//!   - Enforced in: `SelectionState::select`.
//!   - Failure symptom: Two sizes highlighted at once.
//!
//! - A value is disabled exactly when no stocked variant matches the other dimensions'
//!   selections plus that value.
//!   - Enforced in: `SelectionController::recompute_disabled` (full recompute after every
//!     mutation).
//!   - Failure symptom: Dead-end choices stay clickable, or reachable ones are greyed out.
//!
//! - Toggling a disabled value changes nothing and emits nothing.
//!   - Enforced in: [`SelectionController::toggle`].
//!
//! - An emitted summary always names a stocked variant whose values equal the selection.
//!   - Enforced in: `SelectionController::check_completion`.
//!   - Failure symptom: Cart receives a SKU the user did not choose.
//!
//! # Caller obligations
//!
//! Value names must be non-empty, must not contain the key delimiter, and must not repeat in
//! another dimension (a `Black` colour next to a `Black` trim makes their keys collide and
//! strands the user on greyed-out choices). Every variant must list its values in catalog
//! dimension order. None of this is checked here; see
//! [`picker_catalog::Catalog::validate`].

mod controller;
mod emitter;
mod error;
mod resolver;
mod state;

pub use controller::{Offer, SelectionController, ToggleOutcome};
pub use emitter::ChangeEmitter;
pub use error::SelectionError;
pub use resolver::{VariantResolver, VariantSummary};
pub use state::{DimensionState, SelectionState, ValueState};

#[cfg(test)]
pub(crate) mod invariants;
