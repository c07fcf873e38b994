use std::sync::mpsc::Sender;

use crate::resolver::VariantSummary;

/// Receives a summary every time a toggle completes the selection.
///
/// Invoked synchronously from inside [`crate::SelectionController::toggle`], after the
/// state has been recomputed.
pub trait ChangeEmitter {
	fn change(&mut self, summary: &VariantSummary);
}

/// Discards every change.
impl ChangeEmitter for () {
	fn change(&mut self, _summary: &VariantSummary) {}
}

impl<F> ChangeEmitter for F
where
	F: FnMut(&VariantSummary),
{
	fn change(&mut self, summary: &VariantSummary) {
		self(summary);
	}
}

/// Records every change, oldest first.
impl ChangeEmitter for Vec<VariantSummary> {
	fn change(&mut self, summary: &VariantSummary) {
		self.push(summary.clone());
	}
}

/// Forwards changes to a channel. A dropped receiver is not an error for the picker.
impl ChangeEmitter for Sender<VariantSummary> {
	fn change(&mut self, summary: &VariantSummary) {
		if self.send(summary.clone()).is_err() {
			tracing::debug!(variant = %summary.id, "Change receiver dropped");
		}
	}
}
