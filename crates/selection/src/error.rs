use picker_catalog::VariantId;

/// Caller errors from the name-based conveniences on [`crate::SelectionController`].
///
/// The positional `toggle` never fails; these only arise when names or ids do not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
	#[error("unknown dimension {dimension:?}")]
	UnknownDimension { dimension: String },

	#[error("dimension {dimension:?} has no value {value:?}")]
	UnknownValue { dimension: String, value: String },

	#[error("unknown variant {id}")]
	UnknownVariant { id: VariantId },

	#[error("value {value:?} of dimension {dimension:?} is not reachable")]
	Unreachable { dimension: String, value: String },
}
