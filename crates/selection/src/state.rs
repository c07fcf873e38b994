use picker_catalog::{Catalog, Dimension, DimensionValue};

/// A candidate value with its selection flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueState {
	pub name: String,
	pub description: String,
	pub image: Option<String>,
	pub(crate) selected: bool,
	pub(crate) disabled: bool,
}

impl ValueState {
	fn from_value(value: &DimensionValue) -> Self {
		Self {
			name: value.name.clone(),
			description: value.description.clone(),
			image: value.image.clone(),
			selected: false,
			disabled: false,
		}
	}

	#[inline]
	pub fn is_selected(&self) -> bool {
		self.selected
	}

	/// Returns true if choosing this value would lead to no stocked variant.
	#[inline]
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}
}

/// One dimension's candidate values, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionState {
	pub id: String,
	pub name: String,
	values: Vec<ValueState>,
}

impl DimensionState {
	fn from_dimension(dim: &Dimension) -> Self {
		Self {
			id: dim.id.clone(),
			name: dim.name.clone(),
			values: dim.values.iter().map(ValueState::from_value).collect(),
		}
	}

	pub fn values(&self) -> &[ValueState] {
		&self.values
	}

	pub fn value(&self, index: usize) -> Option<&ValueState> {
		self.values.get(index)
	}

	/// Returns the index of the selected value, if any.
	pub fn selected_index(&self) -> Option<usize> {
		self.values.iter().position(|v| v.selected)
	}

	pub fn selected(&self) -> Option<&ValueState> {
		self.values.iter().find(|v| v.selected)
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.values.iter().position(|v| v.name == name)
	}
}

/// Per-dimension, per-value `selected` / `disabled` flags.
///
/// A deep copy of the catalog's dimensions; mutating it never touches the catalog. Only
/// [`crate::SelectionController`] writes the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
	dimensions: Vec<DimensionState>,
}

impl SelectionState {
	/// Copies the dimensions of `catalog` with every flag cleared.
	///
	/// Callers are expected to recompute `disabled` before exposing the state.
	pub(crate) fn from_catalog(catalog: &Catalog) -> Self {
		Self {
			dimensions: catalog.dimensions.iter().map(DimensionState::from_dimension).collect(),
		}
	}

	pub fn dimensions(&self) -> &[DimensionState] {
		&self.dimensions
	}

	pub fn dimension(&self, index: usize) -> Option<&DimensionState> {
		self.dimensions.get(index)
	}

	pub fn value(&self, dimension: usize, value: usize) -> Option<&ValueState> {
		self.dimensions.get(dimension)?.values.get(value)
	}

	pub fn selected_index(&self, dimension: usize) -> Option<usize> {
		self.dimensions.get(dimension)?.selected_index()
	}

	pub fn selected_name(&self, dimension: usize) -> Option<&str> {
		self.dimensions.get(dimension)?.selected().map(|v| v.name.as_str())
	}

	/// Returns the selected value name of every dimension, in dimension order.
	pub fn selected_names(&self) -> Vec<Option<&str>> {
		self.dimensions
			.iter()
			.map(|d| d.selected().map(|v| v.name.as_str()))
			.collect()
	}

	/// Returns true if every dimension has a selection. A catalog without dimensions is never
	/// complete.
	pub fn is_complete(&self) -> bool {
		!self.dimensions.is_empty() && self.dimensions.iter().all(|d| d.selected_index().is_some())
	}

	/// Returns true if no dimension has a selection.
	pub fn is_empty(&self) -> bool {
		self.dimensions.iter().all(|d| d.selected_index().is_none())
	}

	/// Resolves a `(dimension, value)` name pair to positions.
	pub fn position(&self, dimension: &str, value: &str) -> Option<(usize, usize)> {
		let d = self.dimensions.iter().position(|dim| dim.name == dimension)?;
		let v = self.dimensions[d].position(value)?;
		Some((d, v))
	}

	/// Snapshot of every `disabled` flag.
	pub fn disabled_flags(&self) -> Vec<Vec<bool>> {
		self.dimensions
			.iter()
			.map(|d| d.values.iter().map(|v| v.disabled).collect())
			.collect()
	}

	/// Snapshot of every `selected` flag.
	pub fn selected_flags(&self) -> Vec<Vec<bool>> {
		self.dimensions
			.iter()
			.map(|d| d.values.iter().map(|v| v.selected).collect())
			.collect()
	}

	/// Selects `value`, clearing any other selection in the same dimension.
	pub(crate) fn select(&mut self, dimension: usize, value: usize) {
		for (i, v) in self.dimensions[dimension].values.iter_mut().enumerate() {
			v.selected = i == value;
		}
	}

	pub(crate) fn deselect(&mut self, dimension: usize, value: usize) {
		self.dimensions[dimension].values[value].selected = false;
	}

	pub(crate) fn clear(&mut self) {
		for v in self.dimensions.iter_mut().flat_map(|d| d.values.iter_mut()) {
			v.selected = false;
		}
	}

	pub(crate) fn set_disabled(&mut self, flags: Vec<Vec<bool>>) {
		for (dim, flags) in self.dimensions.iter_mut().zip(flags) {
			for (v, disabled) in dim.values.iter_mut().zip(flags) {
				v.disabled = disabled;
			}
		}
	}
}
