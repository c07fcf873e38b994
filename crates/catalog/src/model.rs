use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a stocked variant (SKU).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for VariantId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for VariantId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for VariantId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// One concrete option within a dimension.
///
/// `name` must be non-empty, free of the key delimiter, and unique across the whole catalog:
/// keys carry no dimension position, so a name shared by two dimensions makes them ambiguous.
/// The picker does not check this at runtime; see [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionValue {
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

impl DimensionValue {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: String::new(),
			image: None,
		}
	}
}

/// One axis of variation. Value order is significant and fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
	pub id: String,
	pub name: String,
	pub values: Vec<DimensionValue>,
}

impl Dimension {
	/// Creates a dimension whose id equals its name.
	pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let name = name.into();
		Self {
			id: name.clone(),
			name,
			values: values.into_iter().map(DimensionValue::new).collect(),
		}
	}

	/// Returns the position of the value called `name`.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.values.iter().position(|v| v.name == name)
	}
}

/// A `(dimensionName, valueName)` assignment on a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantValue {
	pub dimension: String,
	pub value: String,
}

impl VariantValue {
	pub fn new(dimension: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			dimension: dimension.into(),
			value: value.into(),
		}
	}
}

/// A purchasable combination of one value per dimension.
///
/// `values` holds one pair per dimension in catalog dimension order. Fields the picker does
/// not interpret are kept in `extra` and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
	pub id: VariantId,
	/// Price in minor units.
	pub price: u64,
	/// Strike-through price in minor units.
	#[serde(default, alias = "oldPrice", skip_serializing_if = "Option::is_none")]
	pub old_price: Option<u64>,
	#[serde(default)]
	pub inventory: u32,
	pub values: Vec<VariantValue>,
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

impl Variant {
	pub fn new(id: impl Into<VariantId>, price: u64, inventory: u32, values: Vec<VariantValue>) -> Self {
		Self {
			id: id.into(),
			price,
			old_price: None,
			inventory,
			values,
			extra: BTreeMap::new(),
		}
	}

	pub fn with_old_price(mut self, old_price: u64) -> Self {
		self.old_price = Some(old_price);
		self
	}

	/// Returns true if at least one unit is stocked.
	#[inline]
	pub fn in_stock(&self) -> bool {
		self.inventory > 0
	}

	/// Iterates value names in the variant's own order.
	pub fn value_names(&self) -> impl Iterator<Item = &str> + '_ {
		self.values.iter().map(|v| v.value.as_str())
	}

	/// Returns the value assigned to the dimension called `dimension`.
	pub fn value_for(&self, dimension: &str) -> Option<&str> {
		self.values.iter().find(|v| v.dimension == dimension).map(|v| v.value.as_str())
	}
}

/// The input document: dimensions plus every variant, stocked or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
	#[serde(default)]
	pub dimensions: Vec<Dimension>,
	#[serde(default)]
	pub variants: Vec<Variant>,
}

impl Catalog {
	pub fn new(dimensions: Vec<Dimension>, variants: Vec<Variant>) -> Self {
		Self { dimensions, variants }
	}

	pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
		Ok(toml::from_str(s)?)
	}

	/// Loads a catalog file. `.toml` files are parsed as TOML, everything else as JSON.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		match path.extension().and_then(|e| e.to_str()) {
			Some("toml") => Self::from_toml_str(&content),
			_ => Self::from_json_str(&content),
		}
	}

	/// Returns the first variant with the given id.
	pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
		self.variants.iter().find(|v| &v.id == id)
	}

	/// Returns the position of the dimension called `name`.
	pub fn dimension_position(&self, name: &str) -> Option<usize> {
		self.dimensions.iter().position(|d| d.name == name)
	}

	/// Iterates variants with `inventory > 0` in catalog order.
	pub fn in_stock(&self) -> impl Iterator<Item = &Variant> + '_ {
		self.variants.iter().filter(|v| v.in_stock())
	}
}
