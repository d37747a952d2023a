//! Asset class identifiers and the per-dataset asset catalog
//!
//! Every dataset fixes its own set of asset classes (five broad classes in
//! one variant, six growth/value style boxes in another). The catalog is the
//! single source of truth for that set: ids are dense indices into it, so
//! per-record rate vectors and profile weight vectors stay aligned to it
//! without positional guesswork.

use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Unique identifier for an asset class within one dataset's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetClassId(pub u16);

/// The fixed, ordered set of asset classes for one dataset.
///
/// Built once when the dataset is loaded and immutable afterwards. Ids are
/// indices into the catalog's ordering, so a `Vec<f64>` of rates or weights
/// with one entry per catalog slot is fully keyed by `AssetClassId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    names: Vec<String>,
}

impl AssetCatalog {
    /// Build a catalog from ordered asset class names.
    ///
    /// Fails if the set is empty or a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SeriesError::EmptyCatalog);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(SeriesError::DuplicateAssetClass(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Number of asset classes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = AssetClassId> + '_ {
        (0..self.names.len()).map(|i| AssetClassId(i as u16))
    }

    /// Asset class names in catalog order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of an asset class, if the id belongs to this catalog
    #[must_use]
    pub fn name(&self, id: AssetClassId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Id of an asset class by name
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<AssetClassId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| AssetClassId(i as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_follow_order() {
        let catalog = AssetCatalog::new(["large_cap", "small_cap", "bonds"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id_of("small_cap"), Some(AssetClassId(1)));
        assert_eq!(catalog.name(AssetClassId(2)), Some("bonds"));
        assert_eq!(catalog.name(AssetClassId(3)), None);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = AssetCatalog::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, SeriesError::EmptyCatalog);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = AssetCatalog::new(["bonds", "cash", "bonds"]).unwrap_err();
        assert_eq!(err, SeriesError::DuplicateAssetClass("bonds".to_string()));
    }
}
