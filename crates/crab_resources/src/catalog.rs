//! # Resource Catalogs
//!
//! Ordered, keyed collections of resources loaded from TOML.
//!
//! ```toml
//! [[resource]]
//! key = "sword"
//! display_name = "Sword"
//! description = "A sharp blade."
//! icon = 12
//!
//! [[resource]]
//! key = "gold"
//! display_name = "Gold"
//! value = 250.0
//! ```
//!
//! Entries with a `value` become [`ValueDisplayResource`]s. File order is
//! kept, so a catalog can populate a container directly.

use crate::display::{DisplayData, DisplayResource};
use crate::error::{ResourceError, ResourceResult};
use crate::icon::IconHandle;
use crate::value::ValueDisplayResource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One `[[resource]]` table in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Lookup key, unique within the catalog.
    pub key: String,
    /// Display name.
    pub display_name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Icon atlas id.
    #[serde(default)]
    pub icon: Option<IconHandle>,
    /// Numeric value; present for value resources.
    #[serde(default)]
    pub value: Option<f32>,
}

impl CatalogEntry {
    fn build(&self) -> DisplayResource {
        let data = DisplayData {
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            icon: self.icon,
        };
        DisplayResource::from_data(data, self.value)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "resource")]
    resources: Vec<CatalogEntry>,
}

/// Resources in file order, addressable by key.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    keys: Vec<String>,
    resources: Vec<DisplayResource>,
    index: HashMap<String, usize>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidCatalog`] for malformed TOML and
    /// [`ResourceError::DuplicateKey`] if two entries share a key.
    pub fn from_toml_str(text: &str) -> ResourceResult<Self> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|err| ResourceError::InvalidCatalog(err.to_string()))?;

        let mut catalog = Self::new();
        for entry in &file.resources {
            catalog.insert(&entry.key, entry.build())?;
        }

        tracing::debug!(resources = catalog.len(), "loaded resource catalog");
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] if the file cannot be read, otherwise
    /// the errors of [`ResourceCatalog::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ResourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ResourceError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Appends a resource under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DuplicateKey`] if `key` is already present.
    pub fn insert(&mut self, key: &str, resource: DisplayResource) -> ResourceResult<()> {
        if self.index.contains_key(key) {
            return Err(ResourceError::DuplicateKey(key.to_string()));
        }
        self.index.insert(key.to_string(), self.resources.len());
        self.keys.push(key.to_string());
        self.resources.push(resource);
        Ok(())
    }

    /// Looks up a resource by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DisplayResource> {
        self.index.get(key).map(|&i| &self.resources[i])
    }

    /// Looks up a value resource by key.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<ValueDisplayResource> {
        self.get(key)
            .cloned()
            .and_then(ValueDisplayResource::from_display)
    }

    /// Returns all resources in file order.
    #[must_use]
    pub fn resources(&self) -> &[DisplayResource] {
        &self.resources
    }

    /// Returns all keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [[resource]]
        key = "sword"
        display_name = "Sword"
        description = "A sharp blade."
        icon = 12

        [[resource]]
        key = "gold"
        display_name = "Gold"
        value = 250.0

        [[resource]]
        key = "map"
        display_name = "Map"
    "#;

    #[test]
    fn test_catalog_keeps_file_order() {
        let catalog = ResourceCatalog::from_toml_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["sword", "gold", "map"]);
        let names: Vec<String> = catalog.resources().iter().map(DisplayResource::display_name).collect();
        assert_eq!(names, ["Sword", "Gold", "Map"]);
    }

    #[test]
    fn test_catalog_fields() {
        let catalog = ResourceCatalog::from_toml_str(CATALOG).unwrap();

        let sword = catalog.get("sword").unwrap();
        assert_eq!(sword.description(), "A sharp blade.");
        assert_eq!(sword.icon(), Some(IconHandle::new(12)));
        assert!(catalog.get_value("sword").is_none());

        let gold = catalog.get_value("gold").unwrap();
        assert_eq!(gold.rounded_value(), 250);
        assert!(gold.same_resource(catalog.get("gold").unwrap()));
    }

    #[test]
    fn test_catalog_rejects_duplicate_keys() {
        let text = r#"
            [[resource]]
            key = "a"
            display_name = "A"

            [[resource]]
            key = "a"
            display_name = "B"
        "#;

        assert_eq!(
            ResourceCatalog::from_toml_str(text).unwrap_err(),
            ResourceError::DuplicateKey("a".into())
        );
    }

    #[test]
    fn test_catalog_rejects_malformed_toml() {
        let err = ResourceCatalog::from_toml_str("[[resource]]\nkey = ").unwrap_err();
        assert!(matches!(err, ResourceError::InvalidCatalog(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ResourceCatalog::from_path("/nonexistent/crab/catalog.toml").unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ResourceCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
