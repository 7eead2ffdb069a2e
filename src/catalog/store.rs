//! Food catalog loading
//!
//! Reads the foods and optional unit preferences the server works with from
//! a JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Food;
use crate::nutrition::UserUnits;

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate food id {0}")]
    DuplicateFood(Uuid),

    #[error("Food '{food}' has an invalid {field}")]
    InvalidFood { food: String, field: String },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// On-disk layout of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub foods: Vec<Food>,
    #[serde(default)]
    pub user_units: Option<UserUnits>,
}

/// Loaded, validated foods
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<Food>,
    user_units: Option<UserUnits>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::new(file.foods, file.user_units)
    }

    /// Build a catalog, rejecting duplicate ids and malformed amounts
    pub fn new(foods: Vec<Food>, user_units: Option<UserUnits>) -> CatalogResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for food in &foods {
            if !seen.insert(food.id) {
                return Err(CatalogError::DuplicateFood(food.id));
            }
            validate_food(food)?;
        }

        tracing::debug!("Catalog holds {} foods", foods.len());
        Ok(Self { foods, user_units })
    }

    pub fn get(&self, id: Uuid) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Search foods by name, detail or brand
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Food> {
        let query = query.trim().to_lowercase();
        let matches = |field: Option<&str>| {
            field.is_some_and(|f| f.to_lowercase().contains(&query))
        };

        let mut found: Vec<&Food> = self
            .foods
            .iter()
            .filter(|f| {
                matches(Some(f.name.as_str())) || matches(f.detail.as_deref()) || matches(f.brand.as_deref())
            })
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit);
        found
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn user_units(&self) -> Option<UserUnits> {
        self.user_units
    }
}

fn validate_food(food: &Food) -> CatalogResult<()> {
    let invalid = |field: &str| CatalogError::InvalidFood {
        food: food.name.clone(),
        field: field.to_string(),
    };

    if !food.amount.is_consistent() || food.amount.value <= 0.0 {
        return Err(invalid("amount"));
    }
    if food.serving.as_ref().is_some_and(|s| !s.is_consistent()) {
        return Err(invalid("serving"));
    }
    if food.default_quantity.as_ref().is_some_and(|d| !d.is_consistent()) {
        return Err(invalid("default quantity"));
    }

    let mut size_ids = std::collections::HashSet::new();
    for size in &food.sizes {
        if !size_ids.insert(size.id.as_str()) {
            return Err(invalid(&format!("size id '{}'", size.id)));
        }
        if !size.amount.is_consistent() || size.quantity <= 0.0 {
            return Err(invalid(&format!("size '{}'", size.name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    fn catalog() -> Catalog {
        Catalog::new(vec![peanut_butter(), oats(), chicken_broth()], None).unwrap()
    }

    #[test]
    fn test_get_and_search() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get(Uuid::from_u128(2)).map(|f| f.name.as_str()),
            Some("Rolled Oats")
        );

        let found = catalog.search("JIF", 10);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Peanut Butter");

        assert_eq!(catalog.search("", 2).len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![oats(), oats()], None);
        assert!(matches!(result, Err(CatalogError::DuplicateFood(_))));
    }

    #[test]
    fn test_duplicate_size_ids_rejected() {
        let mut food = oats();
        food.sizes.push(food.sizes[0].clone());
        assert!(matches!(
            Catalog::new(vec![food], None),
            Err(CatalogError::InvalidFood { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let file = CatalogFile {
            foods: vec![peanut_butter()],
            user_units: Some(UserUnits::standard()),
        };
        let json = serde_json::to_string(&file).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.foods(), &[peanut_butter()]);
        assert_eq!(catalog.user_units(), Some(UserUnits::standard()));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::from_json(include_str!("../../data/catalog.json")).unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.user_units().is_some());
        assert_eq!(catalog.search("almond", 10).len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }
}
