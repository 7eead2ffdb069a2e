//! Shared foods for unit tests

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::PreferenceStore;
use crate::models::{Density, Food, FoodSize, FoodValue, Nutrition};
use crate::nutrition::{VolumeExplicitUnit, WeightUnit};

/// Weight-only food whose sizes are all weight based; "tbsp" = 16 g
pub fn peanut_butter() -> Food {
    Food {
        id: Uuid::from_u128(1),
        name: "Peanut Butter".to_string(),
        emoji: "🥜".to_string(),
        detail: Some("Smooth".to_string()),
        brand: Some("Jif".to_string()),
        amount: FoodValue::size(2.0, "tbsp", None),
        nutrition: Nutrition {
            energy: 190.0,
            carb: 7.0,
            fat: 16.0,
            protein: 7.0,
            ..Default::default()
        },
        serving: Some(FoodValue::size(2.0, "tbsp", None)),
        default_quantity: Some(FoodValue::size(2.0, "tbsp", None)),
        sizes: vec![FoodSize {
            id: "tbsp".to_string(),
            name: "tbsp".to_string(),
            quantity: 1.0,
            volume_prefix: None,
            amount: FoodValue::weight(16.0, WeightUnit::G),
        }],
        density: None,
    }
}

/// Weight and volume food (density 80 g per cup) with a volume-prefixed size
pub fn oats() -> Food {
    Food {
        id: Uuid::from_u128(2),
        name: "Rolled Oats".to_string(),
        emoji: "🌾".to_string(),
        detail: None,
        brand: None,
        amount: FoodValue::weight(40.0, WeightUnit::G),
        nutrition: Nutrition {
            energy: 150.0,
            carb: 27.0,
            fat: 3.0,
            protein: 5.0,
            fiber: 4.0,
            ..Default::default()
        },
        serving: Some(FoodValue::volume(0.5, VolumeExplicitUnit::CupUsCustomary)),
        default_quantity: None,
        sizes: vec![
            FoodSize {
                id: "scoop".to_string(),
                name: "scoop".to_string(),
                quantity: 1.0,
                volume_prefix: None,
                amount: FoodValue::weight(30.0, WeightUnit::G),
            },
            FoodSize {
                id: "packed".to_string(),
                name: "packed".to_string(),
                quantity: 1.0,
                volume_prefix: Some(VolumeExplicitUnit::CupUsCustomary),
                amount: FoodValue::weight(100.0, WeightUnit::G),
            },
        ],
        density: Some(Density {
            weight: 80.0,
            weight_unit: WeightUnit::G,
            volume: 1.0,
            volume_unit: VolumeExplicitUnit::CupUsCustomary,
        }),
    }
}

/// Volume-only food without a density
pub fn chicken_broth() -> Food {
    Food {
        id: Uuid::from_u128(3),
        name: "Chicken Broth".to_string(),
        emoji: "🍲".to_string(),
        detail: None,
        brand: None,
        amount: FoodValue::volume(240.0, VolumeExplicitUnit::Milliliter),
        nutrition: Nutrition {
            energy: 15.0,
            carb: 1.0,
            fat: 0.5,
            protein: 1.0,
            sodium: 860.0,
            ..Default::default()
        },
        serving: None,
        default_quantity: Some(FoodValue::volume(1.0, VolumeExplicitUnit::CupUsCustomary)),
        sizes: Vec::new(),
        density: None,
    }
}

/// Collaborator with standard preferences and nothing recorded
pub fn empty_store() -> Arc<PreferenceStore> {
    Arc::new(PreferenceStore::default())
}
