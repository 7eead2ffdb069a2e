//! In-memory preference store
//!
//! Holds last-used quantities and unit preferences, and serves them to the
//! quantity engine as its [`DataCollaborator`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::models::{Food, FoodValue};
use crate::nutrition::{UserUnits, UserVolumeUnits};
use crate::quantity::{DataCollaborator, FoodQuantity};

/// Per-user data, written by the host and read by the engine
#[derive(Debug, Default)]
pub struct PreferenceStore {
    last_used: RwLock<HashMap<Uuid, FoodValue>>,
    user_units: RwLock<Option<UserUnits>>,
}

impl PreferenceStore {
    pub fn new(user_units: Option<UserUnits>) -> Self {
        Self {
            last_used: RwLock::new(HashMap::new()),
            user_units: RwLock::new(user_units),
        }
    }

    /// Remember the amount a food was last logged with
    pub fn record_last_used(&self, food_id: Uuid, value: FoodValue) {
        self.last_used
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(food_id, value);
    }

    pub fn set_user_units(&self, user_units: Option<UserUnits>) {
        *self
            .user_units
            .write()
            .unwrap_or_else(PoisonError::into_inner) = user_units;
    }

    pub fn last_used_count(&self) -> usize {
        self.last_used
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl DataCollaborator for PreferenceStore {
    fn last_used_quantity<'a>(&self, food: &'a Food) -> Option<FoodQuantity<'a>> {
        let last_used = self.last_used.read().unwrap_or_else(PoisonError::into_inner);
        let value = last_used.get(&food.id)?;

        let quantity = FoodQuantity::from_food_value(value, food);
        if quantity.is_none() {
            tracing::warn!("Stored last-used amount no longer fits '{}'", food.name);
        }
        quantity
    }

    fn user_volume_units(&self) -> UserVolumeUnits {
        self.units_or_standard().volume
    }

    fn user_units(&self) -> Option<UserUnits> {
        *self.user_units.read().unwrap_or_else(PoisonError::into_inner)
    }
}
