//! Data collaborator interface
//!
//! Read-only access to the per-user data the engine needs. Passed in
//! explicitly wherever it is used.

use super::food_quantity::FoodQuantity;
use crate::models::Food;
use crate::nutrition::{UserUnits, UserVolumeUnits};

/// Source of last-used quantities and unit preferences.
///
/// Implementations must tolerate concurrent readers; the engine never
/// writes through this interface.
pub trait DataCollaborator: Send + Sync {
    /// The quantity the user last logged this food with
    fn last_used_quantity<'a>(&self, food: &'a Food) -> Option<FoodQuantity<'a>>;

    fn user_volume_units(&self) -> UserVolumeUnits;

    /// Broader unit preferences, if the user has any
    fn user_units(&self) -> Option<UserUnits>;

    /// User units, or the standard set when none are stored
    fn units_or_standard(&self) -> UserUnits {
        self.user_units().unwrap_or_else(UserUnits::standard)
    }
}
