//! Food Value model
//!
//! The canonical, storage-ready representation of an amount of food.

use serde::{Deserialize, Serialize};

use crate::nutrition::{VolumeExplicitUnit, WeightUnit};

/// Category of unit an amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Weight,
    Volume,
    Serving,
    Size,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Weight => "weight",
            UnitType::Volume => "volume",
            UnitType::Serving => "serving",
            UnitType::Size => "size",
        }
    }

    /// Header text shown above an amount in this unit type
    pub fn description(&self) -> &'static str {
        match self {
            UnitType::Weight => "Weight",
            UnitType::Volume => "Volume",
            UnitType::Serving => "Serving",
            UnitType::Size => "Size",
        }
    }
}

/// An amount with enough unit information to rebuild the unit it was
/// entered in, without re-resolving any user preference.
///
/// At most one of `weight_unit`, `volume_explicit_unit` and `size_unit_id`
/// is set, and it matches `unit_type`. Servings set none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodValue {
    pub value: f64,
    pub unit_type: UnitType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_explicit_unit: Option<VolumeExplicitUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_unit_volume_prefix_explicit_unit: Option<VolumeExplicitUnit>,
}

impl FoodValue {
    pub fn weight(value: f64, unit: WeightUnit) -> Self {
        Self {
            value,
            unit_type: UnitType::Weight,
            weight_unit: Some(unit),
            volume_explicit_unit: None,
            size_unit_id: None,
            size_unit_volume_prefix_explicit_unit: None,
        }
    }

    pub fn volume(value: f64, unit: VolumeExplicitUnit) -> Self {
        Self {
            value,
            unit_type: UnitType::Volume,
            weight_unit: None,
            volume_explicit_unit: Some(unit),
            size_unit_id: None,
            size_unit_volume_prefix_explicit_unit: None,
        }
    }

    pub fn serving(value: f64) -> Self {
        Self {
            value,
            unit_type: UnitType::Serving,
            weight_unit: None,
            volume_explicit_unit: None,
            size_unit_id: None,
            size_unit_volume_prefix_explicit_unit: None,
        }
    }

    pub fn size(
        value: f64,
        size_id: impl Into<String>,
        volume_prefix: Option<VolumeExplicitUnit>,
    ) -> Self {
        Self {
            value,
            unit_type: UnitType::Size,
            weight_unit: None,
            volume_explicit_unit: None,
            size_unit_id: Some(size_id.into()),
            size_unit_volume_prefix_explicit_unit: volume_prefix,
        }
    }

    /// The same unit with a different value
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// Check that the populated unit fields agree with `unit_type`
    pub fn is_consistent(&self) -> bool {
        let populated = (
            self.weight_unit.is_some(),
            self.volume_explicit_unit.is_some(),
            self.size_unit_id.is_some(),
        );
        let prefix_ok = self.size_unit_volume_prefix_explicit_unit.is_none()
            || self.unit_type == UnitType::Size;

        prefix_ok
            && match self.unit_type {
                UnitType::Weight => populated == (true, false, false),
                UnitType::Volume => populated == (false, true, false),
                UnitType::Serving => populated == (false, false, false),
                UnitType::Size => populated == (false, false, true),
            }
    }

    /// True when both values are in exactly the same unit
    pub fn has_same_unit(&self, other: &FoodValue) -> bool {
        self.unit_type == other.unit_type
            && self.weight_unit == other.weight_unit
            && self.volume_explicit_unit == other.volume_explicit_unit
            && self.size_unit_id == other.size_unit_id
            && self.size_unit_volume_prefix_explicit_unit
                == other.size_unit_volume_prefix_explicit_unit
    }
}
