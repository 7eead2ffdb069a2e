//! Unit types and conversion constants
//!
//! Provides the closed set of weight and volume units a food can be measured
//! in, the concrete ("explicit") volume units user preferences resolve to,
//! and standard conversion factors.

use serde::{Deserialize, Serialize};

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per US teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per US tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per US fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per US customary cup
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per US liquid pint
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per US liquid quart
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per US liquid gallon
pub const ML_PER_GALLON: f64 = 3785.41;

/// Milliliters per metric teaspoon
pub const ML_PER_TSP_METRIC: f64 = 5.0;
/// Milliliters per metric tablespoon
pub const ML_PER_TBSP_METRIC: f64 = 15.0;
/// Milliliters per US nutrition-labeling fluid ounce
pub const ML_PER_FL_OZ_LABELING: f64 = 30.0;
/// Milliliters per imperial fluid ounce
pub const ML_PER_FL_OZ_IMPERIAL: f64 = 28.4131;
/// Milliliters per US legal cup (nutrition labeling)
pub const ML_PER_CUP_LEGAL: f64 = 240.0;
/// Milliliters per metric cup
pub const ML_PER_CUP_METRIC: f64 = 250.0;
/// Milliliters per imperial cup
pub const ML_PER_CUP_IMPERIAL: f64 = 284.131;
/// Milliliters per imperial pint
pub const ML_PER_PINT_IMPERIAL: f64 = 568.261;
/// Milliliters per imperial quart
pub const ML_PER_QUART_IMPERIAL: f64 = 1136.52;
/// Milliliters per imperial gallon
pub const ML_PER_GALLON_IMPERIAL: f64 = 4546.09;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

// ============================================================================
// Weight Units
// ============================================================================

/// Mass units. Unambiguous, so they are stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    G,
    Kg,
    Mg,
    Oz,
    Lb,
}

impl WeightUnit {
    /// Display order used when listing weight equivalents
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::G,
        WeightUnit::Kg,
        WeightUnit::Oz,
        WeightUnit::Lb,
        WeightUnit::Mg,
    ];

    /// Grams in one of this unit
    pub fn grams(&self) -> f64 {
        match self {
            WeightUnit::G => 1.0,
            WeightUnit::Kg => G_PER_KG,
            WeightUnit::Mg => G_PER_MG,
            WeightUnit::Oz => G_PER_OZ,
            WeightUnit::Lb => G_PER_LB,
        }
    }

    pub fn short_description(&self) -> &'static str {
        match self {
            WeightUnit::G => "g",
            WeightUnit::Kg => "kg",
            WeightUnit::Mg => "mg",
            WeightUnit::Oz => "oz",
            WeightUnit::Lb => "lb",
        }
    }

    /// Spelled-out plural name, accepted by [`WeightUnit::parse`]
    pub fn name(&self) -> &'static str {
        match self {
            WeightUnit::G => "grams",
            WeightUnit::Kg => "kilograms",
            WeightUnit::Mg => "milligrams",
            WeightUnit::Oz => "ounces",
            WeightUnit::Lb => "pounds",
        }
    }

    /// Parse a weight unit name or abbreviation
    pub fn parse(unit: &str) -> Option<Self> {
        let lower = unit.to_lowercase();

        match lower.trim() {
            "g" | "gram" | "grams" => Some(WeightUnit::G),
            "mg" | "milligram" | "milligrams" => Some(WeightUnit::Mg),
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Oz),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lb),
            _ => None,
        }
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Abstract volume units, as picked by a user.
///
/// The same abstract unit means different amounts in different systems
/// (a US cup is not a metric cup), so these are resolved to a
/// [`VolumeExplicitUnit`] through [`UserVolumeUnits`] before any math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
    Tablespoon,
    Teaspoon,
    Milliliter,
    Liter,
    Mug,
}

impl VolumeUnit {
    /// Display order used when listing volume equivalents
    pub const ALL: [VolumeUnit; 10] = [
        VolumeUnit::Cup,
        VolumeUnit::Tablespoon,
        VolumeUnit::Teaspoon,
        VolumeUnit::FluidOunce,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
        VolumeUnit::Mug,
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
    ];

    pub fn short_description(&self) -> &'static str {
        match self {
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Cup => "cup",
            VolumeUnit::FluidOunce => "fl oz",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::Teaspoon => "tsp",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Liter => "L",
            VolumeUnit::Mug => "mug",
        }
    }

    /// Spelled-out plural name, accepted by [`VolumeUnit::parse`]
    pub fn name(&self) -> &'static str {
        match self {
            VolumeUnit::Gallon => "gallons",
            VolumeUnit::Quart => "quarts",
            VolumeUnit::Pint => "pints",
            VolumeUnit::Cup => "cups",
            VolumeUnit::FluidOunce => "fluid ounces",
            VolumeUnit::Tablespoon => "tablespoons",
            VolumeUnit::Teaspoon => "teaspoons",
            VolumeUnit::Milliliter => "milliliters",
            VolumeUnit::Liter => "liters",
            VolumeUnit::Mug => "mugs",
        }
    }

    /// Parse a volume unit name or abbreviation
    pub fn parse(unit: &str) -> Option<Self> {
        let lower = unit.to_lowercase();

        match lower.trim() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(VolumeUnit::Milliliter)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Some(VolumeUnit::Liter),
            "tsp" | "teaspoon" | "teaspoons" => Some(VolumeUnit::Teaspoon),
            "tbsp" | "tablespoon" | "tablespoons" => Some(VolumeUnit::Tablespoon),
            "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(VolumeUnit::FluidOunce),
            "cup" | "cups" => Some(VolumeUnit::Cup),
            "pt" | "pint" | "pints" => Some(VolumeUnit::Pint),
            "qt" | "quart" | "quarts" => Some(VolumeUnit::Quart),
            "gal" | "gallon" | "gallons" => Some(VolumeUnit::Gallon),
            "mug" | "mugs" => Some(VolumeUnit::Mug),
            _ => None,
        }
    }
}

/// Concrete volume units with a fixed size in milliliters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeExplicitUnit {
    GallonUsLiquid,
    GallonImperial,
    QuartUsLiquid,
    QuartImperial,
    PintUsLiquid,
    PintImperial,
    CupUsCustomary,
    CupUsLegal,
    CupMetric,
    CupImperial,
    FluidOunceUsCustomary,
    FluidOunceUsNutritionLabeling,
    FluidOunceImperial,
    TablespoonUs,
    TablespoonMetric,
    TeaspoonUs,
    TeaspoonMetric,
    Milliliter,
    Liter,
}

impl VolumeExplicitUnit {
    /// Milliliters in one of this unit
    pub fn ml(&self) -> f64 {
        use VolumeExplicitUnit::*;
        match self {
            GallonUsLiquid => ML_PER_GALLON,
            GallonImperial => ML_PER_GALLON_IMPERIAL,
            QuartUsLiquid => ML_PER_QUART,
            QuartImperial => ML_PER_QUART_IMPERIAL,
            PintUsLiquid => ML_PER_PINT,
            PintImperial => ML_PER_PINT_IMPERIAL,
            CupUsCustomary => ML_PER_CUP,
            CupUsLegal => ML_PER_CUP_LEGAL,
            CupMetric => ML_PER_CUP_METRIC,
            CupImperial => ML_PER_CUP_IMPERIAL,
            FluidOunceUsCustomary => ML_PER_FL_OZ,
            FluidOunceUsNutritionLabeling => ML_PER_FL_OZ_LABELING,
            FluidOunceImperial => ML_PER_FL_OZ_IMPERIAL,
            TablespoonUs => ML_PER_TBSP,
            TablespoonMetric => ML_PER_TBSP_METRIC,
            TeaspoonUs => ML_PER_TSP,
            TeaspoonMetric => ML_PER_TSP_METRIC,
            Milliliter => 1.0,
            Liter => ML_PER_LITER,
        }
    }

    /// The abstract unit this explicit unit is a flavor of
    pub fn volume_unit(&self) -> VolumeUnit {
        use VolumeExplicitUnit::*;
        match self {
            GallonUsLiquid | GallonImperial => VolumeUnit::Gallon,
            QuartUsLiquid | QuartImperial => VolumeUnit::Quart,
            PintUsLiquid | PintImperial => VolumeUnit::Pint,
            CupUsCustomary | CupUsLegal | CupMetric | CupImperial => VolumeUnit::Cup,
            FluidOunceUsCustomary | FluidOunceUsNutritionLabeling | FluidOunceImperial => {
                VolumeUnit::FluidOunce
            }
            TablespoonUs | TablespoonMetric => VolumeUnit::Tablespoon,
            TeaspoonUs | TeaspoonMetric => VolumeUnit::Teaspoon,
            Milliliter => VolumeUnit::Milliliter,
            Liter => VolumeUnit::Liter,
        }
    }

    pub fn short_description(&self) -> &'static str {
        self.volume_unit().short_description()
    }
}

// ============================================================================
// User Preferences
// ============================================================================

/// Which concrete unit a user means by each abstract volume unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVolumeUnits {
    pub gallon: VolumeExplicitUnit,
    pub quart: VolumeExplicitUnit,
    pub pint: VolumeExplicitUnit,
    pub cup: VolumeExplicitUnit,
    pub fluid_ounce: VolumeExplicitUnit,
    pub tablespoon: VolumeExplicitUnit,
    pub teaspoon: VolumeExplicitUnit,
}

impl UserVolumeUnits {
    /// US customary measures
    pub fn standard() -> Self {
        Self {
            gallon: VolumeExplicitUnit::GallonUsLiquid,
            quart: VolumeExplicitUnit::QuartUsLiquid,
            pint: VolumeExplicitUnit::PintUsLiquid,
            cup: VolumeExplicitUnit::CupUsCustomary,
            fluid_ounce: VolumeExplicitUnit::FluidOunceUsCustomary,
            tablespoon: VolumeExplicitUnit::TablespoonUs,
            teaspoon: VolumeExplicitUnit::TeaspoonUs,
        }
    }

    /// Resolve an abstract volume unit to the user's concrete unit.
    ///
    /// Returns None for units without a mapping (mug), and for preferences
    /// that name a unit of the wrong kind (e.g. a teaspoon stored as `cup`).
    pub fn volume_explicit_unit(&self, unit: VolumeUnit) -> Option<VolumeExplicitUnit> {
        let explicit = match unit {
            VolumeUnit::Gallon => self.gallon,
            VolumeUnit::Quart => self.quart,
            VolumeUnit::Pint => self.pint,
            VolumeUnit::Cup => self.cup,
            VolumeUnit::FluidOunce => self.fluid_ounce,
            VolumeUnit::Tablespoon => self.tablespoon,
            VolumeUnit::Teaspoon => self.teaspoon,
            VolumeUnit::Milliliter => VolumeExplicitUnit::Milliliter,
            VolumeUnit::Liter => VolumeExplicitUnit::Liter,
            VolumeUnit::Mug => return None,
        };

        if explicit.volume_unit() != unit {
            tracing::warn!(
                "Volume preference for {:?} resolves to {:?}; ignoring it",
                unit,
                explicit
            );
            return None;
        }
        Some(explicit)
    }
}

impl Default for UserVolumeUnits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Energy display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert an amount in kilocalories to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }
}

/// A user's broader unit preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserUnits {
    #[serde(default)]
    pub volume: UserVolumeUnits,
    #[serde(default)]
    pub energy: EnergyUnit,
}

impl UserUnits {
    pub fn standard() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_units() {
        assert_eq!(WeightUnit::parse("g"), Some(WeightUnit::G));
        assert_eq!(WeightUnit::parse("Grams"), Some(WeightUnit::G));
        assert_eq!(WeightUnit::parse("oz"), Some(WeightUnit::Oz));
        assert_eq!(WeightUnit::parse("lbs"), Some(WeightUnit::Lb));
        assert_eq!(WeightUnit::parse("tbsp"), None);
    }

    #[test]
    fn test_parse_volume_units() {
        assert_eq!(VolumeUnit::parse("ml"), Some(VolumeUnit::Milliliter));
        assert_eq!(VolumeUnit::parse(" Cups "), Some(VolumeUnit::Cup));
        assert_eq!(VolumeUnit::parse("fl oz"), Some(VolumeUnit::FluidOunce));
        assert_eq!(VolumeUnit::parse("g"), None);
    }

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(WeightUnit::G.grams(), 1.0);
        assert_eq!(WeightUnit::Oz.grams(), G_PER_OZ);
        assert_eq!(WeightUnit::Lb.grams(), G_PER_LB);
    }

    #[test]
    fn test_explicit_units_map_back_to_their_abstract_unit() {
        let standard = UserVolumeUnits::standard();
        for unit in VolumeUnit::ALL {
            if let Some(explicit) = standard.volume_explicit_unit(unit) {
                assert_eq!(explicit.volume_unit(), unit);
            }
        }
    }

    #[test]
    fn test_mug_has_no_explicit_unit() {
        assert_eq!(UserVolumeUnits::standard().volume_explicit_unit(VolumeUnit::Mug), None);
    }

    #[test]
    fn test_mismatched_preference_is_ignored() {
        let mut units = UserVolumeUnits::standard();
        units.cup = VolumeExplicitUnit::TeaspoonUs;
        assert_eq!(units.volume_explicit_unit(VolumeUnit::Cup), None);
    }

    #[test]
    fn test_metric_preferences() {
        let mut units = UserVolumeUnits::standard();
        units.cup = VolumeExplicitUnit::CupMetric;
        let cup = units.volume_explicit_unit(VolumeUnit::Cup).unwrap();
        assert_eq!(cup.ml(), 250.0);
    }

    #[test]
    fn test_energy_conversion() {
        assert_eq!(EnergyUnit::Kcal.from_kcal(100.0), 100.0);
        assert!((EnergyUnit::Kj.from_kcal(100.0) - 418.4).abs() < 0.001);
    }
}
