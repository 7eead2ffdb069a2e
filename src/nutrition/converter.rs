//! Unit and amount text handling
//!
//! Parses the unit and amount strings callers send in, and formats amounts
//! back for display.

use super::units::{VolumeUnit, WeightUnit};
use crate::models::Food;
use crate::quantity::{FoodQuantityUnit, QuantityError, QuantityResult};

/// Parse a unit string in the context of a food
///
/// Examples:
/// - "g", "grams", "oz" -> weight
/// - "cup", "tbsp", "ml" -> volume
/// - "serving" -> serving
/// - "scoop" (a size id or name of the food) -> size
/// - "tbsp packed" (volume + volume-prefixed size name) -> size with prefix
/// - "size:packed:tbsp" -> size with prefix, by id
///
/// Sizes are matched before standard units, so a food that declares its own
/// "tbsp" size gets that size rather than the volume unit.
pub fn parse_unit(unit_str: &str, food: &Food) -> QuantityResult<FoodQuantityUnit> {
    let lower = unit_str.trim().to_lowercase();
    let invalid = || QuantityError::invalid_unit(unit_str.trim(), food);

    if lower.is_empty() {
        return Err(invalid());
    }

    if lower == "serving" || lower == "servings" {
        return Ok(FoodQuantityUnit::Serving);
    }

    // Explicit "size:<id>" or "size:<id>:<volume>"
    if let Some(rest) = lower.strip_prefix("size:") {
        let mut parts = rest.splitn(2, ':');
        let id = parts.next().unwrap_or_default().trim();
        let size = food
            .sizes
            .iter()
            .find(|s| s.id.to_lowercase() == id)
            .ok_or_else(invalid)?;
        let prefix = match parts.next() {
            Some(volume) => Some(VolumeUnit::parse(volume).ok_or_else(invalid)?),
            None => None,
        };
        return Ok(FoodQuantityUnit::Size(size.id.clone(), prefix));
    }

    if let Some(size) = food
        .sizes
        .iter()
        .find(|s| s.id.to_lowercase() == lower || s.name.to_lowercase() == lower)
    {
        return Ok(FoodQuantityUnit::Size(size.id.clone(), None));
    }

    // "<volume> <size name>" for volume-prefixed sizes
    for size in food.sizes.iter().filter(|s| s.is_volume_prefixed()) {
        let name = size.name.to_lowercase();
        if let Some(volume) = lower.strip_suffix(name.as_str()) {
            if let Some(volume) = VolumeUnit::parse(volume) {
                return Ok(FoodQuantityUnit::Size(size.id.clone(), Some(volume)));
            }
        }
    }

    if let Some(weight) = WeightUnit::parse(&lower) {
        return Ok(FoodQuantityUnit::Weight(weight));
    }

    if let Some(volume) = VolumeUnit::parse(&lower) {
        return Ok(FoodQuantityUnit::Volume(volume));
    }

    Err(invalid())
}

/// Unit text that [`parse_unit`] maps back to `unit` for this food.
///
/// Sizes use the explicit `size:` form. Standard units fall back to their
/// spelled-out name when a size of the food shadows the abbreviation.
pub fn unit_text(unit: &FoodQuantityUnit, food: &Food) -> String {
    let shadowed = |text: &str| {
        food.sizes
            .iter()
            .any(|s| s.id.eq_ignore_ascii_case(text) || s.name.eq_ignore_ascii_case(text))
    };
    let pick = |short: &'static str, name: &'static str| {
        if shadowed(short) { name } else { short }.to_string()
    };

    match unit {
        FoodQuantityUnit::Weight(weight) => pick(weight.short_description(), weight.name()),
        FoodQuantityUnit::Volume(volume) => pick(volume.short_description(), volume.name()),
        FoodQuantityUnit::Serving => "serving".to_string(),
        FoodQuantityUnit::Size(id, None) => format!("size:{}", id),
        FoodQuantityUnit::Size(id, Some(prefix)) => {
            format!("size:{}:{}", id, prefix.short_description())
        }
    }
}

/// Parse an entered amount
pub fn parse_amount(text: &str) -> QuantityResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QuantityError::ParseFailure(text.to_string())),
    }
}

/// Format an amount for display: at most two decimals, no trailing zeros
pub fn clean_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{oats, peanut_butter};

    #[test]
    fn test_parse_unit_standard_units() {
        let food = oats();
        assert_eq!(
            parse_unit("g", &food).unwrap(),
            FoodQuantityUnit::Weight(WeightUnit::G)
        );
        assert_eq!(
            parse_unit("Cups", &food).unwrap(),
            FoodQuantityUnit::Volume(VolumeUnit::Cup)
        );
        assert_eq!(parse_unit("servings", &food).unwrap(), FoodQuantityUnit::Serving);
    }

    #[test]
    fn test_parse_unit_prefers_food_sizes() {
        let food = peanut_butter();
        assert_eq!(
            parse_unit("tbsp", &food).unwrap(),
            FoodQuantityUnit::Size("tbsp".to_string(), None)
        );
    }

    #[test]
    fn test_parse_unit_volume_prefixed_size() {
        let food = oats();
        assert_eq!(
            parse_unit("tbsp packed", &food).unwrap(),
            FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Tablespoon))
        );
        assert_eq!(
            parse_unit("size:packed:cup", &food).unwrap(),
            FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Cup))
        );
        assert_eq!(
            parse_unit("size:scoop", &food).unwrap(),
            FoodQuantityUnit::Size("scoop".to_string(), None)
        );
    }

    #[test]
    fn test_parse_unit_unknown() {
        let food = oats();
        assert!(matches!(
            parse_unit("handful", &food),
            Err(QuantityError::InvalidUnitForFood { .. })
        ));
        assert!(parse_unit("size:ladle", &food).is_err());
        assert!(parse_unit("   ", &food).is_err());
    }

    #[test]
    fn test_unit_text_parses_back() {
        use crate::nutrition::UserVolumeUnits;
        use crate::quantity::legal_units;

        for food in [oats(), peanut_butter()] {
            for unit in legal_units(&food, &UserVolumeUnits::standard()) {
                let text = unit_text(&unit, &food);
                assert_eq!(parse_unit(&text, &food).unwrap(), unit, "{}", text);
            }
        }
        assert_eq!(
            unit_text(&FoodQuantityUnit::Size("packed".into(), Some(VolumeUnit::Cup)), &oats()),
            "size:packed:cup"
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2"), Ok(2.0));
        assert_eq!(parse_amount(" 1.5 "), Ok(1.5));
        assert_eq!(parse_amount("2."), Ok(2.0));
        assert_eq!(
            parse_amount("abc"),
            Err(QuantityError::ParseFailure("abc".to_string()))
        );
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_clean_amount() {
        assert_eq!(clean_amount(2.0), "2");
        assert_eq!(clean_amount(0.5), "0.5");
        assert_eq!(clean_amount(1.333), "1.33");
        assert_eq!(clean_amount(100.0), "100");
        assert_eq!(clean_amount(0.0), "0");
    }
}
