//! Status Tool
//!
//! Provides runtime status information about the quantity service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// How to write amounts and units, for AI assistants
pub const UNIT_INSTRUCTIONS: &str = r#"
# Food Quantity Unit Guide

Every quantity tool takes a food (its id or exact name), an amount and a unit.
Units are only meaningful for the food they are used with.

## Unit text

| Kind    | Examples                                   | Needs                          |
|---------|--------------------------------------------|--------------------------------|
| Weight  | `g`, `kg`, `mg`, `oz`, `lb`, `grams`       | weight data or a density       |
| Volume  | `cup`, `tbsp`, `tsp`, `fl oz`, `pt`, `qt`, `gal`, `mL`, `L` | volume data or a density |
| Serving | `serving`, `servings`                      | a declared serving             |
| Size    | `scoop`, `size:scoop`                      | a size the food declares       |
| Prefixed size | `cup packed`, `size:packed:tbsp`     | a volume-prefixed size         |

A food's own sizes win over standard units: if a food declares a size called
"tbsp", then `tbsp` means that size. Use `tablespoons` for the volume unit.

Call `food_units` to get the exact unit text every legal unit of a food uses.

## Volume preferences

Abstract volume units (cup, tbsp, ...) are stored as the user's concrete unit,
US customary by default. A unit the preferences cannot resolve (e.g. `mug`)
is rejected as invalid for the food.

## Typical flow

1. `list_foods` to find the food
2. `default_quantity` for the amount to start from
3. `equivalent_quantities` to show the same amount in other units
4. `assemble_meal_item` to build the item to log
5. `record_last_used_quantity` once the item is saved
"#;

/// Quantity service status information
#[derive(Debug, Clone, Serialize)]
pub struct QuantityStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub catalog_path: String,
    pub food_count: usize,
    pub last_used_count: usize,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for the service
pub struct StatusTracker {
    start_time: Instant,
    catalog_path: PathBuf,
}

impl StatusTracker {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            catalog_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, food_count: usize, last_used_count: usize) -> QuantityStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        QuantityStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_path: self.catalog_path.display().to_string(),
            food_count,
            last_used_count,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
