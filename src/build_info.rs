//! Build metadata
//!
//! `build.rs` stamps every compile with a build number and timestamp. They are
//! reported by the status tool and the startup banner.

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER_STAMP: Option<&str> = option_env!("FOODQUANT_BUILD_NUMBER");
const BUILD_TIMESTAMP_STAMP: Option<&str> = option_env!("FOODQUANT_BUILD_TIMESTAMP");

/// Package and build stamp details
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamps(BUILD_NUMBER_STAMP, BUILD_TIMESTAMP_STAMP)
    }

    /// A missing or garbled build number reads as 0
    fn from_stamps(build_number: Option<&str>, build_timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: build_number
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(0),
            build_timestamp: build_timestamp.unwrap_or("unknown"),
        }
    }

    /// "foodquant 0.1.0, build 12 (2026-10-17T09:00:00Z)"
    pub fn summary(&self) -> String {
        format!(
            "{} {}, build {} ({})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("Food Quantity Engine: {}", BuildInfo::current().summary());
}
