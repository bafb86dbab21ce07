//! Service description shared by the status tool, server info, and startup log

use serde::Serialize;

use crate::config::Config;
use crate::conversion::{Unit, UnitCategory};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PACKAGE: &str = env!("CARGO_PKG_NAME");

/// Catalog summary for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: UnitCategory,
    pub base_unit: Option<Unit>,
    pub unit_count: usize,
}

/// What this server is and how it is configured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub package: &'static str,
    pub version: &'static str,
    pub server_name: String,
    pub display_precision: u32,
    pub units_available: usize,
    pub categories: Vec<CategorySummary>,
}

impl ServiceInfo {
    pub fn new(config: &Config) -> Self {
        let categories = UnitCategory::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                base_unit: category.base_unit(),
                unit_count: category.members().len(),
            })
            .collect();

        Self {
            package: PACKAGE,
            version: VERSION,
            server_name: config.server_name.clone(),
            display_precision: config.display_precision,
            units_available: Unit::ALL.len(),
            categories,
        }
    }

    /// One-line description for the startup log
    pub fn summary(&self) -> String {
        format!(
            "{} v{} ({} units in {} categories, display precision {})",
            self.server_name,
            self.version,
            self.units_available,
            self.categories.len(),
            self.display_precision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_reflects_config_and_catalog() {
        let config = Config {
            display_precision: 3,
            server_name: "pantry".to_string(),
        };
        let info = ServiceInfo::new(&config);
        assert_eq!(info.package, "kitchen-units");
        assert_eq!(info.server_name, "pantry");
        assert_eq!(info.display_precision, 3);
        assert_eq!(info.units_available, 15);

        let counted: usize = info.categories.iter().map(|c| c.unit_count).sum();
        assert_eq!(counted, info.units_available);

        let volume = &info.categories[1];
        assert_eq!(volume.category, UnitCategory::Volume);
        assert_eq!(volume.base_unit, Some(Unit::Ml));
        assert_eq!(volume.unit_count, 7);
    }

    #[test]
    fn test_summary() {
        let info = ServiceInfo::new(&Config::default());
        assert_eq!(
            info.summary(),
            format!("kitchen-units v{} (15 units in 5 categories, display precision 2)", VERSION)
        );
    }
}
