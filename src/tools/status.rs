//! Kitchen Units Status Tool
//!
//! Provides runtime status information and usage instructions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::config::Config;
use crate::service_info::ServiceInfo;

/// Unit conversion instructions for AI assistants
pub const UNIT_INSTRUCTIONS: &str = r#"
# Kitchen Units Instructions

## Supported Units

| Category | Units | Base |
|----------|-------|------|
| **weight** | g, kg, oz, lb | grams |
| **volume** | ml, l, fl-oz, cup, pint, quart, gallon | milliliters |
| **spoon** | tsp, tbsp | teaspoons |
| **count** | piece | piece |
| **freeText** | free-text | none |

Common spellings are accepted: "grams", "lbs", "fl oz", "Tablespoons", "each".
An empty unit means free text ("salt, to taste").

## Rules

- Conversion only works **within a category**. Cups cannot become grams:
  there is no density table. Spoons are their own category, so tbsp -> ml
  is also refused.
- Free text never converts to anything.
- Errors are input problems. Show the message to the user; retrying with
  the same units will fail the same way.

## Tools

- `are_units_compatible(from_unit, to_unit)` - check before converting
- `convert_unit(quantity, from_unit, to_unit)` - `result` is exact, `display` is rounded
- `convert_price_per_unit(price_per_unit, from_unit, to_unit)` - e.g. price per kg -> price per g
- `format_unit(unit)` - plural display name
- `round_to_precision(value, precision)` - display rounding, half away from zero
- `list_units` - the full catalog with factors
- `scale_recipe(recipe, desired_servings)` - rescale an ingredient list
- `build_shopping_list(recipes)` - merge ingredients across recipes
- `compare_prices(offers, target_unit)` - rank package offers by unit price

## Precision

Always pass `result` fields, never `display` strings, into further
conversions. Rounding is for showing numbers to people only.

## Shopping Lists

Lines for the same food are added together when their units are
compatible, totalled in the first unit seen. "2 cups flour" and
"100 g flour" stay as two entries.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct KitchenStatus {
    /// Package, configuration, and catalog
    pub service: ServiceInfo,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    service: ServiceInfo,
}

impl StatusTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            service: ServiceInfo::new(config),
        }
    }

    pub fn get_status(&self) -> KitchenStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        KitchenStatus {
            service: self.service.clone(),
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new(&Config::default());
        let status = tracker.get_status();
        assert_eq!(status.service, ServiceInfo::new(&Config::default()));
        assert_eq!(status.service.display_precision, 2);
        assert_eq!(status.service.units_available, 15);
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_instructions_mention_every_tool() {
        for tool in [
            "are_units_compatible",
            "convert_unit",
            "convert_price_per_unit",
            "format_unit",
            "round_to_precision",
            "list_units",
            "scale_recipe",
            "build_shopping_list",
            "compare_prices",
        ] {
            assert!(UNIT_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
