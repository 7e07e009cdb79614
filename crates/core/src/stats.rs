//! Occupancy and unit-type aggregation.
//!
//! Pure computation over an in-memory collection of unit snapshots scoped to
//! a tower or a floor. The caller joins status and plan data; this module
//! only groups and counts.

use std::collections::BTreeMap;

use serde::Serialize;

/// What the aggregator needs to know about one unit: its joined status name
/// and, if a plan is mapped, the plan's type label and area.
#[derive(Debug, Clone)]
pub struct UnitSnapshot {
    /// Lowercase-insensitive status name (e.g. "Available"). `None` when the
    /// join produced no status row; such units count only toward the total.
    pub status_name: Option<String>,
    pub plan_type: Option<String>,
    pub plan_area: Option<i32>,
}

/// Aggregated occupancy statistics for a set of units.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UnitStats {
    pub total_units: u32,
    pub booked_units: u32,
    pub available_units: u32,
    /// Units whose status is neither "booked" nor "available" (or missing).
    pub other_units: u32,
    /// Unit-plan type label -> number of units of that type.
    pub unit_types: BTreeMap<String, u32>,
    /// Unit-plan type label -> area of the first unit of that type
    /// encountered. Not an aggregate; preserved from the original listing
    /// behaviour so the storefront keeps rendering identical figures.
    pub unit_areas: BTreeMap<String, i32>,
}

/// Compute occupancy and type statistics for the given units.
///
/// Status comparison is case-insensitive. A unit without a joined status is
/// tallied as "other" rather than failing the whole request.
pub fn aggregate(units: &[UnitSnapshot]) -> UnitStats {
    let mut stats = UnitStats::default();

    for unit in units {
        stats.total_units += 1;

        match unit.status_name.as_deref() {
            Some(name) if name.eq_ignore_ascii_case("booked") => stats.booked_units += 1,
            Some(name) if name.eq_ignore_ascii_case("available") => stats.available_units += 1,
            _ => stats.other_units += 1,
        }

        if let Some(plan_type) = &unit.plan_type {
            *stats.unit_types.entry(plan_type.clone()).or_insert(0) += 1;
            if let Some(area) = unit.plan_area {
                stats.unit_areas.entry(plan_type.clone()).or_insert(area);
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(status: Option<&str>, plan: Option<(&str, i32)>) -> UnitSnapshot {
        UnitSnapshot {
            status_name: status.map(str::to_string),
            plan_type: plan.map(|(t, _)| t.to_string()),
            plan_area: plan.map(|(_, a)| a),
        }
    }

    #[test]
    fn test_counts_partition_the_total() {
        let units = vec![
            unit(Some("Available"), Some(("2BHK", 900))),
            unit(Some("BOOKED"), Some(("2BHK", 950))),
            unit(Some("Hold"), Some(("3BHK", 1200))),
            unit(Some("available"), None),
            unit(None, Some(("3BHK", 1250))),
        ];
        let stats = aggregate(&units);
        assert_eq!(stats.total_units, 5);
        assert_eq!(stats.booked_units, 1);
        assert_eq!(stats.available_units, 2);
        assert_eq!(stats.other_units, 2);
        assert_eq!(
            stats.total_units,
            stats.booked_units + stats.available_units + stats.other_units
        );
    }

    #[test]
    fn test_type_counts() {
        let units = vec![
            unit(Some("Available"), Some(("2BHK", 900))),
            unit(Some("Available"), Some(("2BHK", 950))),
            unit(Some("Booked"), Some(("3BHK", 1200))),
        ];
        let stats = aggregate(&units);
        assert_eq!(stats.unit_types["2BHK"], 2);
        assert_eq!(stats.unit_types["3BHK"], 1);
    }

    #[test]
    fn test_area_is_first_encountered_not_aggregated() {
        let units = vec![
            unit(Some("Available"), Some(("2BHK", 900))),
            unit(Some("Available"), Some(("2BHK", 1800))),
        ];
        let stats = aggregate(&units);
        // First unit's area wins; later areas for the same type are ignored.
        assert_eq!(stats.unit_areas["2BHK"], 900);
    }

    #[test]
    fn test_missing_status_does_not_panic() {
        let stats = aggregate(&[unit(None, None)]);
        assert_eq!(stats.total_units, 1);
        assert_eq!(stats.other_units, 1);
        assert!(stats.unit_types.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_units, 0);
        assert!(stats.unit_areas.is_empty());
    }
}
