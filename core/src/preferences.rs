//! Employee shift-type and location preferences.
//!
//! Scoring only ever sees a `Preferences` value, never where it came from.
//! Any source works as long as it answers for every employee it is asked
//! about; an empty `Preferences` is a valid answer.

use crate::{
    model::Employee,
    types::{EmployeeId, LocationId, ShiftTypeId},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub preferred_shift_types: BTreeSet<ShiftTypeId>,
    #[serde(default)]
    pub preferred_locations:   BTreeSet<LocationId>,
}

impl Preferences {
    pub fn new(
        shift_types: impl IntoIterator<Item = ShiftTypeId>,
        locations: impl IntoIterator<Item = LocationId>,
    ) -> Self {
        Self {
            preferred_shift_types: shift_types.into_iter().collect(),
            preferred_locations:   locations.into_iter().collect(),
        }
    }

    pub fn prefers_shift_type(&self, id: ShiftTypeId) -> bool {
        self.preferred_shift_types.contains(&id)
    }

    pub fn prefers_location(&self, id: LocationId) -> bool {
        self.preferred_locations.contains(&id)
    }
}

/// Source of preferences for the scoring functions.
pub trait PreferenceLookup: Send + Sync {
    fn preferences_of(&self, employee: &Employee) -> Preferences;
}

impl<F> PreferenceLookup for F
where
    F: Fn(&Employee) -> Preferences + Send + Sync,
{
    fn preferences_of(&self, employee: &Employee) -> Preferences {
        self(employee)
    }
}

/// Same answer for everyone: shift types 1 and 2, location 1.
/// Stands in until a real preference store exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPreferences;

pub const PLACEHOLDER_SHIFT_TYPES: [ShiftTypeId; 2] = [1, 2];
pub const PLACEHOLDER_LOCATIONS: [LocationId; 1] = [1];

impl PreferenceLookup for PlaceholderPreferences {
    fn preferences_of(&self, _employee: &Employee) -> Preferences {
        Preferences::new(PLACEHOLDER_SHIFT_TYPES, PLACEHOLDER_LOCATIONS)
    }
}

/// One row of a preference table, as stored in `preferences.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    pub employee_id: EmployeeId,
    #[serde(flatten)]
    pub preferences: Preferences,
}

/// Table-backed lookup. Employees without a row get empty preferences.
#[derive(Debug, Clone, Default)]
pub struct StaticPreferences {
    table: HashMap<EmployeeId, Preferences>,
}

impl StaticPreferences {
    pub fn new(records: impl IntoIterator<Item = PreferenceRecord>) -> Self {
        let mut table = HashMap::new();
        for record in records {
            if table.insert(record.employee_id, record.preferences).is_some() {
                log::warn!(
                    "preferences: duplicate row for employee {}; keeping the last one",
                    record.employee_id
                );
            }
        }
        Self { table }
    }
}

impl PreferenceLookup for StaticPreferences {
    fn preferences_of(&self, employee: &Employee) -> Preferences {
        self.table.get(&employee.id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_identical_for_everyone() {
        let a = PlaceholderPreferences.preferences_of(&Employee::new(1, 40));
        let b = PlaceholderPreferences.preferences_of(&Employee::new(2, 20));
        assert_eq!(a, b);
        assert!(a.prefers_shift_type(1) && a.prefers_shift_type(2));
        assert!(!a.prefers_shift_type(3));
        assert!(a.prefers_location(1));
        assert!(!a.prefers_location(2));
    }

    #[test]
    fn static_table_falls_back_to_empty() {
        let json = r#"[
            { "employeeId": 1, "preferredShiftTypes": [3], "preferredLocations": [4, 5] }
        ]"#;
        let records: Vec<PreferenceRecord> = serde_json::from_str(json).unwrap();
        let lookup = StaticPreferences::new(records);

        let known = lookup.preferences_of(&Employee::new(1, 40));
        assert!(known.prefers_shift_type(3));
        assert!(known.prefers_location(5));

        let unknown = lookup.preferences_of(&Employee::new(2, 40));
        assert_eq!(unknown, Preferences::default());
    }

    #[test]
    fn closures_are_lookups() {
        let lookup = |e: &Employee| {
            if e.id == 1 { Preferences::new([7], []) } else { Preferences::default() }
        };
        assert!(lookup.preferences_of(&Employee::new(1, 40)).prefers_shift_type(7));
        assert!(lookup.preferences_of(&Employee::new(2, 40)).preferred_shift_types.is_empty());
    }
}
