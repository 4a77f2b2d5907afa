//! Synthetic planning scenarios.
//!
//! Builds a reproducible roster, calendar of open shifts, pre-existing
//! bookings and vacation requests from a single seed. Used by the
//! plan-runner tool and by tests that need realistic volume.

use crate::{
    model::{
        AssignmentStatus, Employee, EmployeeShift, Location, PlanningInput, Shift, ShiftType,
        VacationRequest, VacationStatus,
    },
    rng::{ScenarioRng, ScenarioStream},
};
use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Ben", "Chloe", "Dev", "Elena", "Farid", "Grace", "Hugo",
    "Iris", "Jonas", "Kira", "Luis", "Maya", "Nils", "Olga", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Brandt", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hansen",
    "Ibrahim", "Jensen", "Kowalski", "Larsen", "Moreau", "Novak", "Okafor", "Petrov",
];

const WEEKLY_HOURS: &[i32] = &[16, 24, 32, 40, 40];

/// Pre-existing bookings use ids from here up, clear of open-shift ids.
const BOOKED_SHIFT_ID_BASE: i64 = 900_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub seed:           u64,
    pub employees:      usize,
    pub days:           u32,
    pub start_date:     NaiveDate,
    pub shifts_per_day: usize,
    /// Chance that an employee already works on a given day.
    pub booking_rate:   f64,
    /// Chance that an employee has filed one vacation request.
    pub vacation_rate:  f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            seed:           42,
            employees:      12,
            days:           7,
            start_date:     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap_or_default(),
            shifts_per_day: 4,
            booking_rate:   0.15,
            vacation_rate:  0.30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub locations:   Vec<Location>,
    pub shift_types: Vec<ShiftType>,
    pub input:       PlanningInput,
}

impl Scenario {
    pub fn generate(params: &ScenarioParams) -> Self {
        let locations = vec![
            Location::new(1, "Downtown"),
            Location::new(2, "Harbor"),
            Location::new(3, "Airport"),
        ];
        let shift_types = vec![
            ShiftType::new(1, "Morning").with_window(hm(6, 0), hm(14, 0)),
            ShiftType::new(2, "Day").with_window(hm(9, 0), hm(17, 0)),
            ShiftType::new(3, "Night").with_window(hm(22, 0), hm(6, 0)),
        ];

        let employees = roster(params);
        let shifts = open_shifts(params, &locations, &shift_types);
        let existing_assignments = bookings(params, &employees, &locations, &shift_types);
        let vacation_requests = vacations(params, &employees);

        log::debug!(
            "scenario: seed={} employees={} shifts={} bookings={} vacations={}",
            params.seed,
            employees.len(),
            shifts.len(),
            existing_assignments.len(),
            vacation_requests.len()
        );

        Self {
            locations,
            shift_types,
            input: PlanningInput { employees, shifts, existing_assignments, vacation_requests },
        }
    }
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

/// Saturates at the last representable date so later offsets never map to
/// earlier days.
fn day(params: &ScenarioParams, offset: u64) -> NaiveDate {
    params
        .start_date
        .checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX)
}

fn roster(params: &ScenarioParams) -> Vec<Employee> {
    let mut rng = ScenarioRng::new(params.seed, ScenarioStream::Roster);
    (1..=params.employees as i64)
        .map(|id| {
            let first = rng.pick(FIRST_NAMES);
            let last = rng.pick(LAST_NAMES);
            let hours = *rng.pick(WEEKLY_HOURS);
            Employee::new(id, hours).with_name(first, last)
        })
        .collect()
}

fn open_shifts(params: &ScenarioParams, locations: &[Location], shift_types: &[ShiftType]) -> Vec<Shift> {
    let mut rng = ScenarioRng::new(params.seed, ScenarioStream::Calendar);
    let mut shifts = Vec::new();
    for offset in 0..u64::from(params.days) {
        let date = day(params, offset);
        for _ in 0..params.shifts_per_day {
            let id = 1 + shifts.len() as i64;
            let location = rng.pick(locations).clone();
            let shift_type = rng.pick(shift_types).clone();
            shifts.push(Shift::new(id, date, location, shift_type));
        }
    }
    shifts
}

fn bookings(
    params: &ScenarioParams,
    employees: &[Employee],
    locations: &[Location],
    shift_types: &[ShiftType],
) -> Vec<EmployeeShift> {
    let mut rng = ScenarioRng::new(params.seed, ScenarioStream::Bookings);
    let mut booked = Vec::new();
    for employee in employees {
        for offset in 0..u64::from(params.days) {
            if !rng.chance(params.booking_rate) {
                continue;
            }
            let id = BOOKED_SHIFT_ID_BASE + booked.len() as i64;
            let shift = Shift::new(
                id,
                day(params, offset),
                rng.pick(locations).clone(),
                rng.pick(shift_types).clone(),
            );
            let mut assignment = EmployeeShift::assigned(employee.clone(), shift);
            if rng.chance(0.5) {
                assignment.status = AssignmentStatus::Confirmed;
            }
            booked.push(assignment);
        }
    }
    booked
}

fn vacations(params: &ScenarioParams, employees: &[Employee]) -> Vec<VacationRequest> {
    const STATUSES: &[VacationStatus] = &[
        VacationStatus::Approved,
        VacationStatus::Approved,
        VacationStatus::Pending,
        VacationStatus::Rejected,
    ];

    let mut rng = ScenarioRng::new(params.seed, ScenarioStream::Vacations);
    let span = u64::from(params.days.max(1));
    let mut requests = Vec::new();
    for employee in employees {
        if !rng.chance(params.vacation_rate) {
            continue;
        }
        let start = rng.next_u64_below(span);
        let length = rng.next_u64_below(4);
        let mut request = VacationRequest::new(
            employee.clone(),
            day(params, start),
            day(params, start + length),
            *rng.pick(STATUSES),
        );
        request.id = Some(requests.len() as i64 + 1);
        requests.push(request);
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_planning_input;

    #[test]
    fn calendar_end_saturates_instead_of_wrapping_back() {
        let start = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();
        let params = ScenarioParams { start_date: start, days: 7, ..ScenarioParams::default() };

        assert_eq!(day(&params, 0), start);
        assert_eq!(day(&params, 2), NaiveDate::MAX);
        assert_eq!(day(&params, 5), NaiveDate::MAX);
    }

    #[test]
    fn vacations_near_calendar_end_stay_ordered() {
        let params = ScenarioParams {
            start_date:    NaiveDate::MAX.checked_sub_days(Days::new(1)).unwrap(),
            days:          7,
            employees:     30,
            vacation_rate: 1.0,
            ..ScenarioParams::default()
        };
        let scenario = Scenario::generate(&params);

        assert_eq!(scenario.input.vacation_requests.len(), 30);
        for request in &scenario.input.vacation_requests {
            assert!(request.start_date <= request.end_date, "inverted request: {request:?}");
        }
        validate_planning_input(&scenario.input).unwrap();
    }
}
