//! Suitability scoring for assignments and swap partners.
//!
//! Both scores start from the configured base, apply additive adjustments
//! and are floored at 0. There is no upper clamp. Each adjustment is kept
//! on the returned `ScoreCard` so callers can see why a candidate won.

use crate::{
    availability::has_shift_on_date,
    config::ScoringConfig,
    error::PlanResult,
    model::{Employee, EmployeeShift, Shift},
    preferences::Preferences,
    types::Score,
};
use serde::{Deserialize, Serialize};

/// Score components. Penalties are stored as positive magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub base:                  Score,
    pub workload_penalty:      Score,
    pub shift_type_bonus:      Score,
    pub location_bonus:        Score,
    pub max_hours_penalty:     Score,
    pub date_conflict_penalty: Score,
    pub lighter_load_bonus:    Score,
    pub total:                 Score,
}

impl ScoreCard {
    fn raw(&self) -> Score {
        self.base - self.workload_penalty + self.shift_type_bonus + self.location_bonus
            - self.max_hours_penalty
            - self.date_conflict_penalty
            + self.lighter_load_bonus
    }

    fn finish(mut self) -> Self {
        self.total = self.raw().max(0);
        self
    }
}

/// True once one more shift would take the employee past their weekly cap.
///
/// The comparison is `workload × h > max − h`, so the check fires while the
/// employee is still one shift below the cap.
pub fn exceeds_weekly_hours(workload: u32, max_hours_per_week: i32, shift_hours: i64) -> bool {
    i64::from(workload) * shift_hours > i64::from(max_hours_per_week) - shift_hours
}

/// Score `employee` for `shift` given their current run workload.
pub fn assignment_score(
    config: &ScoringConfig,
    employee: &Employee,
    shift: &Shift,
    workload: u32,
    preferences: &Preferences,
) -> ScoreCard {
    let mut card = ScoreCard {
        base: config.base_score,
        workload_penalty: Score::from(workload) * config.workload_penalty_per_shift,
        ..ScoreCard::default()
    };

    if preferences.prefers_shift_type(shift.shift_type.id) {
        card.shift_type_bonus = config.preferred_shift_type_bonus;
    }
    if preferences.prefers_location(shift.location.id) {
        card.location_bonus = config.preferred_location_bonus;
    }
    if exceeds_weekly_hours(workload, employee.max_hours_per_week, config.assumed_shift_hours) {
        card.max_hours_penalty = config.max_hours_penalty;
    }

    card.finish()
}

/// Score `candidate` as the one to take over `shift` from `requester`.
///
/// Assignment counts are taken over all of `existing`, not just the
/// shift's week.
pub fn swap_score(
    config: &ScoringConfig,
    requester: &Employee,
    candidate: &Employee,
    shift: &Shift,
    existing: &[EmployeeShift],
    preferences: &Preferences,
) -> PlanResult<ScoreCard> {
    let date = shift.date()?;
    let mut card = ScoreCard { base: config.base_score, ..ScoreCard::default() };

    if has_shift_on_date(candidate, date, existing) {
        card.date_conflict_penalty = config.swap_date_conflict_penalty;
    }
    if preferences.prefers_shift_type(shift.shift_type.id) {
        card.shift_type_bonus = config.preferred_shift_type_bonus;
    }
    if preferences.prefers_location(shift.location.id) {
        card.location_bonus = config.preferred_location_bonus;
    }

    let requester_load = assignment_count(requester, existing);
    let candidate_load = assignment_count(candidate, existing);
    if candidate_load < requester_load {
        card.lighter_load_bonus = config.swap_lighter_load_bonus;
    }

    Ok(card.finish())
}

fn assignment_count(employee: &Employee, existing: &[EmployeeShift]) -> usize {
    existing.iter().filter(|a| a.employee.id == employee.id).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, ShiftType};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn shift(id: i64, day: u32, location: i64, shift_type: i64) -> Shift {
        Shift::new(id, d(day), Location::new(location, "L"), ShiftType::new(shift_type, "T"))
    }

    #[test]
    fn preferred_fresh_employee_beats_loaded_one() {
        let config = ScoringConfig::default();
        let s = shift(1, 10, 1, 1);
        let a = Employee::new(1, 40);
        let b = Employee::new(2, 40);
        let a_prefs = Preferences::new([1], [1]);
        let b_prefs = Preferences::default();

        let a_card = assignment_score(&config, &a, &s, 0, &a_prefs);
        let b_card = assignment_score(&config, &b, &s, 4, &b_prefs);

        assert_eq!(a_card.total, 135);
        assert_eq!(b_card.total, 80);
        assert_eq!(b_card.max_hours_penalty, 0, "4 shifts of 8h is not within one shift of 40h");
    }

    #[test]
    fn max_hours_guard_fires_one_shift_early() {
        // 40h cap, 8h shifts: 4 shifts (32h) is fine, 5 shifts (40h) trips the guard.
        assert!(!exceeds_weekly_hours(4, 40, 8));
        assert!(exceeds_weekly_hours(5, 40, 8));
        // 8h cap: any prior shift trips it.
        assert!(!exceeds_weekly_hours(0, 8, 8));
        assert!(exceeds_weekly_hours(1, 8, 8));
    }

    #[test]
    fn max_hours_penalty_applied_exactly_once() {
        let config = ScoringConfig::default();
        let s = shift(1, 10, 9, 9);
        let e = Employee::new(1, 40);

        let card = assignment_score(&config, &e, &s, 5, &Preferences::default());
        assert_eq!(card.max_hours_penalty, 50);
        assert_eq!(card.total, 100 - 25 - 50);
    }

    #[test]
    fn score_is_floored_at_zero() {
        let config = ScoringConfig::default();
        let s = shift(1, 10, 9, 9);
        let e = Employee::new(1, 16);

        let card = assignment_score(&config, &e, &s, 30, &Preferences::default());
        assert_eq!(card.total, 0);
    }

    #[test]
    fn no_upper_clamp() {
        let config = ScoringConfig { base_score: 1000, ..ScoringConfig::default() };
        let s = shift(1, 10, 1, 1);
        let card = assignment_score(&config, &Employee::new(1, 40), &s, 0, &Preferences::new([1], [1]));
        assert_eq!(card.total, 1035);
    }

    #[test]
    fn booked_swap_candidate_scores_twenty() {
        let config = ScoringConfig::default();
        let requester = Employee::new(1, 40);
        let d_emp = Employee::new(4, 40);
        let target = shift(100, 10, 9, 9);
        let other = shift(101, 10, 2, 2);
        let existing = vec![
            EmployeeShift::assigned(requester.clone(), target.clone()),
            EmployeeShift::assigned(d_emp.clone(), other),
        ];

        let card = swap_score(&config, &requester, &d_emp, &target, &existing, &Preferences::default())
            .unwrap();
        assert_eq!(card.date_conflict_penalty, 80);
        assert_eq!(card.lighter_load_bonus, 0, "equal load earns no bonus");
        assert_eq!(card.total, 20);
    }

    #[test]
    fn lighter_swap_candidate_gets_bonus() {
        let config = ScoringConfig::default();
        let requester = Employee::new(1, 40);
        let candidate = Employee::new(2, 40);
        let target = shift(100, 10, 1, 1);
        let existing = vec![EmployeeShift::assigned(requester.clone(), target.clone())];

        let card = swap_score(
            &config, &requester, &candidate, &target, &existing, &Preferences::new([1], [1]),
        )
        .unwrap();
        assert_eq!(card.total, 100 + 20 + 15 + 10);
    }

    #[test]
    fn swap_score_rejects_undated_shift() {
        let config = ScoringConfig::default();
        let mut target = shift(100, 10, 1, 1);
        target.shift_date = None;
        let e = Employee::new(1, 40);

        let err = swap_score(&config, &e, &e, &target, &[], &Preferences::default()).unwrap_err();
        assert!(err.is_validation());
    }
}
