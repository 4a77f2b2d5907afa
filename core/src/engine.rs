//! The engine facade the host application talks to.
//!
//! A `ShiftEngine` holds only configuration and the preference source.
//! Every call builds its own run state, so one engine can serve any number
//! of concurrent runs by shared reference.

use crate::{
    config::{EngineConfig, ScoringConfig},
    error::PlanResult,
    model::{Employee, EmployeeShift, PlanningInput, Shift, VacationRequest},
    planner::{PlanOutcome, ShiftPlanner},
    preferences::{PlaceholderPreferences, PreferenceLookup, StaticPreferences},
    swap::{SwapDecision, SwapMatcher},
    types::RunId,
};

/// Run id used by the slice-based entry points.
pub const ADHOC_RUN_ID: &str = "adhoc";

pub struct ShiftEngine {
    scoring:     ScoringConfig,
    preferences: Box<dyn PreferenceLookup>,
}

impl ShiftEngine {
    pub fn new(scoring: ScoringConfig, preferences: Box<dyn PreferenceLookup>) -> Self {
        Self { scoring, preferences }
    }

    /// Build from configuration. A config without preference rows gets the
    /// placeholder lookup.
    pub fn build(config: EngineConfig) -> Self {
        let preferences: Box<dyn PreferenceLookup> = if config.preferences.is_empty() {
            Box::new(PlaceholderPreferences)
        } else {
            Box::new(StaticPreferences::new(config.preferences))
        };
        Self::new(config.scoring, preferences)
    }

    /// Default weights, placeholder preferences.
    pub fn build_test() -> Self {
        Self::build(EngineConfig::default_test())
    }

    /// Full planning run with unfilled shifts, final workload and event log.
    pub fn plan(&self, run_id: RunId, input: &PlanningInput) -> PlanResult<PlanOutcome> {
        ShiftPlanner::new(run_id, &self.scoring, self.preferences.as_ref()).plan(
            &input.employees,
            &input.shifts,
            &input.existing_assignments,
            &input.vacation_requests,
        )
    }

    /// New assignments only, in shift order.
    pub fn optimize_shift_schedule(
        &self,
        employees: &[Employee],
        shifts: &[Shift],
        existing: &[EmployeeShift],
        vacations: &[VacationRequest],
    ) -> PlanResult<Vec<EmployeeShift>> {
        let outcome = ShiftPlanner::new(ADHOC_RUN_ID.to_string(), &self.scoring, self.preferences.as_ref())
            .plan(employees, shifts, existing, vacations)?;
        Ok(outcome.assignments)
    }

    pub fn match_swap(
        &self,
        requester: &Employee,
        shift: &Shift,
        candidates: &[Employee],
        existing: &[EmployeeShift],
        vacations: &[VacationRequest],
    ) -> PlanResult<SwapDecision> {
        SwapMatcher::new(&self.scoring, self.preferences.as_ref())
            .find_partner(requester, shift, candidates, existing, vacations)
    }

    /// The accepted swap partner, or None if nobody scores high enough.
    pub fn find_optimal_shift_swap_partner(
        &self,
        requester: &Employee,
        shift: &Shift,
        candidates: &[Employee],
        existing: &[EmployeeShift],
        vacations: &[VacationRequest],
    ) -> PlanResult<Option<Employee>> {
        Ok(self.match_swap(requester, shift, candidates, existing, vacations)?.partner)
    }
}
