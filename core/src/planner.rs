//! Greedy shift assignment.
//!
//! RULES:
//!   - Shifts are processed strictly in input order.
//!   - Each shift goes to the best-scoring eligible employee, ties to the
//!     one listed first.
//!   - The workload tracker is bumped before the next shift is scored, so
//!     the order of shifts changes the result. Do not parallelize the loop.
//!   - An employee is never booked twice on the same calendar day, counting
//!     both existing assignments and ones made earlier in this run.

use crate::{
    availability::available_on,
    config::ScoringConfig,
    error::PlanResult,
    event::{to_log_entries, EventLogEntry, PlanEvent},
    model::{Employee, EmployeeShift, Shift, VacationRequest},
    preferences::{PreferenceLookup, Preferences},
    scoring::{assignment_score, ScoreCard},
    types::{EmployeeId, RunId, ShiftId},
    validate,
    workload::WorkloadTracker,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Result of one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutcome {
    pub run_id:      RunId,
    /// New records only, in shift order. Existing assignments are not repeated.
    pub assignments: Vec<EmployeeShift>,
    /// Shifts whose candidate pool was empty, in shift order.
    pub unfilled:    Vec<ShiftId>,
    /// Workload per employee after the run.
    pub workload:    BTreeMap<EmployeeId, u32>,
    pub events:      Vec<PlanEvent>,
}

impl PlanOutcome {
    pub fn event_log(&self) -> PlanResult<Vec<EventLogEntry>> {
        to_log_entries(&self.run_id, &self.events)
    }
}

pub struct ShiftPlanner<'a> {
    run_id:      RunId,
    config:      &'a ScoringConfig,
    preferences: &'a dyn PreferenceLookup,
}

impl<'a> ShiftPlanner<'a> {
    pub fn new(run_id: RunId, config: &'a ScoringConfig, preferences: &'a dyn PreferenceLookup) -> Self {
        Self { run_id, config, preferences }
    }

    /// Assign employees to `shifts`. Fails before scoring anything if the
    /// input is malformed; otherwise every shift is either assigned or
    /// reported as unfilled.
    pub fn plan(
        &self,
        employees: &[Employee],
        shifts: &[Shift],
        existing: &[EmployeeShift],
        vacations: &[VacationRequest],
    ) -> PlanResult<PlanOutcome> {
        validate::validate_employees(employees)?;
        validate::validate_shifts(shifts)?;
        validate::validate_assignments(existing)?;
        validate::validate_vacations(vacations)?;

        let run_id = self.run_id.clone();
        let mut tracker = WorkloadTracker::new(employees, existing);
        let preferences: HashMap<EmployeeId, Preferences> = employees
            .iter()
            .map(|e| (e.id, self.preferences.preferences_of(e)))
            .collect();
        let no_preferences = Preferences::default();
        let mut booked: HashSet<(EmployeeId, NaiveDate)> = existing
            .iter()
            .filter_map(|a| a.shift.shift_date.map(|date| (a.employee.id, date)))
            .collect();

        let mut assignments = Vec::new();
        let mut unfilled = Vec::new();
        let mut events = vec![PlanEvent::RunStarted {
            run_id:               run_id.clone(),
            employees:            employees.len(),
            shifts:               shifts.len(),
            existing_assignments: existing.len(),
        }];

        for shift in shifts {
            let date = shift.date()?;

            let mut scored: Vec<(&Employee, ScoreCard)> = available_on(employees, date, vacations)
                .into_iter()
                .filter(|e| !booked.contains(&(e.id, date)))
                .map(|e| {
                    let prefs = preferences.get(&e.id).unwrap_or(&no_preferences);
                    let card = assignment_score(self.config, e, shift, tracker.workload_of(e.id), prefs);
                    (e, card)
                })
                .collect();

            // Stable: equal scores keep candidate-list order.
            scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));

            let Some((winner, card)) = scored.first().copied() else {
                log::debug!("run={run_id} planner: shift {} on {date} has no candidates", shift.id);
                unfilled.push(shift.id);
                events.push(PlanEvent::ShiftUnfilled {
                    run_id: run_id.clone(),
                    shift_id: shift.id,
                    date,
                });
                continue;
            };

            let load = tracker.increment(winner.id);
            booked.insert((winner.id, date));
            log::debug!(
                "run={run_id} planner: shift {} on {date} -> employee {} (score {}, pool {}, load now {load}) {card:?}",
                shift.id,
                winner.id,
                card.total,
                scored.len(),
            );

            events.push(PlanEvent::ShiftAssigned {
                run_id:      run_id.clone(),
                shift_id:    shift.id,
                date,
                employee_id: winner.id,
                score:       card.total,
                pool_size:   scored.len(),
            });
            assignments.push(EmployeeShift::assigned(winner.clone(), shift.clone()));
        }

        events.push(PlanEvent::RunCompleted {
            run_id:   run_id.clone(),
            assigned: assignments.len(),
            unfilled: unfilled.len(),
        });

        log::info!(
            "run={run_id} planner: {} of {} shifts assigned, {} unfilled",
            assignments.len(),
            shifts.len(),
            unfilled.len()
        );

        Ok(PlanOutcome {
            run_id,
            assignments,
            unfilled,
            workload: tracker.snapshot(),
            events,
        })
    }
}
