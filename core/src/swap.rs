//! Swap partner search.
//!
//! Finding nobody is the common case, not a failure: the decision simply
//! carries no partner.

use crate::{
    availability::is_on_vacation,
    config::ScoringConfig,
    error::PlanResult,
    event::PlanEvent,
    model::{Employee, EmployeeShift, Shift, VacationRequest},
    preferences::PreferenceLookup,
    scoring::{swap_score, ScoreCard},
    validate,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapDecision {
    /// Set only when the best candidate clears the acceptance threshold.
    pub partner:    Option<Employee>,
    /// Best candidate's score card, accepted or not.
    pub best_score: Option<ScoreCard>,
    pub considered: usize,
    pub event:      PlanEvent,
}

pub struct SwapMatcher<'a> {
    config:      &'a ScoringConfig,
    preferences: &'a dyn PreferenceLookup,
}

impl<'a> SwapMatcher<'a> {
    pub fn new(config: &'a ScoringConfig, preferences: &'a dyn PreferenceLookup) -> Self {
        Self { config, preferences }
    }

    /// Pick who should take `shift` off `requester`'s hands.
    ///
    /// Candidates on approved vacation that day are dropped. The rest are
    /// scored and the top one (first listed on ties) is returned if it
    /// scores above the threshold. The requester is scored like anyone else
    /// when listed; hosts that want them out leave them off `candidates`.
    pub fn find_partner(
        &self,
        requester: &Employee,
        shift: &Shift,
        candidates: &[Employee],
        existing: &[EmployeeShift],
        vacations: &[VacationRequest],
    ) -> PlanResult<SwapDecision> {
        validate::validate_employee(requester)?;
        validate::validate_employees(candidates)?;
        validate::validate_assignments(existing)?;
        validate::validate_vacations(vacations)?;
        let date = shift.date()?;

        let mut scored = Vec::new();
        for candidate in candidates {
            if is_on_vacation(candidate, date, vacations) {
                continue;
            }
            let prefs = self.preferences.preferences_of(candidate);
            let card = swap_score(self.config, requester, candidate, shift, existing, &prefs)?;
            scored.push((candidate, card));
        }

        scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));

        let best = scored.first().copied();
        let accepted = best.filter(|(_, card)| card.total > self.config.swap_acceptance_threshold);

        let event = match accepted {
            Some((partner, card)) => {
                log::info!(
                    "swap: shift {} on {date}: employee {} -> employee {} (score {})",
                    shift.id, requester.id, partner.id, card.total
                );
                PlanEvent::SwapPartnerFound {
                    shift_id:     shift.id,
                    requester_id: requester.id,
                    partner_id:   partner.id,
                    score:        card.total,
                }
            }
            None => {
                log::info!(
                    "swap: shift {} on {date}: no partner for employee {} among {} candidates (best {:?})",
                    shift.id,
                    requester.id,
                    scored.len(),
                    best.map(|(_, card)| card.total)
                );
                PlanEvent::SwapPartnerNotFound {
                    shift_id:     shift.id,
                    requester_id: requester.id,
                    best_score:   best.map(|(_, card)| card.total),
                }
            }
        };

        Ok(SwapDecision {
            partner:    accepted.map(|(partner, _)| partner.clone()),
            best_score: best.map(|(_, card)| card),
            considered: scored.len(),
            event,
        })
    }
}
