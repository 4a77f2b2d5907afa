//! The plan event log.
//!
//! Every decision a run makes is recorded as a `PlanEvent`, in the order
//! it was made. Hosts persist or display the log; the engine only builds it.

use crate::{
    error::PlanResult,
    types::{EmployeeId, RunId, Score, ShiftId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanEvent {
    // ── Planning ───────────────────────────────────
    RunStarted {
        run_id:               RunId,
        employees:            usize,
        shifts:               usize,
        existing_assignments: usize,
    },
    ShiftAssigned {
        run_id:      RunId,
        shift_id:    ShiftId,
        date:        NaiveDate,
        employee_id: EmployeeId,
        score:       Score,
        pool_size:   usize,
    },
    ShiftUnfilled {
        run_id:   RunId,
        shift_id: ShiftId,
        date:     NaiveDate,
    },
    RunCompleted {
        run_id:   RunId,
        assigned: usize,
        unfilled: usize,
    },

    // ── Swaps ──────────────────────────────────────
    SwapPartnerFound {
        shift_id:     ShiftId,
        requester_id: EmployeeId,
        partner_id:   EmployeeId,
        score:        Score,
    },
    SwapPartnerNotFound {
        shift_id:     ShiftId,
        requester_id: EmployeeId,
        best_score:   Option<Score>,
    },
}

impl PlanEvent {
    /// Stable name of the variant, matching the serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RunStarted { .. }          => "run_started",
            Self::ShiftAssigned { .. }       => "shift_assigned",
            Self::ShiftUnfilled { .. }       => "shift_unfilled",
            Self::RunCompleted { .. }        => "run_completed",
            Self::SwapPartnerFound { .. }    => "swap_partner_found",
            Self::SwapPartnerNotFound { .. } => "swap_partner_not_found",
        }
    }
}

/// An event flattened for storage by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub run_id:     RunId,
    pub seq:        usize,
    pub event_type: String,
    pub payload:    String, // JSON-serialized PlanEvent
}

/// Number and serialize `events` in order.
pub fn to_log_entries(run_id: &str, events: &[PlanEvent]) -> PlanResult<Vec<EventLogEntry>> {
    events
        .iter()
        .enumerate()
        .map(|(seq, event)| -> PlanResult<EventLogEntry> {
            Ok(EventLogEntry {
                run_id:     run_id.to_string(),
                seq,
                event_type: event.type_name().to_string(),
                payload:    serde_json::to_string(event)?,
            })
        })
        .collect()
}
