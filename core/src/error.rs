use crate::types::{EmployeeId, ShiftId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Shift {shift_id} has no date")]
    MissingShiftDate { shift_id: ShiftId },

    #[error("Employee {employee_id} has non-positive max hours per week ({max_hours})")]
    NonPositiveMaxHours { employee_id: EmployeeId, max_hours: i32 },

    #[error("Vacation request {request_id:?} for employee {employee_id} ends {end} before it starts {start}")]
    InvertedVacation {
        request_id:  Option<i64>,
        employee_id: EmployeeId,
        start:       NaiveDate,
        end:         NaiveDate,
    },

    #[error("Employee {employee_id} appears more than once in the input")]
    DuplicateEmployee { employee_id: EmployeeId },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlanError {
    /// True for malformed-input errors. The caller must fix the input
    /// before trying again.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingShiftDate { .. }
                | Self::NonPositiveMaxHours { .. }
                | Self::InvertedVacation { .. }
                | Self::DuplicateEmployee { .. }
        )
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
