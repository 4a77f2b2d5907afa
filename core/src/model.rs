//! Planning input and output records.
//!
//! Field names follow the JSON the surrounding shift-management application
//! already exchanges (camelCase, upper-case status strings). The engine never
//! mutates employees, locations, shift types, shifts or vacation requests.
//! Its only product is new `EmployeeShift` records.

use crate::{
    calendar,
    error::{PlanError, PlanResult},
    types::{EmployeeId, LocationId, ShiftId, ShiftTypeId},
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id:                 EmployeeId,
    #[serde(default)]
    pub first_name:         String,
    #[serde(default)]
    pub last_name:          String,
    #[serde(default)]
    pub position:           String,
    /// Must be positive. Checked before every run.
    pub max_hours_per_week: i32,
}

impl Employee {
    pub fn new(id: EmployeeId, max_hours_per_week: i32) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            max_hours_per_week,
        }
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id:   LocationId,
    #[serde(default)]
    pub name: String,
}

impl Location {
    pub fn new(id: LocationId, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    pub id:         ShiftTypeId,
    #[serde(default)]
    pub name:       String,
    #[serde(default, with = "calendar::optional_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "calendar::optional_time")]
    pub end_time:   Option<NaiveTime>,
}

impl ShiftType {
    pub fn new(id: ShiftTypeId, name: &str) -> Self {
        Self { id, name: name.to_string(), start_time: None, end_time: None }
    }

    pub fn with_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id:         ShiftId,
    /// Absent only in malformed input; planning rejects such shifts.
    #[serde(default, with = "calendar::optional_day")]
    pub shift_date: Option<NaiveDate>,
    #[serde(default, with = "calendar::optional_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "calendar::optional_time")]
    pub end_time:   Option<NaiveTime>,
    pub location:   Location,
    pub shift_type: ShiftType,
}

impl Shift {
    /// A shift on `date` that inherits its time window from the shift type.
    pub fn new(id: ShiftId, date: NaiveDate, location: Location, shift_type: ShiftType) -> Self {
        Self {
            id,
            shift_date: Some(date),
            start_time: shift_type.start_time,
            end_time: shift_type.end_time,
            location,
            shift_type,
        }
    }

    /// The shift's calendar day, or a validation error if it has none.
    pub fn date(&self) -> PlanResult<NaiveDate> {
        self.shift_date
            .ok_or(PlanError::MissingShiftDate { shift_id: self.id })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    #[serde(default)]
    pub id:         Option<i64>,
    pub employee:   Employee,
    /// Inclusive.
    #[serde(with = "calendar::day")]
    pub start_date: NaiveDate,
    /// Inclusive.
    #[serde(with = "calendar::day")]
    pub end_date:   NaiveDate,
    pub status:     VacationStatus,
}

impl VacationRequest {
    pub fn new(
        employee: Employee,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: VacationStatus,
    ) -> Self {
        Self { id: None, employee, start_date, end_date, status }
    }

    pub fn is_approved(&self) -> bool {
        self.status == VacationStatus::Approved
    }

    /// True if `date` lies inside [start_date, end_date], regardless of status.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Assigned,
    Confirmed,
    Declined,
    Completed,
}

/// One employee booked onto one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShift {
    #[serde(default)]
    pub id:       Option<i64>,
    pub employee: Employee,
    pub shift:    Shift,
    pub status:   AssignmentStatus,
}

impl EmployeeShift {
    /// A fresh planner decision. Status transitions after this happen
    /// outside the engine.
    pub fn assigned(employee: Employee, shift: Shift) -> Self {
        Self { id: None, employee, shift, status: AssignmentStatus::Assigned }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == AssignmentStatus::Confirmed
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }
}

/// Everything one planning run reads, as the host application hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningInput {
    pub employees:            Vec<Employee>,
    pub shifts:               Vec<Shift>,
    #[serde(default)]
    pub existing_assignments: Vec<EmployeeShift>,
    #[serde(default)]
    pub vacation_requests:    Vec<VacationRequest>,
}
