//! Shared primitive types used across the engine.

/// Identity of an employee. Unique within a planning run.
pub type EmployeeId = i64;

pub type ShiftId = i64;

pub type LocationId = i64;

pub type ShiftTypeId = i64;

/// Caller-supplied label for one planning run. Only used in events and logs.
pub type RunId = String;

/// Suitability score. Signed while adjustments are applied, floored at 0.
pub type Score = i64;
