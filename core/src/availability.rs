//! Availability filter: approved vacations and same-day bookings.
//!
//! Both checks compare calendar days only. Partial-day vacations or
//! shifts would be misclassified here; the model has neither.

use crate::model::{Employee, EmployeeShift, VacationRequest};
use chrono::NaiveDate;

/// True iff `employee` owns an APPROVED vacation whose inclusive
/// [start, end] interval contains `date`.
pub fn is_on_vacation(employee: &Employee, date: NaiveDate, vacations: &[VacationRequest]) -> bool {
    vacations.iter().any(|vacation| {
        vacation.is_approved() && vacation.employee.id == employee.id && vacation.covers(date)
    })
}

/// True iff any of `assignments` books `employee` onto a shift on `date`.
pub fn has_shift_on_date(employee: &Employee, date: NaiveDate, assignments: &[EmployeeShift]) -> bool {
    assignments.iter().any(|assignment| {
        assignment.employee.id == employee.id && assignment.shift.shift_date == Some(date)
    })
}

/// Employees not on approved vacation on `date`, in input order.
pub fn available_on<'a>(
    employees: &'a [Employee],
    date: NaiveDate,
    vacations: &[VacationRequest],
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| !is_on_vacation(employee, date, vacations))
        .collect()
}
