//! Input validation. Runs before any scoring; the first problem found
//! aborts the run.

use crate::{
    error::{PlanError, PlanResult},
    model::{Employee, EmployeeShift, PlanningInput, Shift, VacationRequest},
};
use std::collections::HashSet;

/// Positive weekly hours and unique ids.
pub fn validate_employees(employees: &[Employee]) -> PlanResult<()> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        validate_employee(employee)?;
        if !seen.insert(employee.id) {
            return Err(PlanError::DuplicateEmployee { employee_id: employee.id });
        }
    }
    Ok(())
}

pub fn validate_employee(employee: &Employee) -> PlanResult<()> {
    if employee.max_hours_per_week <= 0 {
        return Err(PlanError::NonPositiveMaxHours {
            employee_id: employee.id,
            max_hours:   employee.max_hours_per_week,
        });
    }
    Ok(())
}

pub fn validate_shifts(shifts: &[Shift]) -> PlanResult<()> {
    for shift in shifts {
        shift.date()?;
    }
    Ok(())
}

/// Every booked shift must carry a date, or double-booking checks
/// would silently miss it.
pub fn validate_assignments(assignments: &[EmployeeShift]) -> PlanResult<()> {
    for assignment in assignments {
        assignment.shift.date()?;
    }
    Ok(())
}

/// start ≤ end for every request, whatever its status.
pub fn validate_vacations(vacations: &[VacationRequest]) -> PlanResult<()> {
    for vacation in vacations {
        if vacation.start_date > vacation.end_date {
            return Err(PlanError::InvertedVacation {
                request_id:  vacation.id,
                employee_id: vacation.employee.id,
                start:       vacation.start_date,
                end:         vacation.end_date,
            });
        }
    }
    Ok(())
}

pub fn validate_planning_input(input: &PlanningInput) -> PlanResult<()> {
    validate_employees(&input.employees)?;
    validate_shifts(&input.shifts)?;
    validate_assignments(&input.existing_assignments)?;
    validate_vacations(&input.vacation_requests)?;
    Ok(())
}
