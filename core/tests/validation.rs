use chrono::NaiveDate;
use shiftplan_core::{
    engine::ShiftEngine,
    error::PlanError,
    model::{Employee, EmployeeShift, Location, PlanningInput, Shift, ShiftType, VacationRequest, VacationStatus},
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn shift(id: i64, day: u32) -> Shift {
    Shift::new(id, d(day), Location::new(1, "Store"), ShiftType::new(1, "Day"))
}

fn undated(id: i64) -> Shift {
    let mut s = shift(id, 1);
    s.shift_date = None;
    s
}

#[test]
fn undated_shift_aborts_the_run() {
    let engine = ShiftEngine::build_test();
    let err = engine
        .optimize_shift_schedule(&[Employee::new(1, 40)], &[shift(1, 10), undated(2)], &[], &[])
        .unwrap_err();

    assert!(matches!(err, PlanError::MissingShiftDate { shift_id: 2 }), "got {err}");
    assert!(err.is_validation());
}

#[test]
fn non_positive_max_hours_is_rejected() {
    let engine = ShiftEngine::build_test();
    for hours in [0, -8] {
        let err = engine
            .optimize_shift_schedule(&[Employee::new(1, 40), Employee::new(2, hours)], &[shift(1, 10)], &[], &[])
            .unwrap_err();
        assert!(
            matches!(err, PlanError::NonPositiveMaxHours { employee_id: 2, max_hours } if max_hours == hours),
            "got {err}"
        );
    }
}

#[test]
fn inverted_vacation_is_rejected_whatever_its_status() {
    let engine = ShiftEngine::build_test();
    let e = Employee::new(1, 40);
    let vacations = vec![VacationRequest::new(e.clone(), d(12), d(8), VacationStatus::Rejected)];

    let err = engine
        .optimize_shift_schedule(&[e], &[shift(1, 10)], &[], &vacations)
        .unwrap_err();

    assert!(matches!(err, PlanError::InvertedVacation { employee_id: 1, .. }), "got {err}");
}

#[test]
fn duplicate_employee_ids_are_rejected() {
    let engine = ShiftEngine::build_test();
    let err = engine
        .optimize_shift_schedule(&[Employee::new(1, 40), Employee::new(1, 32)], &[shift(1, 10)], &[], &[])
        .unwrap_err();

    assert!(matches!(err, PlanError::DuplicateEmployee { employee_id: 1 }), "got {err}");
}

#[test]
fn undated_existing_assignment_is_rejected() {
    let engine = ShiftEngine::build_test();
    let e = Employee::new(1, 40);
    let existing = vec![EmployeeShift::assigned(e.clone(), undated(77))];

    let err = engine
        .optimize_shift_schedule(&[e], &[shift(1, 10)], &existing, &[])
        .unwrap_err();

    assert!(matches!(err, PlanError::MissingShiftDate { shift_id: 77 }), "got {err}");
}

#[test]
fn swap_lookup_validates_too() {
    let engine = ShiftEngine::build_test();
    let requester = Employee::new(1, 0);

    let err = engine
        .find_optimal_shift_swap_partner(&requester, &shift(1, 10), &[Employee::new(2, 40)], &[], &[])
        .unwrap_err();
    assert!(err.is_validation());

    let err = engine
        .find_optimal_shift_swap_partner(&Employee::new(1, 40), &undated(5), &[Employee::new(2, 40)], &[], &[])
        .unwrap_err();
    assert!(matches!(err, PlanError::MissingShiftDate { shift_id: 5 }), "got {err}");
}

#[test]
fn json_input_from_the_host_plans_cleanly() {
    let json = r#"{
        "employees": [
            { "id": 1, "firstName": "Ana", "lastName": "Costa", "maxHoursPerWeek": 40 },
            { "id": 2, "firstName": "Ben", "lastName": "Novak", "maxHoursPerWeek": 32 }
        ],
        "shifts": [
            { "id": 10, "shiftDate": "2024-06-10T00:00:00", "startTime": "09:00", "endTime": "17:00",
              "location": { "id": 1, "name": "Downtown" }, "shiftType": { "id": 2, "name": "Day" } }
        ],
        "vacationRequests": [
            { "employee": { "id": 1, "maxHoursPerWeek": 40 },
              "startDate": "2024-06-09", "endDate": "2024-06-10T18:00:00", "status": "APPROVED" }
        ]
    }"#;
    let input: PlanningInput = serde_json::from_str(json).unwrap();

    let outcome = ShiftEngine::build_test().plan("json".into(), &input).unwrap();

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].employee.full_name(), "Ben Novak");
}
