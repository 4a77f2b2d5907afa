//! Per-run workload tracking.
//!
//! A tracker is built once per planning run from the existing assignments
//! and owned by that run. The planner bumps it after every commit so later
//! shifts in the same run see the updated load.

use crate::{
    model::{Employee, EmployeeShift},
    types::EmployeeId,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct WorkloadTracker {
    counts: HashMap<EmployeeId, u32>,
}

impl WorkloadTracker {
    /// Every employee in `employees` starts at 0; each existing assignment
    /// then adds one for its employee. Assignments of employees outside the
    /// list are still counted.
    pub fn new(employees: &[Employee], existing: &[EmployeeShift]) -> Self {
        let mut counts: HashMap<EmployeeId, u32> =
            employees.iter().map(|e| (e.id, 0)).collect();
        for assignment in existing {
            *counts.entry(assignment.employee.id).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Shifts attributed to `employee_id` so far. Unknown ids count as 0.
    pub fn workload_of(&self, employee_id: EmployeeId) -> u32 {
        self.counts.get(&employee_id).copied().unwrap_or(0)
    }

    /// Record one more committed shift. Returns the new count.
    pub fn increment(&mut self, employee_id: EmployeeId) -> u32 {
        let count = self.counts.entry(employee_id).or_insert(0);
        *count += 1;
        *count
    }

    /// Ordered copy of the counts, for reports and stable output.
    pub fn snapshot(&self) -> BTreeMap<EmployeeId, u32> {
        self.counts.iter().map(|(id, n)| (*id, *n)).collect()
    }
}
