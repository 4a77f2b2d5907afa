//! plan-runner: headless runner for the shift assignment engine.
//!
//! Usage:
//!   plan-runner --seed 12345 --employees 12 --days 7
//!   plan-runner --input week.json --data-dir ./data --json
//!   plan-runner --seed 7 --swap-shift 3 --requester 5

use anyhow::{anyhow, Result};
use shiftplan_core::{
    config::EngineConfig,
    engine::ShiftEngine,
    model::PlanningInput,
    planner::PlanOutcome,
    scenario::{Scenario, ScenarioParams},
    types::{EmployeeId, ShiftId},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let defaults = ScenarioParams::default();
    let params = ScenarioParams {
        seed:           parse_arg(&args, "--seed", defaults.seed),
        employees:      parse_arg(&args, "--employees", defaults.employees),
        days:           parse_arg(&args, "--days", defaults.days),
        shifts_per_day: parse_arg(&args, "--shifts-per-day", defaults.shifts_per_day),
        ..defaults
    };
    let json_out = args.iter().any(|a| a == "--json");
    let events_out = args.iter().any(|a| a == "--events");
    let input_path = flag_value(&args, "--input");
    let data_dir = flag_value(&args, "--data-dir");
    let swap_shift: Option<ShiftId> = parse_id(&args, "--swap-shift")?;
    let requester: Option<EmployeeId> = parse_id(&args, "--requester")?;

    let config = match data_dir {
        Some(dir) => EngineConfig::load(dir)?,
        None => EngineConfig::default(),
    };

    let input = match input_path {
        Some(path) => load_input(path)?,
        None => Scenario::generate(&params).input,
    };
    log::info!(
        "plan-runner: {} employees, {} open shifts, {} existing assignments, {} vacation requests",
        input.employees.len(),
        input.shifts.len(),
        input.existing_assignments.len(),
        input.vacation_requests.len()
    );

    if !json_out {
        println!("Shift planner — plan-runner");
        match input_path {
            Some(path) => println!("  input:     {path}"),
            None => println!("  scenario:  seed={} employees={} days={}", params.seed, params.employees, params.days),
        }
        println!("  data_dir:  {}", data_dir.unwrap_or("(defaults)"));
        println!();
    }

    let engine = ShiftEngine::build(config);

    match (swap_shift, requester) {
        (Some(shift_id), Some(requester_id)) => run_swap(&engine, &input, shift_id, requester_id, json_out),
        (None, None) => {
            let run_id = format!("run-{}", params.seed);
            let outcome = engine.plan(run_id, &input)?;
            if json_out {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_summary(&input, &outcome);
            }
            if events_out {
                for entry in outcome.event_log()? {
                    println!("{:>4} {:<24} {}", entry.seq, entry.event_type, entry.payload);
                }
            }
            Ok(())
        }
        _ => Err(anyhow!("--swap-shift and --requester must be given together")),
    }
}

fn load_input(path: &str) -> Result<PlanningInput> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| anyhow!("Cannot parse {path}: {e}"))
}

fn run_swap(
    engine: &ShiftEngine,
    input: &PlanningInput,
    shift_id: ShiftId,
    requester_id: EmployeeId,
    json_out: bool,
) -> Result<()> {
    let shift = input
        .shifts
        .iter()
        .chain(input.existing_assignments.iter().map(|a| &a.shift))
        .find(|s| s.id == shift_id)
        .ok_or_else(|| anyhow!("Unknown shift: {shift_id}"))?;
    let requester = input
        .employees
        .iter()
        .find(|e| e.id == requester_id)
        .ok_or_else(|| anyhow!("Unknown employee: {requester_id}"))?;

    let decision = engine.match_swap(
        requester,
        shift,
        &input.employees,
        &input.existing_assignments,
        &input.vacation_requests,
    )?;

    if json_out {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    println!("=== SWAP ===");
    println!("  shift:      {shift_id}");
    println!("  requester:  {requester_id}");
    println!("  considered: {}", decision.considered);
    match (&decision.partner, decision.best_score) {
        (Some(partner), Some(card)) => {
            println!("  partner:    {} {} (score {})", partner.id, partner.full_name(), card.total);
        }
        (None, Some(card)) => println!("  partner:    none (best score {} too low)", card.total),
        _ => println!("  partner:    none (no eligible candidates)"),
    }
    Ok(())
}

fn print_summary(input: &PlanningInput, outcome: &PlanOutcome) {
    println!("=== RUN SUMMARY ===");
    println!("  run_id:       {}", outcome.run_id);
    println!("  employees:    {}", input.employees.len());
    println!("  open shifts:  {}", input.shifts.len());
    let confirmed = input.existing_assignments.iter().filter(|a| a.is_confirmed()).count();
    let completed = input.existing_assignments.iter().filter(|a| a.is_completed()).count();
    println!(
        "  existing:     {} ({confirmed} confirmed, {completed} completed)",
        input.existing_assignments.len()
    );
    println!("  assigned:     {}", outcome.assignments.len());
    println!("  unfilled:     {}", outcome.unfilled.len());

    println!();
    println!("=== ASSIGNMENTS ===");
    if outcome.assignments.is_empty() {
        println!("  (none)");
    }
    for a in &outcome.assignments {
        let date = a
            .shift
            .shift_date
            .map(|d| d.format("%Y-%m-%d %a").to_string())
            .unwrap_or_default();
        println!(
            "  {date} | shift {:>4} | {:<10} | {:<8} | {:>3} {}",
            a.shift.id,
            a.shift.location.name,
            a.shift.shift_type.name,
            a.employee.id,
            a.employee.full_name()
        );
    }

    println!();
    println!("=== WORKLOAD ===");
    for employee in &input.employees {
        let load = outcome.workload.get(&employee.id).copied().unwrap_or(0);
        println!(
            "  {:>3} {:<20} {:>2} shifts  (max {}h/week)",
            employee.id,
            employee.full_name(),
            load,
            employee.max_hours_per_week
        );
    }

    if !outcome.unfilled.is_empty() {
        println!();
        println!("  unfilled shift ids: {:?}", outcome.unfilled);
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_id(args: &[String], flag: &str) -> Result<Option<i64>> {
    flag_value(args, flag)
        .map(|v| v.parse().map_err(|e| anyhow!("Cannot parse {flag} value {v:?}: {e}")))
        .transpose()
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
