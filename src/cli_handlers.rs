use crate::cli::PlanArgs;
use crate::config::PlanSpec;
use crate::core::CoursePlan;
use crate::error::PlanError;
use crate::models::{Order, join};
use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

/// How a command finished, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    CycleFound,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::CycleFound => 2,
        }
    }
}

/// Build a plan from the file (if any), then the command-line flags
pub fn load_plan(args: &PlanArgs) -> Result<CoursePlan> {
    let mut spec = match &args.file {
        Some(path) => PlanSpec::load(path)
            .with_context(|| format!("Failed to load plan file {}", path.display()))?,
        None => PlanSpec::default(),
    };
    spec.extend(&args.courses, &args.requires);

    let plan = CoursePlan::from_spec(&spec).map_err(|e| match e {
        PlanError::UnknownItem(_) => anyhow::Error::new(e)
            .context("Requisite names an unlisted course; add it with --course or under `courses`"),
        other => other.into(),
    })?;
    info!(
        courses = plan.len(),
        requisites = plan.constraint_count(),
        "loaded course plan"
    );
    Ok(plan)
}

/// Handle the order command
pub fn handle_order(
    args: &PlanArgs,
    as_json: bool,
    explain: bool,
    fail_on_cycle: bool,
) -> Result<Outcome> {
    let plan = load_plan(args)?;
    let order = plan.compute_order();

    if as_json {
        println!("{}", render_json(&plan, &order));
    } else {
        println!("{order}");
    }

    if let Order::CycleDetected { unresolved } = &order {
        if explain {
            if let Some(cycle) = plan.find_cycle() {
                eprintln!("Cycle: {}", join(&cycle, " -> "));
            }
            eprintln!("Unresolved: {}", join(unresolved, ", "));
        }
        if fail_on_cycle {
            return Ok(Outcome::CycleFound);
        }
    }

    Ok(Outcome::Success)
}

/// Handle the check command
pub fn handle_check(args: &PlanArgs) -> Result<Outcome> {
    let plan = load_plan(args)?;

    match plan.find_cycle() {
        Some(cycle) => {
            println!("cycle: {}", join(&cycle, " -> "));
            Ok(Outcome::CycleFound)
        }
        None => {
            println!("ok");
            Ok(Outcome::Success)
        }
    }
}

/// Handle the demo command
pub fn handle_demo() -> Result<Outcome> {
    let mut plan = CoursePlan::<String>::new();
    for course in ["Ohpe", "Ohja", "Tira", "Jym"] {
        plan.register_item(course);
    }
    plan.add_constraint("Ohpe", "Ohja")?;
    plan.add_constraint("Ohja", "Tira")?;
    plan.add_constraint("Jym", "Tira")?;
    println!("{}", plan.compute_order());

    plan.add_constraint("Tira", "Tira")?;
    println!("{}", plan.compute_order());

    Ok(Outcome::Success)
}

/// JSON view of an ordering result
pub fn render_json(plan: &CoursePlan, order: &Order<String>) -> serde_json::Value {
    match order {
        Order::Sequence(courses) => json!({
            "status": "ordered",
            "order": courses,
        }),
        Order::CycleDetected { unresolved } => json!({
            "status": "cycle",
            "order": null,
            "unresolved": unresolved,
            "cycle": plan.find_cycle(),
        }),
    }
}
