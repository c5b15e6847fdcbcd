//! Rules and nutrients listing commands
//!
//! `relevel rules` prints the active rule table; `relevel nutrients` prints the
//! nutrient catalogue with the units each one is usually reported in.

use anyhow::Result;
use console::style;
use std::env;

use crate::cmd::recommend::load_session;
use crate::fmt::{format_value, INFO, WARNING};
use crate::nutrient::Nutrient;
use crate::output::RulesOutput;

/// Print the rule table in evaluation order
pub fn cmd_rules(json: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let session = load_session(&project_root, false)?;
    let table = session.rules();

    if json {
        println!("{}", serde_json::to_string_pretty(&RulesOutput::new(table))?);
        return Ok(());
    }

    println!(
        "{} {} rule(s), missing readings: {}",
        INFO,
        table.len(),
        style(session.policy()).cyan()
    );
    println!();
    for (index, rule) in table.iter().enumerate() {
        println!(
            "   {}. {} below {}",
            index + 1,
            style(rule.nutrient.label()).bold(),
            style(format_value(rule.threshold)).green()
        );
        println!("      {}", style(rule.foods.join(", ")).dim());
    }

    let uncovered = table.uncovered();
    if !uncovered.is_empty() {
        println!();
        println!(
            "{} No rule for: {}",
            WARNING,
            uncovered
                .iter()
                .map(|n| n.key())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

/// Print every nutrient with its key and preferred units
pub fn cmd_nutrients() {
    for nutrient in Nutrient::ALL {
        println!(
            "{:<12} {:<12} {}",
            nutrient.key(),
            nutrient.label(),
            style(nutrient.units().join(", ")).dim()
        );
    }
}
