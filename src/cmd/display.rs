//! Console rendering for recommendation lists

use console::style;

use crate::fmt::{format_value, progress_bar, BULB, CHART, FOOD};
use crate::output::JsonOutput;
use crate::session::Session;
use crate::summary::{fallback_detail, status_for, Status};

/// Print the session's recommendations with summary cards
pub fn print_session(session: &Session) {
    let shown = session.display_recommendations();
    let summary = session.summary();

    if !session.reading().is_empty() {
        println!("{} Readings:", CHART);
        for (nutrient, value) in session.reading().iter() {
            println!(
                "   {} {} = {}",
                style("•").dim(),
                nutrient.label(),
                style(format_value(value)).cyan()
            );
        }
        println!();
    }

    if session.recommendations().is_empty() {
        println!(
            "{} Nothing below threshold. Showing sample recommendations.",
            style("✓").green()
        );
        println!();
    }

    println!(
        "{} {} areas to focus on, {}% average progress, {} food suggestions",
        BULB,
        style(summary.focus_areas).bold(),
        style(summary.average_progress).bold(),
        style(summary.food_suggestions).bold()
    );
    println!();

    let fallback = session.recommendations().is_empty();
    for rec in &shown {
        let status = status_for(rec.progress_percent);
        let label = match status {
            Status::Low => style(status.as_str()).red().bold(),
            Status::Moderate => style(status.as_str()).yellow().bold(),
            Status::Optimal => style(status.as_str()).green().bold(),
        };
        println!("{} {}", style(&rec.nutrient).bold(), label);
        println!(
            "   {} {}%",
            progress_bar(rec.progress_percent, 20),
            rec.progress_percent
        );
        if let Some(detail) = fallback.then(|| fallback_detail(rec.id)).flatten() {
            println!("   {}", detail.description);
            println!(
                "   Daily goal {}, current intake {}",
                style(detail.daily_goal).green(),
                style(detail.current_intake).yellow()
            );
        }
        println!("   {} {}", FOOD, rec.foods.join(", "));
        println!();
    }
}

/// Print the session as a single JSON document
pub fn print_session_json(session: &Session) -> anyhow::Result<()> {
    let output = JsonOutput::from_session(session);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
