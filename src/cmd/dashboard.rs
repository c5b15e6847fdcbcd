//! Dashboard command implementation
//!
//! Handles `relevel dashboard`: overall progress, current against target
//! levels, weekly progress and today's meals.

use anyhow::Result;
use console::style;

use crate::cmd::recommend::evaluate;
use crate::dashboard::Dashboard;
use crate::fmt::{progress_bar, CHART, FOOD, TARGET, TREND};

/// Evaluate readings and print the dashboard
pub fn cmd_dashboard(assignments: &[String], skip_missing: bool, json: bool) -> Result<()> {
    let session = evaluate(assignments, skip_missing)?;
    let dashboard = Dashboard::from_session(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print_dashboard(&dashboard);
    }
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("{}", style("Your Nutrition Dashboard").bold());
    println!();
    println!(
        "{} {}% overall progress, {} meals today",
        TARGET,
        style(dashboard.overall_progress).bold(),
        style(dashboard.meals_today).bold()
    );
    if dashboard.fallback {
        println!("   {}", style("No low readings, showing sample levels").dim());
    }
    println!();

    println!("{} Current vs Target Levels:", CHART);
    for level in &dashboard.levels {
        let intake = match (level.current_intake, level.daily_goal) {
            (Some(current), Some(goal)) => format!("  {} / {}", current, goal),
            _ => String::new(),
        };
        println!(
            "   {:<12} {} {:>3}% {}{}",
            level.nutrient,
            progress_bar(level.progress, 20),
            level.progress,
            style(level.status.as_str()).dim(),
            intake
        );
    }
    println!();

    println!("{} Weekly Progress:", TREND);
    for day in &dashboard.weekly_progress {
        println!(
            "   {} {} {:>3}%",
            day.day,
            progress_bar(day.progress, 20),
            day.progress
        );
    }
    println!();

    println!("{} Today's Meals:", FOOD);
    for meal in &dashboard.meals {
        println!(
            "   {} {}",
            style(meal.meal).bold(),
            style(format!("({})", meal.time)).dim()
        );
        println!("      {}", meal.foods.join(", "));
        println!("      {}", style(meal.nutrients.join(", ")).cyan());
    }
}
