//! Submit command implementation
//!
//! Handles `relevel submit`, the command-line counterpart of the lab report
//! form: one nutrient, its value and unit, the lab's target range and the
//! foods the user wants suggestions from.

use anyhow::Result;
use console::style;
use std::env;

use crate::cmd::display::{print_session, print_session_json};
use crate::cmd::recommend::load_session;
use crate::fmt::{CHECKMARK, INFO};
use crate::form::LabReportForm;

/// Validate a lab report form, derive and print recommendations
///
/// # Errors
///
/// Returns [`crate::error::RelevelError::FormInvalid`] listing every invalid
/// field when the form cannot be submitted.
pub fn cmd_submit(form: &LabReportForm, sample: bool, json: bool) -> Result<()> {
    let form = if sample {
        LabReportForm::sample()
    } else {
        form.clone()
    };

    let reading = form.to_reading()?;

    let project_root = env::current_dir()?;
    let mut session = load_session(&project_root, false)?;
    session.submit(reading);

    if json {
        return print_session_json(&session);
    }

    if sample {
        println!("{} Sample lab report loaded", INFO);
    }
    println!(
        "{} Report accepted: target {}-{} {}",
        CHECKMARK,
        form.target_min.trim(),
        form.target_max.trim(),
        style(form.target_unit.as_deref().unwrap_or_default()).dim()
    );
    println!();
    print_session(&session);
    Ok(())
}
