use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use relevel::cmd;
use relevel::form::LabReportForm;
use relevel::nutrient::Nutrient;
use std::process;

/// Lab-result driven nutrition recommendations
///
/// relevel compares lab values against reference thresholds and suggests
/// foods for every nutrient that comes in low.
#[derive(Parser)]
#[command(name = "relevel", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for scripts or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive recommendations from one or more lab values
    Recommend {
        /// Reading as <nutrient>=<value>, repeatable
        #[arg(short, long = "set", value_name = "NUTRIENT=VALUE")]
        set: Vec<String>,

        /// Ignore rules for nutrients that were not measured
        #[arg(long)]
        skip_missing: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a lab report entry for one nutrient
    Submit(SubmitArgs),

    /// Show levels, weekly progress and today's meals
    Dashboard {
        /// Reading as <nutrient>=<value>, repeatable
        #[arg(short, long = "set", value_name = "NUTRIENT=VALUE")]
        set: Vec<String>,

        /// Ignore rules for nutrients that were not measured
        #[arg(long)]
        skip_missing: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active threshold rules
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known nutrients and their lab units
    Nutrients,

    /// Write a starter .relevel.toml
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// Nutrient to record (e.g. vitaminB12)
    #[arg(short, long)]
    nutrient: Option<Nutrient>,

    /// Measured value
    #[arg(short, long, default_value = "", hide_default_value = true)]
    value: String,

    /// Unit of the measured value
    #[arg(short, long)]
    unit: Option<String>,

    /// Lower end of the lab's reference range
    #[arg(long, default_value = "", hide_default_value = true)]
    target_min: String,

    /// Upper end of the lab's reference range
    #[arg(long, default_value = "", hide_default_value = true)]
    target_max: String,

    /// Unit of the reference range (defaults to --unit)
    #[arg(long)]
    target_unit: Option<String>,

    /// Food or supplement you want suggestions from, repeatable
    #[arg(short, long)]
    intake: Vec<String>,

    /// Use the sample lab report instead of the flags above
    #[arg(long)]
    sample: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl SubmitArgs {
    fn to_form(&self) -> LabReportForm {
        LabReportForm {
            selected_nutrient: self.nutrient,
            current_value: self.value.clone(),
            current_unit: self.unit.clone(),
            target_min: self.target_min.clone(),
            target_max: self.target_max.clone(),
            target_unit: self.target_unit.clone().or_else(|| self.unit.clone()),
            desired_intake: self.intake.clone(),
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Recommend {
            set,
            skip_missing,
            json,
        }) => cmd::cmd_recommend(set, *skip_missing, *json),
        Some(Commands::Submit(args)) => cmd::cmd_submit(&args.to_form(), args.sample, args.json),
        Some(Commands::Dashboard {
            set,
            skip_missing,
            json,
        }) => cmd::cmd_dashboard(set, *skip_missing, *json),
        Some(Commands::Rules { json }) => cmd::cmd_rules(*json),
        Some(Commands::Nutrients) => {
            cmd::cmd_nutrients();
            Ok(())
        }
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            println!("relevel v{}", env!("CARGO_PKG_VERSION"));
            println!("Lab-result driven nutrition recommendations\n");
            println!("Usage: relevel <COMMAND>\n");
            println!("Commands:");
            println!("  recommend  Derive recommendations from lab values");
            println!("  submit     Submit a lab report entry for one nutrient");
            println!("  dashboard  Show levels, weekly progress and today's meals");
            println!("  rules      Show the active threshold rules");
            println!("  nutrients  List known nutrients and their lab units");
            println!("  init       Write a starter .relevel.toml");
            println!("\nRun 'relevel <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use relevel::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_submit_target_unit_defaults_to_unit() {
        let cli = Cli::parse_from([
            "relevel", "submit", "-n", "iron", "-v", "40", "-u", "µg/dL",
        ]);
        match cli.command {
            Some(Commands::Submit(args)) => {
                let form = args.to_form();
                assert_eq!(form.selected_nutrient, Some(Nutrient::Iron));
                assert_eq!(form.target_unit.as_deref(), Some("µg/dL"));
            }
            _ => panic!("expected submit"),
        }
    }
}
