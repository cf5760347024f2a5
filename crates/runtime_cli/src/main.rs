use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use runtime_cli::commands::{self, cost::CostArgs};
use runtime_cli::logging::init_logging;
use runtime_cli::{Context, Result};
use tracing::{debug, error, trace};

/// Business-day, cost and duration estimates for delivery projects
#[derive(Parser)]
#[command(name = "trackwise", version)]
#[command(about = "Business-day, cost and duration estimates for delivery projects", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (defaults to config/ and TRACKWISE_* variables)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a date range down into business, weekend and holiday days
    Days {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        end: String,
        /// Additional holiday (repeatable)
        #[arg(long = "holiday")]
        holidays: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Estimate labour cost for a team over a date range
    Cost {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        end: String,
        /// Team size
        #[arg(short, long)]
        team: u32,
        /// Hourly rate (overrides configuration)
        #[arg(long)]
        rate: Option<f64>,
        /// Hours per day (overrides configuration)
        #[arg(long)]
        hours: Option<f64>,
        /// Additional holiday (repeatable)
        #[arg(long = "holiday")]
        holidays: Vec<String>,
    },
    /// Format a date range as a readable project duration
    Duration {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        end: String,
        /// Additional holiday (repeatable)
        #[arg(long = "holiday")]
        holidays: Vec<String>,
    },
    /// List the configured holidays for a year
    Holidays {
        /// Calendar year
        year: i32,
    },
    /// Find the end date of a business-day budget
    Schedule {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Number of business days
        #[arg(value_parser = clap::value_parser!(u32).range(1..=100_000))]
        business_days: u32,
        /// Additional holiday (repeatable)
        #[arg(long = "holiday")]
        holidays: Vec<String>,
    },
    /// Estimate every project in a CSV export
    Report {
        /// CSV with name, start_date, end_date and team_size columns
        path: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate and print the effective configuration
    Check {
        /// Year whose holidays are listed (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let ctx = match Context::load(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            init_logging(cli.verbose, "info");
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose, &ctx.settings.general.log_level);
    debug!("Trackwise started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match run(&ctx, cli.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(ctx: &Context, command: Commands) -> Result<String> {
    match command {
        Commands::Days {
            start,
            end,
            holidays,
            json,
        } => commands::days::run(ctx, &start, &end, &holidays, json),
        Commands::Cost {
            start,
            end,
            team,
            rate,
            hours,
            holidays,
        } => commands::cost::run(
            ctx,
            &CostArgs {
                start,
                end,
                team,
                rate,
                hours,
                holidays,
            },
        ),
        Commands::Duration {
            start,
            end,
            holidays,
        } => commands::duration::run(ctx, &start, &end, &holidays),
        Commands::Holidays { year } => commands::holidays::run(ctx, year),
        Commands::Schedule {
            start,
            business_days,
            holidays,
        } => commands::schedule::run(ctx, &start, business_days, &holidays),
        Commands::Report { path, json } => commands::report::run(ctx, &path, json),
        Commands::Check { year } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            commands::check::run(ctx, year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cost_command() {
        let cli = Cli::try_parse_from([
            "trackwise", "-v", "cost", "2024-01-01", "2024-01-05", "--team", "3", "--rate", "100",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Commands::Cost { team: 3, rate: Some(r), .. } if r == 100.0
        ));
    }

    #[test]
    fn test_parse_check_year() {
        let cli = Cli::try_parse_from(["trackwise", "check", "--year", "2030"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { year: Some(2030) }));
    }

    #[test]
    fn test_schedule_budget_must_be_positive() {
        assert!(Cli::try_parse_from(["trackwise", "schedule", "2024-01-01", "0"]).is_err());
    }
}
