use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use jyoti_rs::{BirthMoment, CalendarDate};

mod commands;
mod config;
mod error;
mod logging;

use config::{JyotiConfig, OutputFormat, SystemChoice};
use error::CliError;

#[derive(Parser)]
#[command(name = "jyoti", about = "Sun-sign and numerology readings from a birth date")]
struct Cli {
    /// Path to a TOML config file (default: ./jyoti.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format, overriding the config file
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun sign for a date
    Sign {
        /// MM-DD or YYYY-MM-DD
        date: String,
        /// Zodiac system (default from config, else both)
        #[arg(long, value_enum)]
        system: Option<SystemChoice>,
    },
    /// Life Path number of a birth date
    LifePath {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Show the reduced day, month and year
        #[arg(long)]
        breakdown: bool,
    },
    /// Personal Year number
    PersonalYear {
        /// Birth date (MM-DD or YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Target year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Personal Day number
    PersonalDay {
        /// Birth date (MM-DD or YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Target date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Personal Day numbers for every day of a month
    Month {
        /// Birth date (MM-DD or YYYY-MM-DD)
        #[arg(long)]
        birth: String,
        /// Target year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Target month 1-12 (default: current month)
        #[arg(long)]
        month: Option<u32>,
    },
    /// Full reading for a birth profile
    Profile {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour)
        #[arg(long)]
        time: Option<String>,
        /// Birth place (free text, shown but not used in calculations)
        #[arg(long, default_value = "")]
        location: String,
        /// Date the personal numbers refer to (default: today)
        #[arg(long)]
        today: Option<String>,
    },
}

fn today() -> Result<CalendarDate, CliError> {
    let now = Local::now().date_naive();
    CalendarDate::try_from(now).map_err(|_| CliError::ClockOutOfRange(now.to_string()))
}

fn target_date(arg: Option<String>) -> Result<CalendarDate, CliError> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => today(),
    }
}

fn run(cli: Cli, config: &JyotiConfig) -> Result<String, CliError> {
    let rendered = match cli.command {
        Commands::Sign { date, system } => {
            commands::sign(&date, system.unwrap_or(config.zodiac.default_system))?
        }
        Commands::LifePath { date, breakdown } => commands::life_path(&date, breakdown)?,
        Commands::PersonalYear { birth, year } => {
            let year = match year {
                Some(y) => y,
                None => today()?.year(),
            };
            commands::personal_year_cmd(&birth, year)?
        }
        Commands::PersonalDay { birth, date } => {
            commands::personal_day_cmd(&birth, target_date(date)?)?
        }
        Commands::Month { birth, year, month } => {
            let (year, month) = match (year, month) {
                (Some(y), Some(m)) => (y, m),
                (y, m) => {
                    let now = today()?;
                    (y.unwrap_or(now.year()), m.unwrap_or(now.month()))
                }
            };
            commands::month(&birth, year, month)?
        }
        Commands::Profile {
            date,
            time,
            location,
            today,
        } => {
            let birth = BirthMoment::parse(&date, time.as_deref(), &location)?;
            commands::profile(&birth, target_date(today)?)?
        }
    };
    let format = cli.format.unwrap_or(config.output.format);
    rendered.render(format, config.output.pretty)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, config_path) = JyotiConfig::resolve(cli.config.as_deref(), &cwd)?;

    logging::init_cli_logger(&config.logging.level, cli.verbose);
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }

    match run(cli, &config) {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
