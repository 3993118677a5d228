use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use finanzas::cli::{handle_movement_command, handle_report_command, MovementCommands, ReportCommands};
use finanzas::config::{FinanzasPaths, Settings};
use finanzas::ledger::Ledger;
use finanzas::models::Movement;
use finanzas::storage::{write_json_atomic, JsonMovementStore};

#[derive(Parser)]
#[command(
    name = "finanzas",
    version,
    about = "Personal income and expense ledger",
    long_about = "Finanzas records income and expense movements and reports monthly \
                  totals, expenses by category, a six-month history and daily balances."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Movement(MovementCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Create the data directory and default settings
    Init,

    /// Show or change configuration
    Config {
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
        /// IANA time zone for day and month boundaries, e.g. Europe/Madrid
        #[arg(long, conflicts_with = "utc_offset")]
        time_zone: Option<String>,
        /// Fixed UTC offset in minutes for day and month boundaries
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
        /// Use the machine's local time zone again
        #[arg(long, conflicts_with_all = ["utc_offset", "time_zone"])]
        local_time: bool,
    },
}

fn main() -> Result<()> {
    finanzas::init_tracing();

    let cli = Cli::parse();

    let paths = FinanzasPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Finanzas - personal income and expense ledger");
        println!();
        println!("Run 'finanzas --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing Finanzas at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if !paths.movements_file().exists() {
                write_json_atomic(&paths.movements_file(), &Vec::<Movement>::new())?;
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'finanzas add expense 18500 -c comida' to record a movement.");
        }
        Commands::Config {
            currency,
            time_zone,
            utc_offset,
            local_time,
        } => {
            let changed =
                currency.is_some() || time_zone.is_some() || utc_offset.is_some() || local_time;
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(name) = time_zone {
                settings.time_zone = Some(name);
                settings.utc_offset_minutes = None;
            }
            if let Some(minutes) = utc_offset {
                settings.time_zone = None;
                settings.utc_offset_minutes = Some(minutes);
            }
            if local_time {
                settings.time_zone = None;
                settings.utc_offset_minutes = None;
            }
            if changed {
                // Reject an unknown zone or out-of-range offset before persisting it
                settings.calendar()?;
                settings.save(&paths)?;
            }

            println!("Finanzas Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Movements file:   {}", paths.movements_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            match (&settings.time_zone, settings.utc_offset_minutes) {
                (Some(name), _) => println!("  Time zone:       {}", name),
                (None, Some(minutes)) => println!("  UTC offset:      {} minutes", minutes),
                (None, None) => println!("  Time zone:       local time"),
            }
            println!("  Date format:     {}", settings.date_format);
        }
        Commands::Movement(cmd) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            handle_movement_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            handle_report_command(&mut ledger, &settings, cmd)?;
        }
    }

    Ok(())
}

fn open_ledger(paths: &FinanzasPaths, settings: &Settings) -> Result<Ledger<JsonMovementStore>> {
    paths.ensure_directories()?;
    let calendar = settings.calendar()?;
    let month = calendar.year_month(Utc::now());
    Ok(Ledger::open(
        JsonMovementStore::new(paths.movements_file()),
        calendar,
        month,
    ))
}
