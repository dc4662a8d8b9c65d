use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use finorden_cli::cli::{
    handle_add_command, handle_chart_command, handle_config_command, handle_dashboard_command,
    handle_export_command, handle_history_command, handle_reset_command, AddArgs, ExportArgs,
    HistoryArgs, PeriodArgs, ResetArgs,
};
use finorden_cli::config::{paths::FinordenPaths, settings::Settings};
use finorden_cli::logging::{init_tracing, LogTarget};
use finorden_cli::services::Ledger;
use finorden_cli::storage::open_gateway;

#[derive(Parser)]
#[command(
    name = "finorden",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "FinOrden records income and expense movements, shows totals, \
                  balance and an overspending alert per month, and exports \
                  everything to CSV."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Record an income or expense
    Add(AddArgs),

    /// Show totals, balance and recent movements
    Dashboard(PeriodArgs),

    /// List every movement, newest first
    History(HistoryArgs),

    /// Show income vs expense bars
    Chart(PeriodArgs),

    /// Export movements to CSV
    Export(ExportArgs),

    /// Delete stored movements
    Reset(ResetArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinordenPaths::new()?;

    let log_target = match cli.command {
        Some(Commands::Tui) => {
            paths.ensure_directories()?;
            LogTarget::File(paths.log_file())
        }
        _ => LogTarget::Stderr,
    };
    init_tracing(cli.verbose, log_target);

    let settings = Settings::load_or_create(&paths)?;
    let today = Local::now().date_naive();

    let open_ledger = || -> Result<Ledger> {
        let gateway = open_gateway(&paths, &settings)?;
        Ok(Ledger::open(gateway, today))
    };

    match cli.command {
        Some(Commands::Tui) => {
            finorden_cli::tui::run_tui(open_ledger()?, &settings)?;
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&mut open_ledger()?, &settings, args, today)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&open_ledger()?, &settings, args, today)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&open_ledger()?, &settings, args)?;
        }
        Some(Commands::Chart(args)) => {
            handle_chart_command(&open_ledger()?, &settings, args, today)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&open_ledger()?, args)?;
        }
        Some(Commands::Reset(args)) => {
            handle_reset_command(&paths, &settings, args)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            println!("FinOrden - income and expense tracking");
            println!();
            println!("Run 'finorden --help' for usage information.");
            println!("Run 'finorden tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
