//! Data maintenance commands: `reset` and `config`

use clap::Args;

use crate::config::paths::FinordenPaths;
use crate::config::settings::Settings;
use crate::error::FinordenResult;
use crate::storage::{open_gateway, FileStore, STORAGE_KEY};

/// Arguments of `finorden reset`
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Handle `finorden reset`: delete the stored movements
pub fn handle_reset_command(
    paths: &FinordenPaths,
    settings: &Settings,
    args: ResetArgs,
) -> FinordenResult<()> {
    if !args.force {
        println!("This deletes every stored movement.");
        println!("The next run reloads from: {}", settings.seed_source);
        println!();
        println!("Use --force to confirm");
        return Ok(());
    }

    open_gateway(paths, settings)?.clear()?;
    println!("Stored movements cleared");
    Ok(())
}

/// Handle `finorden config`: show paths and settings
pub fn handle_config_command(paths: &FinordenPaths, settings: &Settings) -> FinordenResult<()> {
    let store = FileStore::new(paths.store_dir());

    println!("FinOrden Configuration");
    println!("======================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Store file:      {}", store.path_for(STORAGE_KEY).display());
    println!("Log file:        {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Seed source:       {}", settings.seed_source);
    println!("  Seed timeout:      {}s", settings.seed_timeout_secs);
    println!("  Default period:    {}", settings.period_filter());
    println!("  Notice duration:   {}s", settings.notice_duration_secs);
    Ok(())
}
