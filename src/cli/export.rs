//! CLI command for CSV export

use clap::Args;
use std::path::PathBuf;

use crate::error::FinordenResult;
use crate::export::{export_to_file, EXPORT_FILENAME};
use crate::services::Ledger;

/// Arguments of `finorden export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long, default_value = EXPORT_FILENAME)]
    pub output: PathBuf,
}

/// Handle `finorden export`
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> FinordenResult<()> {
    let count = export_to_file(ledger.movements(), &args.output)?;
    println!("Exported {} movements to: {}", count, args.output.display());
    Ok(())
}
