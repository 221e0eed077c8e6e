use anyhow::Result;
use colored::Colorize;

use crate::seed::seed_catalog;

use super::CommandContext;

pub fn handle_seed(ctx: CommandContext) -> Result<()> {
    let summary = seed_catalog(ctx.store.as_ref())?;
    println!(
        "{} {} authors and {} books",
        "Seeded".green(),
        summary.authors,
        summary.books
    );
    Ok(())
}
