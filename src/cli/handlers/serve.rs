use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};
use crate::seed::seed_catalog;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, seed: bool) -> Result<()> {
    if seed {
        let summary = seed_catalog(ctx.store.as_ref())?;
        println!(
            "{} {} authors and {} books",
            "Seeded".green(),
            summary.authors,
            summary.books
        );
    }

    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.store);

    println!("Starting GraphQL server on http://localhost:{}/graphql", port);
    println!("GraphiQL IDE: http://localhost:{}/graphql", port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, port).await })?;
    Ok(())
}
