use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, document: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema(ctx.store);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    // Bare field selections get wrapped; full documents pass through.
    let trimmed = document.trim_start();
    let query = if trimmed.starts_with('{') || trimmed.starts_with("query") {
        document
    } else {
        format!("query {{ {} }}", document)
    };

    let request = async_graphql::Request::new(&query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
