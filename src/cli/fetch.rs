//! Fetch command - fetch a key listing document and render it.

use crate::cli::output::{self, ConsoleSink};
use crate::core::fetch::{fetch_and_render, Fetcher};
use crate::core::listing::{escape_text, field_text};
use crate::error::Result;

/// Per-document metadata printed after the table when present.
const META_FIELDS: [&str; 5] = ["generated_at_pht", "unit", "amount", "count", "timezone"];

/// Fetch and render the document at `url`.
pub async fn execute(url: &str) -> Result<()> {
    let fetcher = Fetcher::new();
    let mut sink = ConsoleSink;

    let rendered = fetch_and_render(&fetcher, url, &mut sink).await?;

    let meta: Vec<(&str, String)> = META_FIELDS
        .iter()
        .map(|field| (*field, field_text(&rendered.doc, field)))
        .filter(|(_, value)| !value.is_empty())
        .collect();
    if !meta.is_empty() {
        output::section("Run");
        for (field, value) in meta {
            output::kv(field, escape_text(&value));
        }
    }

    println!();
    match rendered.rows {
        Some(rows) => output::success(&format!(
            "fetched {} key{}",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" }
        )),
        None => output::success("fetched document (no key listing)"),
    }
    Ok(())
}
