//! Document fetch and render pipeline.
//!
//! One GET per invocation, caches bypassed, then two projections of the
//! same document: the raw pretty-printed JSON and the key table. Both
//! replace whatever the sink held before, so re-running an identical
//! fetch is idempotent.

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde_json::Value;

use crate::core::listing::{project_rows, KeyRow};
use crate::core::sink::OutputSink;
use crate::error::{KeydashError, Result};

/// Key listing fetch client.
pub struct Fetcher {
    http: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// `Cache-Control: no-store` forces a fresh document from origin on
    /// every call. Non-2xx fails with the status before the body is
    /// interpreted.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!(%url, "fetching key listing");
        let res = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(KeydashError::Fetch(status.as_u16()));
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// What a successful fetch produced.
#[derive(Debug)]
pub struct Rendered {
    pub doc: Value,
    pub rows: Option<Vec<KeyRow>>,
}

/// Fetch a key listing document and push it through the sink.
///
/// The URL must be non-empty after trimming; otherwise no request is
/// made. On success the sink receives the pretty-printed document and
/// the table rows (or a hidden table when the document has no `keys`
/// array). On any error the sink is left untouched.
pub async fn fetch_and_render<S: OutputSink>(
    fetcher: &Fetcher,
    raw_url: &str,
    sink: &mut S,
) -> Result<Rendered> {
    let url = raw_url.trim();
    if url.is_empty() {
        return Err(KeydashError::MissingField("url"));
    }

    let doc = fetcher.fetch(url).await?;

    sink.set_raw_output(&serde_json::to_string_pretty(&doc)?);
    let rows = project_rows(&doc);
    sink.set_table_rows(rows.clone());

    Ok(Rendered { doc, rows })
}
