//! Authenticated workflow-dispatch client.
//!
//! One invocation is one POST to the GitHub workflow-dispatch endpoint.
//! Fail-fast: no retry, no backoff, no timeout. A non-2xx response reads
//! the full body first so the error is self-describing.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::constants::{GITHUB_ACCEPT, GITHUB_API, GITHUB_API_VERSION, ROUTE_OWNER, ROUTE_REPO};
use crate::core::form::TriggerForm;
use crate::error::{KeydashError, Result};

/// The four free-text workflow inputs.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchInputs {
    pub unit: String,
    pub amount: String,
    pub count: String,
    pub tag: String,
}

/// JSON body of a workflow-dispatch call.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchBody {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub inputs: DispatchInputs,
}

/// A validated, ready-to-send dispatch.
#[derive(Debug)]
pub struct DispatchRequest {
    pub workflow: String,
    pub token: Zeroizing<String>,
    pub body: DispatchBody,
}

/// Workflow-dispatch HTTP client.
pub struct Dispatcher {
    http: Client,
    base_url: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API)
    }

    /// Point the dispatch at a different API base. Used by tests and the
    /// hidden `--api-url` override.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Issue the dispatch POST.
    ///
    /// The route is pinned to `ROUTE_OWNER/ROUTE_REPO`; only the workflow
    /// file segment varies. Succeeds on any 2xx. On a non-2xx response the
    /// body text is read in full and carried in the error.
    pub async fn dispatch(&self, request: &DispatchRequest) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.base_url, ROUTE_OWNER, ROUTE_REPO, request.workflow
        );
        tracing::debug!(%url, git_ref = %request.body.git_ref, "dispatching workflow");

        let res = self
            .http
            .post(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(request.token.as_str())
            .json(&request.body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            tracing::debug!(status = status.as_u16(), "dispatch rejected");
            return Err(KeydashError::Dispatch {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Validate the form and dispatch the workflow. The whole trigger action:
/// no network I/O happens unless validation passes.
pub async fn trigger_workflow(dispatcher: &Dispatcher, form: &TriggerForm) -> Result<()> {
    let request = form.to_request()?;
    dispatcher.dispatch(&request).await
}
