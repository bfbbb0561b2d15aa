//! Typed input collection and validation.
//!
//! Mirrors the input surface of the original page: nine free-text fields
//! for the trigger action and one URL for the fetch action. Validation
//! happens here, before any network I/O, so a missing field can never
//! cause a partial dispatch.

use zeroize::Zeroizing;

use crate::core::constants::{DEFAULT_REF, DEFAULT_WORKFLOW};
use crate::core::dispatch::{DispatchBody, DispatchInputs, DispatchRequest};
use crate::error::{KeydashError, Result};

/// Raw trigger inputs as entered, untrimmed.
#[derive(Debug)]
pub struct TriggerForm {
    pub owner: String,
    pub repo: String,
    pub git_ref: String,
    pub workflow: String,
    pub token: Zeroizing<String>,
    pub unit: String,
    pub amount: String,
    pub count: String,
    pub tag: String,
}

impl TriggerForm {
    /// Validate and convert into a dispatch request.
    ///
    /// Owner, repo, and token must be non-empty after trimming; the first
    /// missing one is reported. Blank ref/workflow fall back to their
    /// defaults. The owner/repo values are required but do not feed the
    /// dispatch route, which is pinned (see `core::constants`).
    pub fn to_request(&self) -> Result<DispatchRequest> {
        require(&self.owner, "owner")?;
        require(&self.repo, "repo")?;
        require(&self.token, "token")?;

        let git_ref = or_default(&self.git_ref, DEFAULT_REF);
        let workflow = or_default(&self.workflow, DEFAULT_WORKFLOW);

        Ok(DispatchRequest {
            workflow,
            token: Zeroizing::new(self.token.trim().to_string()),
            body: DispatchBody {
                git_ref,
                inputs: DispatchInputs {
                    unit: self.unit.trim().to_string(),
                    amount: self.amount.trim().to_string(),
                    count: self.count.trim().to_string(),
                    tag: self.tag.trim().to_string(),
                },
            },
        })
    }
}

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KeydashError::MissingField(field));
    }
    Ok(())
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
