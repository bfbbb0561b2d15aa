//! Trigger command - dispatch the remote key-generation workflow.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants::{DEFAULT_REF, DEFAULT_WORKFLOW, GITHUB_API};
use crate::core::dispatch::{trigger_workflow, Dispatcher};
use crate::core::form::TriggerForm;
use crate::error::Result;

/// Arguments for `keydash trigger`.
#[derive(clap::Args, Debug)]
pub struct TriggerArgs {
    /// Repository owner (recorded with the request)
    #[arg(long)]
    pub owner: String,

    /// Repository name (recorded with the request)
    #[arg(long)]
    pub repo: String,

    /// Branch or tag to run the workflow from
    #[arg(long = "ref", default_value = DEFAULT_REF)]
    pub git_ref: String,

    /// Workflow file to dispatch
    #[arg(long, default_value = DEFAULT_WORKFLOW)]
    pub workflow: String,

    /// GitHub token (falls back to a prompt when omitted)
    #[arg(long, env = "KEYDASH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Validity unit (days|weeks|months|years)
    #[arg(long)]
    pub unit: String,

    /// How many units the keys stay valid
    #[arg(long)]
    pub amount: String,

    /// How many keys to generate
    #[arg(long)]
    pub count: String,

    /// Optional tag/label for the run
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Override the API base URL
    #[arg(long, hide = true, default_value = GITHUB_API)]
    pub api_url: String,
}

/// Dispatch the workflow.
pub async fn execute(args: TriggerArgs) -> Result<()> {
    let token = resolve_token(args.token)?;

    let form = TriggerForm {
        owner: args.owner,
        repo: args.repo,
        git_ref: args.git_ref,
        workflow: args.workflow,
        token,
        unit: args.unit,
        amount: args.amount,
        count: args.count,
        tag: args.tag,
    };

    let dispatcher = Dispatcher::with_base_url(&args.api_url);
    trigger_workflow(&dispatcher, &form).await?;

    output::success("workflow dispatched");
    output::hint(&format!(
        "fetch the listing once the run finishes: {}",
        output::cmd("keydash fetch <url>")
    ));
    Ok(())
}

/// Token from the flag or env var, else a hidden prompt on a terminal.
/// Left empty otherwise so validation reports the missing field.
fn resolve_token(flag: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(token) = flag {
        return Ok(Zeroizing::new(token));
    }
    if io::stdin().is_terminal() {
        let token = Password::new().with_prompt("GitHub token").interact()?;
        return Ok(Zeroizing::new(token));
    }
    Ok(Zeroizing::new(String::new()))
}
