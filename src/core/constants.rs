//! Constants used throughout keydash.
//!
//! Centralizes magic strings and configuration values.

/// GitHub REST API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// Owner segment of the dispatch route.
///
/// The dispatch URL is pinned to this repository regardless of the
/// owner/repo entered on the command line; those values are collected
/// and validated but never spliced into the route. See DESIGN.md.
pub const ROUTE_OWNER: &str = "keysmith-ops";

/// Repository segment of the dispatch route. See [`ROUTE_OWNER`].
pub const ROUTE_REPO: &str = "key-generator";

/// Workflow file dispatched when none is given.
pub const DEFAULT_WORKFLOW: &str = "generate-keys.yml";

/// Git ref dispatched against when none is given.
pub const DEFAULT_REF: &str = "main";

/// Accept header for the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Pinned GitHub REST API version header value.
pub const GITHUB_API_VERSION: &str = "2022-11-28";
