//! Keydash - trigger the key-generation workflow and render key listings.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── trigger       # Dispatch the remote key-generation workflow
//! │   ├── fetch         # Fetch and render a key listing document
//! │   ├── completions   # Shell completions
//! │   └── output        # Shared terminal output helpers + console sink
//! └── core/             # Core library components
//!     ├── constants     # API base, pinned dispatch route, defaults
//!     ├── form          # Typed input collection and validation
//!     ├── dispatch      # Authenticated workflow-dispatch client
//!     ├── fetch         # Document fetch and render pipeline
//!     ├── listing       # Key listing projection and escaping
//!     └── sink          # Output sink abstraction (console / in-memory)
//! ```
//!
//! # Features
//!
//! - Single-shot authenticated workflow dispatch with fail-fast validation
//! - Cache-bypassing fetch of the published key listing JSON
//! - Tabular projection of generated keys with terminal-safe escaping
//! - Swappable output sink for headless use and testing

pub mod cli;
pub mod core;
pub mod error;
