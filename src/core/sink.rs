//! Output sink abstraction.
//!
//! Handlers write their results through [`OutputSink`] instead of printing
//! directly, so the same pipeline drives the terminal and the in-memory
//! fake used by tests. Each region holds the last value written to it.

use crate::core::listing::KeyRow;

/// A transient status line: message plus ok/err styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub success: bool,
}

impl Status {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Destination for handler output.
///
/// `set_table_rows(None)` hides the table; `Some(vec![])` shows it empty.
/// Every setter replaces the previous contents of its region.
pub trait OutputSink {
    fn set_status(&mut self, status: Status);
    fn set_raw_output(&mut self, text: &str);
    fn set_table_rows(&mut self, rows: Option<Vec<KeyRow>>);
}

/// In-memory sink recording the last write to each region.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub status: Option<Status>,
    pub raw_output: Option<String>,
    pub table_rows: Option<Vec<KeyRow>>,
}

impl OutputSink for MemorySink {
    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    fn set_raw_output(&mut self, text: &str) {
        self.raw_output = Some(text.to_string());
    }

    fn set_table_rows(&mut self, rows: Option<Vec<KeyRow>>) {
        self.table_rows = rows;
    }
}
