//! Shared CLI output helpers for consistent terminal output.
//!
//! Styling goes through `console`, which respects NO_COLOR and
//! non-terminal stdout on its own.
//!
//! - Green: success, commands
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers, values
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

use crate::core::listing::KeyRow;
use crate::core::sink::{OutputSink, Status};

const RULE_WIDTH: usize = 56;

const TABLE_HEADERS: [&str; 5] = ["#", "key", "expires (PHT)", "expires (unix)", "tag"];

/// Print a success message with checkmark (green).
///
/// Example: `✓ workflow dispatched`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ fetch failed: HTTP 404`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --token or set KEYDASH_TOKEN`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  unit:  days`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value.to_string()).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a command string in green for inline use.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Terminal implementation of [`OutputSink`].
///
/// Status lines go through [`success`]/[`error`]; the raw document and
/// the key table print as sections. A hidden table prints a dimmed note
/// instead of nothing, so the command never ends silently.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn set_status(&mut self, status: Status) {
        if status.message.is_empty() {
            return;
        }
        if status.success {
            success(&status.message);
        } else {
            error(&status.message);
        }
    }

    fn set_raw_output(&mut self, text: &str) {
        section("Document");
        println!("{text}");
    }

    fn set_table_rows(&mut self, rows: Option<Vec<KeyRow>>) {
        let Some(rows) = rows else {
            println!();
            dimmed("no key listing in this document");
            return;
        };

        section("Keys");
        if rows.is_empty() {
            dimmed("(no keys)");
            return;
        }
        print_table(&rows);
    }
}

fn print_table(rows: &[KeyRow]) {
    let mut widths = TABLE_HEADERS.map(str::len);
    for row in rows {
        widths[0] = widths[0].max(row.index.to_string().len());
        widths[1] = widths[1].max(row.key.len());
        widths[2] = widths[2].max(row.expires_pht.len());
        widths[3] = widths[3].max(row.expires_unix.len());
        widths[4] = widths[4].max(row.tag.len());
    }

    let header_line = TABLE_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", style(header_line).bold());

    for row in rows {
        println!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}  {:<w4$}",
            row.index,
            row.key,
            row.expires_pht,
            row.expires_unix,
            row.tag,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        );
    }
}
