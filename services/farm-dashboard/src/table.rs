//! Flags table rendering
//!
//! Produces the complete replacement markup for the flags container. Rows
//! keep the server's order. Untrusted text goes through the injected
//! [`Sanitizer`]; everything else is a formatted number or a fixed glyph.

use crate::api::FlagEntry;
use crate::format::{format_duration, format_timestamp, FlagStatus, PLACEHOLDER};
use crate::sanitize::Sanitizer;

/// Markup shown instead of a table when a page has no flags
pub const NO_DATA: &str = "<p> No data to show :( </p>";

pub const HEADERS: [&str; 7] = [
    "Status",
    "Exploit",
    "Flag",
    "Timestamp",
    "Lifetime",
    "Submission Timestamp",
    "System Message",
];

/// CSS class for a header cell: lower-cased, spaces replaced by hyphens
pub fn header_class(header: &str) -> String {
    header.to_lowercase().replace(' ', "-")
}

/// Render a page of flags as a full table, or the no-data placeholder
pub fn render(entries: &[FlagEntry], sanitizer: &dyn Sanitizer) -> String {
    if entries.is_empty() {
        return NO_DATA.to_string();
    }

    let mut html = String::from("<table>");
    html.push_str(&render_header());
    html.push_str("<tbody>");
    for entry in entries {
        html.push_str(&render_row(entry, sanitizer));
    }
    html.push_str("</tbody></table>");
    html
}

fn render_header() -> String {
    let cells: String = HEADERS
        .iter()
        .map(|h| format!(r#"<th class="{}">{}</th>"#, header_class(h), h))
        .collect();
    format!("<thead><tr>{}</tr></thead>", cells)
}

fn render_row(entry: &FlagEntry, sanitizer: &dyn Sanitizer) -> String {
    let status = FlagStatus::from_ordinal(entry.status).glyph();
    let exploit = sanitizer.sanitize(&entry.exploit);
    let flag = sanitizer.sanitize(&entry.flag);
    let timestamp = format_timestamp(entry.timestamp).unwrap_or_else(|| PLACEHOLDER.to_string());
    let lifetime = format_duration(entry.lifetime);

    // zero and empty values count as absent
    let submission_timestamp = entry
        .submission_timestamp
        .filter(|ts| *ts != 0.0)
        .and_then(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let system_message = entry
        .system_message
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| sanitizer.sanitize(m))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        status, exploit, flag, timestamp, lifetime, submission_timestamp, system_message
    )
}
