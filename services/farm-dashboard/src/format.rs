//! Display formatting for counters, timestamps, durations and flag statuses

use std::fmt;

use chrono::{DateTime, SecondsFormat};

/// Placeholder shown for absent optional fields
pub const PLACEHOLDER: &str = "-";

/// Lifecycle status of a submitted flag, indexed by the server's ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStatus {
    Pending,
    Queued,
    Unknown,
    Accepted,
    Rejected,
}

impl FlagStatus {
    const ALL: [FlagStatus; 5] = [
        FlagStatus::Pending,
        FlagStatus::Queued,
        FlagStatus::Unknown,
        FlagStatus::Accepted,
        FlagStatus::Rejected,
    ];

    /// Absent or out-of-range ordinals map to `Unknown`
    pub fn from_ordinal(ordinal: Option<i64>) -> Self {
        ordinal
            .and_then(|o| usize::try_from(o).ok())
            .and_then(|o| Self::ALL.get(o).copied())
            .unwrap_or(FlagStatus::Unknown)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FlagStatus::Pending => "🕑",
            FlagStatus::Queued => "⌛",
            FlagStatus::Unknown => "❔",
            FlagStatus::Accepted => "✅",
            FlagStatus::Rejected => "⛔",
        }
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagStatus::Pending => write!(f, "Pending"),
            FlagStatus::Queued => write!(f, "Queued"),
            FlagStatus::Unknown => write!(f, "Unknown"),
            FlagStatus::Accepted => write!(f, "Accepted"),
            FlagStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Left-pad `value` with zeros to at least `width` characters, never truncating
pub fn zero_pad(width: usize, value: u64) -> String {
    format!("{:0>width$}", value, width = width)
}

/// Render a duration in seconds as `MM:SS`.
///
/// The value is rounded half-up to whole seconds first; minutes grow past
/// two digits rather than wrapping. Negative or non-finite input renders as
/// `00:00`.
pub fn format_duration(seconds: f64) -> String {
    let rounded = (seconds + 0.5).floor();
    let total = if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    };
    format!("{}:{}", zero_pad(2, total / 60), zero_pad(2, total % 60))
}

/// Render seconds since the epoch as an ISO-8601 UTC instant with milliseconds.
///
/// Returns `None` when the instant is outside the representable range.
pub fn format_timestamp(seconds: f64) -> Option<String> {
    let millis = (seconds * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Page counter label, one-based for display
pub fn page_label(page: u64) -> String {
    format!("Page {}", zero_pad(2, page + 1))
}
