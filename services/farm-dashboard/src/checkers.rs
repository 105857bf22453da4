//! Checker selection list reconciliation
//!
//! The list is rebuilt from scratch on every refresh. Checkers carry no id,
//! so `delta` identifies an option: the operator's selection is carried over
//! by delta value and silently falls back to the placeholder when that delta
//! is gone. Two checkers sharing a delta alias each other; the last one in
//! the server's order wins the re-selection.

use crate::api::CheckerEntry;
use crate::sanitize::Sanitizer;
use crate::validate::{is_delta_valid, is_port_valid, is_service_valid};

pub const PLACEHOLDER_LABEL: &str = "Select a checker";

/// A selectable checker: its identifying delta and display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOption {
    pub delta: i64,
    pub label: String,
}

/// Rendered checker options plus the selected position.
///
/// Position 0 is always the non-selectable placeholder, so option `i` of
/// [`CheckerList::options`] sits at position `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerList {
    options: Vec<CheckerOption>,
    selected: usize,
}

impl CheckerList {
    pub fn options(&self) -> &[CheckerOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Delta of the selected checker, `None` while the placeholder is selected
    pub fn selected_delta(&self) -> Option<i64> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|o| o.delta)
    }

    /// Select the last option with the given delta. Returns false and keeps
    /// the current selection when no option matches.
    pub fn select(&mut self, delta: i64) -> bool {
        match self.options.iter().rposition(|o| o.delta == delta) {
            Some(i) => {
                self.selected = i + 1;
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = 0;
    }

    /// `<option>` markup for the selector element
    pub fn to_markup(&self) -> String {
        let mut html = format!(
            r#"<option value="" disabled hidden{}>{}</option>"#,
            selected_attr(self.selected == 0),
            PLACEHOLDER_LABEL
        );
        for (i, option) in self.options.iter().enumerate() {
            html.push_str(&format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.delta,
                selected_attr(self.selected == i + 1),
                option.label
            ));
        }
        html
    }
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

/// Build the option for a checker, or `None` if it is not fit for display
pub fn checker_option(entry: &CheckerEntry, sanitizer: &dyn Sanitizer) -> Option<CheckerOption> {
    let service = sanitizer.sanitize(entry.service.as_deref().unwrap_or_default());
    let port = entry.port_number();
    let delta = entry.delta_number();

    if !is_port_valid(port) || !is_delta_valid(delta) || !is_service_valid(&service) {
        return None;
    }

    let delta = delta as i64;
    Some(CheckerOption {
        delta,
        label: format!("{} ({}) - {}", service, port as u16, delta),
    })
}

/// Replace the list with `entries`, re-selecting `previous` by delta if it survives
pub fn rebuild(
    entries: &[CheckerEntry],
    previous: Option<i64>,
    sanitizer: &dyn Sanitizer,
) -> CheckerList {
    let options: Vec<CheckerOption> = entries
        .iter()
        .filter_map(|entry| {
            let option = checker_option(entry, sanitizer);
            if option.is_none() {
                tracing::debug!("Dropping invalid checker {:?}", entry);
            }
            option
        })
        .collect();

    let mut list = CheckerList {
        options,
        selected: 0,
    };
    if let Some(delta) = previous {
        if !list.select(delta) {
            tracing::debug!("Selected checker {} no longer listed", delta);
        }
    }
    list
}
