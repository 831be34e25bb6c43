//! Formatting of POI metadata into display payloads
//!
//! User-authored POIs carry only a description while provider POIs carry an
//! arbitrary tag set. Both are rendered into the same title + HTML body shape
//! so the display collaborator never has to care where a POI came from.

use crate::core::constants::{NO_ADDITIONAL_DETAILS, NO_DESCRIPTION, RELEVANT_TAGS};
use crate::poi::place::Poi;
use serde::{Deserialize, Serialize};

/// What the info panel shows for a selected POI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    pub title: String,
    pub body_html: String,
}

/// Pure formatting functions. Never fails; missing fields fall back to fixed text.
///
/// Every value placed in `body_html` is HTML-escaped, the description
/// included: provider POIs take their description from the `description` tag,
/// so it is no more trusted than the other tag values. A configured
/// description containing `&` or markup therefore renders as literal text.
pub struct PlaceFormatter;

impl PlaceFormatter {
    pub fn format(poi: &Poi) -> DisplayPayload {
        let mut body = escape_html(description(poi));

        if let Some(details) = details(poi) {
            body.push_str("<br><br><strong>Details:</strong><br>");
            if details.is_empty() {
                body.push_str("<br>");
                body.push_str(NO_ADDITIONAL_DETAILS);
            }
            for (label, value) in details {
                body.push_str(&format!(
                    "<br><strong>{}</strong>: {}",
                    escape_html(&label),
                    escape_html(value)
                ));
            }
        }

        DisplayPayload {
            title: poi.name.clone(),
            body_html: body,
        }
    }

    /// Same content as [`PlaceFormatter::format`] without markup, one entry per line.
    pub fn format_text(poi: &Poi) -> String {
        let mut lines = vec![poi.name.clone(), description(poi).to_string()];

        if let Some(details) = details(poi) {
            lines.push(String::new());
            lines.push("Details:".to_string());
            if details.is_empty() {
                lines.push(NO_ADDITIONAL_DETAILS.to_string());
            }
            lines.extend(
                details
                    .into_iter()
                    .map(|(label, value)| format!("{}: {}", label, value)),
            );
        }

        lines.join("\n")
    }

    /// Display label for a tag key: `addr:*` becomes `Address: *`.
    pub fn tag_label(key: &str) -> String {
        match key.strip_prefix("addr:") {
            Some(rest) => format!("Address: {}", rest),
            None => key.to_string(),
        }
    }
}

fn description(poi: &Poi) -> &str {
    match poi.description.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => NO_DESCRIPTION,
    }
}

/// Recognised tags in priority order, or `None` when the POI has no tag set.
fn details(poi: &Poi) -> Option<Vec<(String, &str)>> {
    let tags = poi.tags.as_ref()?;
    Some(
        RELEVANT_TAGS
            .iter()
            .filter_map(|key| match tags.get(*key) {
                Some(value) if !value.is_empty() => {
                    Some((PlaceFormatter::tag_label(key), value.as_str()))
                }
                _ => None,
            })
            .collect(),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
