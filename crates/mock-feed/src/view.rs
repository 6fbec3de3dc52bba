//! Render-ready view model for the presentation layer.
//!
//! The presentation layer consumes plain data: one [`SummaryRow`] per
//! message and at most one [`DetailCard`] for the current selection.
//! Drawing and styling stay outside this crate; the widget host maps rows
//! to table rows and the card to its detail panel, emitting
//! [`Selection::select`] on row activation and [`Selection::clear`] on
//! dismissal.

use chrono::DateTime;

use crate::dataset::Dataset;
use crate::record::Message;
use crate::selection::Selection;

/// Threshold above which message previews are truncated.
pub const PREVIEW_LIMIT: usize = 20;

/// Characters kept before the ellipsis marker in a truncated preview.
const PREVIEW_KEEP: usize = 19;

/// Truncates a message body for the summary table.
///
/// Strings longer than [`PREVIEW_LIMIT`] characters are cut to the first
/// nineteen characters plus `"..."` (22 characters total). Shorter
/// strings are returned unchanged; the original left that case undefined,
/// which downstream rendering cannot tolerate.
///
/// # Example
///
/// ```
/// use mock_feed::preview;
///
/// assert_eq!(preview("The quick brown fox"), "The quick brown fox");
/// assert_eq!(preview("The quick brown fox jumps"), "The quick brown fox...");
/// ```
#[must_use]
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LIMIT {
        let head: String = text.chars().take(PREVIEW_KEEP).collect();
        format!("{head}...")
    } else {
        text.to_owned()
    }
}

/// Renders a millisecond timestamp in the UTC table format,
/// e.g. `Wed, 10 Oct 2018 23:45:00 GMT`.
#[must_use]
pub fn format_stamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || String::from("invalid timestamp"),
        |at| at.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
    )
}

/// One summary table row, pairing a message with its user by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Pairing identifier, forwarded to [`Selection::select`] on row
    /// activation.
    pub id: u64,
    /// Message timestamp in table format.
    pub message_date: String,
    /// Paired user's display name.
    pub user_name: String,
    /// Paired user's ranking level.
    pub user_level: u64,
    /// Originating site.
    pub site: String,
    /// Message author display name.
    pub message_user: String,
    /// Truncated message body.
    pub message_preview: String,
    /// Truncated comment body.
    pub comment_preview: String,
    /// Error column text, always populated.
    pub error_text: String,
    /// True while this row's detail panel is open.
    pub detail_visible: bool,
}

/// The expanded detail panel for one selected message and its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    /// Pairing identifier of the selected message.
    pub id: u64,
    /// Full message body.
    pub message: String,
    /// Originating site.
    pub site: String,
    /// Message author display name.
    pub user: String,
    /// Per-message numeric token.
    pub msg_id: u64,
    /// Message timestamp in table format.
    pub message_date: String,
    /// Full comment body.
    pub comment: String,
    /// Error text, always populated.
    pub error_text: String,
    /// Paired user's avatar image URL.
    pub avatar_url: String,
    /// Paired user's country.
    pub country: String,
    /// Paired user's points.
    pub points: u64,
    /// Paired user's gold membership flag.
    pub is_gold: bool,
    /// Paired user's timestamp in table format.
    pub user_date: String,
    /// Paired user's league.
    pub league: String,
    /// Paired user's ranking level.
    pub level: u64,
    /// Paired user's display name.
    pub name: String,
}

/// Builds one summary row per message, in generation order.
///
/// A message without a paired user cannot occur in a generated dataset;
/// if one ever appears it is logged and skipped rather than rendered
/// half-empty.
#[must_use]
pub fn summary_rows(dataset: &Dataset, selection: &Selection) -> Vec<SummaryRow> {
    dataset
        .messages()
        .iter()
        .filter_map(|message| {
            let Some(user) = dataset.user_for(message.id) else {
                tracing::warn!(id = message.id, "message has no paired user; skipping row");
                return None;
            };

            Some(SummaryRow {
                id: message.id,
                message_date: format_stamp(message.stamp),
                user_name: user.name.clone(),
                user_level: user.ranking.level,
                site: message.site.clone(),
                message_user: message.user.clone(),
                message_preview: preview(&message.message),
                comment_preview: preview(&message.comment),
                error_text: error_text(message),
                detail_visible: selection.is_selected(message.id),
            })
        })
        .collect()
}

/// Builds the detail card for the current selection, if any.
///
/// Returns `None` when nothing is selected or the selected identifier no
/// longer matches a message.
#[must_use]
pub fn detail_card(dataset: &Dataset, selection: &Selection) -> Option<DetailCard> {
    let id = selection.selected()?;
    let message = dataset.message_for(id)?;
    let user = dataset.user_for(id)?;

    Some(DetailCard {
        id,
        message: message.message.clone(),
        site: message.site.clone(),
        user: message.user.clone(),
        msg_id: message.msg_id,
        message_date: format_stamp(message.stamp),
        comment: message.comment.clone(),
        error_text: error_text(message),
        avatar_url: user.url.clone(),
        country: user.country.clone(),
        points: user.points,
        is_gold: user.is_gold,
        user_date: format_stamp(user.stamp),
        league: user.ranking.league.clone(),
        level: user.ranking.level,
        name: user.name.clone(),
    })
}

/// Formats the error column text for a message.
fn error_text(message: &Message) -> String {
    message.error.as_ref().map_or_else(
        || String::from("Error: No error"),
        |payload| format!("Error: {}", payload.join(",")),
    )
}
