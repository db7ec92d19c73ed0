//! History page assembly: one row per audit record, then pagination.

use movehist_core::{AuditRecord, HistoryPage, HistoryRow};
use movehist_format::{format_date_time, format_full_name};

use crate::registry::TemplateRegistry;

/// Shown in the "modified by" column for system-initiated changes.
pub const SYSTEM_USER: &str = "MilMove";

/// Full name of the session user, or [`SYSTEM_USER`].
#[must_use]
pub fn modified_by(record: &AuditRecord) -> String {
    format_full_name(
        record.session_user_first_name.as_deref(),
        record.session_user_last_name.as_deref(),
    )
    .unwrap_or_else(|| SYSTEM_USER.to_string())
}

#[must_use]
pub fn render_row(registry: &TemplateRegistry, record: &AuditRecord) -> HistoryRow {
    let display = registry.render(record);
    HistoryRow {
        id: record.id.clone(),
        date: format_date_time(record.action_tstamp_tx),
        event_name: display.event_name,
        details: display.details,
        modified_by: modified_by(record),
    }
}

/// Render records in the order given.
#[must_use]
pub fn render_history(registry: &TemplateRegistry, records: &[AuditRecord]) -> Vec<HistoryRow> {
    records.iter().map(|record| render_row(registry, record)).collect()
}

/// Slice rows into a 1-based page. Page `0` is treated as page `1` and
/// `per_page` is at least `1`; a page past the end is empty.
#[must_use]
pub fn paginate(rows: Vec<HistoryRow>, page: u32, per_page: u32) -> HistoryPage {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_count = rows.len();
    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let rows = rows
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();
    HistoryPage {
        page,
        per_page,
        total_count,
        rows,
    }
}
