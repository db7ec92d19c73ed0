//! Plain aligned tables for terminal output.

/// Narrowest a column is ever squeezed to.
const MIN_COLUMN: usize = 6;

const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under a header line and a dashed divider.
///
/// Widths are measured in chars. When `max_width` is set, the widest
/// column gives up one char at a time until the table fits or every
/// column is at its floor.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = natural_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        let text = truncate_text(header, *width);
        pad(&text, &text, *width, false)
    }));
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let value = row.get(index).map_or("-", String::as_str);
            let text = truncate_text(value, *width);
            let shown = if options.color {
                colorize_event(&text)
            } else {
                text.clone()
            };
            pad(&shown, &text, *width, looks_numeric(&text))
        })));
    }
    lines.join("\n")
}

fn natural_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect()
}

fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP)
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '$'))
}

/// Pad `shown` to `width` using the visible length of `plain`.
fn pad(shown: &str, plain: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(plain.chars().count()));
    if right_align {
        format!("{fill}{shown}")
    } else {
        format!("{shown}{fill}")
    }
}

/// Color a cell by the verb it starts with.
fn colorize_event(value: &str) -> String {
    let verb = value
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let code = match verb.as_str() {
        "approved" | "created" | "submitted" | "added" | "uploaded" => "32",
        "requested" | "flagged" | "updated" | "undefined" => "33",
        "rejected" | "denied" | "canceled" | "deleted" | "removed" | "terminated" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_on_mixed_widths() {
        let headers = ["date", "event", "modified_by"];
        let rows = vec![
            vec!["18 Oct 22 14:05".to_string(), "Approved move".to_string(), "MilMove".to_string()],
            vec![
                "-".to_string(),
                "Updated shipment".to_string(),
                "Leo Spaceman".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let column = lines[0].find("event").expect("event header");
        assert_eq!(lines[2].find("Approved"), Some(column));
        assert_eq!(lines[3].find("Updated"), Some(column));
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        assert_eq!(truncate_text("Updated shipment", 8), "Updated…");
        assert_eq!(truncate_text("short", 8), "short");
    }

    #[test]
    fn amounts_are_right_aligned() {
        assert_eq!(pad("$1,234.99", "$1,234.99", 12, true), "   $1,234.99");
        assert!(!looks_numeric("18 Oct 22"));
    }

    #[test]
    fn event_colors_follow_leading_verb() {
        assert!(colorize_event("Approved move").starts_with("\u{1b}[32m"));
        assert!(colorize_event("Rejected service item").starts_with("\u{1b}[31m"));
        assert_eq!(colorize_event("Reviewed weights"), "Reviewed weights");
    }

    #[test]
    fn widths_shrink_to_fit_terminal() {
        let headers = ["event", "details"];
        let rows = vec![vec![
            "Updated shipment".to_string(),
            "Counselor remarks: please call before arriving".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }
}
