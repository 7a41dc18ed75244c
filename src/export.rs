//! Printable schedule tables.
//!
//! Flattens schedule entries into one row per break group, the shape a
//! document exporter lays out. Entries are numbered the way the list
//! shows them: newest first, with the newest carrying the highest number.
//!
//! All cell text is plain: formatted times and names, no markup.

use serde::Serialize;

use crate::models::ScheduleEntry;

/// One table row: a break group within a shift period of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Display number of the owning entry.
    pub entry_number: usize,
    /// Role of the owning entry.
    pub role: String,
    /// Zone of the owning entry.
    pub zone: String,
    /// Location of the owning entry.
    pub location: String,
    /// Captain of the owning entry.
    pub captain: String,
    /// Shift period label.
    pub shift: String,
    /// Shift time range.
    pub time: String,
    /// `"HH:MM - HH:MM"` or `"-"`.
    pub break_window: String,
    /// Names joined with `", "`.
    pub names: String,
}

const HEADERS: [&str; 4] = ["Shift", "Time", "Break", "Names"];

/// Flattens entries (newest first) into rows.
pub fn rows(entries: &[ScheduleEntry]) -> Vec<ScheduleRow> {
    let total = entries.len();
    entries
        .iter()
        .enumerate()
        .flat_map(|(idx, entry)| {
            let entry_number = total - idx;
            entry
                .shifts
                .periods()
                .into_iter()
                .flat_map(move |(period, result)| {
                    result.groups().iter().map(move |group| ScheduleRow {
                        entry_number,
                        role: entry.role.clone(),
                        zone: entry.zone.clone(),
                        location: entry.location.clone(),
                        captain: entry.captain.clone(),
                        shift: period.label().to_string(),
                        time: period.time_range().to_string(),
                        break_window: group.break_label(),
                        names: group.names.join(", "),
                    })
                })
        })
        .collect()
}

/// Renders entries as a plain-text document, one titled table per entry.
pub fn render_text(entries: &[ScheduleEntry]) -> String {
    let rows = rows(entries);
    let mut out = String::new();
    let total = entries.len();

    for (idx, entry) in entries.iter().enumerate() {
        let number = total - idx;
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("#{number} - Role: {}\n", entry.role));
        let context: Vec<String> = [
            ("Location", &entry.location),
            ("Zone", &entry.zone),
            ("Captain", &entry.captain),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
        if !context.is_empty() {
            out.push_str(&context.join(" | "));
            out.push('\n');
        }

        let cells: Vec<[&str; 4]> = rows
            .iter()
            .filter(|r| r.entry_number == number)
            .map(|r| {
                [
                    r.shift.as_str(),
                    r.time.as_str(),
                    r.break_window.as_str(),
                    r.names.as_str(),
                ]
            })
            .collect();
        out.push_str(&render_table(&cells));
    }
    out
}

fn render_table(cells: &[[&str; 4]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |row: &[&str; 4]| {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };
    let rule = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = rule.clone();
    out.push_str(&line(&HEADERS));
    out.push_str(&rule);
    for row in cells {
        out.push_str(&line(row));
    }
    out.push_str(&rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{assemble_entry, BreakPlanner, EntryRequest};

    fn sample_entries() -> Vec<ScheduleEntry> {
        let planner = BreakPlanner::new();
        // newest first, as kept by the application state
        vec![
            assemble_entry(
                &planner,
                &EntryRequest::new("Visa")
                    .at("Expo", "Hall B", "Fay")
                    .with_full_day_names("X, Y, Z")
                    .with_break("4", "30"),
            ),
            assemble_entry(
                &planner,
                &EntryRequest::new("Registers").with_split_names("Alice, Bob", ""),
            ),
        ]
    }

    #[test]
    fn test_rows_per_group() {
        let rows = rows(&sample_entries());
        // full day: 2 groups; split: morning 1 + afternoon 1 (empty)
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].entry_number, 2);
        assert_eq!(rows[0].shift, "Full Day");
        assert_eq!(rows[0].time, "08:00 - 18:00");
        assert_eq!(rows[0].break_window, "12:00 - 12:30");
        assert_eq!(rows[0].names, "X, Y");
        assert_eq!(rows[1].break_window, "12:30 - 13:00");
        assert_eq!(rows[1].names, "Z");
        assert_eq!(rows[1].captain, "Fay");

        assert_eq!(rows[2].entry_number, 1);
        assert_eq!(rows[2].shift, "Morning");
        assert_eq!(rows[2].break_window, "-");
        assert_eq!(rows[2].names, "Alice, Bob");
        assert_eq!(rows[3].shift, "Afternoon");
        assert_eq!(rows[3].names, "");
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_entries());
        assert!(text.starts_with("#2 - Role: Visa\nLocation: Expo | Zone: Hall B | Captain: Fay\n"));
        assert!(text.contains("#1 - Role: Registers\n+"));
        assert!(text.contains("| Full Day | 08:00 - 18:00 | 12:00 - 12:30 | X, Y  |"));
        assert!(text.contains("| Morning   | 07:00 - 12:00 | -     | Alice, Bob |"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&[]), "");
        assert!(rows(&[]).is_empty());
    }
}
