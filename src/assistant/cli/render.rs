//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text. Every `render_*` function returns
//! a `String` so output can be checked without a terminal; colors come from
//! `colored` and vanish automatically when stdout is not a TTY.
//!
//! Column layout uses display width (`unicode-width`), not byte or char
//! counts, so names in any script line up.

use assistant::api::{CmdMessage, CmdResult, MessageLevel};
use assistant::book::{SharedBirthday, UpcomingBirthday};
use assistant::fields::format_birthday;
use assistant::model::{Note, Record};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;
const EMPTY_CELL: &str = "-";

/// Everything in a result, data first and messages last.
pub fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();
    for line in &result.lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&render_contacts(&result.listed_contacts));
    out.push_str(&render_notes(&result.listed_notes));
    out.push_str(&render_note_groups(&result.note_groups));
    out.push_str(&render_upcoming(&result.upcoming_birthdays));
    out.push_str(&render_shared(&result.shared_birthdays));
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// Contacts as an aligned table: name, phones, birthday, email.
pub fn render_contacts(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let header = ["Name", "Phones", "Birthday", "Email"].map(String::from);
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.name().to_string(),
                r.phones_summary().unwrap_or_else(|| EMPTY_CELL.to_string()),
                r.birthday()
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
                r.email()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", table_line(&header, &widths).bold()));
    for row in &rows {
        out.push_str(&table_line(row, &widths));
        out.push('\n');
    }
    out
}

fn table_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i < last {
            line.push_str(&" ".repeat(width - cell.width() + COLUMN_GAP));
        }
    }
    line
}

pub fn render_notes(notes: &[(u32, Note)]) -> String {
    let mut out = String::new();
    for (id, note) in notes {
        out.push_str(&note_line(*id, note));
        out.push('\n');
    }
    out
}

fn note_line(id: u32, note: &Note) -> String {
    format!("{} {}", format!("{}.", id).yellow(), note)
}

pub fn render_note_groups(groups: &[(String, Vec<(u32, Note)>)]) -> String {
    let mut out = String::new();
    for (tag, notes) in groups {
        out.push_str(&format!("{}\n", format!("#{}", tag).cyan().bold()));
        for (id, note) in notes {
            out.push_str(&format!("  {}\n", note_line(*id, note)));
        }
    }
    out
}

/// One line per person: the day to congratulate, its weekday, and the name.
/// A birthday moved off a weekend also shows the real date.
pub fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    let mut out = String::new();
    for u in upcoming {
        let day = format!(
            "{} ({})",
            format_birthday(u.celebration),
            u.celebration.format("%A")
        );
        out.push_str(&format!("{}: {}", day.yellow(), u.name));
        if u.celebration != u.date {
            out.push_str(&format!(
                " {}",
                format!("(birthday on {})", u.date.format("%A")).dimmed()
            ));
        }
        out.push('\n');
    }
    out
}

pub fn render_shared(shared: &[SharedBirthday]) -> String {
    let mut out = String::new();
    for group in shared {
        let day = format!("{:02}.{:02}", group.day, group.month);
        out.push_str(&format!("{}: {}\n", day.yellow(), group.names.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn plain() {
        colored::control::set_override(false);
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut r = Record::new(name).unwrap();
        for p in phones {
            r.add_phone(p).unwrap();
        }
        if let Some(b) = birthday {
            r.add_birthday(b).unwrap();
        }
        r
    }

    #[test]
    fn contacts_table_aligns_by_display_width() {
        plain();
        let out = render_contacts(&[
            record("Ivan", &["0501234567"], Some("01.10.1985")),
            record("Олександра", &[], None),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));

        let phone_col = |line: &str| {
            let prefix: String = line.chars().take_while(|c| *c != '0' && *c != '-').collect();
            prefix.width()
        };
        assert_eq!(phone_col(lines[1]), phone_col(lines[2]));
        assert!(lines[2].ends_with(EMPTY_CELL));
    }

    #[test]
    fn empty_contacts_render_nothing() {
        assert_eq!(render_contacts(&[]), "");
    }

    #[test]
    fn notes_and_groups() {
        plain();
        let note = Note::with_tags("Buy milk", ["home"]).unwrap();
        assert_eq!(
            render_notes(&[(3, note.clone())]),
            "3. Buy milk | Tags: #home\n"
        );
        let groups = render_note_groups(&[("home".to_string(), vec![(3, note)])]);
        assert_eq!(groups, "#home\n  3. Buy milk | Tags: #home\n");
    }

    #[test]
    fn upcoming_shows_weekday_and_real_date_when_moved() {
        plain();
        let out = render_upcoming(&[
            UpcomingBirthday {
                name: "Ivan".to_string(),
                date: ymd(2024, 1, 3),
                celebration: ymd(2024, 1, 3),
            },
            UpcomingBirthday {
                name: "Eva".to_string(),
                date: ymd(2024, 1, 6),
                celebration: ymd(2024, 1, 8),
            },
        ]);
        assert_eq!(
            out,
            "03.01.2024 (Wednesday): Ivan\n08.01.2024 (Monday): Eva (birthday on Saturday)\n"
        );
    }

    #[test]
    fn shared_birthdays_line() {
        plain();
        let out = render_shared(&[SharedBirthday {
            month: 10,
            day: 1,
            names: vec!["Ivan".to_string(), "John".to_string()],
        }]);
        assert_eq!(out, "01.10: Ivan, John\n");
    }

    #[test]
    fn result_puts_messages_last() {
        plain();
        let mut result = CmdResult::default().with_lines(vec!["0501234567".to_string()]);
        result.add_message(CmdMessage::info("done"));
        assert_eq!(render_result(&result), "0501234567\ndone\n");
    }
}
