use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;
use std::sync::OnceLock;

const OP_MAX_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<regex::Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "update" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Render one log line; the operation word is coloured, the
/// `operation (target)` column is cut to [`OP_MAX_WIDTH`] visible chars.
fn render_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let color = color_for_operation(&entry.operation);

    let op_target = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if op_target.chars().count() > OP_MAX_WIDTH {
        let mut s = op_target.chars().take(OP_MAX_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        op_target
    };

    let colored = match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        entry.id,
        entry.date,
        colored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries: Vec<LogEntry> = load_log(conn)?
            .into_iter()
            .map(|mut e| {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&e.date) {
                    e.date = dt.format("%FT%T%:z").to_string();
                }
                e
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", render_entry(e, id_w, date_w, op_w));
        }

        Ok(())
    }
}
