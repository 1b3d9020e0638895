//! Terminal output for command results.
//!
//! Renderers return strings so they can be tested without a terminal;
//! `print_*` helpers write them to stdout. Layout math (widths, truncation,
//! padding) is Unicode-aware so long or non-ASCII hrefs still line up.

use chrono::{DateTime, Utc};
use colored::Colorize;
use coursenav::api::{CmdMessage, MessageLevel};
use coursenav::codec::MAX_DAY;
use coursenav::config::NavConfig;
use coursenav::history::HistoryEntry;
use coursenav::params::LessonParams;
use coursenav::query::Location;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;
const ACTIVE_MARKER: &str = "▸";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn render_location(location: &Location, lesson: &LessonParams) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", location.href().bold()));
    out.push_str(&format!(
        "  {:<7}{} {}\n",
        "level",
        lesson.level.label(),
        format!("({})", lesson.level).dimmed()
    ));
    out.push_str(&format!(
        "  {:<7}{} {}\n",
        "day",
        lesson.day,
        format!("of {}", MAX_DAY).dimmed()
    ));
    out.push_str(&format!("  {:<7}{}\n", "lesson", lesson.lesson));
    out
}

pub fn render_history(entries: &[HistoryEntry], active: usize, now: DateTime<Utc>) -> String {
    let number_width = entries.len().to_string().len();
    let mut out = String::new();

    for (i, entry) in entries.iter().enumerate() {
        let is_active = i == active;
        let marker = if is_active { ACTIVE_MARKER } else { " " };
        let number = format!("{:>width$}. ", i + 1, width = number_width);

        let fixed = marker.width() + 1 + number.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let href = truncate_to_width(&entry.location.href(), available);
        let padding = " ".repeat(available.saturating_sub(href.width()));
        let time_ago = format_time_ago(entry.visited_at, now);

        let line = format!("{} {}{}{}", marker, number, href, padding);
        if is_active {
            out.push_str(&format!("{}{}\n", line.bold(), time_ago.dimmed()));
        } else {
            out.push_str(&format!("{}{}\n", line, time_ago.dimmed()));
        }
    }
    out
}

pub fn render_config(config: &NavConfig) -> String {
    NavConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
