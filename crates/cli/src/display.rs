// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hub_core::{Student, Suggestion};

use crate::colors;
use crate::screen::Notice;

/// Placeholder for missing optional columns.
const EMPTY_CELL: &str = "-";

/// Format suggestions one per line: title, then the post link.
///
/// ```text
/// Deep learning basics  /post/3
/// ```
pub fn format_suggestions(suggestions: &[Suggestion], colorize: bool) -> String {
    let width = suggestions
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(0);

    suggestions
        .iter()
        .map(|s| {
            let pad = width - s.title.chars().count();
            let link = s.post_path();
            let link = if colorize {
                colors::context(&link)
            } else {
                link
            };
            format!("{}{}  {}", s.title, " ".repeat(pad), link)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the roster as an aligned table with a header row.
pub fn format_roster(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students yet.".to_string();
    }

    let rows: Vec<[String; 4]> = students
        .iter()
        .map(|s| {
            [
                s.id.to_string(),
                s.name.clone(),
                s.email.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
                s.course.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();

    let headers = ["ID", "NAME", "EMAIL", "COURSE"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&headers.map(str::to_string), &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = width - cell.chars().count();
            line.push_str(&" ".repeat(pad + 2));
        }
    }
    line
}

/// Format a notice as `[level] message`, colored by level when enabled.
pub fn format_notice(notice: &Notice, colorize: bool) -> String {
    let tag = format!("[{}]", notice.level);
    let tag = if colorize {
        colors::level(notice.level, &tag)
    } else {
        tag
    };
    format!("{} {}", tag, notice.message)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
