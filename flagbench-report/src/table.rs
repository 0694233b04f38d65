//! Table Rendering
//!
//! Renders result rows as an aligned text table:
//!
//! ```text
//! ╭────────────┬────┬────┬─────┬──────────────────────────────────────────╮
//! │ Test       │ A  │ L  │ ... │ Average time over 10 iterations (ns)     │
//! ├────────────┼────┼────┼─────┼──────────────────────────────────────────┤
//! │ Test_AE    │ 🟢 │ 🔴 │ ... │                                 81,234.5 │
//! ╰────────────┴────┴────┴─────┴──────────────────────────────────────────╯
//! ```
//!
//! Column widths are measured in terminal cells, not chars, so the
//! double-width markers stay aligned. Cell text is emitted verbatim.

use crate::report::ResultRow;
use flagbench_core::FlagAlphabet;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Border style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Rounded box-drawing borders
    #[default]
    Rounded,
    /// Rounded borders with a rule between every body row
    #[serde(rename = "rounded_grid")]
    RoundedGrid,
    /// Space-separated columns, one line per row and no rules
    Plain,
}

/// Presentation options for [`render_table`]
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub style: TableStyle,
    /// Marker for an active flag
    pub active_marker: String,
    /// Marker for an inactive flag
    pub inactive_marker: String,
    /// Digits after the decimal point in the average column
    pub decimals: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            style: TableStyle::Rounded,
            active_marker: "🟢".to_string(),
            inactive_marker: "🔴".to_string(),
            decimals: 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render `rows` as a table with one column per alphabet symbol.
///
/// The output has a header line plus one line per row, in input order. The
/// rounded styles add a top rule, a header rule and a bottom rule; the grid
/// variant also separates consecutive body rows with a rule.
pub fn render_table(
    rows: &[ResultRow],
    alphabet: &FlagAlphabet,
    iterations: u32,
    options: &TableOptions,
) -> String {
    let mut header = Vec::with_capacity(alphabet.len() + 2);
    header.push("Test".to_string());
    header.extend(alphabet.symbols().iter().map(|c| c.to_string()));
    header.push(format!("Average time over {} iterations (ns)", iterations));

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(alphabet.len() + 2);
            cells.push(row.test_id.clone());
            for i in 0..alphabet.len() {
                let marker = if row.flags.is_active(i) {
                    &options.active_marker
                } else {
                    &options.inactive_marker
                };
                cells.push(marker.clone());
            }
            cells.push(format_average(row.average_ns, options.decimals));
            cells
        })
        .collect();

    let last = header.len() - 1;
    let align: Vec<Align> = (0..header.len())
        .map(|i| if i == last { Align::Right } else { Align::Left })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut output = String::new();
    match options.style {
        TableStyle::Rounded | TableStyle::RoundedGrid => {
            push_rule(&mut output, &widths, '╭', '┬', '╮');
            push_boxed_line(&mut output, &header, &widths, &align);
            push_rule(&mut output, &widths, '├', '┼', '┤');
            for (i, cells) in body.iter().enumerate() {
                if i > 0 && options.style == TableStyle::RoundedGrid {
                    push_rule(&mut output, &widths, '├', '┼', '┤');
                }
                push_boxed_line(&mut output, cells, &widths, &align);
            }
            push_rule(&mut output, &widths, '╰', '┴', '╯');
        }
        TableStyle::Plain => {
            push_plain_line(&mut output, &header, &widths, &align);
            for cells in &body {
                push_plain_line(&mut output, cells, &widths, &align);
            }
        }
    }
    output
}

fn push_rule(output: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    output.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            output.push(mid);
        }
        output.push_str(&"─".repeat(w + 2));
    }
    output.push(right);
    output.push('\n');
}

fn push_boxed_line(output: &mut String, cells: &[String], widths: &[usize], align: &[Align]) {
    output.push('│');
    for ((cell, &w), &a) in cells.iter().zip(widths).zip(align) {
        output.push(' ');
        output.push_str(&pad(cell, w, a));
        output.push_str(" │");
    }
    output.push('\n');
}

fn push_plain_line(output: &mut String, cells: &[String], widths: &[usize], align: &[Align]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(align)
        .map(|((cell, &w), &a)| pad(cell, w, a))
        .collect();
    output.push_str(&line.join("  "));
    output.push('\n');
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(cell)));
    match align {
        Align::Left => format!("{}{}", cell, fill),
        Align::Right => format!("{}{}", fill, cell),
    }
}

/// Format a nanosecond average with `decimals` fixed digits and `,` thousands separators
pub fn format_average(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Number of terminal cells `s` occupies
pub fn display_width(s: &str) -> usize {
    s.width()
}
