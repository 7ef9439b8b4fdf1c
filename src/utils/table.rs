//! Plain-text table rendering for CLI outputs.
//! Column widths adapt to content; cells are measured with unicode-width
//! after stripping ANSI escapes, so colored cells stay aligned.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI SGR sequences before measuring a cell.
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip until the terminating 'm' (SGR sequences only)
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    separator_char: char,
}

impl Table {
    pub fn new(headers: Vec<&str>, separator_char: char) -> Self {
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            separator_char,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len();
        out.push_str(&self.separator_char.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    out.push_str(&pad(cell, widths[i]));
                    out.push_str("  ");
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    let fill = width.saturating_sub(visible);
    format!("{}{}", s, " ".repeat(fill))
}
