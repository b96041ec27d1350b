// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::io::{self, Write};

/// Box-drawn table for the per-operation summary of a comparison.
pub struct SummaryTable {
    headers: Vec<String>,
    column_widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

impl SummaryTable {
    /// Column widths grow to fit the headers and every row added.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            column_widths: headers.iter().map(|h| display_width(h) + 2).collect(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(display_width(cell) + 2);
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.border(out, '┌', '┬', '┐')?;
        self.line(out, &self.headers, |_| Align::Center)?;
        self.border(out, '├', '┼', '┤')?;
        for row in &self.rows {
            self.line(out, row, |i| if i == 0 { Align::Left } else { Align::Center })?;
        }
        self.border(out, '└', '┴', '┘')
    }

    fn border<W: Write>(&self, out: &mut W, left: char, mid: char, right: char) -> io::Result<()> {
        let segments: Vec<String> = self.column_widths.iter().map(|w| "─".repeat(*w)).collect();
        writeln!(out, "{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn line<W: Write>(
        &self,
        out: &mut W,
        cells: &[String],
        align: impl Fn(usize) -> Align,
    ) -> io::Result<()> {
        write!(out, "│")?;
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            write!(out, "{}│", format_cell(cell, *width, align(i)))?;
        }
        writeln!(out)
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn format_cell(text: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(display_width(text));
    match align {
        Align::Left => format!(" {}{}", text, " ".repeat(padding.saturating_sub(1))),
        Align::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}
