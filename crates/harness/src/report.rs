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

//! Rendering of benchmark output to an explicit sink.

use colored::Color;
use std::io::{self, Write};

use crate::{ColorChoice, Measurement, difference};

const RULE: &str = "---------------------";

/// Writes benchmark output to `W`, optionally colored.
pub struct Reporter<W> {
    out: W,
    color: bool,
}

/// Diagnostic severity, which decides how a diagnostic line stands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The operation could not be performed.
    Unsupported,
    /// The operation ran, but its timing is not comparable to the other side's.
    Fidelity,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: ColorChoice) -> Self {
        let color = match color {
            ColorChoice::Never => false,
            ColorChoice::Auto => auto_color(),
            ColorChoice::Always => true,
        };
        Self { out, color }
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn label(&mut self, label: &str) -> io::Result<()> {
        let text = paint(label, Color::Cyan, self.color);
        writeln!(self.out, "{text}")
    }

    pub fn measurement(&mut self, m: Measurement) -> io::Result<()> {
        writeln!(self.out, "{}", format_measurement(m))
    }

    pub fn diagnostic(&mut self, severity: Severity, text: &str) -> io::Result<()> {
        let color = match severity {
            Severity::Unsupported => Color::Red,
            Severity::Fidelity => Color::Yellow,
        };
        let text = paint(text, color, self.color);
        writeln!(self.out, "{text}")
    }

    pub fn dif(&mut self, a: Measurement, b: Measurement) -> io::Result<()> {
        let text = format_dif(a, b, self.color);
        writeln!(self.out, "{text}")
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{RULE}")
    }

    /// Raw access for multi-line blocks such as tables.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Terminal detection plus `NO_COLOR`/`CLICOLOR`, as `colored` resolves them. Only read here,
/// never overridden, so one reporter's choice cannot leak into another's.
fn auto_color() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{text}\x1b[0m", color.to_fg_str())
    } else {
        text.to_string()
    }
}

pub(crate) fn format_measurement(m: Measurement) -> String {
    match m.seconds() {
        Some(s) => format!("{s}"),
        None => "n/a".to_string(),
    }
}

/// `Dif: <a - b>`, green when the first operand was faster, red otherwise. The number keeps
/// its sign whether or not color is on.
pub fn format_dif(a: Measurement, b: Measurement, color: bool) -> String {
    match difference(a, b) {
        Some(dif) => {
            let color_of = if dif < 0.0 { Color::Green } else { Color::Red };
            format!("Dif: {}", paint(&format!("{dif}"), color_of, color))
        }
        None => "Dif: n/a".to_string(),
    }
}

/// Prints the signed difference of two measurements to standard output.
pub fn print_dif(a: Measurement, b: Measurement) {
    println!("{}", format_dif(a, b, auto_color()));
}
