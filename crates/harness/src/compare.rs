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

//! Side-by-side comparison of two containers.

use serde::Serialize;
use std::any::type_name;
use std::io::{self, Write};
use tracing::{info, warn};

use contrast_probe::{Capabilities, Family, LookupPath, Probe, Query};

use crate::report::format_measurement;
use crate::{
    HarnessError, Lookup, Measurement, ReportConfig, Reporter, Severity, SummaryTable,
    difference, ops,
};

/// The benchmarked operations, in the order a comparison runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Insert,
    Iterate,
    Copy,
    Find,
    Move,
}

impl Operation {
    pub const ORDER: [Operation; 5] = [
        Operation::Insert,
        Operation::Iterate,
        Operation::Copy,
        Operation::Find,
        Operation::Move,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Iterate => "iterate",
            Operation::Copy => "copy",
            Operation::Find => "find",
            Operation::Move => "move",
        }
    }

    fn heading(self, elements: usize) -> String {
        match self {
            Operation::Insert => format!("Inserting {elements} elements:"),
            Operation::Iterate => "Iterating over all elements:".to_string(),
            Operation::Copy => "Copying containers:".to_string(),
            Operation::Find => format!("Finding {elements} elements:"),
            Operation::Move => "Moving containers:".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationRow {
    pub operation: Operation,
    pub first: Measurement,
    pub second: Measurement,
    /// `first - second` in seconds.
    pub difference: Option<f64>,
}

/// Everything a comparison measured.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub labels: [String; 2],
    pub elements: usize,
    pub families: [Family; 2],
    pub lookup_paths: [LookupPath; 2],
    pub rows: Vec<OperationRow>,
}

impl Comparison {
    pub fn row(&self, operation: Operation) -> Option<&OperationRow> {
        self.rows.iter().find(|r| r.operation == operation)
    }

    /// False when one side scanned and the other used a native find.
    pub fn lookups_comparable(&self) -> bool {
        self.lookup_paths[0].comparable_with(self.lookup_paths[1])
    }
}

/// Comparison driver: `elements` inserts and lookups per container, rendered per `config`.
///
/// Runs insert, iterate, copy, find, then move. Lookups happen before the move so they are
/// never timed against a moved-from container; after the move both containers are left
/// empty.
#[derive(Clone, Debug)]
pub struct Suite {
    elements: usize,
    config: ReportConfig,
}

impl Suite {
    pub fn new(elements: usize) -> Self {
        Self {
            elements,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn elements(&self) -> usize {
        self.elements
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compare two containers, looking up the same kind of values that were inserted.
    pub fn compare_all<W, A, B, GA, GB>(
        &self,
        out: W,
        first: &mut A,
        mut gen_first: GA,
        second: &mut B,
        mut gen_second: GB,
    ) -> Result<Comparison, HarnessError>
    where
        W: Write,
        A: Probe + Clone + Default,
        B: Probe + Clone + Default,
        GA: FnMut() -> A::Value,
        GB: FnMut() -> B::Value,
        A::Value: Query<A::Key, A::Elem>,
        B::Value: Query<B::Key, B::Elem>,
    {
        let n = self.elements;
        let mut session = self.session::<W, A, B>(out);
        session.insert(
            ops::insert(first, &mut gen_first, n),
            ops::insert(second, &mut gen_second, n),
        )?;
        session.iterate(first, second)?;
        session.copy(first, second)?;
        session.find(
            ops::find(first, &mut gen_first, n),
            ops::find(second, &mut gen_second, n),
        )?;
        session.relocate(first, second)?;
        session.finish()
    }

    /// Compare two containers with separate generators for the lookups.
    #[allow(clippy::too_many_arguments)]
    pub fn compare_all_with_lookups<W, A, B, GA, GB, FA, FB, QA, QB>(
        &self,
        out: W,
        first: &mut A,
        gen_first: GA,
        find_first: FA,
        second: &mut B,
        gen_second: GB,
        find_second: FB,
    ) -> Result<Comparison, HarnessError>
    where
        W: Write,
        A: Probe + Clone + Default,
        B: Probe + Clone + Default,
        GA: FnMut() -> A::Value,
        GB: FnMut() -> B::Value,
        FA: FnMut() -> QA,
        FB: FnMut() -> QB,
        QA: Query<A::Key, A::Elem>,
        QB: Query<B::Key, B::Elem>,
    {
        let n = self.elements;
        let mut session = self.session::<W, A, B>(out);
        session.insert(
            ops::insert(first, gen_first, n),
            ops::insert(second, gen_second, n),
        )?;
        session.iterate(first, second)?;
        session.copy(first, second)?;
        session.find(
            ops::find(first, find_first, n),
            ops::find(second, find_second, n),
        )?;
        session.relocate(first, second)?;
        session.finish()
    }

    fn session<W: Write, A: Probe, B: Probe>(&self, out: W) -> Session<W> {
        let labels = if self.config.show_full_type {
            [type_name::<A>().to_string(), type_name::<B>().to_string()]
        } else {
            ["Container 1".to_string(), "Container 2".to_string()]
        };
        info!(
            first = type_name::<A>(),
            second = type_name::<B>(),
            elements = self.elements,
            "comparing containers"
        );
        Session {
            reporter: Reporter::new(out, self.config.color),
            summary: self.config.summary_table,
            comparison: Comparison {
                labels,
                elements: self.elements,
                families: [
                    const { Capabilities::of::<A>() }.family(),
                    const { Capabilities::of::<B>() }.family(),
                ],
                lookup_paths: [LookupPath::Unsupported; 2],
                rows: Vec::with_capacity(Operation::ORDER.len()),
            },
        }
    }
}

type Note = Option<(Severity, &'static str)>;

/// One comparison in progress: renders each operation pair as it is recorded.
struct Session<W> {
    reporter: Reporter<W>,
    summary: bool,
    comparison: Comparison,
}

impl<W: Write> Session<W> {
    fn insert(&mut self, first: Measurement, second: Measurement) -> io::Result<()> {
        self.record(Operation::Insert, [(first, None), (second, None)], None)
    }

    fn iterate<A: Probe, B: Probe>(&mut self, first: &A, second: &B) -> io::Result<()> {
        let note = |m: Measurement| -> Note {
            (!m.is_measured()).then_some((Severity::Unsupported, "No begin() member found"))
        };
        let a = ops::iterate(first).measurement;
        let b = ops::iterate(second).measurement;
        self.record(Operation::Iterate, [(a, note(a)), (b, note(b))], None)
    }

    fn copy<A: Clone, B: Clone>(&mut self, first: &A, second: &B) -> io::Result<()> {
        let a = ops::copy(first);
        let b = ops::copy(second);
        self.record(Operation::Copy, [(a, None), (b, None)], None)
    }

    fn find(&mut self, first: Lookup, second: Lookup) -> io::Result<()> {
        let note = |l: &Lookup| -> Note {
            match l.path {
                LookupPath::Scan => Some((
                    Severity::Fidelity,
                    "No find() member found, using a linear scan",
                )),
                LookupPath::Unsupported => {
                    Some((Severity::Unsupported, "No find() member found"))
                }
                LookupPath::NativeByKey | LookupPath::NativeByValue => None,
            }
        };
        self.comparison.lookup_paths = [first.path, second.path];

        let trailer = if first.path.is_measured()
            && second.path.is_measured()
            && !first.path.comparable_with(second.path)
        {
            warn!(
                first = ?first.path,
                second = ?second.path,
                "comparing a linear scan against a native lookup"
            );
            Some("Lookup times are not comparable: one side is a linear scan")
        } else {
            None
        };

        self.record(
            Operation::Find,
            [
                (first.measurement, note(&first)),
                (second.measurement, note(&second)),
            ],
            trailer,
        )
    }

    /// Moves both containers out and discards the new owners.
    fn relocate<A: Default, B: Default>(
        &mut self,
        first: &mut A,
        second: &mut B,
    ) -> io::Result<()> {
        let (a, moved_first) = ops::move_out(first);
        let (b, moved_second) = ops::move_out(second);
        drop(moved_first);
        drop(moved_second);
        self.record(Operation::Move, [(a, None), (b, None)], None)
    }

    fn record(
        &mut self,
        operation: Operation,
        sides: [(Measurement, Note); 2],
        trailer: Option<&str>,
    ) -> io::Result<()> {
        self.reporter
            .heading(&operation.heading(self.comparison.elements))?;
        for (label, (measurement, note)) in self.comparison.labels.iter().zip(sides) {
            self.reporter.label(label)?;
            if let Some((severity, text)) = note {
                self.reporter.diagnostic(severity, text)?;
            }
            self.reporter.measurement(measurement)?;
        }
        let [(first, _), (second, _)] = sides;
        self.reporter.dif(first, second)?;
        if let Some(text) = trailer {
            self.reporter.diagnostic(Severity::Fidelity, text)?;
        }
        self.reporter.rule()?;

        self.comparison.rows.push(OperationRow {
            operation,
            first,
            second,
            difference: difference(first, second),
        });
        Ok(())
    }

    fn finish(mut self) -> Result<Comparison, HarnessError> {
        if self.summary {
            let [first, second] = &self.comparison.labels;
            let mut table =
                SummaryTable::new(vec!["Operation", first.as_str(), second.as_str(), "Dif"]);
            for row in &self.comparison.rows {
                table.add_row(vec![
                    row.operation.name().to_string(),
                    format_measurement(row.first),
                    format_measurement(row.second),
                    row.difference
                        .map(|d| format!("{d:+}"))
                        .unwrap_or_else(|| "n/a".to_string()),
                ]);
            }
            table.write_to(self.reporter.writer())?;
        }
        self.reporter.flush()?;
        Ok(self.comparison)
    }
}

/// Configuration from the environment, with labelling decided by the caller.
fn stdout_suite(elements: usize, show_full_type: bool) -> Result<Suite, HarnessError> {
    let config = ReportConfig {
        show_full_type,
        ..ReportConfig::from_env()?
    };
    Ok(Suite::new(elements).with_config(config))
}

/// [`Suite::compare_all`] on standard output. `show_full_type` labels each side with its type
/// name; everything else is configured from the environment.
pub fn compare_all<A, B, GA, GB>(
    first: &mut A,
    gen_first: GA,
    second: &mut B,
    gen_second: GB,
    elements: usize,
    show_full_type: bool,
) -> Result<Comparison, HarnessError>
where
    A: Probe + Clone + Default,
    B: Probe + Clone + Default,
    GA: FnMut() -> A::Value,
    GB: FnMut() -> B::Value,
    A::Value: Query<A::Key, A::Elem>,
    B::Value: Query<B::Key, B::Elem>,
{
    stdout_suite(elements, show_full_type)?.compare_all(
        io::stdout().lock(),
        first,
        gen_first,
        second,
        gen_second,
    )
}

/// [`Suite::compare_all_with_lookups`] on standard output, labelled as in [`compare_all`].
#[allow(clippy::too_many_arguments)]
pub fn compare_all_with_lookups<A, B, GA, GB, FA, FB, QA, QB>(
    first: &mut A,
    gen_first: GA,
    find_first: FA,
    second: &mut B,
    gen_second: GB,
    find_second: FB,
    elements: usize,
    show_full_type: bool,
) -> Result<Comparison, HarnessError>
where
    A: Probe + Clone + Default,
    B: Probe + Clone + Default,
    GA: FnMut() -> A::Value,
    GB: FnMut() -> B::Value,
    FA: FnMut() -> QA,
    FB: FnMut() -> QB,
    QA: Query<A::Key, A::Elem>,
    QB: Query<B::Key, B::Elem>,
{
    stdout_suite(elements, show_full_type)?.compare_all_with_lookups(
        io::stdout().lock(),
        first,
        gen_first,
        find_first,
        second,
        gen_second,
        find_second,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_caller_decides_labels_over_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("CONTRAST_SHOW_FULL_TYPE", "true");
            jail.set_env("CONTRAST_SUMMARY_TABLE", "false");
            let suite = stdout_suite(10, false).map_err(|e| e.to_string())?;
            assert!(!suite.config().show_full_type);
            assert!(!suite.config().summary_table);
            assert_eq!(suite.elements(), 10);

            jail.set_env("CONTRAST_SHOW_FULL_TYPE", "false");
            let suite = stdout_suite(10, true).map_err(|e| e.to_string())?;
            assert!(suite.config().show_full_type);
            Ok(())
        });
    }

    #[test]
    fn test_bad_environment_is_reported() {
        Jail::expect_with(|jail| {
            jail.set_env("CONTRAST_COLOR", "sometimes");
            assert!(matches!(
                stdout_suite(10, false),
                Err(HarnessError::Config(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_operation_headings() {
        assert_eq!(Operation::Insert.heading(5), "Inserting 5 elements:");
        assert_eq!(Operation::Find.heading(5), "Finding 5 elements:");
        assert_eq!(Operation::Move.heading(5), "Moving containers:");
    }
}
