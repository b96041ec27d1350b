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

//! Container benchmark harness
//!
//! Times generic operations against any container that implements
//! [`contrast_probe::Probe`], picking the operation each container supports:
//! - insertion through push, push_back or insert, chosen at compile time
//! - full iteration, copy and move
//! - lookups through a native find, or a linear scan when only iteration exists
//! - side-by-side comparison of two containers, reported to any `io::Write` sink
//!
//! Operations a container cannot perform are reported as [`Measurement::NotApplicable`],
//! never as a zero timing.

mod clock;
mod compare;
mod config;
mod error;
mod logging;
mod measurement;
mod ops;
mod report;
mod table;

pub use clock::Stopwatch;
pub use compare::{
    Comparison, Operation, OperationRow, Suite, compare_all, compare_all_with_lookups,
};
pub use config::{ColorChoice, ReportConfig};
pub use error::HarnessError;
pub use logging::init_tracing;
pub use measurement::{Measurement, difference};
pub use ops::{Iteration, Lookup, copy, find, insert, iterate, move_out};
pub use report::{Reporter, Severity, format_dif, print_dif};
pub use table::SummaryTable;

pub use contrast_probe::{
    Capabilities, Family, InsertPath, LookupPath, Probe, Query, Queue, Shape, Stack,
    is_pair_shaped,
};
