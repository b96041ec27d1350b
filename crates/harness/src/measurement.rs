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

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Outcome of one benchmarked operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    Measured(Duration),
    /// The container cannot perform the operation. Distinct from any real timing.
    NotApplicable,
}

impl Measurement {
    /// Elapsed fractional seconds, if measured.
    pub fn seconds(self) -> Option<f64> {
        match self {
            Measurement::Measured(d) => Some(d.as_secs_f64()),
            Measurement::NotApplicable => None,
        }
    }

    pub fn duration(self) -> Option<Duration> {
        match self {
            Measurement::Measured(d) => Some(d),
            Measurement::NotApplicable => None,
        }
    }

    pub fn is_measured(self) -> bool {
        matches!(self, Measurement::Measured(_))
    }
}

/// Serialized as seconds, or `null` when not applicable.
impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.seconds().serialize(serializer)
    }
}

/// Signed `a - b` in seconds. Negative means `a` was faster. Absent if either side was not
/// measured.
pub fn difference(a: Measurement, b: Measurement) -> Option<f64> {
    Some(a.seconds()? - b.seconds()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difference_is_signed() {
        let fast = Measurement::Measured(Duration::from_millis(250));
        let slow = Measurement::Measured(Duration::from_millis(1000));
        assert_eq!(difference(fast, slow), Some(-0.75));
        assert_eq!(difference(slow, fast), Some(0.75));
    }

    #[test]
    fn test_not_applicable_has_no_difference() {
        let m = Measurement::Measured(Duration::from_millis(1));
        assert_eq!(difference(m, Measurement::NotApplicable), None);
        assert_eq!(difference(Measurement::NotApplicable, m), None);
        assert_eq!(Measurement::NotApplicable.seconds(), None);
    }

    #[test]
    fn test_zero_is_still_a_measurement() {
        let zero = Measurement::Measured(Duration::ZERO);
        assert!(zero.is_measured());
        assert_eq!(zero.seconds(), Some(0.0));
        assert_ne!(zero, Measurement::NotApplicable);
    }

    #[test]
    fn test_serializes_as_optional_seconds() {
        let m = Measurement::Measured(Duration::from_millis(500));
        assert_eq!(serde_json::to_string(&m).unwrap(), "0.5");
        assert_eq!(
            serde_json::to_string(&Measurement::NotApplicable).unwrap(),
            "null"
        );
    }
}
