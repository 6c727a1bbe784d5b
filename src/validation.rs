//! Non-fatal field validation for decoded AIS messages
//!
//! A field whose raw value falls outside its domain does not abort decoding.
//! The decoder records a [`Violation`] and keeps the raw value, so the caller
//! decides whether the message is still usable.

use std::ops::RangeInclusive;

use tracing::trace;

/// A decoded field whose raw value lies outside its valid range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Name of the offending field
    pub field: String,
    /// Raw value read from the payload
    pub observed: i64,
    /// Accepted raw values
    pub valid_range: String,
}

impl Violation {
    /// Create a new violation
    pub fn new(field: impl Into<String>, observed: i64, valid_range: impl Into<String>) -> Self {
        Violation {
            field: field.into(),
            observed,
            valid_range: valid_range.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} outside {}",
            self.field, self.observed, self.valid_range
        )
    }
}

fn record(violations: &mut Vec<Violation>, violation: Violation) {
    trace!(
        field = %violation.field,
        observed = violation.observed,
        valid_range = %violation.valid_range,
        "field violation"
    );
    violations.push(violation);
}

/// Descriptor for a scaled numeric field with an optional "not available"
/// sentinel.
///
/// `raw_min..=raw_max` is the valid raw domain. The sentinel, when present,
/// lies outside it and decodes to `None` without a violation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedField {
    /// Field name used in violations
    pub name: &'static str,
    /// Smallest valid raw value
    pub raw_min: i64,
    /// Largest valid raw value
    pub raw_max: i64,
    /// Raw value meaning "not available"
    pub sentinel: Option<i64>,
    /// Multiplier from raw units to engineering units
    pub scale: f64,
}

impl RangedField {
    /// Create a descriptor without a sentinel
    pub const fn new(name: &'static str, raw_min: i64, raw_max: i64, scale: f64) -> Self {
        RangedField {
            name,
            raw_min,
            raw_max,
            sentinel: None,
            scale,
        }
    }

    /// Set the "not available" sentinel
    pub const fn with_sentinel(mut self, sentinel: i64) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    /// Check if `raw` lies in the valid domain
    pub fn contains(&self, raw: i64) -> bool {
        (self.raw_min..=self.raw_max).contains(&raw)
    }

    /// Check if `raw` is the "not available" sentinel
    pub fn is_sentinel(&self, raw: i64) -> bool {
        self.sentinel == Some(raw)
    }

    /// Convert a raw value, recording a violation when it is out of range.
    ///
    /// Returns `None` for the sentinel; out-of-range values are still scaled
    /// and returned.
    pub fn apply(&self, raw: i64, violations: &mut Vec<Violation>) -> Option<f64> {
        if self.is_sentinel(raw) {
            return None;
        }
        self.check(raw, violations);
        Some(raw as f64 * self.scale)
    }

    /// Record a violation when `raw` is neither valid nor the sentinel.
    ///
    /// Returns whether the value was accepted.
    pub fn check(&self, raw: i64, violations: &mut Vec<Violation>) -> bool {
        if self.contains(raw) || self.is_sentinel(raw) {
            return true;
        }
        record(
            violations,
            Violation::new(
                self.name,
                raw,
                format!("{}..={}", self.raw_min, self.raw_max),
            ),
        );
        false
    }
}

/// Record a violation when `raw` falls in none of the `valid` ranges.
pub fn check_enumerated(
    name: &'static str,
    raw: i64,
    valid: &[RangeInclusive<i64>],
    violations: &mut Vec<Violation>,
) -> bool {
    if valid.iter().any(|range| range.contains(&raw)) {
        return true;
    }
    let valid_range = valid
        .iter()
        .map(|range| format!("{}..={}", range.start(), range.end()))
        .collect::<Vec<_>>()
        .join(", ");
    record(violations, Violation::new(name, raw, valid_range));
    false
}

/// Longitude, 1/10 000 minute, 28 bits
pub const LONGITUDE: RangedField =
    RangedField::new("longitude", -108_000_000, 108_000_000, 1.0 / 600_000.0)
        .with_sentinel(108_600_000);

/// Latitude, 1/10 000 minute, 27 bits
pub const LATITUDE: RangedField =
    RangedField::new("latitude", -54_000_000, 54_000_000, 1.0 / 600_000.0)
        .with_sentinel(54_600_000);

/// Long-range longitude, 1/10 minute, 18 bits
pub const LONGITUDE_LONG_RANGE: RangedField =
    RangedField::new("longitude", -108_000, 108_000, 1.0 / 600.0).with_sentinel(108_600);

/// Long-range latitude, 1/10 minute, 17 bits
pub const LATITUDE_LONG_RANGE: RangedField =
    RangedField::new("latitude", -54_000, 54_000, 1.0 / 600.0).with_sentinel(54_600);

/// Course over ground, tenths of a degree, 12 bits
pub const COURSE: RangedField =
    RangedField::new("course_over_ground", 0, 3599, 0.1).with_sentinel(3600);

/// Long-range course over ground, whole degrees, 9 bits
pub const COURSE_LONG_RANGE: RangedField =
    RangedField::new("course_over_ground", 0, 359, 1.0).with_sentinel(511);

/// True heading, whole degrees, 9 bits
pub const HEADING: RangedField = RangedField::new("true_heading", 0, 359, 1.0).with_sentinel(511);

/// Speed over ground, tenths of a knot, 10 bits
pub const SPEED: RangedField =
    RangedField::new("speed_over_ground", 0, 1022, 0.1).with_sentinel(1023);

/// SAR aircraft speed over ground, whole knots, 10 bits
pub const SPEED_SAR: RangedField =
    RangedField::new("speed_over_ground", 0, 1022, 1.0).with_sentinel(1023);

/// Long-range speed over ground, whole knots, 6 bits
pub const SPEED_LONG_RANGE: RangedField =
    RangedField::new("speed_over_ground", 0, 62, 1.0).with_sentinel(63);

/// SAR aircraft altitude, metres, 12 bits
pub const ALTITUDE: RangedField = RangedField::new("altitude", 0, 4094, 1.0).with_sentinel(4095);

/// Defined navigational status codes (9..=13 are reserved)
pub const NAVIGATION_STATUS: &[RangeInclusive<i64>] = &[0..=8, 14..=15];

/// Defined maneuver indicator codes
pub const MANEUVER_INDICATOR: &[RangeInclusive<i64>] = &[0..=2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_not_a_violation() {
        let mut violations = Vec::new();
        assert_eq!(COURSE.apply(3600, &mut violations), None);
        assert_eq!(LONGITUDE.apply(181 * 600_000, &mut violations), None);
        assert_eq!(LATITUDE_LONG_RANGE.apply(91 * 600, &mut violations), None);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_out_of_range_keeps_raw_value() {
        let mut violations = Vec::new();
        let course = COURSE.apply(3700, &mut violations).unwrap();
        assert!((course - 370.0).abs() < 1e-9);
        assert_eq!(
            violations,
            vec![Violation::new("course_over_ground", 3700, "0..=3599")]
        );
    }

    #[test]
    fn test_violations_accumulate() {
        let mut violations = Vec::new();
        HEADING.check(400, &mut violations);
        LATITUDE.check(-60_000_000, &mut violations);
        assert!(HEADING.check(359, &mut violations));
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[1].field, "latitude");
    }

    #[test]
    fn test_scaling() {
        let mut violations = Vec::new();
        let lon = LONGITUDE_LONG_RANGE.apply(-5154, &mut violations).unwrap();
        assert!((lon + 8.59).abs() < 1e-9);
        let speed = SPEED.apply(139, &mut violations).unwrap();
        assert!((speed - 13.9).abs() < 1e-9);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_enumerated_check() {
        let mut violations = Vec::new();
        assert!(check_enumerated("navigation_status", 14, NAVIGATION_STATUS, &mut violations));
        assert!(!check_enumerated("navigation_status", 11, NAVIGATION_STATUS, &mut violations));
        assert_eq!(violations[0].valid_range, "0..=8, 14..=15");
        assert_eq!(
            violations[0].to_string(),
            "navigation_status = 11 outside 0..=8, 14..=15"
        );
    }
}
