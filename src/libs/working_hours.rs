//! Credited working hours for one attendance entry.
//!
//! ## Rules
//!
//! ```text
//! Sunday and allocated hours known  -> allocated hours
//! check-in or check-out missing     -> allocated hours, or 00:00
//! otherwise                         -> out - in (wrapping past midnight)
//!     ...unless 0 < allocated - worked <= tolerance -> allocated hours
//! ```
//!
//! The tolerance window (10 minutes by default) only forgives a shortfall.
//! Working longer than allocated always credits the raw elapsed time.
//!
//! ## Examples
//!
//! ```rust
//! use rollcall::libs::formatter::{format_duration, parse_duration};
//! use rollcall::libs::time::parse_clock;
//! use rollcall::libs::working_hours::compute;
//!
//! let worked = compute(parse_clock("08:05"), parse_clock("16:30"), parse_duration("08:30"), false);
//! assert_eq!(format_duration(&worked), "08:30");
//!
//! let overnight = compute(parse_clock("22:00"), parse_clock("02:00"), None, false);
//! assert_eq!(format_duration(&overnight), "04:00");
//! ```

use anyhow::Result;
use chrono::{Duration, NaiveTime};

use super::{config::RulesConfig, messages::Message, time};
use crate::msg_error_anyhow;

pub const DEFAULT_TOLERANCE_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHoursCalculator {
    tolerance: Duration,
}

impl Default for WorkingHoursCalculator {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TOLERANCE_MINUTES))
    }
}

impl WorkingHoursCalculator {
    pub fn new(tolerance: Duration) -> Self {
        Self { tolerance }
    }

    /// Builds a calculator from the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error when `tolerance_minutes` does not fit a [`Duration`].
    pub fn from_rules(rules: &RulesConfig) -> Result<Self> {
        let tolerance = i64::try_from(rules.tolerance_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .ok_or_else(|| {
                msg_error_anyhow!(Message::RuleOutOfRange(
                    "tolerance_minutes".to_string(),
                    rules.tolerance_minutes
                ))
            })?;
        Ok(Self::new(tolerance))
    }

    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    pub fn compute(
        &self,
        in_time: Option<NaiveTime>,
        out_time: Option<NaiveTime>,
        allocated: Option<Duration>,
        is_sunday: bool,
    ) -> Duration {
        if let (true, Some(allocated)) = (is_sunday, allocated) {
            return allocated;
        }

        let (in_time, out_time) = match (in_time, out_time) {
            (Some(in_time), Some(out_time)) => (in_time, out_time),
            _ => return allocated.unwrap_or_else(Duration::zero),
        };

        let worked = time::elapsed(&in_time, &out_time);

        if let Some(allocated) = allocated {
            let shortfall = allocated - worked;
            if !is_sunday && shortfall > Duration::zero() && shortfall <= self.tolerance {
                return allocated;
            }
        }

        worked
    }
}

/// [`WorkingHoursCalculator::compute`] with the default 10-minute tolerance.
pub fn compute(
    in_time: Option<NaiveTime>,
    out_time: Option<NaiveTime>,
    allocated: Option<Duration>,
    is_sunday: bool,
) -> Duration {
    WorkingHoursCalculator::default().compute(in_time, out_time, allocated, is_sunday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_shortfall_just_outside_tolerance_is_not_forgiven() {
        // 8:19 worked against 8:30 allocated: 11 minutes short.
        let worked = compute(t(8, 0), t(16, 19), Some(Duration::minutes(510)), false);
        assert_eq!(worked, Duration::minutes(499));
    }

    #[test]
    fn test_custom_tolerance() {
        let calculator = WorkingHoursCalculator::new(Duration::minutes(15));
        let worked = calculator.compute(t(8, 0), t(16, 17), Some(Duration::minutes(510)), false);
        assert_eq!(worked, Duration::minutes(510));
    }

    #[test]
    fn test_sunday_without_allocation_uses_times() {
        let worked = compute(t(9, 0), t(13, 0), None, true);
        assert_eq!(worked, Duration::hours(4));
    }
}
