//! Continuous scales mapping data to pixels, with D3-compatible ticks.
//!
//! Both scales are unclamped and map a degenerate domain (both ends equal)
//! to the middle of the range.

use chrono::{Datelike, NaiveDate};

use crate::date_range::{DateRange, Step};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Position of `x` within `[a, b]` as a fraction, 0.5 when `a == b`.
fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span != 0.0 {
        (x - a) / span
    } else {
        0.5
    }
}

fn interpolate(range: (f64, f64), t: f64) -> f64 {
    range.0 + t * (range.1 - range.0)
}

/// Linear number -> pixel scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        interpolate(self.range, normalize(self.domain.0, self.domain.1, value))
    }

    /// Round values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count as f64)
    }
}

/// Calendar date -> pixel scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, date: NaiveDate) -> f64 {
        let t = normalize(
            epoch_days(self.domain.0),
            epoch_days(self.domain.1),
            epoch_days(date),
        );
        interpolate(self.range, t)
    }

    /// Calendar-aligned dates inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (start, stop) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if count == 0 {
            return Vec::new();
        }
        TimeInterval::for_span(start, stop, count as f64).range(start, stop)
    }
}

/// Days since 1970-01-01, negative before.
fn epoch_days(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

/// `(first index, last index, increment)`. A negative increment means the
/// tick values are `index / -increment`, which keeps fractional steps exact.
fn tick_layout(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round();
        i2 = (stop * inverse).round();
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_layout(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced round numbers between `start` and `stop` (inclusive).
pub fn linear_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_layout(lo, hi, count);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Signed step between ticks for `count` ticks over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_layout(lo, hi, count);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Calendar interval used to place time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    /// Days whose day-of-month minus one is a multiple of the step.
    Day(u32),
    /// Sundays.
    Week,
    /// First of months whose zero-based index is a multiple of the step.
    Month(u32),
    /// January 1st of years that are a multiple of the step.
    Year(i32),
}

/// Candidate intervals with their approximate length in days.
const TICK_INTERVALS: [(TimeInterval, f64); 6] = [
    (TimeInterval::Day(1), 1.0),
    (TimeInterval::Day(2), 2.0),
    (TimeInterval::Week, 7.0),
    (TimeInterval::Month(1), 30.0),
    (TimeInterval::Month(3), 90.0),
    (TimeInterval::Year(1), 365.0),
];

impl TimeInterval {
    /// Pick the interval whose length is closest to `span / count`.
    pub fn for_span(start: NaiveDate, stop: NaiveDate, count: f64) -> Self {
        let (start_days, stop_days) = (epoch_days(start), epoch_days(stop));
        let target = (stop_days - start_days).abs() / count;
        let i = TICK_INTERVALS.partition_point(|(_, days)| *days <= target);

        if i == TICK_INTERVALS.len() {
            let step = tick_step(start_days / 365.0, stop_days / 365.0, count)
                .abs()
                .floor()
                .max(1.0);
            return TimeInterval::Year(step as i32);
        }
        // Dates have no time of day, so nothing finer than a day.
        if i == 0 {
            return TimeInterval::Day(1);
        }

        let (below, below_days) = TICK_INTERVALS[i - 1];
        let (above, above_days) = TICK_INTERVALS[i];
        if target / below_days < above_days / target {
            below
        } else {
            above
        }
    }

    /// Every boundary of this interval inside `[start, stop]`.
    pub fn range(self, start: NaiveDate, stop: NaiveDate) -> Vec<NaiveDate> {
        match self {
            TimeInterval::Day(step) => DateRange::daily(start, stop)
                .filter(|d| d.day0() % step.max(1) == 0)
                .collect(),
            TimeInterval::Week => {
                let offset = (7 - start.weekday().num_days_from_sunday()) % 7;
                match start.checked_add_days(chrono::Days::new(offset as u64)) {
                    Some(first) => DateRange::new(first, stop, Step::Days(7)).collect(),
                    None => Vec::new(),
                }
            }
            TimeInterval::Month(step) => {
                let first = if start.day() == 1 {
                    Some(start)
                } else {
                    start
                        .with_day(1)
                        .and_then(|d| d.checked_add_months(chrono::Months::new(1)))
                };
                match first {
                    Some(first) => DateRange::new(first, stop, Step::Months(1))
                        .filter(|d| d.month0() % step.max(1) == 0)
                        .collect(),
                    None => Vec::new(),
                }
            }
            TimeInterval::Year(step) => {
                let first_year = if start.ordinal() == 1 {
                    start.year()
                } else {
                    start.year() + 1
                };
                (first_year..=stop.year())
                    .filter(|y| y.rem_euclid(step.max(1)) == 0)
                    .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale_is_inverted_for_vertical_axis() {
        let scale = LinearScale::new((0.0, 250.1), (470.0, 0.0));
        assert!(approx(scale.apply(0.0), 470.0));
        assert!(approx(scale.apply(250.1), 0.0));
        assert!(approx(scale.apply(125.05), 235.0));
    }

    #[test]
    fn test_degenerate_domains_map_to_middle() {
        let linear = LinearScale::new((0.0, 0.0), (470.0, 0.0));
        assert!(approx(linear.apply(0.0), 235.0));

        let d = date(1947, 1, 1);
        let time = TimeScale::new((d, d), (0.0, 950.0));
        assert!(approx(time.apply(d), 475.0));
    }

    #[test]
    fn test_time_scale_endpoints() {
        let scale = TimeScale::new((date(1947, 1, 1), date(1947, 7, 1)), (0.0, 950.0));
        assert!(approx(scale.apply(date(1947, 1, 1)), 0.0));
        assert!(approx(scale.apply(date(1947, 7, 1)), 950.0));
        // 90 of 181 days
        assert!(approx(scale.apply(date(1947, 4, 1)), 950.0 * 90.0 / 181.0));
    }

    #[test]
    fn test_linear_ticks_gdp_range() {
        let ticks = linear_ticks(0.0, 18064.7, 10.0);
        let expected: Vec<f64> = (0..10).map(|i| i as f64 * 2000.0).collect();
        assert_eq!(ticks, expected);
    }

    #[test]
    fn test_linear_ticks_small_range() {
        let ticks = linear_ticks(0.0, 250.1, 10.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&240.0));
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[1], 20.0);
    }

    #[test]
    fn test_linear_ticks_fractional_steps_are_exact() {
        let ticks = linear_ticks(0.0, 1.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks[10], 1.0);
    }

    #[test]
    fn test_linear_ticks_edge_cases() {
        assert_eq!(linear_ticks(5.0, 5.0, 10.0), vec![5.0]);
        assert!(linear_ticks(0.0, 10.0, 0.0).is_empty());
        assert!(linear_ticks(0.0, f64::NAN, 10.0).is_empty());
        assert_eq!(linear_ticks(10.0, 0.0, 5.0), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 68.5, 10.0), 5.0);
        assert_eq!(tick_step(0.0, 1.0, 10.0), 0.1);
        assert_eq!(tick_step(100.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn test_full_series_uses_five_year_ticks() {
        let scale = TimeScale::new((date(1947, 1, 1), date(2015, 7, 1)), (0.0, 950.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&date(1950, 1, 1)));
        assert_eq!(ticks.last(), Some(&date(2015, 1, 1)));
        assert_eq!(ticks.len(), 14);
        assert!(ticks.windows(2).all(|w| w[1].year() - w[0].year() == 5));
    }

    #[test]
    fn test_two_quarters_use_monthly_ticks() {
        let scale = TimeScale::new((date(1947, 1, 1), date(1947, 7, 1)), (0.0, 950.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks[0], date(1947, 1, 1));
        assert_eq!(ticks[6], date(1947, 7, 1));
    }

    #[test]
    fn test_interval_selection() {
        let start = date(2020, 1, 1);
        assert_eq!(TimeInterval::for_span(start, start, 10.0), TimeInterval::Day(1));
        assert_eq!(
            TimeInterval::for_span(start, date(2020, 1, 21), 10.0),
            TimeInterval::Day(2)
        );
        assert_eq!(
            TimeInterval::for_span(start, date(2020, 3, 1), 10.0),
            TimeInterval::Week
        );
        assert_eq!(
            TimeInterval::for_span(start, date(2022, 6, 1), 10.0),
            TimeInterval::Month(3)
        );
    }

    #[test]
    fn test_week_ticks_fall_on_sundays() {
        // 2020-01-05 is a Sunday
        let ticks = TimeInterval::Week.range(date(2020, 1, 1), date(2020, 1, 31));
        assert_eq!(ticks.first(), Some(&date(2020, 1, 5)));
        assert_eq!(ticks.len(), 4);
        assert!(ticks.iter().all(|d| d.weekday() == chrono::Weekday::Sun));
    }

    #[test]
    fn test_quarter_ticks_align_to_calendar_quarters() {
        let ticks = TimeInterval::Month(3).range(date(1947, 2, 15), date(1948, 1, 1));
        assert_eq!(
            ticks,
            vec![date(1947, 4, 1), date(1947, 7, 1), date(1947, 10, 1), date(1948, 1, 1)]
        );
    }

    #[test]
    fn test_single_date_has_one_tick() {
        let d = date(1947, 1, 1);
        let scale = TimeScale::new((d, d), (0.0, 950.0));
        assert_eq!(scale.ticks(10), vec![d]);
    }
}
