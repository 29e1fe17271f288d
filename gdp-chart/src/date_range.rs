use chrono::{Days, Months, NaiveDate};

/// Distance between consecutive dates yielded by a [`DateRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Days(u64),
    Months(u32),
}

/// Iterator over `start, start + step, ...` up to and including `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Step,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, step: Step) -> Self {
        Self {
            next: Some(start),
            end,
            step,
        }
    }

    /// Every calendar day from `start` through `end`.
    pub fn daily(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start, end, Step::Days(1))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = match self.step {
            Step::Days(n) => current.checked_add_days(Days::new(n.max(1))),
            Step::Months(n) => current.checked_add_months(Months::new(n.max(1))),
        };
        Some(current)
    }
}
