use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// How a single ledger entry expands into a series of future entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    None,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Quarterly => "quarterly",
            Recurrence::Yearly => "yearly",
        }
    }

    fn month_step(&self) -> u32 {
        match self {
            Recurrence::Quarterly => 3,
            Recurrence::Yearly => 12,
            _ => 1,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Recurrence::None),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "quarterly" => Ok(Recurrence::Quarterly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown recurrence '{}'",
                other
            )))),
        }
    }
}

/// The full series of due dates for an entry, the base date included.
///
/// `none`, a missing end date, or an end date earlier than the base date
/// all yield just the base date. Month-based rules advance from the base
/// date's day-of-month (the anchor): each occurrence lands on the anchor
/// day, clamped to the last day of shorter months, so a series started on
/// Jan 31 runs Jan 31, Feb 28, Mar 31, ...
pub fn occurrences(
    due_date: NaiveDate,
    recurrence: Recurrence,
    recurrence_end: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let mut dates = vec![due_date];

    let end = match recurrence_end {
        Some(end) if end >= due_date => end,
        _ => return dates,
    };

    match recurrence {
        Recurrence::None => dates,
        Recurrence::Weekly => {
            let mut next = due_date + Duration::weeks(1);
            while next <= end {
                dates.push(next);
                next += Duration::weeks(1);
            }
            dates
        }
        month_based => {
            let step = month_based.month_step();
            let mut k = step;
            loop {
                let next = add_months(due_date, k);
                if next > end {
                    break;
                }
                dates.push(next);
                k += step;
            }
            dates
        }
    }
}

/// First and last day of a calendar month; `None` for an out-of-range month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some((first, last))
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

fn add_months(base: NaiveDate, months: u32) -> NaiveDate {
    let total = base.year() * 12 + base.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = base.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
