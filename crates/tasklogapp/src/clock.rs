//! Date source for backlog stamps and archive keys. Weeks start on Monday.

use chrono::{Datelike, Days, Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;

    fn monday_of_current_week(&self) -> NaiveDate {
        monday_of(self.today())
    }
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// The local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<K: Clock + ?Sized> Clock for Box<K> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn monday_of_current_week(&self) -> NaiveDate {
        (**self).monday_of_current_week()
    }
}
