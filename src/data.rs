//! Date-keyed vaccination records.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::error::Error;

/// One day of the published time series.
#[derive(Debug, Clone, PartialEq)]
pub struct VaccinationDay {
    pub date: NaiveDate,
    /// Running total of administered doses as of `date`.
    pub doses_total: u64,
    /// Delta versus the prior day. Negative when the source corrects
    /// earlier numbers downwards.
    pub doses_new: i64,
}

/// All published days, keyed by date. Adding a second record for the
/// same date replaces the first; insertion order never matters.
#[derive(Debug, Default)]
pub struct Vaccinations {
    days: HashMap<NaiveDate, VaccinationDay>,
}

impl Vaccinations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: VaccinationDay) {
        self.days.insert(day.date, day);
    }

    pub fn get(&self, date: NaiveDate) -> Result<&VaccinationDay, Error> {
        self.days.get(&date).ok_or(Error::NotFound(date))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Mean of `doses_new` over the 7 calendar days ending at
    /// `last_day` inclusive. The window never skips weekends or
    /// holidays; a single missing day fails the whole query.
    pub fn seven_day_average(&self, last_day: NaiveDate) -> Result<f64, Error> {
        let mut total = 0;
        for offset in 0..7 {
            total += self.get(last_day - Duration::days(offset))?.doses_new;
        }
        Ok(total as f64 / 7.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(d: NaiveDate, doses_new: i64) -> VaccinationDay {
        VaccinationDay {
            date: d,
            doses_total: 1_000_000,
            doses_new,
        }
    }

    /// Jan 1-8 with the deltas 100, 200, 150, 300, 250, 400, 350, 500.
    fn january() -> Vaccinations {
        let mut data = Vaccinations::new();
        for (i, n) in [100, 200, 150, 300, 250, 400, 350, 500].iter().enumerate() {
            data.add(day(date(2021, 1, 1 + i as u32), *n));
        }
        data
    }

    #[test]
    fn get_returns_inserted_record() {
        let mut data = Vaccinations::new();
        data.add(day(date(2021, 5, 1), 150_000));
        assert_eq!(data.get(date(2021, 5, 1)).unwrap().doses_new, 150_000);
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut data = Vaccinations::new();
        data.add(day(date(2021, 5, 1), 150_000));
        data.add(day(date(2021, 5, 1), 90_000));
        assert_eq!(data.len(), 1);
        assert_eq!(data.get(date(2021, 5, 1)).unwrap().doses_new, 90_000);
    }

    #[test]
    fn get_missing_date_is_not_found() {
        let data = january();
        match data.get(date(2021, 2, 1)) {
            Err(Error::NotFound(d)) => assert_eq!(d, date(2021, 2, 1)),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn seven_day_average_over_known_window() {
        let data = january();
        assert_eq!(data.seven_day_average(date(2021, 1, 7)).unwrap(), 250.0);
        assert_eq!(
            data.seven_day_average(date(2021, 1, 8)).unwrap(),
            2150.0 / 7.0
        );
    }

    #[test]
    fn replacing_one_day_shifts_average_by_a_seventh() {
        let mut data = january();
        let before = data.seven_day_average(date(2021, 1, 7)).unwrap();
        data.add(day(date(2021, 1, 5), 600));
        let after = data.seven_day_average(date(2021, 1, 7)).unwrap();
        assert_eq!(after, before + (600.0 - 250.0) / 7.0);
    }

    #[test]
    fn average_fails_when_any_window_day_is_missing() {
        let data = january();
        // Window Jan 3 - Jan 9: six days present, Jan 9 missing.
        match data.seven_day_average(date(2021, 1, 9)) {
            Err(Error::NotFound(d)) => assert_eq!(d, date(2021, 1, 9)),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn average_fails_on_gap_in_the_middle() {
        let mut data = Vaccinations::new();
        for i in [1u32, 2, 3, 5, 6, 7, 8] {
            data.add(day(date(2021, 1, i), 100));
        }
        match data.seven_day_average(date(2021, 1, 8)) {
            Err(Error::NotFound(d)) => assert_eq!(d, date(2021, 1, 4)),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
