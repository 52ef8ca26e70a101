use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::domain::{book::AddressBook, contact::Name};
use crate::validation::DATE_FORMAT;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the lookahead window, with the day
/// on which to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub congratulation_date: NaiveDate,
}

/// Birthdays within `window_days` of `today` (both ends inclusive), moved off
/// weekends, in store order.
pub fn upcoming(book: &AddressBook, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
    book.list_all()
        .filter_map(|contact| {
            let birthday = contact.get_birthday()?.date();
            let occurrence = next_occurrence(birthday, today)?;

            let days_ahead = (occurrence - today).num_days();
            if !(0..=i64::from(window_days)).contains(&days_ahead) {
                return None;
            }

            Some(UpcomingBirthday {
                name: contact.name().clone(),
                congratulation_date: adjust_for_weekend(occurrence),
            })
        })
        .collect()
}

/// First anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = project_onto_year(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    project_onto_year(birthday, today.year() + 1)
}

/// Moves the birthday's month and day onto `year`. February 29th lands on
/// March 1st in non-leap years.
pub fn project_onto_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
