//! Property-based tests for the registration age rule

use chrono::{Datelike, Duration, Months, NaiveDate};
use proptest::prelude::*;
use softdesk_domain::{age_on, DomainError, User, MINIMUM_AGE};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
}

proptest! {
    /// Anyone whose fifteenth birthday is still ahead is rejected
    #[test]
    fn test_underage_birth_dates_rejected(days_young in 1i64..(15 * 365)) {
        let fifteenth_birthday_cutoff = today() - Months::new(MINIMUM_AGE as u32 * 12);
        let birth_date = fifteenth_birthday_cutoff + Duration::days(days_young);
        prop_assume!(!(birth_date.month() == 2 && birth_date.day() == 29));

        prop_assert!(age_on(birth_date, today()) < MINIMUM_AGE);
        let rejected = matches!(
            User::validate_birth_date(birth_date, today()),
            Err(DomainError::ValidationError { .. })
        );
        prop_assert!(rejected);
    }

    /// Anyone aged fifteen or more is accepted
    #[test]
    fn test_adult_birth_dates_accepted(days_old in 0i64..(80 * 365)) {
        let birth_date = today() - Months::new(MINIMUM_AGE as u32 * 12) - Duration::days(days_old);
        prop_assert!(age_on(birth_date, today()) >= MINIMUM_AGE);
        prop_assert!(User::validate_birth_date(birth_date, today()).is_ok());
    }

    /// Age never decreases as time passes
    #[test]
    fn test_age_is_monotonic(days_old in 0i64..(90 * 365), later in 0i64..1000) {
        let birth_date = today() - Duration::days(days_old);
        let now = age_on(birth_date, today());
        let after = age_on(birth_date, today() + Duration::days(later));
        prop_assert!(after >= now);
    }
}

#[test]
fn test_exactly_fifteen_today_is_accepted() {
    let birth_date = NaiveDate::from_ymd_opt(2009, 9, 1).unwrap();
    assert_eq!(age_on(birth_date, today()), 15);
    assert!(User::validate_birth_date(birth_date, today()).is_ok());
}

#[test]
fn test_fifteen_tomorrow_is_rejected() {
    let birth_date = NaiveDate::from_ymd_opt(2009, 9, 2).unwrap();
    assert_eq!(age_on(birth_date, today()), 14);
    assert!(User::validate_birth_date(birth_date, today()).is_err());
}
