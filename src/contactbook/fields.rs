//! Typed, validated field values.
//!
//! Each value has a single validating constructor. Once built it cannot change,
//! so a [`PhoneNumber`] is always ten ASCII digits and a [`Birthday`] is always
//! a real calendar date.

use crate::error::{ContactsError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;

/// Textual date format used at every boundary: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        validate_phone(s)
    }
}

/// Validates a phone number: exactly ten characters, all decimal digits.
pub fn validate_phone(text: &str) -> Result<PhoneNumber> {
    // `len()` counts bytes, so a multi-byte digit can never sneak through.
    if text.len() != PHONE_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ContactsError::InvalidPhoneFormat(text.to_string()));
    }
    Ok(PhoneNumber(text.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_birthday(s)
    }
}

/// Parses a birthday written as `DD.MM.YYYY`.
///
/// The shape is checked strictly before handing the text to chrono, which on
/// its own would accept unpadded fields like `5.3.1990`.
pub fn parse_birthday(text: &str) -> Result<Birthday> {
    let invalid = || ContactsError::InvalidDateFormat(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    let [day, month, year] = parts[..] else {
        return Err(invalid());
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(invalid());
    }
    if !(all_digits(day) && all_digits(month) && all_digits(year)) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Birthday)
        .map_err(|_| invalid())
}

/// Renders any date in the boundary format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_ten_digits() {
        let phone = validate_phone("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn rejects_bad_phones() {
        for bad in ["", "123", "05012345678", "050123456a", "050-123-45", " 050123456"] {
            assert!(
                matches!(validate_phone(bad), Err(ContactsError::InvalidPhoneFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(validate_phone("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn parses_birthday() {
        let bday = parse_birthday("05.03.1990").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 3, 5).unwrap());
        assert_eq!(bday.to_string(), "05.03.1990");
    }

    #[test]
    fn rejects_impossible_dates() {
        for bad in ["31.04.2020", "01.13.2020", "29.02.2023", "00.01.2020", "32.01.2020"] {
            assert!(
                matches!(parse_birthday(bad), Err(ContactsError::InvalidDateFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_wrong_shape() {
        for bad in ["5.3.1990", "05-03-1990", "1990.03.05", "05.03.90", "05.03.1990.", "", "aa.bb.cccc"] {
            assert!(parse_birthday(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn accepts_leap_day_in_leap_year() {
        assert!(parse_birthday("29.02.2000").is_ok());
    }

    proptest! {
        #[test]
        fn any_ten_digit_string_is_a_phone(s in "[0-9]{10}") {
            let phone = validate_phone(&s).unwrap();
            prop_assert_eq!(phone.as_str(), s.as_str());
        }

        #[test]
        fn wrong_length_is_never_a_phone(s in "[0-9]{0,9}|[0-9]{11,20}") {
            prop_assert!(validate_phone(&s).is_err());
        }

        #[test]
        fn a_non_digit_is_never_a_phone(prefix in "[0-9]{0,9}", c in "[^0-9]") {
            let mut s = prefix.clone();
            s.push_str(&c);
            while s.chars().count() < PHONE_LEN {
                s.push('0');
            }
            prop_assert!(validate_phone(&s).is_err());
        }

        #[test]
        fn real_dates_render_back_unchanged(
            date in (1000i32..=9999, 1u32..=12, 1u32..=31)
                .prop_filter_map("real date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        ) {
            let text = format_date(date);
            let bday = parse_birthday(&text).unwrap();
            prop_assert_eq!(bday.to_string(), text);
        }
    }
}
