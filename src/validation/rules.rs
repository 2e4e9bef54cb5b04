//! Single-field rules shared by every form
//!
//! Each rule returns the broken [`ErrorKind`] or `None` when the value passes.
//! Required rules run first: a blank value is `Required`, never `Pattern`.

use super::patterns;
use super::ValidationContext;
use crate::form::{ErrorKind, FieldValue};
use chrono::{Months, NaiveDate};
use regex::Regex;

/// Format birth and appointment dates are typed in
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MIN_HEIGHT_CM: f64 = 30.0;
pub const MIN_WEIGHT_KG: f64 = 1.0;

fn is_blank(value: Option<&FieldValue>) -> bool {
    value.map_or(true, FieldValue::is_blank)
}

fn text(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::display).unwrap_or_default()
}

pub fn required(value: Option<&FieldValue>) -> Option<ErrorKind> {
    is_blank(value).then_some(ErrorKind::Required)
}

/// Required value matching `regex`
pub fn pattern(value: Option<&FieldValue>, regex: &Regex) -> Option<ErrorKind> {
    required(value).or_else(|| optional_pattern(value, regex))
}

/// Like [`pattern`] but a blank value passes
pub fn optional_pattern(value: Option<&FieldValue>, regex: &Regex) -> Option<ErrorKind> {
    if is_blank(value) || regex.is_match(&text(value)) {
        None
    } else {
        Some(ErrorKind::Pattern)
    }
}

/// At least 8 allowed characters with a letter, a digit and a symbol
pub fn password(value: Option<&FieldValue>) -> Option<ErrorKind> {
    if let Some(kind) = required(value) {
        return Some(kind);
    }
    let password = text(value);
    let strong = patterns::PASSWORD_CHARSET.is_match(&password)
        && patterns::PASSWORD_LETTER.is_match(&password)
        && patterns::PASSWORD_DIGIT.is_match(&password)
        && patterns::PASSWORD_SYMBOL.is_match(&password);
    (!strong).then_some(ErrorKind::Pattern)
}

/// Confirmation must repeat `original` exactly
pub fn confirmation(
    value: Option<&FieldValue>,
    original: Option<&FieldValue>,
) -> Option<ErrorKind> {
    required(value).or_else(|| (text(value) != text(original)).then_some(ErrorKind::Mismatch))
}

/// Postal code checked against the format of `country`; other countries only need a value
pub fn postal_code(value: Option<&FieldValue>, country: Option<&FieldValue>) -> Option<ErrorKind> {
    match text(country).as_str() {
        "CAN" => pattern(value, &patterns::POSTAL_CODE_CAN),
        "USA" => pattern(value, &patterns::POSTAL_CODE_USA),
        _ => required(value),
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// True once `birth` is at least `years` years before `today`
pub fn is_of_age(birth: NaiveDate, today: NaiveDate, years: u32) -> bool {
    years
        .checked_mul(12)
        .and_then(|months| birth.checked_add_months(Months::new(months)))
        .is_some_and(|adult| adult <= today)
}

/// Birth date in [`DATE_FORMAT`] at least `ctx.minimum_age` years ago
pub fn minimum_age(value: Option<&FieldValue>, ctx: &ValidationContext) -> Option<ErrorKind> {
    if let Some(kind) = required(value) {
        return Some(kind);
    }
    let Some(birth) = parse_date(&text(value)) else {
        return Some(ErrorKind::Pattern);
    };
    (!is_of_age(birth, ctx.today, ctx.minimum_age)).then_some(ErrorKind::MinimumAge)
}

/// Date in [`DATE_FORMAT`] that is today or later
pub fn not_in_past(value: Option<&FieldValue>, ctx: &ValidationContext) -> Option<ErrorKind> {
    if let Some(kind) = required(value) {
        return Some(kind);
    }
    match parse_date(&text(value)) {
        None => Some(ErrorKind::Pattern),
        Some(date) if date < ctx.today => Some(ErrorKind::Past),
        Some(_) => None,
    }
}

/// Optional number; when present it must parse and reach `min`
pub fn optional_minimum(value: Option<&FieldValue>, min: f64) -> Option<ErrorKind> {
    let value = value.filter(|v| !v.is_blank())?;
    match value.as_number() {
        None => Some(ErrorKind::Pattern),
        Some(n) if n < min => Some(ErrorKind::Minimum),
        Some(_) => None,
    }
}

/// Toggle that has to be switched on
pub fn accepted(value: Option<&FieldValue>) -> Option<ErrorKind> {
    (!value.is_some_and(FieldValue::as_bool)).then_some(ErrorKind::Required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn v(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_password_rejected() {
            assert_eq!(password(Some(&v("abc"))), Some(ErrorKind::Pattern));
        }

        #[test]
        fn test_strong_password_accepted() {
            assert_eq!(password(Some(&v("abc12345!"))), None);
        }

        #[test]
        fn test_each_class_is_needed() {
            assert_eq!(password(Some(&v("abcdefgh!"))), Some(ErrorKind::Pattern));
            assert_eq!(password(Some(&v("12345678!"))), Some(ErrorKind::Pattern));
            assert_eq!(password(Some(&v("abc123456"))), Some(ErrorKind::Pattern));
            assert_eq!(password(Some(&v("abc 12345!"))), Some(ErrorKind::Pattern));
        }

        #[test]
        fn test_missing_password_is_required() {
            assert_eq!(password(None), Some(ErrorKind::Required));
            assert_eq!(password(Some(&v(""))), Some(ErrorKind::Required));
        }

        #[test]
        fn test_confirmation() {
            let original = v("abc12345!");
            assert_eq!(confirmation(Some(&v("abc12345!")), Some(&original)), None);
            assert_eq!(
                confirmation(Some(&v("abc12345?")), Some(&original)),
                Some(ErrorKind::Mismatch)
            );
            assert_eq!(confirmation(None, Some(&original)), Some(ErrorKind::Required));
        }
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_exactly_eighteen_passes() {
            assert_eq!(minimum_age(Some(&v("2008-10-19")), &ctx()), None);
        }

        #[test]
        fn test_one_day_short_fails() {
            assert_eq!(
                minimum_age(Some(&v("2008-10-20")), &ctx()),
                Some(ErrorKind::MinimumAge)
            );
        }

        #[test]
        fn test_missing_and_malformed() {
            assert_eq!(minimum_age(None, &ctx()), Some(ErrorKind::Required));
            assert_eq!(
                minimum_age(Some(&v("19/10/2008")), &ctx()),
                Some(ErrorKind::Pattern)
            );
        }

        #[test]
        fn test_custom_minimum_age() {
            let ctx = ctx().with_minimum_age(21);
            assert_eq!(
                minimum_age(Some(&v("2008-10-19")), &ctx),
                Some(ErrorKind::MinimumAge)
            );
            assert_eq!(minimum_age(Some(&v("2005-10-19")), &ctx), None);
        }

        #[test]
        fn test_leap_day_birthday_reaches_age_on_feb_28() {
            let birth = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();
            let feb_28 = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
            let feb_27 = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
            assert!(is_of_age(birth, feb_28, 18));
            assert!(!is_of_age(birth, feb_27, 18));
        }

        #[test]
        fn test_huge_minimum_age_is_never_reached() {
            let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
            assert!(!is_of_age(birth, ctx().today, 400_000_000));
            assert!(!is_of_age(birth, ctx().today, u32::MAX));
            assert_eq!(
                minimum_age(Some(&v("1990-01-01")), &ctx().with_minimum_age(u32::MAX)),
                Some(ErrorKind::MinimumAge)
            );
        }
    }

    mod postal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_canada_uses_canadian_pattern() {
            let can = v("CAN");
            assert_eq!(postal_code(Some(&v("H2X 1Y4")), Some(&can)), None);
            assert_eq!(
                postal_code(Some(&v("90210")), Some(&can)),
                Some(ErrorKind::Pattern)
            );
        }

        #[test]
        fn test_usa_uses_zip_pattern() {
            let usa = v("USA");
            assert_eq!(postal_code(Some(&v("90210")), Some(&usa)), None);
            assert_eq!(
                postal_code(Some(&v("H2X 1Y4")), Some(&usa)),
                Some(ErrorKind::Pattern)
            );
        }

        #[test]
        fn test_other_country_accepts_any_value() {
            let fra = v("FRA");
            assert_eq!(postal_code(Some(&v("75001")), Some(&fra)), None);
            assert_eq!(postal_code(Some(&v("anything")), None), None);
            assert_eq!(
                postal_code(Some(&v("")), Some(&fra)),
                Some(ErrorKind::Required)
            );
        }
    }

    #[test]
    fn test_pattern_reports_required_before_format() {
        assert_eq!(pattern(None, &patterns::EMAIL), Some(ErrorKind::Required));
        assert_eq!(
            pattern(Some(&v("nope")), &patterns::EMAIL),
            Some(ErrorKind::Pattern)
        );
        assert_eq!(optional_pattern(None, &patterns::PHONE_EXTENSION), None);
    }

    #[test]
    fn test_optional_minimum() {
        assert_eq!(optional_minimum(None, MIN_HEIGHT_CM), None);
        assert_eq!(optional_minimum(Some(&v("")), MIN_HEIGHT_CM), None);
        assert_eq!(optional_minimum(Some(&v("172")), MIN_HEIGHT_CM), None);
        assert_eq!(
            optional_minimum(Some(&v("12")), MIN_HEIGHT_CM),
            Some(ErrorKind::Minimum)
        );
        assert_eq!(
            optional_minimum(Some(&FieldValue::from(0.5)), MIN_WEIGHT_KG),
            Some(ErrorKind::Minimum)
        );
        assert_eq!(
            optional_minimum(Some(&v("tall")), MIN_HEIGHT_CM),
            Some(ErrorKind::Pattern)
        );
    }

    #[test]
    fn test_not_in_past() {
        assert_eq!(not_in_past(Some(&v("2026-10-19")), &ctx()), None);
        assert_eq!(
            not_in_past(Some(&v("2026-10-18")), &ctx()),
            Some(ErrorKind::Past)
        );
        assert_eq!(not_in_past(Some(&v("soon")), &ctx()), Some(ErrorKind::Pattern));
    }

    #[test]
    fn test_accepted() {
        assert_eq!(accepted(Some(&FieldValue::from(true))), None);
        assert_eq!(accepted(Some(&FieldValue::from(false))), Some(ErrorKind::Required));
        assert_eq!(accepted(None), Some(ErrorKind::Required));
    }
}
