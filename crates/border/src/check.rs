//! Check functions. Each one returns `Ok(())` when its condition holds and
//! otherwise an error tagged with the matching [`FailureKind`] and located at
//! the caller.
//!
//! All checks are `#[track_caller]`; the locator is resolved from the call
//! site, so wrapping a check in a closure hides the real caller.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::{email, BorderError, FailureKind, Locator, Result};

#[track_caller]
fn fail(kind: FailureKind, message: impl Into<String>) -> BorderError {
    let err = BorderError::new(kind, Locator::caller(), message);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "border",
        kind = %err.kind(),
        locator = %err.locator(),
        reason = err.message(),
        "precondition failed"
    );
    err
}

/// Fails with [`FailureKind::NotNull`] when `value` is present.
#[track_caller]
pub fn assert_is_null<T>(message: impl Into<String>, value: Option<T>) -> Result {
    if value.is_some() {
        return Err(fail(FailureKind::NotNull, message));
    }
    Ok(())
}

/// Fails with [`FailureKind::IsNull`] when `value` is absent.
#[track_caller]
pub fn assert_not_null<T>(message: impl Into<String>, value: Option<T>) -> Result {
    if value.is_none() {
        return Err(fail(FailureKind::IsNull, message));
    }
    Ok(())
}

/// Fails with [`FailureKind::NotEqual`] unless both sides are equal.
///
/// Two absent values are equal; one absent value never equals a present one.
#[track_caller]
pub fn assert_equal<L, R>(message: impl Into<String>, left: Option<L>, right: Option<R>) -> Result
where
    L: PartialEq<R>,
{
    let equal = match (&left, &right) {
        (None, None) => true,
        (Some(l), Some(r)) => l == r,
        _ => false,
    };
    if !equal {
        return Err(fail(FailureKind::NotEqual, message));
    }
    Ok(())
}

/// Fails with [`FailureKind::IsEmpty`] when `value` is absent or `""`.
///
/// An absent value reports `IsEmpty`, not `IsNull`; use
/// [`assert_not_null_or_empty`] to tell the two apart.
#[track_caller]
pub fn assert_not_empty(message: impl Into<String>, value: Option<&str>) -> Result {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(fail(FailureKind::IsEmpty, message)),
    }
}

/// Fails with [`FailureKind::IsNull`] when `value` is absent and with
/// [`FailureKind::IsEmpty`] when it is `""`.
#[track_caller]
pub fn assert_not_null_or_empty(message: impl Into<String>, value: Option<&str>) -> Result {
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    if value.is_empty() {
        return Err(fail(FailureKind::IsEmpty, message));
    }
    Ok(())
}

/// Fails with [`FailureKind::IsFalse`] when `state` is false.
#[track_caller]
pub fn assert_true(message: impl Into<String>, state: bool) -> Result {
    if !state {
        return Err(fail(FailureKind::IsFalse, message));
    }
    Ok(())
}

/// Fails with [`FailureKind::IsTrue`] when `state` is true.
#[track_caller]
pub fn assert_false(message: impl Into<String>, state: bool) -> Result {
    if state {
        return Err(fail(FailureKind::IsTrue, message));
    }
    Ok(())
}

/// Fails when `value` is absent or longer than `max` characters.
///
/// Length is counted in `char`s. A value exactly `max` long passes.
#[track_caller]
pub fn assert_not_too_long(message: impl Into<String>, value: Option<&str>, max: usize) -> Result {
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    if value.chars().count() > max {
        return Err(fail(FailureKind::TooLong, message));
    }
    Ok(())
}

/// Fails when `value` is absent or shorter than `min` characters.
#[track_caller]
pub fn assert_not_too_short(message: impl Into<String>, value: Option<&str>, min: usize) -> Result {
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    if value.chars().count() < min {
        return Err(fail(FailureKind::TooShort, message));
    }
    Ok(())
}

/// Fails when `value` is absent or `pattern` does not match the whole of it.
///
/// The pattern is compiled on every call. One that does not compile is
/// reported as [`FailureKind::Pattern`].
#[track_caller]
pub fn assert_matches_pattern(
    message: impl Into<String>,
    value: Option<&str>,
    pattern: &str,
) -> Result {
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    // The bare pattern must compile on its own before it is anchored, or an
    // unbalanced group can escape the anchors.
    let anchored = Regex::new(pattern).and_then(|_| Regex::new(&format!(r"^(?:{pattern})$")));
    match anchored {
        Ok(re) if re.is_match(value) => Ok(()),
        Ok(_) => Err(fail(FailureKind::Pattern, message)),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "border", error = %_err, pattern, "pattern does not compile");
            Err(fail(FailureKind::Pattern, message))
        }
    }
}

#[track_caller]
fn in_range<T: PartialOrd>(
    message: impl Into<String>,
    value: Option<T>,
    from: Option<T>,
    to: Option<T>,
) -> Result {
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    if let Some(from) = from {
        if value < from {
            return Err(fail(FailureKind::InvalidDate, message));
        }
    }
    if let Some(to) = to {
        if value > to {
            return Err(fail(FailureKind::InvalidDate, message));
        }
    }
    Ok(())
}

/// Fails when `date` is absent or outside `[from, to]`. Both bounds are
/// inclusive and an absent bound leaves that side open.
#[track_caller]
pub fn assert_in_date_range(
    message: impl Into<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result {
    in_range(message, date, from, to)
}

/// Timestamp flavour of [`assert_in_date_range`].
#[track_caller]
pub fn assert_in_datetime_range(
    message: impl Into<String>,
    timestamp: Option<NaiveDateTime>,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
) -> Result {
    in_range(message, timestamp, from, to)
}

#[track_caller]
fn allowed<V, I, F>(message: impl Into<String>, value: Option<V>, candidates: I, eq: F) -> Result
where
    I: IntoIterator,
    F: Fn(&V, &I::Item) -> bool,
{
    let Some(value) = value else {
        return Err(fail(FailureKind::IsNull, message));
    };
    // An empty candidate list matches nothing and lands here too.
    if !candidates.into_iter().any(|candidate| eq(&value, &candidate)) {
        return Err(fail(FailureKind::NoMatch, message));
    }
    Ok(())
}

/// Fails when `value` is absent or equal to none of `candidates`.
///
/// Any finite iterable works: arrays, vectors, set iterators. An empty
/// candidate list always fails with [`FailureKind::NoMatch`].
#[track_caller]
pub fn assert_in_allowed_set<V, I>(
    message: impl Into<String>,
    value: Option<V>,
    candidates: I,
) -> Result
where
    I: IntoIterator,
    V: PartialEq<I::Item>,
{
    allowed(message, value, candidates, |v, c| v == c)
}

/// Explicit-list form of [`assert_in_allowed_set`]. See also [`one_of!`](crate::one_of).
#[track_caller]
pub fn assert_one_of<V, C>(message: impl Into<String>, value: Option<V>, candidates: &[C]) -> Result
where
    V: PartialEq<C>,
{
    allowed(message, value, candidates, |v, c| v.eq(*c))
}

/// Collection form of [`assert_in_allowed_set`].
///
/// A missing collection is treated like a missing value and reports
/// [`FailureKind::IsNull`].
#[track_caller]
pub fn assert_in_collection<V, I>(
    message: impl Into<String>,
    value: Option<V>,
    candidates: Option<I>,
) -> Result
where
    I: IntoIterator,
    V: PartialEq<I::Item>,
{
    let Some(candidates) = candidates else {
        return Err(fail(FailureKind::IsNull, message));
    };
    allowed(message, value, candidates, |v, c| v == c)
}

/// Fails when `address` is absent or not shaped like `local@domain.tld`.
///
/// This is a syntactic approximation; plenty of RFC 5321 addresses are
/// rejected and some undeliverable ones pass.
#[track_caller]
pub fn assert_valid_email(message: impl Into<String>, address: Option<&str>) -> Result {
    let Some(address) = address else {
        return Err(fail(FailureKind::IsNull, message));
    };
    if !email::is_email_shaped(address) {
        return Err(fail(FailureKind::InvalidEmail, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn null_checks() {
        assert!(assert_is_null("Test", None::<&str>).is_ok());
        let err = assert_is_null("Test", Some("Not Null")).unwrap_err();
        assert!(matches!(err, BorderError::NotNull(_)));

        assert!(assert_not_null("Test", Some("Not Null")).is_ok());
        let err = assert_not_null("Test", None::<u8>).unwrap_err();
        assert!(matches!(err, BorderError::IsNull(_)));
        assert_eq!(err.message(), "Test");
    }

    #[test]
    fn equality() {
        assert!(assert_equal("Test", Some("ABC"), Some("ABC")).is_ok());
        assert!(assert_equal("Test", None::<&str>, None::<&str>).is_ok());
        assert!(assert_equal("Test", Some(String::from("ABC")), Some("ABC")).is_ok());

        for err in [
            assert_equal("Test", Some("ABC"), Some("DEF")).unwrap_err(),
            assert_equal("Test", None::<&str>, Some("DEF")).unwrap_err(),
            assert_equal("Test", Some("ABC"), None::<&str>).unwrap_err(),
        ] {
            assert_eq!(err.kind(), FailureKind::NotEqual);
        }
    }

    #[test]
    fn emptiness_kinds_differ_for_null() {
        assert!(assert_not_empty("Test", Some("ABC")).is_ok());
        assert!(assert_not_empty("Test", Some("   ")).is_ok());
        assert_eq!(assert_not_empty("Test", Some("")).unwrap_err().kind(), FailureKind::IsEmpty);
        assert_eq!(assert_not_empty("Test", None).unwrap_err().kind(), FailureKind::IsEmpty);

        assert!(assert_not_null_or_empty("Test", Some("ABC")).is_ok());
        assert_eq!(
            assert_not_null_or_empty("Test", None).unwrap_err().kind(),
            FailureKind::IsNull
        );
        assert_eq!(
            assert_not_null_or_empty("Test", Some("")).unwrap_err().kind(),
            FailureKind::IsEmpty
        );
    }

    #[test]
    fn booleans() {
        assert!(assert_true("Test", true).is_ok());
        assert!(matches!(assert_true("Test", false), Err(BorderError::IsFalse(_))));
        assert!(assert_false("Test", false).is_ok());
        assert!(matches!(assert_false("Test", true), Err(BorderError::IsTrue(_))));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(assert_not_too_long("Test", Some("HHH"), 3).is_ok());
        assert!(assert_not_too_long("Test", Some("HHH"), 4).is_ok());
        assert!(matches!(
            assert_not_too_long("Test", Some("HHH"), 2),
            Err(BorderError::TooLong(_))
        ));
        assert!(matches!(
            assert_not_too_long("Test", None, 2),
            Err(BorderError::IsNull(_))
        ));

        assert!(assert_not_too_short("Test", Some("HH"), 2).is_ok());
        assert!(assert_not_too_short("Test", Some("HHH"), 2).is_ok());
        assert!(matches!(
            assert_not_too_short("Test", Some("H"), 2),
            Err(BorderError::TooShort(_))
        ));
        assert!(matches!(
            assert_not_too_short("Test", None, 0),
            Err(BorderError::IsNull(_))
        ));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(assert_not_too_long("Test", Some("Māori"), 5).is_ok());
        assert!(assert_not_too_short("Test", Some("日本"), 3).is_err());
    }

    #[test]
    fn pattern_must_cover_whole_value() {
        assert!(assert_matches_pattern("Test", Some("ABC"), "^ABC$").is_ok());
        assert!(assert_matches_pattern("Test", Some("ABC"), "A.C").is_ok());
        assert!(matches!(
            assert_matches_pattern("Test", Some("H"), "^ABC$"),
            Err(BorderError::Pattern(_))
        ));
        // substring hit is not enough
        assert!(matches!(
            assert_matches_pattern("Test", Some("xABCx"), "ABC"),
            Err(BorderError::Pattern(_))
        ));
        assert!(assert_matches_pattern("Test", Some("ab"), "a|ab").is_ok());
        assert!(matches!(
            assert_matches_pattern("Test", None, "ABC"),
            Err(BorderError::IsNull(_))
        ));
    }

    #[test]
    fn bad_pattern_is_a_pattern_failure() {
        let err = assert_matches_pattern("Test", Some("ABC"), "(unclosed").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Pattern);
    }

    #[test]
    fn unbalanced_pattern_cannot_escape_anchors() {
        assert!(Regex::new("a)|(?:b").is_err());
        let err = assert_matches_pattern("Test", Some("axyz"), "a)|(?:b").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Pattern);
        assert!(assert_matches_pattern("Test", Some("b"), "a)|(?:b").is_err());
    }

    #[test]
    fn date_range() {
        let (from, to) = (date(2018, 6, 10), date(2018, 6, 20));
        let mid = date(2018, 6, 15);
        assert!(assert_in_date_range("Test", Some(mid), Some(from), Some(to)).is_ok());
        assert!(assert_in_date_range("Test", Some(from), Some(from), Some(from)).is_ok());
        assert!(matches!(
            assert_in_date_range("Test", Some(mid), Some(from), Some(date(2018, 6, 12))),
            Err(BorderError::InvalidDate(_))
        ));
        assert!(matches!(
            assert_in_date_range("Test", Some(date(2018, 6, 9)), Some(from), None),
            Err(BorderError::InvalidDate(_))
        ));
        assert!(assert_in_date_range("Test", Some(date(1900, 1, 1)), None, Some(to)).is_ok());
        assert!(assert_in_date_range("Test", Some(date(2999, 1, 1)), None, None).is_ok());
        assert!(matches!(
            assert_in_date_range("Test", None, Some(from), Some(to)),
            Err(BorderError::IsNull(_))
        ));
    }

    #[test]
    fn datetime_range() {
        let (from, to) = (midnight(2018, 6, 10), midnight(2018, 6, 20));
        let mid = midnight(2018, 6, 15);
        assert!(assert_in_datetime_range("Test", Some(mid), Some(from), Some(to)).is_ok());
        assert!(assert_in_datetime_range("Test", Some(from), Some(from), Some(from)).is_ok());
        let just_after = date(2018, 6, 20).and_hms_opt(0, 0, 1).unwrap();
        assert!(matches!(
            assert_in_datetime_range("Test", Some(just_after), Some(from), Some(to)),
            Err(BorderError::InvalidDate(_))
        ));
        assert!(matches!(
            assert_in_datetime_range("Test", None, None, None),
            Err(BorderError::IsNull(_))
        ));
    }

    #[test]
    fn allowed_values() {
        assert!(assert_one_of("Test", Some("ABC"), &["ABC", "DEF"]).is_ok());
        assert!(matches!(
            assert_one_of("Test", Some("XYZ"), &["ABC", "DEF"]),
            Err(BorderError::NoMatch(_))
        ));
        assert!(matches!(
            assert_one_of("Test", Some("ABC"), &[] as &[&str]),
            Err(BorderError::NoMatch(_))
        ));
        assert!(matches!(
            assert_one_of("Test", None::<&str>, &["ABC"]),
            Err(BorderError::IsNull(_))
        ));
        assert!(assert_in_allowed_set("Test", Some(3), 1..=5).is_ok());
        assert!(assert_in_allowed_set("Test", Some(9), 1..=5).is_err());
    }

    #[test]
    fn allowed_collection() {
        let vals: HashSet<String> = ["ABC", "DEF"].into_iter().map(String::from).collect();
        assert!(assert_in_collection("Test", Some("ABC"), Some(&vals)).is_ok());
        assert!(matches!(
            assert_in_collection("Test", Some("XYZ"), Some(&vals)),
            Err(BorderError::NoMatch(_))
        ));
        assert!(matches!(
            assert_in_collection("Test", Some("ABC"), Some(&HashSet::<String>::new())),
            Err(BorderError::NoMatch(_))
        ));
        assert!(matches!(
            assert_in_collection("Test", Some("ABC"), None::<&HashSet<String>>),
            Err(BorderError::IsNull(_))
        ));
    }

    #[test]
    fn email_shape() {
        assert!(assert_valid_email("Test", Some("joebloggs@abc.com")).is_ok());
        assert!(matches!(assert_valid_email("Test", None), Err(BorderError::IsNull(_))));
        assert!(matches!(
            assert_valid_email("Test", Some("Invalid Email Address@abc.com")),
            Err(BorderError::InvalidEmail(_))
        ));
    }

    #[test]
    fn locator_names_the_calling_file() {
        let line = line!() + 1;
        let err = assert_true("Test", false).unwrap_err();
        assert_eq!(err.locator().to_string(), format!("check:{line}"));
    }
}
