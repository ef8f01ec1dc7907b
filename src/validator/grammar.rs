//! Type grammar: classifies a dynamic value against one type tag.
//!
//! # Rules
//! - `String`: any string, including empty
//! - `Int`: a number with zero fractional part (JSON numbers arrive as f64)
//! - `Boolean`: a boolean
//! - `List`: a sequence, any element types
//! - `Date`: string in `DD-MM-YYYY` form, day 01-31, month 01-12
//! - `Email`: string in simplified `local@domain.tld` form
//! - `UUID`: string in canonical 8-4-4-4-12 hex-with-dashes form
//! - `Auth-Token`: string of `Bearer ` plus one or more alphanumerics
//!
//! An unrecognized tag never matches; callers treat that identically to a
//! semantic mismatch.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ParamValue, TypeTag};

/// Date format: dd-mm-yyyy
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-\d{4}$").unwrap());

/// Email format: simplified RFC 5321
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap());

/// UUID format: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Auth-Token format: Bearer <token>
static AUTH_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Bearer [a-zA-Z0-9]+$").unwrap());

/// Returns true if `value` satisfies `tag`.
pub fn accepts(value: &ParamValue, tag: &TypeTag) -> bool {
    match tag {
        TypeTag::String => matches!(value, ParamValue::String(_)),
        TypeTag::Int => matches!(value, ParamValue::Number(n) if n.fract() == 0.0),
        TypeTag::Boolean => matches!(value, ParamValue::Bool(_)),
        TypeTag::List => matches!(value, ParamValue::List(_)),
        TypeTag::Date => matches_format(value, &DATE_RE),
        TypeTag::Email => matches_format(value, &EMAIL_RE),
        TypeTag::Uuid => matches_format(value, &UUID_RE),
        TypeTag::AuthToken => matches_format(value, &AUTH_TOKEN_RE),
        TypeTag::Other(_) => false,
    }
}

fn matches_format(value: &ParamValue, pattern: &Regex) -> bool {
    matches!(value, ParamValue::String(s) if pattern.is_match(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> ParamValue {
        ParamValue::String(v.to_string())
    }

    #[test]
    fn test_string_accepts_any_string() {
        assert!(accepts(&s("hello"), &TypeTag::String));
        assert!(accepts(&s(""), &TypeTag::String));
        assert!(!accepts(&ParamValue::Number(1.0), &TypeTag::String));
        assert!(!accepts(&ParamValue::Null, &TypeTag::String));
    }

    #[test]
    fn test_int_requires_zero_fraction() {
        assert!(accepts(&ParamValue::Number(42.0), &TypeTag::Int));
        assert!(accepts(&ParamValue::Number(-7.0), &TypeTag::Int));
        assert!(accepts(&ParamValue::Number(0.0), &TypeTag::Int));
        assert!(!accepts(&ParamValue::Number(42.5), &TypeTag::Int));
        assert!(!accepts(&s("42"), &TypeTag::Int));
        assert!(!accepts(&ParamValue::Bool(true), &TypeTag::Int));
    }

    #[test]
    fn test_boolean() {
        assert!(accepts(&ParamValue::Bool(true), &TypeTag::Boolean));
        assert!(accepts(&ParamValue::Bool(false), &TypeTag::Boolean));
        assert!(!accepts(&s("true"), &TypeTag::Boolean));
        assert!(!accepts(&ParamValue::Number(1.0), &TypeTag::Boolean));
    }

    #[test]
    fn test_list_any_elements() {
        assert!(accepts(&ParamValue::List(vec![]), &TypeTag::List));
        assert!(accepts(
            &ParamValue::List(vec![ParamValue::Number(1.0), s("two")]),
            &TypeTag::List
        ));
        assert!(!accepts(&s("[1,2]"), &TypeTag::List));
    }

    #[test]
    fn test_date_is_day_first() {
        assert!(accepts(&s("12-01-2022"), &TypeTag::Date));
        assert!(accepts(&s("31-12-1999"), &TypeTag::Date));
        assert!(accepts(&s("01-01-2024"), &TypeTag::Date));
        // ISO ordering is not a Date
        assert!(!accepts(&s("2022-01-12"), &TypeTag::Date));
        assert!(!accepts(&s("32-01-2022"), &TypeTag::Date));
        assert!(!accepts(&s("12-13-2022"), &TypeTag::Date));
        assert!(!accepts(&s("00-01-2022"), &TypeTag::Date));
        assert!(!accepts(&s("12/01/2022"), &TypeTag::Date));
        assert!(!accepts(&ParamValue::Number(12012022.0), &TypeTag::Date));
    }

    #[test]
    fn test_email() {
        assert!(accepts(&s("user@example.com"), &TypeTag::Email));
        assert!(accepts(&s("first.last+tag@sub.domain.org"), &TypeTag::Email));
        assert!(!accepts(&s("not-an-email"), &TypeTag::Email));
        assert!(!accepts(&s("user@domain"), &TypeTag::Email));
        assert!(!accepts(&s("user@domain.c"), &TypeTag::Email));
        assert!(!accepts(&s("@domain.com"), &TypeTag::Email));
    }

    #[test]
    fn test_uuid() {
        assert!(accepts(
            &s("46da6390-7c78-4a1c-9efa-7c0396067ce4"),
            &TypeTag::Uuid
        ));
        assert!(accepts(
            &s("46DA6390-7C78-4A1C-9EFA-7C0396067CE4"),
            &TypeTag::Uuid
        ));
        assert!(!accepts(&s("46da63907c784a1c9efa7c0396067ce4"), &TypeTag::Uuid));
        assert!(!accepts(&s("46da6390-7c78-4a1c-9efa"), &TypeTag::Uuid));
        assert!(!accepts(
            &s("46da6390-7c78-4a1c-9efa-7c0396067cg4"),
            &TypeTag::Uuid
        ));
    }

    #[test]
    fn test_auth_token() {
        assert!(accepts(&s("Bearer abc123"), &TypeTag::AuthToken));
        assert!(accepts(&s("Bearer X"), &TypeTag::AuthToken));
        assert!(!accepts(&s("Bearer "), &TypeTag::AuthToken));
        assert!(!accepts(&s("bearer abc123"), &TypeTag::AuthToken));
        assert!(!accepts(&s("Bearer abc-123"), &TypeTag::AuthToken));
        assert!(!accepts(&s("Token abc123"), &TypeTag::AuthToken));
    }

    #[test]
    fn test_unknown_tag_never_matches() {
        let tag = TypeTag::Other("Timestamp".to_string());
        assert!(!accepts(&s("anything"), &tag));
        assert!(!accepts(&ParamValue::Number(1.0), &tag));
        assert!(!accepts(&ParamValue::Null, &tag));
    }
}
