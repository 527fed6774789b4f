use super::coerce_number;

/// Cap on the number of records a log query returns.
///
/// Coercion mirrors how document stores treat a numeric limit: the text is
/// read as a number, truncated, and its magnitude used. Zero means no cap,
/// while text that isn't a number at all caps the result at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unlimited,
    AtMost(u64),
}

impl Limit {
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            None | Some("") => Self::Unlimited,
            Some(text) => Self::coerce(text),
        }
    }

    fn coerce(text: &str) -> Self {
        match coerce_number(text) {
            None => Self::AtMost(0),
            Some(v) if v.is_infinite() => Self::Unlimited,
            // Bound parameters are signed 64 bit, anything past that is "everything"
            Some(v) => match (v.trunc().abs() as u64).min(i64::MAX as u64) {
                0 => Self::Unlimited,
                n => Self::AtMost(n),
            },
        }
    }

    pub fn as_option(&self) -> Option<u64> {
        match self {
            Self::Unlimited => None,
            Self::AtMost(n) => Some(*n),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_absent_or_blank_is_unlimited() {
        assert_eq!(Limit::parse(None), Limit::Unlimited);
        assert_eq!(Limit::parse(Some("")), Limit::Unlimited);
        assert_eq!(Limit::parse(Some("   ")), Limit::Unlimited);
        assert_eq!(Limit::parse(Some("0")), Limit::Unlimited);
    }

    #[test]
    fn test_numbers_cap_results() {
        assert_eq!(Limit::parse(Some("3")), Limit::AtMost(3));
        assert_eq!(Limit::parse(Some(" 7 ")), Limit::AtMost(7));
        assert_eq!(Limit::parse(Some("2.9")), Limit::AtMost(2));
        assert_eq!(Limit::parse(Some("-4")), Limit::AtMost(4));
        assert_eq!(Limit::parse(Some("1e1")), Limit::AtMost(10));
        assert_eq!(Limit::parse(Some("0x10")), Limit::AtMost(16));
    }

    #[test]
    fn test_non_numeric_returns_nothing() {
        assert_eq!(Limit::parse(Some("ten")), Limit::AtMost(0));
        assert_eq!(Limit::parse(Some("5 rows")), Limit::AtMost(0));
        assert_eq!(Limit::parse(Some("NaN")), Limit::AtMost(0));
        assert_eq!(Limit::parse(Some("0xzz")), Limit::AtMost(0));
        assert_eq!(Limit::parse(Some("inf")), Limit::AtMost(0));
        assert_eq!(Limit::parse(Some("infinity")), Limit::AtMost(0));
    }

    #[test]
    fn test_huge_values_fit_a_signed_bind() {
        assert_eq!(Limit::parse(Some("Infinity")), Limit::Unlimited);
        assert_eq!(Limit::parse(Some("1e30")), Limit::AtMost(i64::MAX as u64));
        assert_eq!(
            Limit::parse(Some("9223372036854775808")),
            Limit::AtMost(i64::MAX as u64)
        );
        assert_eq!(Limit::parse(Some("-1e30")), Limit::AtMost(i64::MAX as u64));
    }

    #[test]
    fn test_as_option() {
        assert_eq!(Limit::Unlimited.as_option(), None);
        assert_eq!(Limit::AtMost(5).as_option(), Some(5));
    }
}
