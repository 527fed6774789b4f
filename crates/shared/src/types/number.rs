use serde::Serializer;

/// Reads form or query text as a number the way browsers and document stores
/// coerce it: surrounding whitespace is ignored, blank text is zero, `0x`,
/// `0o` and `0b` prefixes select a radix and only the exact word `Infinity`
/// (optionally signed) is infinite. Anything else that isn't a plain decimal
/// literal gives `None`.
pub fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = strip_prefix_ignore_case(text, prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // `f64::from_str` also takes "inf" and "nan" in any case
    if unsigned.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    text.parse().ok()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Whole numbers go out as json integers, so a duration of `30` isn't echoed
/// back as `30.0`
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decimal_text() {
        assert_eq!(coerce_number("30"), Some(30.0));
        assert_eq!(coerce_number(" 12.5 "), Some(12.5));
        assert_eq!(coerce_number("-4"), Some(-4.0));
        assert_eq!(coerce_number("+.5"), Some(0.5));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("   "), Some(0.0));
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(coerce_number("0x10"), Some(16.0));
        assert_eq!(coerce_number("0XfF"), Some(255.0));
        assert_eq!(coerce_number("0o17"), Some(15.0));
        assert_eq!(coerce_number("0b101"), Some(5.0));
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0xzz"), None);
        assert_eq!(coerce_number("-0x10"), None);
    }

    #[test]
    fn test_only_the_exact_word_is_infinite() {
        assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("infinity"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("nan"), None);
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(coerce_number("thirty"), None);
        assert_eq!(coerce_number("5 rows"), None);
        assert_eq!(coerce_number("1e"), None);
    }

    #[test]
    fn test_serialize_number() {
        #[derive(serde::Serialize)]
        struct Wrapper(#[serde(serialize_with = "serialize_number")] f64);

        assert_eq!(serde_json::to_string(&Wrapper(30.0)).unwrap(), "30");
        assert_eq!(serde_json::to_string(&Wrapper(-2.0)).unwrap(), "-2");
        assert_eq!(serde_json::to_string(&Wrapper(12.5)).unwrap(), "12.5");
    }
}
