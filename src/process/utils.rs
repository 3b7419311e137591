use once_cell::sync::Lazy;
use regex::Regex;

/// Unsigned integer or decimal with one dot and digits on both sides.
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("numeric pattern is valid"));

/// True when `s` is a plain unsigned number such as `42` or `3.14`.
///
/// Signs, exponents, surrounding whitespace and bare dots (`.5`, `5.`) are not
/// numbers here; such fields stay text.
pub fn is_number(s: &str) -> bool {
    NUMBER_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unsigned_integers_and_decimals() {
        for s in ["0", "7", "0042", "9.5", "123.456", "1000000000000000000000"] {
            assert!(is_number(s), "{s} should be numeric");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for s in [
            "", "-1", "+1", "1e5", ".5", "5.", "1.2.3", " 1", "1 ", "1,000", "abc", "1\r", "NaN",
        ] {
            assert!(!is_number(s), "{s:?} should not be numeric");
        }
    }
}
