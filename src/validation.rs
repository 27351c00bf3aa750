// Guest input validation
// Every check is a pure predicate over arbitrary text, so the prompt loop can
// reuse them as-is and tests can hit them without any I/O.

// Name: letters only once spaces are dropped, and at least one letter
pub fn valid_name(name: &str) -> bool {
    let mut letters = name.chars().filter(|c| *c != ' ').peekable();
    letters.peek().is_some() && letters.all(|c| c.is_alphabetic() && !c.is_numeric())
}

// Whitespace as regex \s sees it, which also covers the ASCII separators
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

// Email: local@domain.tld with no whitespace and a single '@'
pub fn valid_email(email: &str) -> bool {
    if email.chars().any(is_space) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with something on both sides of it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// Phone: ASCII digits only, at least 10 of them
pub fn valid_phone(phone: &str) -> bool {
    phone.chars().count() >= 10 && phone.chars().all(|c| c.is_ascii_digit())
}

// Rating: a whole number from 1 to 5, leading zeros tolerated
pub fn valid_rating(rating: &str) -> bool {
    if rating.is_empty() || !rating.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // Compare digits instead of parsing so oversized inputs cannot overflow
    matches!(rating.trim_start_matches('0'), "1" | "2" | "3" | "4" | "5")
}

pub fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Jane Doe", true; "#1 first and last name")]
    #[test_case("  Jane  ", true; "#2 surrounding spaces")]
    #[test_case("José Ñúñez", true; "#3 non ascii letters")]
    #[test_case("", false; "#4 empty")]
    #[test_case("   ", false; "#5 only spaces")]
    #[test_case("Jane2", false; "#6 digit")]
    #[test_case("Jane-Doe", false; "#7 hyphen")]
    #[test_case("Jane\tDoe", false; "#8 tab is not a space")]
    #[test_case("\u{216B}", false; "#9 roman numeral letter")]
    #[test_case("Louis \u{2166}", false; "#10 regnal numeral")]
    fn test_valid_name(input: &str, expected: bool) {
        assert_eq!(valid_name(input), expected);
    }

    #[test_case("jane@x.com", true; "#1 simple")]
    #[test_case("a.b@mail.example.org", true; "#2 dotted parts")]
    #[test_case("jane@x..com", true; "#3 double dot still matches")]
    #[test_case("jane@xcom", false; "#4 no dot in domain")]
    #[test_case("jane@.com", false; "#5 dot first")]
    #[test_case("jane@x.", false; "#6 dot last")]
    #[test_case("@x.com", false; "#7 empty local part")]
    #[test_case("jane@@x.com", false; "#8 two at signs")]
    #[test_case("ja ne@x.com", false; "#9 whitespace")]
    #[test_case("jane.x.com", false; "#10 no at sign")]
    #[test_case("jane@x.com\u{1c}", false; "#11 file separator")]
    #[test_case("ja\u{1f}ne@x.com", false; "#12 unit separator")]
    fn test_valid_email(input: &str, expected: bool) {
        assert_eq!(valid_email(input), expected);
    }

    #[test_case("1234567890", true; "#1 exactly ten digits")]
    #[test_case("00971501234567", true; "#2 longer")]
    #[test_case("123456789", false; "#3 nine digits")]
    #[test_case("", false; "#4 empty")]
    #[test_case("123-456-7890", false; "#5 dashes")]
    #[test_case("+1234567890", false; "#6 plus sign")]
    #[test_case("12345 67890", false; "#7 space")]
    fn test_valid_phone(input: &str, expected: bool) {
        assert_eq!(valid_phone(input), expected);
    }

    #[test_case("1", true; "#1 lowest")]
    #[test_case("5", true; "#2 highest")]
    #[test_case("05", true; "#3 leading zero")]
    #[test_case("0000000000000000000000003", true; "#4 long leading zeros")]
    #[test_case("0", false; "#5 zero")]
    #[test_case("6", false; "#6 above range")]
    #[test_case("99999999999999999999999", false; "#7 huge")]
    #[test_case("-1", false; "#8 negative")]
    #[test_case(" 3", false; "#9 padded")]
    #[test_case("", false; "#10 empty")]
    fn test_valid_rating(input: &str, expected: bool) {
        assert_eq!(valid_rating(input), expected);
    }

    #[test]
    fn test_phone_matches_digit_and_length_rule() {
        let samples = [
            "",
            "1",
            "123456789",
            "1234567890",
            "12345678901",
            "12345a7890",
            "１２３４５６７８９０",
        ];
        for s in samples {
            let expected = !s.is_empty()
                && s.chars().all(|c| c.is_ascii_digit())
                && s.chars().count() >= 10;
            assert_eq!(valid_phone(s), expected, "phone sample {:?}", s);
        }
    }

    #[test]
    fn test_rating_matches_numeric_range_rule() {
        for value in 0..=20u32 {
            let s = value.to_string();
            assert_eq!(valid_rating(&s), (1..=5).contains(&value), "rating {}", s);
        }
    }

    #[test]
    fn test_non_blank() {
        assert!(non_blank("Wallet"));
        assert!(non_blank(" Credit Card "));
        assert!(!non_blank(""));
        assert!(!non_blank(" \t "));
    }
}
