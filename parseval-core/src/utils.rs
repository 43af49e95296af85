///
/// Format an integer with thousands separators, e.g. `1234567` as `1,234,567`.
///
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(22057, "22,057")]
    #[case(1234567, "1,234,567")]
    fn test_format_with_commas(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_with_commas(n), expected);
    }
}
