/// Parses an operand the permissive way: leading whitespace is skipped and the
/// longest leading decimal literal is read, so `"5abc"` yields `5.0`.
///
/// Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_operand(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim_start();
    let literal = &trimmed[..decimal_prefix_len(trimmed.as_bytes())];
    if literal.is_empty() {
        return None;
    }

    literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_operand(Some("2")), Some(2.0));
        assert_eq!(parse_operand(Some("-4")), Some(-4.0));
        assert_eq!(parse_operand(Some("+2.5")), Some(2.5));
        assert_eq!(parse_operand(Some(".5")), Some(0.5));
        assert_eq!(parse_operand(Some("5.")), Some(5.0));
        assert_eq!(parse_operand(Some("1.5e3")), Some(1500.0));
    }

    #[test]
    fn reads_leading_numeric_prefix() {
        assert_eq!(parse_operand(Some("5abc")), Some(5.0));
        assert_eq!(parse_operand(Some("  42 apples")), Some(42.0));
        assert_eq!(parse_operand(Some("1e")), Some(1.0));
        assert_eq!(parse_operand(Some("2e+x")), Some(2.0));
        assert_eq!(parse_operand(Some("2.25.5")), Some(2.25));
        assert_eq!(parse_operand(Some("0x10")), Some(0.0));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_operand(None), None);
        assert_eq!(parse_operand(Some("")), None);
        assert_eq!(parse_operand(Some("foo")), None);
        assert_eq!(parse_operand(Some(".")), None);
        assert_eq!(parse_operand(Some("-")), None);
        assert_eq!(parse_operand(Some("abc5")), None);
        assert_eq!(parse_operand(Some("NaN")), None);
    }

    #[test]
    fn rejects_values_that_overflow() {
        assert_eq!(parse_operand(Some("1e400")), None);
        assert_eq!(parse_operand(Some("Infinity")), None);
    }
}
