//! Formatting operand text for a display.

use crate::calculator::parse_operand;

/// Fraction digits shown before rounding kicks in.
const MAX_FRACTION_DIGITS: usize = 8;

/// Format operand text for display.
///
/// Numbers get `,` thousands separators and at most eight fraction digits.
/// Anything else (responses, `Infinity`, `NaN`) is shown verbatim.
pub fn format_display(text: &str) -> String {
    let Some(value) = parse_operand(text).filter(|v| v.is_finite()) else {
        return text.to_string();
    };

    // Keep what the user typed, including a trailing point or zeros.
    if let Some((sign, int_part, frac_part)) = split_plain(text)
        && frac_part.is_none_or(|f| f.len() <= MAX_FRACTION_DIGITS)
    {
        let mut out = format!("{sign}{}", format_with_separators(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        return out;
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    if int_part == "0" && frac_part.is_none() {
        return "0".to_string();
    }

    let mut out = format!("{sign}{}", format_with_separators(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Split plain decimal text (`-1234.5`) into sign, integer and fraction.
fn split_plain(text: &str) -> Option<(&str, &str, Option<&str>)> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }

    Some((sign, int_part, frac_part))
}

/// Insert thousands separators into a run of digits.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
