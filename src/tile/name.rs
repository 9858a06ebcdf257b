/// Format a coordinate for use in a tile directory name.
///
/// Uses the shortest decimal digits that round-trip to the same `f64`. Values with a decimal
/// exponent in `[-4, 16)` are written positionally with at least one fractional digit
/// (`-80.0`, `0.5`, `0.016666666666666666`), anything else in scientific notation with a signed,
/// two-digit minimum exponent (`1e+16`, `1.5e-05`). Tile directories from previous runs were named
/// with this rule, changing it orphans them.
pub fn repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let inf = if value > 0. { "inf" } else { "-inf" };
        return inf.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0. {
        return format!("{sign}0.0");
    }

    // LowerExp without a precision gives the shortest round-trip digits, e.g. "1.6666666666666666e-2"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        positional(&digits, exp)
    } else {
        scientific(&digits, exp)
    };
    format!("{sign}{body}")
}

fn positional(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = (exp + 1) as usize;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific(digits: &str, exp: i32) -> String {
    let exp_sign = if exp < 0 { '-' } else { '+' };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{:02}", exp.abs())
    } else {
        format!("{lead}.{rest}e{exp_sign}{:02}", exp.abs())
    }
}
