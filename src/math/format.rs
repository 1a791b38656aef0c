//! printf-style rendering of coordinate triples.
//!
//! A template holds exactly three value placeholders, filled in order:
//!
//! `%[flags][width][.precision]conversion`
//!
//! * flags: `-` (left-align), `+` (always print a sign), ` ` (space before
//!   non-negative values), `0` (pad with zeros)
//! * conversions: `f`/`F` fixed-point (precision defaults to 6), `e`
//!   scientific with a signed two-digit exponent, `d` integer part, `s`
//!   shortest round-trip representation
//!
//! `%%` renders a literal percent sign.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::ParseError;

/// Number of value placeholders a template must carry.
const PLACEHOLDERS: usize = 3;

const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Scientific,
    Integer,
    Shortest,
}

#[derive(Debug, Clone, Copy, Default)]
struct Placeholder {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
}

impl Placeholder {
    fn render(&self, conversion: Conversion, value: f64) -> String {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        let mut body = match conversion {
            Conversion::Fixed => format!("{value:.precision$}"),
            Conversion::Scientific => scientific(value, precision),
            Conversion::Integer => {
                let truncated = value.trunc();
                // Avoid rendering "-0" for values in (-1, 0).
                let truncated = if truncated == 0.0 { 0.0 } else { truncated };
                format!("{truncated:.0}")
            }
            Conversion::Shortest => format!("{value}"),
        };

        if !body.starts_with('-') && !value.is_nan() {
            if self.plus_sign {
                body.insert(0, '+');
            } else if self.space_sign {
                body.insert(0, ' ');
            }
        }

        let len = body.chars().count();
        if len >= self.width {
            return body;
        }
        let padding = self.width - len;

        if self.left_align {
            body.push_str(&" ".repeat(padding));
            body
        } else if self.zero_pad && value.is_finite() {
            let sign_len = usize::from(body.starts_with(['-', '+', ' ']));
            body.insert_str(sign_len, &"0".repeat(padding));
            body
        } else {
            format!("{}{body}", " ".repeat(padding))
        }
    }
}

/// Renders `values` through `template`.
///
/// # Errors
///
/// Returns [`ParseError::Template`] if the template holds an unknown
/// conversion, ends in the middle of a placeholder, or does not hold exactly
/// three value placeholders.
pub fn format_triplet(template: &str, values: [f64; 3]) -> Result<String, ParseError> {
    let mut output = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    let mut used = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            output.push('%');
            continue;
        }

        let (placeholder, conversion) = read_placeholder(&mut chars)?;
        let Some(&value) = values.get(used) else {
            return Err(ParseError::Template(format!(
                "more than {PLACEHOLDERS} placeholders in {template:?}"
            )));
        };
        output.push_str(&placeholder.render(conversion, value));
        used += 1;
    }

    if used != PLACEHOLDERS {
        return Err(ParseError::Template(format!(
            "expected {PLACEHOLDERS} placeholders, found {used} in {template:?}"
        )));
    }

    Ok(output)
}

/// Renders `value` with a signed exponent of at least two digits, as in
/// `1.50e+03`.
fn scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    match exponent.parse::<i32>() {
        Ok(exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        Err(_) => rendered,
    }
}

fn read_placeholder(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<(Placeholder, Conversion), ParseError> {
    let mut placeholder = Placeholder::default();

    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => placeholder.left_align = true,
            '+' => placeholder.plus_sign = true,
            ' ' => placeholder.space_sign = true,
            '0' => placeholder.zero_pad = true,
            _ => break,
        }
        chars.next();
    }

    placeholder.width = read_digits(chars).unwrap_or(0);

    if chars.peek() == Some(&'.') {
        chars.next();
        placeholder.precision = Some(read_digits(chars).unwrap_or(0));
    }

    let conversion = match chars.next() {
        Some('f' | 'F') => Conversion::Fixed,
        Some('e') => Conversion::Scientific,
        Some('d') => Conversion::Integer,
        Some('s') => Conversion::Shortest,
        Some(other) => {
            return Err(ParseError::Template(format!(
                "unsupported conversion '%{other}'"
            )))
        }
        None => return Err(ParseError::Template("template ends inside a placeholder".into())),
    };

    Ok((placeholder, conversion))
}

fn read_digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let digit = digit as usize;
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    number
}
