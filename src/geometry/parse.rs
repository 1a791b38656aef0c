use crate::error::ParseError;

/// Splits a coordinate expression into its three raw fields.
///
/// Two forms are recognized:
///
/// * `<prefix> [a, b, c]`, e.g. `xyz: [1, 2, 3]`
/// * `(a, b, c)`
///
/// Leading and trailing whitespace is ignored, and each returned field is
/// trimmed.
pub(crate) fn split_triplet<'a>(
    expression: &'a str,
    prefix: &str,
) -> Result<[&'a str; 3], ParseError> {
    let trimmed = expression.trim();

    let inner = if let Some(rest) = trimmed.strip_prefix(prefix) {
        let rest = rest.trim_start();
        let Some(rest) = rest.strip_prefix('[') else {
            return Err(reject(expression, missing('[', expression)));
        };
        let Some(inner) = rest.strip_suffix(']') else {
            return Err(reject(expression, missing(']', expression)));
        };
        inner
    } else if let Some(rest) = trimmed.strip_prefix('(') {
        let Some(inner) = rest.strip_suffix(')') else {
            return Err(reject(expression, missing(')', expression)));
        };
        inner
    } else {
        return Err(reject(
            expression,
            ParseError::UnrecognizedFormat(expression.to_owned()),
        ));
    };

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(reject(
            expression,
            ParseError::FieldCount {
                found: fields.len(),
            },
        )),
    }
}

/// Parses a plain decimal field.
pub(crate) fn parse_number(field: &str) -> Result<f64, ParseError> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::debug!(field, "rejected numeric field");
            Err(ParseError::InvalidNumber(field.to_owned()))
        }
    }
}

fn missing(delimiter: char, expression: &str) -> ParseError {
    ParseError::MissingDelimiter {
        delimiter,
        expression: expression.to_owned(),
    }
}

fn reject(expression: &str, error: ParseError) -> ParseError {
    tracing::debug!(expression, %error, "rejected coordinate expression");
    error
}
