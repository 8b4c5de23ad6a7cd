// the collection of utility functions mainly for bracket parsing and proceeding
use crate::formula::errors::ParseError;

/// Validates the parenthesis structure of a formula string.
///
/// Scans left to right counting depth: an extra closing bracket is reported
/// with its byte position, a missing closing bracket (or a string without any
/// brackets at all) as unclosed.
pub fn check_parentheses(expression: &str) -> Result<(), ParseError> {
    if !expression.contains('(') && !expression.contains(')') {
        return Err(ParseError::UnclosedParentheses);
    }

    let mut parentheses_count: i32 = 0;

    for (i, c) in expression.char_indices() {
        match c {
            '(' => parentheses_count += 1,
            ')' => parentheses_count -= 1,
            _ => {}
        }

        if parentheses_count < 0 {
            // extra closing bracket
            return Err(ParseError::UnbalancedParentheses { index: i });
        }
    }

    if parentheses_count == 0 {
        Ok(())
    } else {
        Err(ParseError::UnclosedParentheses)
    }
}

/// Splits a string into top-level operand tokens.
///
/// A parenthesized sub-formula counts as a single atomic token: the scan
/// tracks nested depth so that whitespace inside brackets does not split it.
/// A closing bracket of a top-level group must be followed by a space (or
/// the end of the string), the formula format requires the separator.
pub fn split_top_level(s: &str) -> Result<Vec<&str>, ParseError> {
    let bytes = s.as_bytes();
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;
    let mut start: Option<usize> = None;

    for i in 0..bytes.len() {
        match bytes[i] {
            b'(' => {
                if depth == 0 && start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            b')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParentheses { index: i });
                }
                if depth == 0 {
                    let begin = start.take().unwrap_or(i);
                    tokens.push(&s[begin..=i]);
                    if i + 1 < bytes.len() && bytes[i + 1] != b' ' {
                        return Err(ParseError::MissingSeparator);
                    }
                }
            }
            c if c.is_ascii_whitespace() => {
                if depth == 0 {
                    if let Some(begin) = start.take() {
                        tokens.push(&s[begin..i]);
                    }
                }
            }
            _ => {
                if depth == 0 && start.is_none() {
                    start = Some(i);
                }
            }
        }
    }

    if let Some(begin) = start {
        tokens.push(&s[begin..]);
    }

    Ok(tokens)
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_parentheses_balanced() {
        assert_eq!(check_parentheses("(+ 1 (sqr x))"), Ok(()));
    }

    #[test]
    fn test_check_parentheses_unclosed() {
        assert_eq!(
            check_parentheses("(+ 1 2"),
            Err(ParseError::UnclosedParentheses)
        );
        // no brackets at all counts as unclosed too
        assert_eq!(
            check_parentheses("x + 1"),
            Err(ParseError::UnclosedParentheses)
        );
    }

    #[test]
    fn test_check_parentheses_extra_closing() {
        assert_eq!(
            check_parentheses("(+ 1 2))"),
            Err(ParseError::UnbalancedParentheses { index: 7 })
        );
    }

    #[test]
    fn test_split_top_level_plain_tokens() {
        let tokens = split_top_level("1  2.5 x").unwrap();
        assert_eq!(tokens, vec!["1", "2.5", "x"]);
    }

    #[test]
    fn test_split_top_level_subformula_is_atomic() {
        let tokens = split_top_level("(+ x 1) (sqr (sin x)) 8").unwrap();
        assert_eq!(tokens, vec!["(+ x 1)", "(sqr (sin x))", "8"]);
    }

    #[test]
    fn test_split_top_level_missing_separator() {
        let result = split_top_level("(sqr x)(sin x)");
        assert_eq!(result, Err(ParseError::MissingSeparator));
    }

    #[test]
    fn test_linspace() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
