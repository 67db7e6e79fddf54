//! Expression parser for `{name:modifier:...}` syntax
//!
//! Finds expressions in a template and splits each one into a name and its
//! modifier tokens.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use topiclab_domain::Expression;

/// Keyword that turns the rest of an expression into a custom time format.
const FORMAT_KEYWORD: &str = "fmt";

/// A name followed by zero or more `:segment` parts, inside single braces.
#[allow(clippy::expect_used)]
static EXPRESSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)((?::[^{}:]+)*)\}").expect("valid expression pattern")
});

/// An expression found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionMatch {
    /// The parsed expression.
    pub expression: Expression,

    /// Byte range in the template, braces included.
    pub span: Range<usize>,
}

/// Splits the text between the braces into a name and modifiers.
///
/// Segments are separated by `:`. A segment equal to `fmt` (any case) takes
/// the remainder of the expression verbatim, so `now:fmt:HH:mm:ss` yields the
/// single modifier `fmt:HH:mm:ss`. This never fails; validation is left to
/// the resolvers.
///
/// # Examples
///
/// ```
/// use topiclab_application::template_resolver::parser::parse_expression;
///
/// let expr = parse_expression("now:utc:-1h:fmt:HH:mm");
/// assert_eq!(expr.name, "now");
/// assert_eq!(expr.modifiers, vec!["utc", "-1h", "fmt:HH:mm"]);
/// ```
#[must_use]
pub fn parse_expression(body: &str) -> Expression {
    let (name, mut rest) = match body.split_once(':') {
        Some((name, rest)) => (name, Some(rest)),
        None => (body, None),
    };

    let mut modifiers = Vec::new();
    while let Some(remaining) = rest {
        let (segment, next) = match remaining.split_once(':') {
            Some((segment, next)) => (segment, Some(next)),
            None => (remaining, None),
        };

        if segment.eq_ignore_ascii_case(FORMAT_KEYWORD) {
            match next {
                Some(pattern) => modifiers.push(format!("{segment}:{pattern}")),
                None => modifiers.push(segment.to_string()),
            }
            break;
        }

        modifiers.push(segment.to_string());
        rest = next;
    }

    Expression::new(name, modifiers)
}

/// Finds every expression in a template, left to right, without overlaps.
///
/// Text that is not a well-formed expression (stray braces, invalid names,
/// MQTT wildcards) is skipped.
#[must_use]
pub fn parse_template(template: &str) -> Vec<ExpressionMatch> {
    EXPRESSION_PATTERN
        .find_iter(template)
        .map(|found| {
            let span = found.range();
            let body = &template[span.start + 1..span.end - 1];
            ExpressionMatch {
                expression: parse_expression(body),
                span,
            }
        })
        .collect()
}

/// Returns true if the template contains at least one expression.
#[must_use]
pub fn has_expressions(template: &str) -> bool {
    EXPRESSION_PATTERN.is_match(template)
}

/// Extracts expression names in order of appearance, duplicates included.
#[must_use]
pub fn extract_names(template: &str) -> Vec<String> {
    parse_template(template)
        .into_iter()
        .map(|m| m.expression.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_name() {
        let expr = parse_expression("device_id");
        assert_eq!(expr.name, "device_id");
        assert!(expr.modifiers.is_empty());
    }

    #[test]
    fn test_parse_modifiers_in_order() {
        let expr = parse_expression("now:local:+1d:date:utc");
        assert_eq!(expr.name, "now");
        assert_eq!(expr.modifiers, vec!["local", "+1d", "date", "utc"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let expr = parse_expression("random:1-5:1-5");
        assert_eq!(expr.modifiers, vec!["1-5", "1-5"]);
    }

    #[test]
    fn test_fmt_consumes_rest() {
        let expr = parse_expression("now:fmt:HH:mm:ss");
        assert_eq!(expr.modifiers, vec!["fmt:HH:mm:ss"]);
    }

    #[test]
    fn test_fmt_after_other_modifiers() {
        let expr = parse_expression("now:utc:FMT:YYYY:MM");
        assert_eq!(expr.modifiers, vec!["utc", "FMT:YYYY:MM"]);
    }

    #[test]
    fn test_trailing_fmt_without_pattern() {
        let expr = parse_expression("now:fmt");
        assert_eq!(expr.modifiers, vec!["fmt"]);
    }

    #[test]
    fn test_template_spans() {
        let template = "devices/{device_id}/CMD";
        let found = parse_template(template);
        assert_eq!(found.len(), 1);
        assert_eq!(&template[found[0].span.clone()], "{device_id}");
    }

    #[test]
    fn test_template_with_modifiers() {
        let found = parse_template("t/{now:utc:fmt:YYYY-MM-DD HH:mm}/x");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].expression.name, "now");
        assert_eq!(
            found[0].expression.modifiers,
            vec!["utc", "fmt:YYYY-MM-DD HH:mm"]
        );
    }

    #[test]
    fn test_adjacent_expressions() {
        assert_eq!(extract_names("{a}{b}{c}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(extract_names("{id}/x/{id}"), vec!["id", "id"]);
    }

    #[test]
    fn test_ignores_non_expressions() {
        assert!(parse_template("devices/+/#").is_empty());
        assert!(parse_template("{}").is_empty());
        assert!(parse_template("{1abc}").is_empty());
        assert!(parse_template("{device-id}").is_empty());
        assert!(parse_template("{{name}").len() == 1);
        assert!(parse_template("{name").is_empty());
        assert!(parse_template(r#"{"on": true}"#).is_empty());
    }

    #[test]
    fn test_empty_segment_is_not_an_expression() {
        assert!(parse_template("{now:}").is_empty());
        assert!(parse_template("{now::utc}").is_empty());
        assert!(parse_template("{now:fmt:HH::mm}").is_empty());
    }

    #[test]
    fn test_has_expressions() {
        assert!(has_expressions("a/{b}/c"));
        assert!(has_expressions("{now:unix}"));
        assert!(!has_expressions("a/b/c"));
        assert!(!has_expressions(""));
    }
}
