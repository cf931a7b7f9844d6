//! printf-style message interpolation.
//!
//! Supported tokens: `%s`, `%d`, `%i`, `%f`, `%j`, `%o`, `%O` and `%%`.
//! Values beyond the last placeholder are dropped; placeholders without a
//! value are kept verbatim.

use serde_json::Value;

/// Interpolate `values` into `message`.
///
/// Messages logged without values are returned untouched, including any
/// `%` sequences they contain.
pub fn interpolate(message: &str, values: &[Value]) -> String {
    if values.is_empty() {
        return message.to_string();
    }

    let mut out = String::with_capacity(message.len());
    let mut values = values.iter();
    let mut chars = message.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(token @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) => {
                chars.next();
                match values.next() {
                    Some(value) => out.push_str(&render(token, value)),
                    None => {
                        out.push('%');
                        out.push(token);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn render(token: char, value: &Value) -> String {
    match token {
        's' => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        'd' | 'i' => match as_f64(value) {
            Some(n) if n.is_finite() => format!("{}", n.floor() as i64),
            _ => "NaN".to_string(),
        },
        'f' => match as_f64(value) {
            Some(n) => format!("{}", n),
            None => "NaN".to_string(),
        },
        _ => value.to_string(),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_values_returns_message_unchanged() {
        assert_eq!(interpolate("100% done %s", &[]), "100% done %s");
    }

    #[test]
    fn test_string_placeholder() {
        assert_eq!(interpolate("hello %s", &[json!("world")]), "hello world");
        assert_eq!(interpolate("flag %s", &[json!(true)]), "flag true");
    }

    #[test]
    fn test_integer_placeholders() {
        assert_eq!(interpolate("%d items", &[json!(3)]), "3 items");
        assert_eq!(interpolate("%i items", &[json!(3.9)]), "3 items");
        assert_eq!(interpolate("%d items", &[json!("12")]), "12 items");
        assert_eq!(interpolate("%d items", &[json!({"a": 1})]), "NaN items");
    }

    #[test]
    fn test_float_placeholder() {
        assert_eq!(interpolate("took %fms", &[json!(1.5)]), "took 1.5ms");
    }

    #[test]
    fn test_json_placeholders() {
        let value = json!({"id": 1});
        assert_eq!(interpolate("user %j", &[value.clone()]), r#"user {"id":1}"#);
        assert_eq!(interpolate("user %o", &[value.clone()]), r#"user {"id":1}"#);
        assert_eq!(interpolate("user %O", &[value]), r#"user {"id":1}"#);
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(interpolate("%d%% done", &[json!(50)]), "50% done");
    }

    #[test]
    fn test_missing_values_keep_placeholder() {
        assert_eq!(interpolate("%s and %s", &[json!("one")]), "one and %s");
    }

    #[test]
    fn test_surplus_values_are_dropped() {
        assert_eq!(interpolate("only %s", &[json!("a"), json!("b")]), "only a");
    }

    #[test]
    fn test_unknown_token_left_alone() {
        assert_eq!(interpolate("%x %s", &[json!("y")]), "%x y");
        assert_eq!(interpolate("trailing %", &[json!("y")]), "trailing %");
    }
}
