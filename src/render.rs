//! Map-literal rendering for error metadata.
//!
//! Metadata renders as `map[key:value key2:value2]` with keys in sorted
//! order. An absent map renders as `map[]`, the same as an empty one.
//! Values render bare: strings without quotes, `null` as `<nil>`, arrays
//! as `[a b]` and nested objects as nested map literals.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Values that know how to write themselves inside a map literal.
pub(crate) trait LiteralValue {
    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl LiteralValue for Value {
    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() => fmt_float(f, v),
                _ => write!(f, "{n}"),
            },
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    item.fmt_literal(f)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));

                f.write_str("map[")?;
                for (i, (key, value)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:")?;
                    value.fmt_literal(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Shortest float form: plain decimal for exponents in `-4..6`,
/// otherwise `<mantissa>e<sign><at least two exponent digits>`.
/// Whole values drop the fraction (`1.0` renders `1`).
fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let exp: i32 = exp.parse().unwrap_or_default();

    if v == 0.0 || (-4..6).contains(&exp) {
        return write!(f, "{v}");
    }

    let sign = if exp < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// Display adapter for an optional string-keyed map.
pub(crate) struct MapLiteral<'a, V>(pub(crate) Option<&'a BTreeMap<String, V>>);

impl<V: LiteralValue> fmt::Display for MapLiteral<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        if let Some(map) = self.0 {
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{key}:")?;
                value.fmt_literal(f)?;
            }
        }
        f.write_str("]")
    }
}
