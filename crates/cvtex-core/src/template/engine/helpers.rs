//! Helper functions for template rendering

use crate::format::FilterValue;
use crate::template::error::TemplateError;
use toml::Value;

use super::TemplateContext;

/// Resolve a nested key from TOML data
pub(crate) fn resolve_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = data;

    for part in parts {
        current = match current {
            Value::Table(table) => table.get(part)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Resolve an array value from context
///
/// A missing key is an empty array unless `strict` is set.
pub(crate) fn resolve_array<'a>(
    data: &'a Value,
    key: &str,
    line: usize,
    strict: bool,
) -> Result<&'a [Value], TemplateError> {
    let Some(array) = resolve_key(data, key) else {
        if strict {
            return Err(TemplateError::UndefinedKey {
                key: key.to_string(),
                line,
            });
        }
        return Ok(&[]);
    };

    array
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Key '{}' is not an array", key),
            line,
        })
}

/// Stringify a TOML value for template output
pub(crate) fn stringify_value(value: &Value, key: &str) -> Result<String, TemplateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(format_float(*f)),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) => Err(TemplateError::ArrayInNonEachContext {
            key: key.to_string(),
        }),
        Value::Table(_) => Err(TemplateError::TableInPlaceholder {
            key: key.to_string(),
        }),
    }
}

/// Integral floats keep their `.0` so `4.0` does not read as `4`
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

/// Convert a TOML value into filter input
///
/// Arrays become lists of stringified scalars; everything else a scalar.
pub(crate) fn to_filter_value(value: &Value, key: &str) -> Result<FilterValue, TemplateError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| stringify_value(item, key))
            .collect::<Result<Vec<_>, _>>()
            .map(FilterValue::List),
        other => stringify_value(other, key).map(FilterValue::Scalar),
    }
}

/// Truthiness used by `if` blocks
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Integer(i)) => *i != 0,
        Some(Value::Float(f)) => *f != 0.0,
        Some(Value::Boolean(b)) => *b,
        Some(Value::Datetime(_)) => true,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Table(table)) => !table.is_empty(),
    }
}

/// Position of the current item inside an `each` loop
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoopPosition {
    pub index0: usize,
    pub length: usize,
}

impl LoopPosition {
    fn to_value(self) -> Value {
        let mut table = toml::map::Map::new();
        table.insert("index".to_string(), Value::Integer(self.index0 as i64 + 1));
        table.insert("index0".to_string(), Value::Integer(self.index0 as i64));
        table.insert("first".to_string(), Value::Boolean(self.index0 == 0));
        table.insert(
            "last".to_string(),
            Value::Boolean(self.index0 + 1 == self.length),
        );
        table.insert("length".to_string(), Value::Integer(self.length as i64));
        Value::Table(table)
    }
}

/// Create a loop context with a variable binding and the `loop` table
pub(crate) fn create_loop_context(
    base_data: &Value,
    var_name: &str,
    item: Value,
    position: LoopPosition,
) -> TemplateContext {
    let mut table = if let Value::Table(t) = base_data {
        t.clone()
    } else {
        toml::map::Map::new()
    };

    table.insert("loop".to_string(), position.to_value());
    table.insert(var_name.to_string(), item);
    TemplateContext::new(Value::Table(table))
}
