//! Parses the literal arguments passed on the command line into [`Value`]s.

use anyhow::Context;
use simdjs_rt_memory::{ElementKind, TypedArray};
use simdjs_rt_simd::{Object, SimdType, Value};

fn parse_number(literal: &str) -> anyhow::Result<f64> {
    match literal {
        "NaN" => Ok(f64::NAN),
        "Infinity" | "+Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => literal
            .parse()
            .with_context(|| format!("{literal:?} is not a valid literal")),
    }
}

fn parse_elements(elements: &str) -> anyhow::Result<Vec<Value>> {
    elements
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(parse_value)
        .collect()
}

/// Parses a literal value, such as `42`, `"text"`, `Int32x4(1,2,3,4)`, or `Float32Array(1.5)`.
pub fn parse_value(literal: &str) -> anyhow::Result<Value> {
    let literal = literal.trim();
    match literal {
        "undefined" => return Ok(Value::Undefined),
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Boolean(true)),
        "false" => return Ok(Value::Boolean(false)),
        "{}" => return Ok(Value::Object(Object::new())),
        _ => (),
    }

    for quote in ['"', '\''] {
        if let Some(s) = literal
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return Ok(Value::string(s));
        }
    }

    if let Some((name, rest)) = literal.split_once('(') {
        let elements = rest
            .strip_suffix(')')
            .with_context(|| format!("missing closing parenthesis in {literal:?}"))?;
        let elements = parse_elements(elements)?;

        if let Ok(ty) = name.parse::<SimdType>() {
            let vector = ty
                .create(&elements)
                .with_context(|| format!("could not construct {ty}"))?;
            return Ok(Value::Simd(vector));
        }

        let kind = ElementKind::from_name(name)
            .with_context(|| format!("{name:?} is not a SIMD type or typed array"))?;
        let numbers = elements
            .iter()
            .map(Value::to_number)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid element in {literal:?}"))?;
        return Ok(Value::TypedArray(TypedArray::from_elements(kind, &numbers)));
    }

    parse_number(literal).map(Value::Number)
}
