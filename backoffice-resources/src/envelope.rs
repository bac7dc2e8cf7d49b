//! Envelope normalization
//!
//! Backends disagree about where list payloads live: bare arrays,
//! `{ results }`, `{ data }`, and nested combinations all occur. Each known
//! shape is attempted in priority order and the first hit wins. An envelope
//! with no recognizable items key yields an empty page, never an error.
//!
//! These functions are pure; everything network- or cache-related lives in
//! [`client`](crate::client).

use serde_json::{Map, Value};
use tracing::debug;

use crate::page::Page;

/// Normalizes any supported list envelope into a canonical page of raw
/// values. Priority: bare array, `results`, `data` array, `data.results`,
/// `data.data`.
pub fn normalize_page(body: Value) -> Page<Value> {
    match body {
        Value::Array(items) => {
            let total = items.len() as u64;
            Page {
                items,
                total,
                page: None,
                page_size: None,
            }
        }
        Value::Object(map) => normalize_object(map),
        other => {
            debug!(kind = value_kind(&other), "list body was not an array or object");
            Page::empty()
        }
    }
}

fn normalize_object(mut map: Map<String, Value>) -> Page<Value> {
    if let Some(Value::Array(items)) = map.remove("results") {
        return finish(items, &[&map]);
    }
    match map.remove("data") {
        Some(Value::Array(items)) => finish(items, &[&map]),
        Some(Value::Object(mut inner)) => {
            if let Some(Value::Array(items)) = inner.remove("results") {
                return finish(items, &[&inner, &map]);
            }
            if let Some(Value::Array(items)) = inner.remove("data") {
                return finish(items, &[&inner, &map]);
            }
            debug!("list envelope had no recognizable items key");
            Page::empty()
        }
        _ => {
            debug!("list envelope had no recognizable items key");
            Page::empty()
        }
    }
}

/// Attaches pagination metadata read from the scopes nearest the items
/// first. Totals fall back to the item count.
fn finish(items: Vec<Value>, scopes: &[&Map<String, Value>]) -> Page<Value> {
    let total =
        read_count(scopes, &["totalCount", "total", "count"]).unwrap_or(items.len() as u64);
    let page = read_count(scopes, &["page"]);
    let page_size = read_count(scopes, &["limit", "pageSize"]);
    Page {
        items,
        total,
        page,
        page_size,
    }
}

fn read_count(scopes: &[&Map<String, Value>], keys: &[&str]) -> Option<u64> {
    for scope in scopes {
        for key in keys {
            if let Some(value) = scope.get(*key)
                && let Some(count) = as_count(value)
            {
                return Some(count);
            }
        }
    }
    None
}

fn as_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Unwraps up to two nested `data` objects around a single entity.
pub fn normalize_entity(mut body: Value) -> Value {
    for _ in 0..2 {
        if let Value::Object(map) = &mut body
            && matches!(map.get("data"), Some(Value::Object(_)))
            && let Some(inner) = map.remove("data")
        {
            body = inner;
        } else {
            break;
        }
    }
    body
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
