//! Ticker payload normalization
//!
//! The ticker endpoint is not consistent about where the price lives;
//! the shapes observed in the wild are tried in a fixed order and the
//! first match wins. Adding a shape means adding one matcher to the
//! table.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// A single payload shape probe
type ShapeMatcher = fn(&Value) -> Option<Decimal>;

/// Known payload shapes, in match order
const SHAPE_MATCHERS: &[ShapeMatcher] = &[
    flat_price,
    data_object_price,
    data_first_price,
    data_first_trade_price,
    first_element_price,
];

/// Locate a price in a ticker payload of any known shape
pub fn extract_price(payload: &Value) -> Option<Decimal> {
    SHAPE_MATCHERS.iter().find_map(|matcher| matcher(payload))
}

/// `{"price": ...}`
fn flat_price(payload: &Value) -> Option<Decimal> {
    price_field(payload)
}

/// `{"data": {"price": ...}}`
fn data_object_price(payload: &Value) -> Option<Decimal> {
    price_field(payload.get("data")?)
}

/// `{"data": [{"price": ...}, ...]}`
fn data_first_price(payload: &Value) -> Option<Decimal> {
    price_field(payload.get("data")?.as_array()?.first()?)
}

/// `{"data": [{"trades": [{"price": ...}, ...]}, ...]}`
fn data_first_trade_price(payload: &Value) -> Option<Decimal> {
    price_field(
        payload
            .get("data")?
            .as_array()?
            .first()?
            .get("trades")?
            .as_array()?
            .first()?,
    )
}

/// `[{"price": ...}, ...]`
fn first_element_price(payload: &Value) -> Option<Decimal> {
    price_field(payload.as_array()?.first()?)
}

/// Read a `price` field that may be a JSON string or number
fn price_field(value: &Value) -> Option<Decimal> {
    match value.get("price")? {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
