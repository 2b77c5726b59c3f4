use geo::{point, Point};
use serde_json::Value;

use crate::Entity;

/// Best-effort conversion of a latitude/longitude field. Anything that does
/// not yield a finite number is treated as missing.
#[must_use]
pub fn coerce_coordinate(value: Option<&Value>) -> Option<f64> {
    let coordinate: f64 = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    coordinate.is_finite().then_some(coordinate)
}

/// Position of an entity, only if both latitude and longitude are usable.
#[must_use]
pub fn entity_position(entity: &Entity) -> Option<Point> {
    let lat = coerce_coordinate(entity.get("latitude"))?;
    let lng = coerce_coordinate(entity.get("longitude"))?;
    Some(point! { x: lng, y: lat })
}
