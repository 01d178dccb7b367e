//! Coordinate conversions between map-widget points and persisted GeoJSON.
//!
//! Persisted polygons use GeoJSON axis order, longitude before latitude,
//! while the map widget consumes [lat, lng]. The swap between the two
//! conventions happens only in this module; callers on either side of the
//! boundary never reorder axes themselves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A coordinate pair in GeoJSON order: [longitude, latitude].
pub type LngLat = [f64; 2];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A polygon needs at least 3 distinct vertices before closure.
    #[error("A zone polygon requires at least 3 distinct points, got {0}")]
    TooFewVertices(usize),
    /// The stored ring is not explicitly closed (first point != last point).
    #[error("Polygon ring is not closed")]
    UnclosedRing,
    /// The geometry is not a single-ring Polygon.
    #[error("Expected a Polygon with exactly one outer ring")]
    NotASimplePolygon,
}

/// GeoJSON `Polygon` geometry: a single explicitly-closed outer ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Polygon {
    #[serde(rename = "type")]
    pub geometry_type: String,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Vec<Vec<f64>>>))]
    pub coordinates: Vec<Vec<LngLat>>,
}

impl Polygon {
    /// The single outer ring, validated for shape, closure, and the
    /// 3-distinct-vertices minimum. A closed ring can still be degenerate
    /// (every point identical, or two points alternating), so length alone
    /// is not enough.
    pub fn outer_ring(&self) -> Result<&[LngLat], GeoError> {
        if self.geometry_type != "Polygon" || self.coordinates.len() != 1 {
            return Err(GeoError::NotASimplePolygon);
        }
        let ring = &self.coordinates[0];
        match (ring.first(), ring.last()) {
            (Some(first), Some(last)) if first == last && ring.len() >= 4 => {
                let distinct = distinct_count(&ring[..ring.len() - 1]);
                if distinct < 3 {
                    return Err(GeoError::TooFewVertices(distinct));
                }
                Ok(ring)
            }
            _ => Err(GeoError::UnclosedRing),
        }
    }
}

fn distinct_count(points: &[LngLat]) -> usize {
    let mut seen: Vec<LngLat> = Vec::with_capacity(points.len());
    for point in points {
        if !seen.contains(point) {
            seen.push(*point);
        }
    }
    seen.len()
}

/// Closes an open [lng, lat] vertex sequence into a GeoJSON polygon.
///
/// Appends the first point when the sequence is not already closed; closure
/// is idempotent. Fails when fewer than 3 distinct vertices are supplied, so
/// a degenerate polygon can never be fabricated from a short click sequence.
pub fn to_closed_ring(points: &[LngLat]) -> Result<Polygon, GeoError> {
    let distinct = distinct_count(points);
    if distinct < 3 {
        return Err(GeoError::TooFewVertices(distinct));
    }

    let mut ring = points.to_vec();
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    Ok(Polygon {
        geometry_type: "Polygon".to_string(),
        coordinates: vec![ring],
    })
}

/// Converts a stored polygon back into [lat, lng] points for the map widget,
/// dropping the duplicated closing vertex.
pub fn ring_to_screen_points(polygon: &Polygon) -> Result<Vec<[f64; 2]>, GeoError> {
    let ring = polygon.outer_ring()?;
    Ok(ring[..ring.len() - 1]
        .iter()
        .map(|&[lng, lat]| [lat, lng])
        .collect())
}

/// A polyline in [lat, lng] order converted to storage order, for routes.
pub fn screen_points_to_path(points: &[[f64; 2]]) -> Vec<LngLat> {
    points.iter().map(|&[lat, lng]| [lng, lat]).collect()
}

/// Storage-order route path converted back for map consumption.
pub fn path_to_screen_points(path: &[LngLat]) -> Vec<[f64; 2]> {
    path.iter().map(|&[lng, lat]| [lat, lng]).collect()
}

/// Hazard categories for disaster zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneType {
    Flood,
    Fire,
    Landslide,
    Earthquake,
    Typhoon,
    Other,
}

impl ZoneType {
    /// Never fails; anything outside the vocabulary maps to `Other`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "flood" => Self::Flood,
            "fire" => Self::Fire,
            "landslide" => Self::Landslide,
            "earthquake" => Self::Earthquake,
            "typhoon" => Self::Typhoon,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Fire => "fire",
            Self::Landslide => "landslide",
            Self::Earthquake => "earthquake",
            Self::Typhoon => "typhoon",
            Self::Other => "other",
        }
    }
}

/// Canonical three-level risk scale. "medium" is accepted as an input alias
/// for Moderate; it is normalized here and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" | "medium" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Base hue for a zone type. Risk level never changes the hue, only the
/// fill opacity, so the same hazard is always recognizable by color.
pub fn color_for(zone_type: &str) -> &'static str {
    match ZoneType::parse(zone_type) {
        ZoneType::Flood => "#1565c0",
        ZoneType::Fire => "#c62828",
        ZoneType::Landslide => "#6d4c41",
        ZoneType::Earthquake => "#e65100",
        ZoneType::Typhoon => "#00838f",
        ZoneType::Other => "#757575",
    }
}

pub fn fill_opacity_for(risk_level: &str) -> f64 {
    match RiskLevel::parse(risk_level) {
        Some(RiskLevel::High) => 0.55,
        Some(RiskLevel::Moderate) => 0.35,
        Some(RiskLevel::Low) | None => 0.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [LngLat; 4] = [
        [121.0, 14.6],
        [121.1, 14.6],
        [121.1, 14.7],
        [121.0, 14.7],
    ];

    #[test]
    fn closes_an_open_ring() {
        let polygon = to_closed_ring(&SQUARE).unwrap();

        let ring = polygon.outer_ring().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(polygon.geometry_type, "Polygon");
    }

    #[test]
    fn closure_is_idempotent() {
        let once = to_closed_ring(&SQUARE).unwrap();
        let twice = to_closed_ring(&once.coordinates[0]).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_fewer_than_three_distinct_points() {
        let result = to_closed_ring(&[[121.0, 14.6], [121.1, 14.6]]);
        assert_eq!(result, Err(GeoError::TooFewVertices(2)));

        // Repeated clicks on the same spot do not count as distinct vertices.
        let result = to_closed_ring(&[[121.0, 14.6], [121.0, 14.6], [121.1, 14.6]]);
        assert_eq!(result, Err(GeoError::TooFewVertices(2)));
    }

    #[test]
    fn screen_points_swap_axis_order_and_drop_closing_vertex() {
        let polygon = to_closed_ring(&SQUARE).unwrap();

        let points = ring_to_screen_points(&polygon).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], [14.6, 121.0]);
    }

    #[test]
    fn round_trip_restores_the_original_ring() {
        let polygon = to_closed_ring(&SQUARE).unwrap();
        let screen = ring_to_screen_points(&polygon).unwrap();
        let reclosed = to_closed_ring(&screen_points_to_path(&screen)).unwrap();

        assert_eq!(polygon, reclosed);
    }

    #[test]
    fn unclosed_stored_ring_is_rejected() {
        let polygon = Polygon {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![SQUARE.to_vec()],
        };

        assert_eq!(polygon.outer_ring(), Err(GeoError::UnclosedRing));
    }

    #[test]
    fn degenerate_closed_ring_is_rejected() {
        // Closed and long enough, but every vertex is the same point.
        let point = [121.0, 14.6];
        let collapsed = Polygon {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![vec![point, point, point, point]],
        };
        assert_eq!(collapsed.outer_ring(), Err(GeoError::TooFewVertices(1)));

        // Two points alternating close properly yet span no area.
        let zigzag = Polygon {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![vec![
                [121.0, 14.6],
                [121.1, 14.7],
                [121.0, 14.6],
                [121.1, 14.7],
                [121.0, 14.6],
            ]],
        };
        assert_eq!(zigzag.outer_ring(), Err(GeoError::TooFewVertices(2)));
    }

    #[test]
    fn unknown_zone_type_falls_back_to_other_hue() {
        assert_eq!(color_for("volcanic"), color_for("other"));
        assert_ne!(color_for("flood"), color_for("fire"));
    }

    #[test]
    fn same_type_keeps_hue_across_risk_levels() {
        // Risk only modulates opacity, never the base color.
        assert_eq!(color_for("flood"), color_for("FLOOD"));
        assert!(fill_opacity_for("high") > fill_opacity_for("low"));
        assert_eq!(fill_opacity_for("medium"), fill_opacity_for("moderate"));
    }

    #[test]
    fn medium_normalizes_to_moderate() {
        assert_eq!(RiskLevel::parse("medium"), Some(RiskLevel::Moderate));
        assert_eq!(RiskLevel::parse("Moderate"), Some(RiskLevel::Moderate));
        assert_eq!(RiskLevel::parse("severe"), None);
    }
}
