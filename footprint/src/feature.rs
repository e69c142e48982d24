use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// A GeoJSON-style feature holding a single closed polygon ring.
///
/// Serializes to the shape map layers expect:
///
/// ```json
/// {
///   "type": "Feature",
///   "geometry": { "type": "Polygon", "coordinates": [[[lng, lat], ...]] },
///   "properties": { "craterDiamM": 2000.0 }
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

/// A polygon geometry with one outer ring and no holes.
///
/// Positions are `[longitude, latitude]` pairs in degrees.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct Geometry {
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Properties {
    /// Crater diameter in meters, echoed from the generating call.
    #[serde(rename = "craterDiamM")]
    pub crater_diam_m: f64,
}

impl Feature {
    /// Returns a feature wrapping `ring` as the only outer ring.
    pub fn polygon(ring: Vec<[f64; 2]>, crater_diam_m: f64) -> Self {
        Self {
            geometry: Geometry {
                coordinates: vec![ring],
            },
            properties: Properties { crater_diam_m },
        }
    }

    /// Returns the outer ring as a [`geo`] polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior = self
            .geometry
            .coordinates
            .first()
            .map(|ring| {
                ring.iter()
                    .map(|&[x, y]| Coord { x, y })
                    .collect::<LineString<f64>>()
            })
            .unwrap_or_else(|| LineString::new(Vec::new()));
        Polygon::new(exterior, Vec::new())
    }
}
