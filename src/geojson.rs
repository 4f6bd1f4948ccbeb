use serde::{Deserialize, Serialize};

/// A GeoJSON point geometry. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

/// Per-timestep properties attached to a feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub value: f64,
    pub time: String,
}

/// One point-in-time sample of an agent's trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Point,
    pub properties: FeatureProperties,
}

/// One agent's full trajectory: a time-ordered sequence of point features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl Feature {
    /// Builds a point feature from a `[lat, lon]` pair, swapping into the
    /// `[longitude, latitude]` order GeoJSON requires.
    pub fn point(lat_lon: [f64; 2], value: f64, time: String) -> Self {
        Feature {
            kind: "Feature".to_string(),
            geometry: Point {
                kind: "Point".to_string(),
                coordinates: [lat_lon[1], lat_lon[0]],
            },
            properties: FeatureProperties { value, time },
        }
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_feature_swaps_to_lon_lat() {
        let feature = Feature::point([40.7, -74.0], 3.0, "t".to_string());
        assert_eq!(feature.geometry.coordinates, [-74.0, 40.7]);
    }

    #[test]
    fn serializes_with_geojson_type_tags() {
        let collection =
            FeatureCollection::new(vec![Feature::point([1.0, 2.0], 0.5, "t".to_string())]);
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(json["features"][0]["properties"]["value"], 0.5);
    }
}
