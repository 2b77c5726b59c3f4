use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use geojson::{Feature, FeatureCollection, Geometry};

use crate::{
    coordinates::entity_position,
    output::{write_json, OutputError},
    state::{filter_by_state, StateFilter},
    Entity,
};

/// Builds a Feature holding a copy of every field of the entity. Entities
/// without usable coordinates get a null geometry instead of being dropped.
#[must_use]
pub fn make_feature(entity: &Entity) -> Feature {
    Feature {
        geometry: entity_position(entity).map(|point| Geometry::new((&point).into())),
        properties: Some(entity.clone()),
        ..Default::default()
    }
}

#[must_use]
pub fn to_feature_collection(
    entities: &[Entity],
    filter: Option<&StateFilter>,
) -> FeatureCollection {
    let features = filter_by_state(entities, filter)
        .into_iter()
        .map(make_feature)
        .collect::<Vec<_>>();
    if let Some(filter) = filter {
        tracing::debug!("{filter}: {} entities", features.len());
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// What was written by [`write_feature_collection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeoJsonSummary {
    pub path: PathBuf,
    pub state: Option<StateFilter>,
    pub total: usize,
    pub with_coordinates: usize,
}

impl GeoJsonSummary {
    #[must_use]
    pub fn new(collection: &FeatureCollection, state: Option<StateFilter>, path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            state,
            total: collection.features.len(),
            with_coordinates: collection
                .features
                .iter()
                .filter(|feature| feature.geometry.is_some())
                .count(),
        }
    }

    #[must_use]
    pub fn without_coordinates(&self) -> usize {
        self.total - self.with_coordinates
    }
}

impl Display for GeoJsonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wrote GeoJSON with {} features", self.total)?;
        if let Some(state) = &self.state {
            write!(f, " for state {state}")?;
        }
        write!(
            f,
            " to {} ({} with coordinates, {} without).",
            self.path.display(),
            self.with_coordinates,
            self.without_coordinates()
        )
    }
}

pub fn write_feature_collection(
    entities: &[Entity],
    filter: Option<StateFilter>,
    path: &Path,
    indent: usize,
) -> Result<GeoJsonSummary, OutputError> {
    let collection = to_feature_collection(entities, filter.as_ref());
    write_json(path, &collection, indent)?;
    Ok(GeoJsonSummary::new(&collection, filter, path))
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use pretty_assertions_sorted::assert_eq_sorted;
    use serde_json::json;

    use crate::{entities::parse_entities, entity, state::StateFilter};

    use super::{make_feature, to_feature_collection, write_feature_collection, GeoJsonSummary};

    #[test]
    fn test_point_feature() {
        let source = json!({
            "reference": "K-0001",
            "latitude": 34.1,
            "longitude": -118.2
        });
        let feature = make_feature(&entity(&source));

        assert_eq_sorted!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-118.2, 34.1]},
                "properties": {
                    "reference": "K-0001",
                    "latitude": 34.1,
                    "longitude": -118.2
                }
            })
        );
    }

    #[test]
    fn test_null_geometry() {
        let source = entity(&json!({"reference": "K-0002", "longitude": -118.2}));
        let feature = make_feature(&source);
        let value = serde_json::to_value(&feature).unwrap();

        assert_eq!(value.get("geometry"), Some(&json!(null)));
        assert_eq!(value["properties"]["reference"], json!("K-0002"));
    }

    #[test]
    fn test_properties_are_independent_copies() {
        let original = entity(&json!({"reference": "K-0003", "parks": {"ids": [1, 2]}}));
        let mut feature = make_feature(&original);
        let snapshot = original.clone();

        assert_eq!(feature.properties.as_ref(), Some(&original));

        let properties = feature.properties.as_mut().unwrap();
        properties["parks"]["ids"][0] = json!(99);
        properties.insert("extra".to_string(), json!(true));

        assert_eq_sorted!(original, snapshot);
        assert_ne!(feature.properties.as_ref(), Some(&original));
    }

    #[test]
    fn test_collection_keeps_every_entity() {
        let entities = parse_entities(
            br#"[
                {"reference": "K-0010", "locationDesc": "US-CA", "latitude": 34.1, "longitude": -118.2},
                {"reference": "K-0011", "locationDesc": "US-TX"},
                {"reference": "K-0012", "locationDesc": "US-CA", "latitude": "x", "longitude": -120}
            ]"#,
        )
        .unwrap();

        let all = to_feature_collection(&entities, None);
        assert_eq!(all.features.len(), 3);

        let ca = StateFilter::normalize(Some("ca"));
        let filtered = to_feature_collection(&entities, ca.as_ref());
        assert_eq_sorted!(
            filtered
                .features
                .iter()
                .map(|f| f.properties.as_ref().unwrap()["reference"].clone())
                .collect::<Vec<_>>(),
            vec![json!("K-0010"), json!("K-0012")]
        );
        assert!(filtered.features[0].geometry.is_some());
        assert!(filtered.features[1].geometry.is_none());

        let summary = GeoJsonSummary::new(&filtered, ca, Path::new("ca.geojson"));
        assert_eq!(
            summary.to_string(),
            "Wrote GeoJSON with 2 features for state US-CA to ca.geojson (1 with coordinates, 1 without)."
        );
    }

    #[test]
    fn test_write_feature_collection() {
        let json = r#"[{"name": "Árbol", "latitude": 1.5, "longitude": 2.5, "activations": 3}]"#;
        let entities = parse_entities(json.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo").join("all.geojson");

        let summary = write_feature_collection(&entities, None, &path, 2).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.with_coordinates, 1);
        assert_eq!(summary.without_coordinates(), 0);

        let written = fs_err::read_to_string(&path).unwrap();
        assert!(written.contains("\"name\": \"Árbol\""));
        assert_eq_sorted!(
            serde_json::from_str::<serde_json::Value>(&written).unwrap(),
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [2.5, 1.5]},
                    "properties": {"name": "Árbol", "latitude": 1.5, "longitude": 2.5, "activations": 3}
                }]
            })
        );
    }

    #[test]
    fn test_empty_collection() {
        let collection = to_feature_collection(&[], Some(&StateFilter::exact("US-ZZ")));
        assert_eq_sorted!(
            serde_json::to_value(&collection).unwrap(),
            json!({"type": "FeatureCollection", "features": []})
        );
    }
}
