use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::dual::DualPathResult;
use crate::{Error, WeightDimension, WeightedGraph};

impl DualPathResult {
    /// Converts both routes to a `GeoJSON` `FeatureCollection`, one
    /// `LineString` per available route.
    pub fn to_geojson(&self, graph: &WeightedGraph) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        for dimension in WeightDimension::ALL {
            if let Some(path) = self.path(dimension) {
                features.push(self.route_feature(graph, dimension, path)?);
            }
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &WeightedGraph) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.to_geojson(graph)?)?)
    }

    fn route_feature(
        &self,
        graph: &WeightedGraph,
        dimension: WeightDimension,
        path: &[String],
    ) -> Result<Feature, Error> {
        let coords = path
            .iter()
            .map(|id| {
                let idx = graph.node_index(id)?;
                Ok(graph
                    .city(idx)
                    .map(|city| Coord::from(city.geometry))
                    .unwrap_or_default())
            })
            .collect::<Result<Vec<Coord<f64>>, Error>>()?;

        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let (total_time, total_cost) = match dimension {
            WeightDimension::Time => (self.total_time, self.time_path_cost),
            WeightDimension::Cost => (self.cost_path_time, self.total_cost),
        };

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "route_type": dimension.as_str(),
                "algorithm": self.algorithm.as_str(),
                "start": self.start,
                "end": self.end,
                "stops": path,
                "waypoints": self.waypoints,
                "total_time": total_time,
                "total_cost": total_cost,
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::routing::{Algorithm, plan_dual_path};
    use crate::test_support::weighted_diamond;

    #[test]
    fn one_line_per_route() {
        let graph = weighted_diamond();
        let result = plan_dual_path(&graph, "A", "D", Algorithm::Dijkstra).unwrap();
        let collection = result.to_geojson(&graph).unwrap();
        assert_eq!(collection.features.len(), 2);

        let time = &collection.features[0];
        assert_eq!(
            time.property("route_type").and_then(|v| v.as_str()),
            Some("time")
        );
        assert_eq!(
            time.property("total_time").and_then(|v| v.as_f64()),
            Some(3.0)
        );
        let geometry = serde_json::to_value(&time.geometry).unwrap();
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"].as_array().unwrap().len(), 4);
    }
}
