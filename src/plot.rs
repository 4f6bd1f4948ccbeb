use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::Value;

use crate::config;
use crate::error::{GeoPlotError, Result};
use crate::geojson::{Feature, FeatureCollection};
use crate::options::RenderOptions;
use crate::state;
use crate::timeline;

// Cesium viewer markup, carried as a versioned static asset and substituted
// into, never parsed or regenerated.
const VIEWER_TEMPLATE: &str = include_str!("../assets/geoplot.html");

/// Paths of the two artifacts written by a render call.
#[derive(Debug, Clone)]
pub struct RenderedPaths {
    pub geojson: PathBuf,
    pub viewer: PathBuf,
}

/// Converts recorded simulation state into an animated Cesium visualization.
///
/// Holds the caller's configuration mapping and the [`RenderOptions`]; each
/// [`render`](GeoPlot::render) call is an independent one-shot pass over the
/// supplied trajectory and leaves nothing behind in memory.
pub struct GeoPlot {
    config: Value,
    options: RenderOptions,
}

impl GeoPlot {
    pub fn new(config: Value, options: RenderOptions) -> Self {
        GeoPlot { config, options }
    }

    /// Renders into the current directory. See [`render_to`](Self::render_to).
    pub fn render(&self, trajectory: &[Vec<Value>]) -> Result<RenderedPaths> {
        self.render_to(".", trajectory)
    }

    /// Extracts per-agent coordinates and property values from `trajectory`,
    /// aligns them with a synthesized timeline, and writes `{name}.geojson`
    /// and `{name}.html` under `dir`, overwriting any previous output.
    pub fn render_to(
        &self,
        dir: impl AsRef<Path>,
        trajectory: &[Vec<Value>],
    ) -> Result<RenderedPaths> {
        self.options.validate()?;
        let sim_name = config::sim_name(&self.config)?;
        let dir = dir.as_ref();
        let geodata_path = dir.join(format!("{sim_name}.geojson"));
        let viewer_path = dir.join(format!("{sim_name}.html"));

        info!(
            "Rendering '{}' from {} recorded episodes",
            sim_name,
            trajectory.len()
        );

        // The final snapshot of every episode except the last feeds
        // extraction. Coordinates are re-resolved on each pass, so only the
        // last processed episode's set survives; the value rows accumulate
        // one per processed episode.
        let mut coords: Vec<[f64; 2]> = Vec::new();
        let mut values: Vec<Vec<f64>> = Vec::new();
        for episode in trajectory.iter().take(trajectory.len().saturating_sub(1)) {
            let final_state = episode.last().ok_or_else(|| GeoPlotError::MalformedData {
                path: self.options.coordinates.clone(),
                reason: "episode contains no snapshots".to_string(),
            })?;
            let coord_node = state::resolve(final_state, &self.options.coordinates)?;
            coords = state::as_coordinate_pairs(coord_node, &self.options.coordinates)?;
            let value_node = state::resolve(final_state, &self.options.feature)?;
            values.push(state::flatten_numbers(value_node, &self.options.feature)?);
        }
        debug!(
            "Extracted {} value rows for {} agents",
            values.len(),
            coords.len()
        );

        // The timeline length follows the configured episode and step counts,
        // not the number of episodes actually processed; the zip below
        // truncates to the shorter side when the two disagree.
        let total_steps =
            config::num_episodes(&self.config)? * config::num_steps_per_episode(&self.config)?;
        let timestamps = timeline::generate(Utc::now(), total_steps, self.options.step_time);
        let (start, stop) = match (timestamps.first(), timestamps.last()) {
            (Some(start), Some(stop)) => (start, stop),
            _ => {
                // Unreachable while the config accessors require counts >= 1.
                return Err(GeoPlotError::ConfigKey {
                    key: "simulation_metadata.num_episodes".to_string(),
                });
            }
        };

        let collections = encode_collections(&coords, &values, &timestamps, &self.options.feature)?;

        info!(
            "Writing {} feature collections to {}",
            collections.len(),
            geodata_path.display()
        );
        let mut writer = BufWriter::new(File::create(&geodata_path)?);
        serde_json::to_writer_pretty(&mut writer, &collections)?;
        writer.flush()?;

        info!("Writing viewer document to {}", viewer_path.display());
        let viewer_html = self.render_viewer(start, stop, &collections)?;
        std::fs::write(&viewer_path, viewer_html)?;

        Ok(RenderedPaths {
            geojson: geodata_path,
            viewer: viewer_path,
        })
    }

    fn render_viewer(
        &self,
        start: &DateTime<Utc>,
        stop: &DateTime<Utc>,
        collections: &[FeatureCollection],
    ) -> Result<String> {
        Ok(VIEWER_TEMPLATE
            .replace("$accessToken", &self.options.cesium_token)
            .replace("$startTime", &timeline::iso8601(start))
            .replace("$stopTime", &timeline::iso8601(stop))
            .replace("$visualType", self.options.visualization_type.tag())
            .replace("$data", &serde_json::to_string(collections)?))
    }
}

/// Builds one feature collection per agent in the surviving coordinate set.
/// Timestamps are paired positionally with value rows, truncating to the
/// shorter sequence.
fn encode_collections(
    coords: &[[f64; 2]],
    values: &[Vec<f64>],
    timestamps: &[DateTime<Utc>],
    feature_path: &str,
) -> Result<Vec<FeatureCollection>> {
    coords
        .iter()
        .enumerate()
        .map(|(idx, &coord)| {
            let features = timestamps
                .iter()
                .zip(values)
                .map(|(timestamp, row)| {
                    let value =
                        row.get(idx)
                            .copied()
                            .ok_or_else(|| GeoPlotError::MalformedData {
                                path: feature_path.to_string(),
                                reason: format!(
                                    "value row has {} entries but agent index is {idx}",
                                    row.len()
                                ),
                            })?;
                    Ok(Feature::point(coord, value, timeline::iso8601(timestamp)))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FeatureCollection::new(features))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_truncates_to_shorter_sequence() {
        let coords = [[1.0, 2.0]];
        let values = vec![vec![10.0], vec![11.0]];
        let timestamps = timeline::generate(Utc::now(), 6, 60.0);

        let collections = encode_collections(&coords, &values, &timestamps, "f").unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].features.len(), 2);
        assert_eq!(collections[0].features[1].properties.value, 11.0);
    }

    #[test]
    fn encode_rejects_short_value_rows() {
        let coords = [[1.0, 2.0], [3.0, 4.0]];
        let values = vec![vec![10.0]];
        let timestamps = timeline::generate(Utc::now(), 2, 60.0);

        let err = encode_collections(&coords, &values, &timestamps, "f").unwrap_err();
        assert!(matches!(err, GeoPlotError::MalformedData { .. }));
    }

    #[test]
    fn no_agents_means_no_collections() {
        let timestamps = timeline::generate(Utc::now(), 2, 60.0);
        let collections = encode_collections(&[], &[], &timestamps, "f").unwrap();
        assert!(collections.is_empty());
    }
}
