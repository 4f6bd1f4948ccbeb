use serde::{Deserialize, Serialize};

use crate::error::{GeoPlotError, Result};

/// Visual encoding applied by the Cesium viewer.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    /// Blue-to-red color gradient over the value range.
    Color,
    /// Point size scaled by the value, with faded colors.
    Size,
}

impl VisualizationType {
    /// Tag substituted into the viewer template's branching expressions.
    pub fn tag(self) -> &'static str {
        match self {
            VisualizationType::Color => "color",
            VisualizationType::Size => "size",
        }
    }
}

/// Rendering options for a [`GeoPlot`](crate::GeoPlot) engine.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RenderOptions {
    /// Cesium Ion access token embedded in the viewer document.
    pub cesium_token: String,
    /// Simulated seconds per step; spacing of the synthesized timeline.
    pub step_time: f64,
    /// Slash-path to the per-agent `[lat, lon]` pair array in a snapshot.
    pub coordinates: String,
    /// Slash-path to the per-agent scalar array in a snapshot.
    pub feature: String,
    /// Visual encoding of the scalar property.
    pub visualization_type: VisualizationType,
}

impl RenderOptions {
    /// Checks option values the type system cannot express.
    pub fn validate(&self) -> Result<()> {
        // NaN also fails this comparison.
        if !(self.step_time > 0.0) {
            return Err(GeoPlotError::ConfigKey {
                key: "step_time".to_string(),
            });
        }
        Ok(())
    }
}
