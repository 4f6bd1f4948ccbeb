//! Geospatial visualization for agent simulations.
//!
//! Converts a recorded simulation state trajectory into a 3D time-series map:
//! a GeoJSON file of per-agent, time-stamped point features and a
//! self-contained Cesium JS viewer document with the data embedded. The
//! scalar property can be encoded as a color gradient or as point size.
//!
//! ```no_run
//! use geoplot::{GeoPlot, RenderOptions, VisualizationType};
//! use serde_json::json;
//!
//! let config = json!({
//!     "simulation_metadata": {
//!         "name": "epidemic",
//!         "num_episodes": 3,
//!         "num_steps_per_episode": 2,
//!     }
//! });
//! let engine = GeoPlot::new(config, RenderOptions {
//!     cesium_token: "your_token_here".to_string(),
//!     step_time: 3600.0,
//!     coordinates: "agents/citizens/coordinates".to_string(),
//!     feature: "agents/citizens/infected".to_string(),
//!     visualization_type: VisualizationType::Color,
//! });
//! # let trajectory: Vec<Vec<serde_json::Value>> = Vec::new();
//! engine.render(&trajectory)?;
//! # Ok::<(), geoplot::GeoPlotError>(())
//! ```

pub mod config;
pub mod error;
pub mod geojson;
pub mod options;
pub mod plot;
pub mod state;
pub mod timeline;

// Re-export key types for easier use by dependent crates
pub use error::{GeoPlotError, Result};
pub use geojson::{Feature, FeatureCollection, FeatureProperties, Point};
pub use options::{RenderOptions, VisualizationType};
pub use plot::{GeoPlot, RenderedPaths};
pub use state::resolve;
