use serde::{Deserialize, Serialize};

use crate::core::{SeriesSpec, SurfaceGeometry};
use crate::error::{ChartError, ChartResult};

/// Visible x-axis tick cap applied when a config does not set one.
pub const DEFAULT_MAX_TICKS_LIMIT: usize = 11;

/// Public widget bootstrap configuration.
///
/// Serializable so dashboards can declare their charts in JSON next to the
/// rest of their simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartWidgetConfig {
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub surface: SurfaceGeometry,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis_title: String,
    #[serde(default)]
    pub y_axis_title: String,
    #[serde(default = "default_max_ticks_limit")]
    pub max_ticks_limit: usize,
}

impl ChartWidgetConfig {
    #[must_use]
    pub fn new(series: Vec<SeriesSpec>) -> Self {
        Self {
            series,
            surface: SurfaceGeometry::default(),
            title: String::new(),
            x_axis_title: String::new(),
            y_axis_title: String::new(),
            max_ticks_limit: default_max_ticks_limit(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.surface.width = width;
        self.surface.height = height;
        self
    }

    /// Sets the absolute surface offsets inside the host container.
    #[must_use]
    pub fn with_position(mut self, top: i32, left: i32) -> Self {
        self.surface.top = top;
        self.surface.left = left;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_title = x.into();
        self.y_axis_title = y.into();
        self
    }

    #[must_use]
    pub fn with_max_ticks_limit(mut self, limit: usize) -> Self {
        self.max_ticks_limit = limit;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.surface.validate()?;
        if self.max_ticks_limit == 0 {
            return Err(ChartError::InvalidData(
                "x-axis max ticks limit must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart widget config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart widget config: {e}"))
        })
    }
}

fn default_max_ticks_limit() -> usize {
    DEFAULT_MAX_TICKS_LIMIT
}

#[cfg(test)]
mod tests {
    use super::{ChartWidgetConfig, DEFAULT_MAX_TICKS_LIMIT};
    use crate::core::SeriesSpec;
    use crate::error::ChartError;

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let config = ChartWidgetConfig::from_json_str(
            r##"{"series": [{"Label": "Infected", "Color": "#FF0000"}]}"##,
        )
        .expect("config");

        assert_eq!(config.series, vec![SeriesSpec::new("Infected", "#FF0000")]);
        assert_eq!(config.surface.width, 500);
        assert_eq!(config.surface.height, 200);
        assert_eq!(config.max_ticks_limit, DEFAULT_MAX_TICKS_LIMIT);
        assert!(config.title.is_empty());
    }

    #[test]
    fn zero_tick_limit_is_rejected() {
        let err = ChartWidgetConfig::new(Vec::new())
            .with_max_ticks_limit(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn zero_height_surface_is_rejected_on_load() {
        let err =
            ChartWidgetConfig::from_json_str(r#"{"surface": {"width": 10, "height": 0}}"#)
                .unwrap_err();
        assert!(matches!(err, ChartError::InvalidSurface { .. }));
    }

    #[test]
    fn json_round_trip_keeps_placement() {
        let config = ChartWidgetConfig::new(vec![SeriesSpec::new("Average Aspiration", "#9400D3")])
            .with_size(100, 50)
            .with_position(-350, 200)
            .with_title("Aspiration");
        let json = config.to_json_pretty().expect("serialize");
        let back = ChartWidgetConfig::from_json_str(&json).expect("parse");
        assert_eq!(back, config);
    }
}
