use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartWidgetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// One slot per recorded label, in insertion order.
    Category,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub kind: AxisKind,
    pub display: bool,
    pub title: AxisTitle,
    /// Visible tick cap. A display-density hint only: labels beyond the cap
    /// stay in the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Every series' sample at the hovered label index.
    Index,
    /// The sample closest to the pointer.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDescriptor {
    pub tooltip_mode: InteractionMode,
    pub hover_mode: InteractionMode,
    /// When `false`, hover resolves even if the pointer is not on a point.
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleDescriptor {
    pub display: bool,
    pub text: String,
}

/// Backend configuration derived once from a [`ChartWidgetConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
    pub interaction: InteractionDescriptor,
    pub title: TitleDescriptor,
}

impl ChartDescriptor {
    #[must_use]
    pub fn from_config(config: &ChartWidgetConfig) -> Self {
        Self {
            kind: ChartKind::Line,
            x_axis: AxisDescriptor {
                kind: AxisKind::Category,
                display: true,
                title: AxisTitle {
                    display: true,
                    text: config.x_axis_title.clone(),
                },
                max_ticks_limit: Some(config.max_ticks_limit),
            },
            y_axis: AxisDescriptor {
                kind: AxisKind::Linear,
                display: true,
                title: AxisTitle {
                    display: true,
                    text: config.y_axis_title.clone(),
                },
                max_ticks_limit: None,
            },
            interaction: InteractionDescriptor {
                tooltip_mode: InteractionMode::Index,
                hover_mode: InteractionMode::Nearest,
                intersect: false,
            },
            // Shown even when the text is empty.
            title: TitleDescriptor {
                display: true,
                text: config.title.clone(),
            },
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart descriptor: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisKind, ChartDescriptor, ChartKind, InteractionMode};
    use crate::api::ChartWidgetConfig;

    #[test]
    fn descriptor_matches_line_chart_layout() {
        let config = ChartWidgetConfig::new(Vec::new());
        let descriptor = ChartDescriptor::from_config(&config);

        assert_eq!(descriptor.kind, ChartKind::Line);
        assert_eq!(descriptor.x_axis.kind, AxisKind::Category);
        assert_eq!(descriptor.x_axis.max_ticks_limit, Some(11));
        assert!(descriptor.x_axis.title.display);
        assert_eq!(descriptor.y_axis.kind, AxisKind::Linear);
        assert_eq!(descriptor.y_axis.max_ticks_limit, None);
        assert_eq!(descriptor.interaction.tooltip_mode, InteractionMode::Index);
        assert_eq!(descriptor.interaction.hover_mode, InteractionMode::Nearest);
        assert!(!descriptor.interaction.intersect);
        assert!(descriptor.title.display);
        assert!(descriptor.title.text.is_empty());
    }

    #[test]
    fn descriptor_json_uses_lowercase_kinds() {
        let config = ChartWidgetConfig::new(Vec::new()).with_title("SIR");
        let json = ChartDescriptor::from_config(&config)
            .to_json_pretty()
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("value");
        assert_eq!(value["kind"], "line");
        assert_eq!(value["x_axis"]["kind"], "category");
        assert_eq!(value["interaction"]["hover_mode"], "nearest");
        assert_eq!(value["title"]["text"], "SIR");
        assert!(value["y_axis"].get("max_ticks_limit").is_none());
    }
}
