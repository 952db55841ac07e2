use serde::{Deserialize, Serialize};

use crate::core::color::{TranslucentFill, color_to_translucent_fill};

/// Caller-supplied descriptor for one plotted line.
///
/// Accepts both `{"label", "color"}` and the `{"Label", "Color"}` shape used
/// by simulation server declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    #[serde(alias = "Label")]
    pub label: String,
    #[serde(alias = "Color")]
    pub color: String,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Backend-facing series data derived from a [`SeriesSpec`].
///
/// `points` is append-only between resets; index order is time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "backgroundColor", with = "fill_as_css")]
    pub fill_color: TranslucentFill,
    #[serde(rename = "data", with = "points_as_nullable")]
    pub points: Vec<f64>,
}

impl Dataset {
    #[must_use]
    pub fn from_spec(spec: &SeriesSpec) -> Self {
        Self {
            label: spec.label.clone(),
            border_color: spec.color.clone(),
            fill_color: color_to_translucent_fill(&spec.color),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<f64> {
        self.points.last().copied()
    }
}

/// The fill travels as its CSS text so descriptors match what a canvas chart expects.
mod fill_as_css {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::color::TranslucentFill;

    pub fn serialize<S: Serializer>(
        fill: &TranslucentFill,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(fill)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TranslucentFill, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_rgba(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("expected `rgba(r,g,b,a)` fill, got `{text}`"))
        })
    }

    fn parse_rgba(text: &str) -> Option<TranslucentFill> {
        let inner = text.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
        let mut channels = inner.split(',').map(|part| part.trim().parse::<f64>());
        let fill = TranslucentFill {
            red: channels.next()?.ok()?,
            green: channels.next()?.ok()?,
            blue: channels.next()?.ok()?,
            alpha: channels.next()?.ok()?,
        };
        if channels.next().is_some() {
            return None;
        }
        Some(fill)
    }
}

/// JSON has no NaN; non-finite points are written as `null` and read back as NaN.
mod points_as_nullable {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(points: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(points.iter().map(|v| v.is_finite().then_some(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let points = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(points
            .into_iter()
            .map(|point| point.unwrap_or(f64::NAN))
            .collect())
    }
}
