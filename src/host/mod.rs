//! Drawing-surface placement.
//!
//! A host owns the page (or an in-process stand-in for it) and creates one
//! fixed-size, absolutely positioned surface per widget inside a named
//! container.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SurfaceGeometry;
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "web-adapter")]
mod dom;
#[cfg(feature = "web-adapter")]
pub use dom::DomHost;

/// Well-known identifier of the element that receives chart surfaces.
pub const HOST_CONTAINER_ID: &str = "elements";

/// Border applied to every chart surface.
pub const SURFACE_BORDER_STYLE: &str = "1px dotted";

/// What the widget asks a host to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub geometry: SurfaceGeometry,
    pub border_style: String,
}

impl SurfaceSpec {
    #[must_use]
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self {
            geometry,
            border_style: SURFACE_BORDER_STYLE.to_owned(),
        }
    }

    /// Inline CSS placing the surface at `(left, top)` inside its container.
    #[must_use]
    pub fn css_style(&self) -> String {
        format!(
            "border:{};position:absolute;top:{}px;left:{}px",
            self.border_style, self.geometry.top, self.geometry.left
        )
    }
}

/// Handle to a created surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    pub container_id: String,
    pub geometry: SurfaceGeometry,
    pub style: String,
}

pub trait SurfaceHost {
    /// Creates a surface and appends it to `container_id`.
    ///
    /// Fails with [`ChartError::HostContainerMissing`] when the container
    /// does not exist.
    fn create_surface(&mut self, container_id: &str, spec: &SurfaceSpec) -> ChartResult<Surface>;
}

/// In-process page model: named containers holding their child surfaces.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    containers: IndexMap<String, Vec<Surface>>,
    next_surface: usize,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host exposing the standard chart container.
    #[must_use]
    pub fn with_default_container() -> Self {
        Self::new().with_container(HOST_CONTAINER_ID)
    }

    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    #[must_use]
    pub fn children(&self, container_id: &str) -> &[Surface] {
        self.containers
            .get(container_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.containers.values().map(Vec::len).sum()
    }
}

impl SurfaceHost for MemoryHost {
    fn create_surface(&mut self, container_id: &str, spec: &SurfaceSpec) -> ChartResult<Surface> {
        let children = self.containers.get_mut(container_id).ok_or_else(|| {
            ChartError::HostContainerMissing {
                id: container_id.to_owned(),
            }
        })?;

        let surface = Surface {
            id: format!("chart-surface-{}", self.next_surface),
            container_id: container_id.to_owned(),
            geometry: spec.geometry,
            style: spec.css_style(),
        };
        self.next_surface += 1;
        children.push(surface.clone());
        debug!(id = %surface.id, container_id, "created chart surface");
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::{HOST_CONTAINER_ID, MemoryHost, SurfaceHost, SurfaceSpec};
    use crate::core::SurfaceGeometry;
    use crate::error::ChartError;

    #[test]
    fn surface_style_positions_absolutely_with_border() {
        let spec = SurfaceSpec::new(SurfaceGeometry::new(100, 50).at(-350, 200));
        assert_eq!(
            spec.css_style(),
            "border:1px dotted;position:absolute;top:-350px;left:200px"
        );
    }

    #[test]
    fn surfaces_are_appended_to_the_container() {
        let mut host = MemoryHost::with_default_container();
        let spec = SurfaceSpec::new(SurfaceGeometry::new(20, 10));
        let first = host.create_surface(HOST_CONTAINER_ID, &spec).unwrap();
        let second = host.create_surface(HOST_CONTAINER_ID, &spec).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(host.children(HOST_CONTAINER_ID).len(), 2);
        assert_eq!(host.surface_count(), 2);
    }

    #[test]
    fn missing_container_is_reported() {
        let mut host = MemoryHost::new();
        let spec = SurfaceSpec::new(SurfaceGeometry::default());
        let err = host.create_surface(HOST_CONTAINER_ID, &spec).unwrap_err();
        assert!(matches!(err, ChartError::HostContainerMissing { ref id } if id == "elements"));
        assert!(err.is_setup_error());
    }
}
