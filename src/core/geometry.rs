use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SURFACE_WIDTH: u32 = 500;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 200;

/// Pixel size and absolute placement of a drawing surface inside its container.
///
/// Fixed at construction; the widget never resizes or moves its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub left: i32,
}

impl SurfaceGeometry {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            top: 0,
            left: 0,
        }
    }

    /// Sets the absolute offsets. Negative values are allowed.
    #[must_use]
    pub fn at(mut self, top: i32, left: i32) -> Self {
        self.top = top;
        self.left = left;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::SurfaceGeometry;
    use crate::error::ChartError;

    #[test]
    fn zero_sized_surface_is_rejected() {
        let err = SurfaceGeometry::new(0, 10).validate().unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidSurface {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn negative_offsets_are_kept() {
        let geometry = SurfaceGeometry::new(20, 10).at(16, -550).validate().unwrap();
        assert_eq!(geometry.top, 16);
        assert_eq!(geometry.left, -550);
    }
}
