use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("host container `{id}` was not found")]
    HostContainerMissing { id: String },

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("chart backend failed to initialize: {0}")]
    BackendInit(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("redraw failed: {0}")]
    Render(String),
}

impl ChartError {
    /// Returns `true` for failures that abort widget construction.
    #[must_use]
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::HostContainerMissing { .. } | Self::InvalidSurface { .. } | Self::BackendInit(_)
        )
    }
}
