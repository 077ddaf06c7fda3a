// File: crates/chart-core/src/error.rs
// Summary: Error type for rendering-engine failures.

use thiserror::Error;

/// Failures reported by a rendering engine.
///
/// The controller itself never produces these; ignored operations
/// (updates before `initialize`, overlay updates without an overlay slot)
/// are silent no-ops.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to allocate a {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },

    #[error("dataset {index} out of range (chart has {count})")]
    DatasetOutOfRange { index: usize, count: usize },

    #[error("failed to encode frame as {0}")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
