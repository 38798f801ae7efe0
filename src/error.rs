//! Error types for stlinfo

use std::path::PathBuf;
use thiserror::Error;

/// stlinfo error types
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file content does not conform to the STL layout
    #[error("invalid STL data: {0}")]
    Parse(String),

    /// Bounding box requested for a mesh with zero triangles
    #[error("mesh contains no triangles; bounding box is undefined")]
    EmptyMesh,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stlinfo operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Parse("triangle record truncated".to_string());
        assert_eq!(err.to_string(), "invalid STL data: triangle record truncated");
    }

    #[test]
    fn test_empty_mesh_display() {
        let err = Error::EmptyMesh;
        assert_eq!(
            err.to_string(),
            "mesh contains no triangles; bounding box is undefined"
        );
    }
}
