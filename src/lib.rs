//! # stlinfo
//!
//! Bounding box and size diagnostics for STL meshes.
//!
//! Loads a triangular mesh from a binary or ASCII STL file and reports its
//! axis-aligned bounding box, center point, per-axis size, and triangle
//! count.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stlinfo::{Mesh, MeshReport};
//!
//! // Load mesh and print its diagnostics
//! let mesh = Mesh::load_stl("part.stl")?;
//! let report = MeshReport::from_mesh(&mesh)?;
//! print!("{}", report);
//! # Ok::<(), stlinfo::Error>(())
//! ```

pub mod error;
pub mod log;
pub mod mesh;
pub mod report;
pub mod types;
pub mod utils;

// Re-exports
pub use error::{Error, Result};
pub use log::LogFile;
pub use mesh::Mesh;
pub use report::MeshReport;
pub use types::{BBox3, Triangle};
pub use utils::TempFolder;
