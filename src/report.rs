//! Human-readable mesh diagnostics report

use crate::{Mesh, Result};
use nalgebra::Vector3;
use std::fmt;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounding box report for a mesh
///
/// Derived once from a mesh and rendered as five labeled lines, one per
/// value, in fixed order.
///
/// # Example
///
/// ```rust,no_run
/// use stlinfo::{Mesh, MeshReport};
///
/// let mesh = Mesh::load_stl("part.stl")?;
/// let report = MeshReport::from_mesh(&mesh)?;
/// print!("{}", report);
/// # Ok::<(), stlinfo::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshReport {
    /// Bounding box minimum corner
    pub min: Vector3<f32>,
    /// Bounding box maximum corner
    pub max: Vector3<f32>,
    /// Center of the bounding box
    pub center: Vector3<f32>,
    /// Extent per axis
    pub size: Vector3<f32>,
    /// Number of triangles in the mesh
    pub triangle_count: usize,
}

impl MeshReport {
    /// Compute the report for a mesh
    ///
    /// Fails with [`crate::Error::EmptyMesh`] if the mesh has no triangles.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self> {
        let bbox = mesh.bounding_box()?;
        Ok(Self {
            min: bbox.min(),
            max: bbox.max(),
            center: bbox.center(),
            size: bbox.size(),
            triangle_count: mesh.triangle_count(),
        })
    }

    /// Write the report to the given writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

fn fmt_vector(v: &Vector3<f32>) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bounding Box Min: {}", fmt_vector(&self.min))?;
        writeln!(f, "Bounding Box Max: {}", fmt_vector(&self.max))?;
        writeln!(f, "Center Point: {}", fmt_vector(&self.center))?;
        writeln!(f, "Size (mm): {}", fmt_vector(&self.size))?;
        writeln!(f, "Triangle Count: {}", self.triangle_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn single_triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_triangle_vertices(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        mesh
    }

    #[test]
    fn test_report_values() {
        let report = MeshReport::from_mesh(&single_triangle_mesh()).expect("report");
        assert_eq!(report.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(report.max, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(report.center, Vector3::new(0.5, 0.5, 0.0));
        assert_eq!(report.size, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(report.triangle_count, 1);
    }

    #[test]
    fn test_report_format() {
        let report = MeshReport::from_mesh(&single_triangle_mesh()).expect("report");
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Bounding Box Min: (0.000, 0.000, 0.000)");
        assert_eq!(lines[1], "Bounding Box Max: (1.000, 1.000, 0.000)");
        assert_eq!(lines[2], "Center Point: (0.500, 0.500, 0.000)");
        assert_eq!(lines[3], "Size (mm): (1.000, 1.000, 0.000)");
        assert_eq!(lines[4], "Triangle Count: 1");
    }

    #[test]
    fn test_report_empty_mesh() {
        let mesh = Mesh::new();
        assert!(matches!(
            MeshReport::from_mesh(&mesh),
            Err(Error::EmptyMesh)
        ));
    }

    #[test]
    fn test_write_to() {
        let report = MeshReport::from_mesh(&single_triangle_mesh()).expect("report");
        let mut buf = Vec::new();
        report.write_to(&mut buf).expect("write report");
        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }
}
