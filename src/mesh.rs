//! Triangle mesh representation

use crate::{BBox3, Error, Result, Triangle};
use nalgebra::Vector3;

mod io; // STL I/O implementation

/// Triangle mesh
///
/// Represents geometry as a collection of triangles over an ordered vertex
/// list, in the order they were read from the file.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vector3<f32>>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with preallocated storage
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex
    ///
    /// Returns the vertex index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stlinfo::Mesh;
    /// use nalgebra::Vector3;
    ///
    /// let mut mesh = Mesh::new();
    /// let v0 = mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
    /// assert_eq!(v0, 0);
    /// ```
    pub fn add_vertex(&mut self, pos: Vector3<f32>) -> i32 {
        self.vertices.push(pos);
        (self.vertices.len() - 1) as i32
    }

    /// Add a triangle
    ///
    /// Returns the triangle index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stlinfo::{Mesh, Triangle};
    /// use nalgebra::Vector3;
    ///
    /// let mut mesh = Mesh::new();
    /// let v0 = mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
    /// let v1 = mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
    /// let v2 = mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0));
    /// mesh.add_triangle(Triangle::new(v0, v1, v2));
    /// assert_eq!(mesh.triangle_count(), 1);
    /// ```
    pub fn add_triangle(&mut self, tri: Triangle) -> i32 {
        self.triangles.push(tri);
        (self.triangles.len() - 1) as i32
    }

    /// Add a triangle by vertex positions
    pub fn add_triangle_vertices(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
    ) -> i32 {
        let v0 = self.add_vertex(a);
        let v1 = self.add_vertex(b);
        let v2 = self.add_vertex(c);
        self.add_triangle(Triangle::new(v0, v1, v2))
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get a vertex by index
    pub fn get_vertex(&self, index: usize) -> Option<Vector3<f32>> {
        self.vertices.get(index).copied()
    }

    /// Get a triangle by index
    pub fn get_triangle(&self, index: usize) -> Option<Triangle> {
        self.triangles.get(index).copied()
    }

    /// Get the three vertex positions of a triangle by index
    pub fn get_triangle_vertices(
        &self,
        index: usize,
    ) -> Result<(Vector3<f32>, Vector3<f32>, Vector3<f32>)> {
        let tri = self
            .get_triangle(index)
            .ok_or_else(|| Error::Parse(format!("triangle index {} out of range", index)))?;
        let fetch = |i: i32| {
            self.get_vertex(i as usize)
                .ok_or_else(|| Error::Parse(format!("vertex index {} out of range", i)))
        };
        Ok((fetch(tri.v0)?, fetch(tri.v1)?, fetch(tri.v2)?))
    }

    /// Get the bounding box of the mesh
    ///
    /// Reduces every vertex referenced by every triangle to an elementwise
    /// minimum and maximum. A mesh with zero triangles has no defined
    /// reduction and fails with [`Error::EmptyMesh`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stlinfo::Mesh;
    /// use nalgebra::Vector3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_triangle_vertices(
    ///     Vector3::new(0.0, 0.0, 0.0),
    ///     Vector3::new(10.0, 0.0, 0.0),
    ///     Vector3::new(5.0, 10.0, 0.0),
    /// );
    ///
    /// let bbox = mesh.bounding_box()?;
    /// assert_eq!(bbox.max(), Vector3::new(10.0, 10.0, 0.0));
    /// # Ok::<(), stlinfo::Error>(())
    /// ```
    pub fn bounding_box(&self) -> Result<BBox3> {
        if self.triangles.is_empty() {
            return Err(Error::EmptyMesh);
        }

        let mut bbox = BBox3::empty();
        for index in 0..self.triangle_count() {
            let (a, b, c) = self.get_triangle_vertices(index)?;
            bbox.include_point(a);
            bbox.include_point(b);
            bbox.include_point(c);
        }
        Ok(bbox)
    }

    /// Save to binary STL file
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stlinfo::Mesh;
    ///
    /// let mesh = Mesh::load_stl("input.stl")?;
    /// mesh.save_stl("copy.stl")?;
    /// # Ok::<(), stlinfo::Error>(())
    /// ```
    pub fn save_stl<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        io::save_stl_impl(self, path)
    }

    /// Load from STL file (binary or ASCII, auto-detected)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stlinfo::Mesh;
    ///
    /// let mesh = Mesh::load_stl("input.stl")?;
    /// println!("{} triangles", mesh.triangle_count());
    /// # Ok::<(), stlinfo::Error>(())
    /// ```
    pub fn load_stl<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        io::load_stl_impl(path)
    }
}
