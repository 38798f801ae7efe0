use nalgebra::Vector3;
use stlinfo::{Error, Mesh, MeshReport, TempFolder};
use std::fs;
use std::path::Path;

/// Write a binary STL file with the given triangles (three vertices each)
fn write_binary_stl(path: &Path, triangles: &[[Vector3<f32>; 3]]) {
    let mut data = Vec::new();
    data.extend_from_slice(&[b' '; 80]);
    data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        // Normal is ignored by the loader
        for _ in 0..3 {
            data.extend_from_slice(&0f32.to_le_bytes());
        }
        for v in tri {
            data.extend_from_slice(&v.x.to_le_bytes());
            data.extend_from_slice(&v.y.to_le_bytes());
            data.extend_from_slice(&v.z.to_le_bytes());
        }
        data.extend_from_slice(&[0u8, 0u8]);
    }
    fs::write(path, data).expect("write binary STL fixture");
}

#[test]
fn test_load_binary_stl() {
    let tmp = TempFolder::new().expect("temp folder");
    let path = tmp.path().join("triangle.stl");
    write_binary_stl(
        &path,
        &[[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(5.0, 10.0, 0.0),
        ]],
    );

    let mesh = Mesh::load_stl(&path).expect("load binary STL");

    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.get_vertex(1), Some(Vector3::new(10.0, 0.0, 0.0)));
}

#[test]
fn test_load_ascii_stl() {
    let tmp = TempFolder::new().expect("temp folder");
    let path = tmp.path().join("triangle_ascii.stl");
    fs::write(
        &path,
        "solid triangle
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 10 0 0
      vertex 5 10 0
    endloop
  endfacet
endsolid triangle
",
    )
    .expect("write ASCII STL fixture");

    let mesh = Mesh::load_stl(&path).expect("load ASCII STL");

    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.get_vertex(2), Some(Vector3::new(5.0, 10.0, 0.0)));
}

#[test]
fn test_load_missing_file() {
    let err = Mesh::load_stl("no_such_file_12345.stl").unwrap_err();
    match err {
        Error::FileNotFound(path) => {
            assert!(path.to_string_lossy().contains("no_such_file_12345"));
        }
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_truncated_triangle_record() {
    let tmp = TempFolder::new().expect("temp folder");
    let path = tmp.path().join("truncated.stl");
    write_binary_stl(
        &path,
        &[[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]],
    );

    // Cut the last 10 bytes out of the single triangle record
    let mut data = fs::read(&path).expect("read fixture");
    let len = data.len() - 10;
    data.truncate(len);
    fs::write(&path, data).expect("rewrite fixture");

    let err = Mesh::load_stl(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {:?}", err);
}

#[test]
fn test_load_too_small_file() {
    let tmp = TempFolder::new().expect("temp folder");
    let path = tmp.path().join("tiny.stl");
    fs::write(&path, b"abc").expect("write fixture");

    let err = Mesh::load_stl(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {:?}", err);
}

#[test]
fn test_zero_triangle_file_fails_at_report() {
    let tmp = TempFolder::new().expect("temp folder");
    let path = tmp.path().join("empty.stl");
    write_binary_stl(&path, &[]);

    // Structurally valid, so loading succeeds with zero triangles
    let mesh = Mesh::load_stl(&path).expect("load empty STL");
    assert_eq!(mesh.triangle_count(), 0);

    // The reduction over zero triangles is refused
    assert!(matches!(
        MeshReport::from_mesh(&mesh),
        Err(Error::EmptyMesh)
    ));
}
