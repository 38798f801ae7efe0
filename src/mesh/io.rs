//! STL file I/O support for Mesh
//!
//! Both STL encodings are handled. A file whose first bytes read `solid` and
//! whose 80-byte header carries no NUL bytes is parsed as ASCII; everything
//! else is parsed as binary (80-byte header, little-endian `u32` triangle
//! count, then 50-byte triangle records).

use super::Mesh;
use crate::{Error, Result, Triangle};
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// STL binary header size in bytes
const HEADER_SIZE: usize = 80;

/// Size of one binary triangle record (normal + 3 vertices + attribute)
const TRIANGLE_SIZE: usize = 50;

/// Load mesh from an STL file, detecting the encoding from the header
pub(super) fn load_stl_impl<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let mut reader = BufReader::new(file);

    // Read header plus triangle count; ASCII files may be shorter than that
    let mut header = [0u8; HEADER_SIZE + 4];
    let bytes_read = read_up_to(&mut reader, &mut header)?;

    if bytes_read < 6 {
        return Err(Error::Parse("file too small to be valid STL".to_string()));
    }

    let header_str = String::from_utf8_lossy(&header[..bytes_read.min(HEADER_SIZE)]);
    if header_str.trim_start().starts_with("solid") && !header_has_nul(&header[..bytes_read]) {
        // ASCII - reopen so the line reader sees the file from the start
        drop(reader);
        let file = File::open(path)?;
        load_stl_ascii(BufReader::new(file))
    } else {
        load_stl_binary(&header[..bytes_read], reader)
    }
}

/// Some binary STLs start with "solid" in the header text; those headers
/// contain NUL padding that never appears in ASCII files.
fn header_has_nul(header: &[u8]) -> bool {
    header[..header.len().min(HEADER_SIZE)].contains(&0)
}

/// Fill `buf` as far as the reader allows, returning the number of bytes read
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Load a binary STL given the already-read header bytes
fn load_stl_binary<R: Read>(header: &[u8], mut reader: R) -> Result<Mesh> {
    if header.len() < HEADER_SIZE + 4 {
        return Err(Error::Parse(format!(
            "binary STL header truncated: expected {} bytes, got {}",
            HEADER_SIZE + 4,
            header.len()
        )));
    }

    let triangle_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut mesh = Mesh::with_capacity(triangle_count as usize * 3, triangle_count as usize);

    let mut record = [0u8; TRIANGLE_SIZE];
    for index in 0..triangle_count {
        reader.read_exact(&mut record).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                Error::Parse(format!(
                    "triangle record {} of {} truncated",
                    index, triangle_count
                ))
            } else {
                Error::Io(e)
            }
        })?;

        // Skip the stored normal (bytes 0..12); it is recomputed on save
        let v1 = read_vertex(&record[12..24]);
        let v2 = read_vertex(&record[24..36]);
        let v3 = read_vertex(&record[36..48]);

        let i0 = mesh.add_vertex(v1);
        let i1 = mesh.add_vertex(v2);
        let i2 = mesh.add_vertex(v3);
        mesh.add_triangle(Triangle::new(i0, i1, i2));
    }

    Ok(mesh)
}

/// Read a vertex from 12 bytes (3 little-endian f32)
fn read_vertex(buf: &[u8]) -> Vector3<f32> {
    Vector3::new(
        f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
    )
}

/// Load an ASCII STL file
fn load_stl_ascii<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    let mut in_loop = false;
    let mut loop_vertices: Vec<Vector3<f32>> = Vec::with_capacity(3);

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let keyword = match parts.next() {
            Some(word) => word.to_lowercase(),
            None => continue,
        };

        match keyword.as_str() {
            "facet" => {
                // Normal follows; ignored like the binary path
            }
            "outer" => {
                in_loop = true;
                loop_vertices.clear();
            }
            "vertex" => {
                if !in_loop {
                    return Err(Error::Parse(format!(
                        "line {}: vertex outside of outer loop",
                        line_no + 1
                    )));
                }
                let mut coord = |axis: &str| -> Result<f32> {
                    parts
                        .next()
                        .ok_or_else(|| {
                            Error::Parse(format!(
                                "line {}: vertex missing {} coordinate",
                                line_no + 1,
                                axis
                            ))
                        })?
                        .parse::<f32>()
                        .map_err(|e| {
                            Error::Parse(format!(
                                "line {}: bad {} coordinate: {}",
                                line_no + 1,
                                axis,
                                e
                            ))
                        })
                };
                let x = coord("x")?;
                let y = coord("y")?;
                let z = coord("z")?;
                loop_vertices.push(Vector3::new(x, y, z));
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if loop_vertices.len() != 3 {
                    return Err(Error::Parse(format!(
                        "line {}: facet has {} vertices, expected 3",
                        line_no + 1,
                        loop_vertices.len()
                    )));
                }
                let i0 = mesh.add_vertex(loop_vertices[0]);
                let i1 = mesh.add_vertex(loop_vertices[1]);
                let i2 = mesh.add_vertex(loop_vertices[2]);
                mesh.add_triangle(Triangle::new(i0, i1, i2));
                loop_vertices.clear();
            }
            "endsolid" => break,
            _ => {
                // "solid" header line and anything unknown
            }
        }
    }

    Ok(mesh)
}

/// Save mesh to binary STL file
pub(super) fn save_stl_impl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // Write header (80 bytes, space-padded)
    let mut header = String::from("stlinfo binary STL");
    header.truncate(HEADER_SIZE);
    while header.len() < HEADER_SIZE {
        header.push(' ');
    }
    writer.write_all(header.as_bytes())?;

    let triangle_count = mesh.triangle_count() as u32;
    writer.write_all(&triangle_count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let (v1, v2, v3) = mesh.get_triangle_vertices(index)?;

        let cross = (v2 - v1).cross(&(v3 - v1));
        let normal = if cross.norm() > 1e-10 {
            cross.normalize()
        } else {
            Vector3::new(0.0, 0.0, 1.0) // degenerate triangle
        };

        write_f32_array(&mut writer, &[normal.x, normal.y, normal.z])?;
        write_f32_array(&mut writer, &[v1.x, v1.y, v1.z])?;
        write_f32_array(&mut writer, &[v2.x, v2.y, v2.z])?;
        write_f32_array(&mut writer, &[v3.x, v3.y, v3.z])?;
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write f32 array in little-endian format
fn write_f32_array<W: Write>(writer: &mut W, values: &[f32]) -> Result<()> {
    for &value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}
