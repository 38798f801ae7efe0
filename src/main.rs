//! stlinfo - bounding box diagnostics for STL meshes
//!
//! One-shot pipeline: load the mesh, reduce its vertices to a bounding box,
//! print the report. Any failure surfaces on stderr with a non-zero exit.

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use stlinfo::{LogFile, Mesh, MeshReport};

#[derive(Parser)]
#[command(
    name = "stlinfo",
    version,
    about = "Print bounding box, center, size, and triangle count of an STL mesh"
)]
struct Cli {
    /// Path to the STL file (binary or ASCII)
    path: PathBuf,

    /// Write progress output to a log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log = match cli.log_file.as_deref() {
        Some(path) => Some(
            LogFile::new(path, false)
                .with_context(|| format!("failed to open log file {}", path.display()))?,
        ),
        None => None,
    };

    if let Some(log) = log.as_mut() {
        log.log(format!("Loading STL file: {}", cli.path.display()))?;
    }

    let mesh = Mesh::load_stl(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    if let Some(log) = log.as_mut() {
        log.log(format!(
            "Loaded {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        ))?;
    }

    let report = MeshReport::from_mesh(&mesh)
        .with_context(|| format!("failed to measure {}", cli.path.display()))?;

    print!("{}", report);

    if let Some(log) = log.as_mut() {
        log.log("Report written")?;
    }

    Ok(())
}
