use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cleave::math::*;
use cleave::slice::*;
use log::{info, warn};
use std::path::PathBuf;

mod io;

/// Cuts an OBJ mesh with a plane and writes both halves as OBJ files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Mesh to cut
    input: PathBuf,

    /// A point on the cutting plane, "x,y,z"
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
    point: Vec3,

    /// Normal of the cutting plane, "x,y,z"; the upper hull lies on its side
    #[arg(long, value_parser = parse_vec3, default_value = "0,1,0", allow_hyphen_values = true)]
    normal: Vec3,

    /// Directory for Upper_Hull.obj and Lower_Hull.obj
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// TOML file with slice settings
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Submesh that receives the cross-section; appended as a new one when omitted or out of range
    #[arg(long)]
    cap_submesh: Option<u32>,

    /// Slice on the worker pool instead of the main thread
    #[arg(long)]
    offload: bool,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated numbers, got '{s}'")),
    }
}

fn load_settings(cli: &Cli) -> Result<SliceSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))?
        }
        None => SliceSettings::default(),
    };
    if cli.cap_submesh.is_some() {
        settings.cross_section_material_index = cli.cap_submesh;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    let normal = cli.normal.try_normalized().ok_or_else(|| anyhow!("plane normal must not be zero"))?;
    let plane = Plane::new(cli.point, normal);

    let mesh = io::load_obj(&cli.input)?;
    info!(
        "loaded {}: {} triangles in {} submeshes",
        cli.input.display(),
        mesh.triangle_count(),
        mesh.submeshes.len()
    );

    let mut slicer = Slicer::new(settings)?;
    let hull = if cli.offload {
        let pending = offload::submit(move || slicer.slice(&mesh, &plane));
        pending.wait().ok_or_else(|| anyhow!("slicing job did not finish"))??
    } else {
        slicer.slice(&mesh, &plane)?
    };

    let Some(hull) = hull else {
        warn!("the plane does not cut {}", cli.input.display());
        return Ok(());
    };

    let mut sink = io::ObjSink::new(&cli.out_dir);
    for written in [hull.create_upper(&mut sink), hull.create_lower(&mut sink)].into_iter().flatten() {
        println!("{}", written?.display());
    }
    Ok(())
}
