//! Entry point for the mesh inspector.
//! Loads one OBJ file and reports what the parser produced.

use anyhow::{Result, bail};

fn parse_path_arg() -> Option<String> {
    // First argument that is not an option flag.
    std::env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

fn parse_materials_arg() -> bool {
    // --materials[=on|off], default off
    for arg in std::env::args() {
        if arg == "--materials" {
            return true;
        }
        if let Some(val) = arg.strip_prefix("--materials=") {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    false
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = parse_path_arg() else {
        bail!("Usage: app <model.obj> [--materials[=on|off]]");
    };
    let show_materials = parse_materials_arg();

    let mesh = wavefront::obj::load_obj_from_path(&path)?;

    if mesh.shapes.is_empty() {
        log::info!("No faces found, attribute streams only");
    }
    for (i, shape) in mesh.shapes.iter().enumerate() {
        let material = if shape.material.is_empty() {
            "(none)"
        } else {
            shape.material.as_str()
        };
        log::info!(
            "Shape {}: {} faces, material {}",
            i,
            shape.faces.len(),
            material
        );
        let ngons = shape.faces.iter().filter(|face| face.len() > 3).count();
        if ngons > 0 {
            log::info!("  {} faces need fan triangulation before upload", ngons);
        }
    }

    if show_materials {
        for material in mesh.materials.values() {
            log::info!(
                "Material {}: Kd {:?}, Ns {}, opacity {}",
                material.name,
                material.diffuse,
                material.shininess,
                material.opacity
            );
        }
    }

    Ok(())
}
