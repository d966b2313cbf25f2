//! OBJ parser producing an untriangulated [`Mesh`].
//!
//! One forward pass over the lines, no backtracking. Attribute lines grow
//! the streams, face lines resolve their references against the stream
//! lengths in effect at that moment, and `mtllib` lines pull in material
//! libraries next to the OBJ file.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::error::{LoadError, LoadResult};
use crate::mesh::{Attributes, Face, FaceVertex, Mesh, Shape};
use crate::mtl;
use crate::scan;

/// Load an OBJ mesh from a file path.
///
/// `mtllib` references inside the file are resolved against the parent
/// directory of `path`, never against the working directory.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> LoadResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ mesh from {:?}", path);
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = load_obj_from_reader(BufReader::new(file), path.parent())?;
    log::info!(
        "Parsed {:?}: {} positions, {} normals, {} texcoords, {} faces, {} materials",
        path,
        mesh.attributes.positions.len(),
        mesh.attributes.normals.len(),
        mesh.attributes.texcoords.len(),
        mesh.face_count(),
        mesh.materials.len()
    );
    Ok(mesh)
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
///
/// `mtl_dir` is the base directory for `mtllib` references. With `None`,
/// material libraries are skipped with a warning.
pub fn load_obj_from_reader<R: BufRead>(reader: R, mtl_dir: Option<&Path>) -> LoadResult<Mesh> {
    parse_obj(reader, mtl_dir)
}

/// Convenience helper to parse an OBJ string literal. Material libraries
/// are not resolved.
pub fn load_obj_from_str(contents: &str) -> LoadResult<Mesh> {
    parse_obj(io::Cursor::new(contents), None)
}

fn parse_obj<R: BufRead>(reader: R, mtl_dir: Option<&Path>) -> LoadResult<Mesh> {
    let mut mesh = Mesh::default();
    let mut shape = Shape::default();

    for line in reader.lines() {
        let line = line.map_err(LoadError::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => {
                let [x, y, z] = scan::float3(&mut parts);
                mesh.attributes.push_position(x, y, z);
            }
            "vt" => {
                let [u, v] = scan::float2(&mut parts);
                mesh.attributes.push_texcoord(u, v);
            }
            "vn" => {
                let [x, y, z] = scan::float3(&mut parts);
                mesh.attributes.push_normal(x, y, z);
            }
            "f" => {
                shape.faces.push(parse_face(parts, &mesh.attributes));
            }
            "mtllib" => {
                let Some(name) = parts.next() else {
                    continue;
                };
                match mtl_dir {
                    Some(dir) => {
                        let loaded = mtl::load_mtl_from_path(dir.join(name))?;
                        // Later libraries win on a name collision.
                        mesh.materials.extend(loaded);
                    }
                    None => log::warn!("No base directory, skipping material library {}", name),
                }
            }
            "usemtl" => {
                // Overwrites in place; only the last directive in the file
                // is observable on the single shape.
                shape.material = parts.next().unwrap_or_default().to_string();
            }
            _ => {
                // `s` smoothing groups and other unrecognized directives.
            }
        }
    }

    if !shape.faces.is_empty() {
        mesh.shapes.push(shape);
    }

    Ok(mesh)
}

/// Parse the corner tokens of an `f` line against the attribute counts in
/// effect right now. Later attribute lines never re-resolve these corners.
fn parse_face<'a, I>(tokens: I, attributes: &Attributes) -> Face
where
    I: Iterator<Item = &'a str>,
{
    let mut face = Face::new();
    for token in tokens {
        let mut fields = token.split('/');
        let position = match fields.next().map(str::parse::<i64>) {
            Some(Ok(raw)) => resolve_index(raw, attributes.positions.len()),
            _ => {
                log::debug!("Dropping face corner {:?}: unreadable vertex reference", token);
                continue;
            }
        };
        face.push(FaceVertex {
            position,
            texcoord: optional_index(fields.next(), attributes.texcoords.len()),
            normal: optional_index(fields.next(), attributes.normals.len()),
        });
    }
    face
}

/// Optional texcoord/normal fields: absent, empty or unparsable all mean
/// "no reference".
fn optional_index(field: Option<&str>, len: usize) -> Option<usize> {
    resolve_index(field?.parse().ok()?, len)
}

/// OBJ reference resolution: positive values are 1-based, negative values
/// count backward from the latest entry. Raw `0` is reserved by the format
/// and stays unresolved, as does a backward reference past the start.
fn resolve_index(raw: i64, len: usize) -> Option<usize> {
    if raw > 0 {
        Some(raw as usize - 1)
    } else if raw < 0 {
        usize::try_from(len as i64 + raw).ok()
    } else {
        None
    }
}
