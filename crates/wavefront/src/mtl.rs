//! Minimal MTL parser covering the directives the mesh loader consumes.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    mem,
    path::Path,
};

use crate::error::{LoadError, LoadResult};
use crate::scan;

/// One `newmtl` record from a material library.
///
/// Numeric fields keep their zero defaults until the matching directive
/// appears. `d` always sets `opacity`; `transparency` stays at its zero
/// default and is left to consumers tracking the inverse convention.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub opacity: f32,
    pub transparency: f32,
    pub shininess: f32,
}

/// Materials keyed by name.
///
/// Merging libraries with [`HashMap::extend`] keeps the later entry when
/// two libraries define the same name.
pub type MaterialLibrary = HashMap<String, Material>;

/// Load a material library from a file path.
pub fn load_mtl_from_path(path: impl AsRef<Path>) -> LoadResult<MaterialLibrary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_mtl_from_reader(BufReader::new(file))
}

/// Load a material library from a [`BufRead`] implementation.
pub fn load_mtl_from_reader<R: BufRead>(reader: R) -> LoadResult<MaterialLibrary> {
    parse_mtl(reader)
}

/// Convenience helper to parse an MTL string literal.
pub fn load_mtl_from_str(contents: &str) -> LoadResult<MaterialLibrary> {
    parse_mtl(io::Cursor::new(contents))
}

fn parse_mtl<R: BufRead>(reader: R) -> LoadResult<MaterialLibrary> {
    let mut materials = MaterialLibrary::new();
    let mut current = Material::default();

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
            "newmtl" => {
                flush(&mut materials, &mut current);
                current.name = parts.next().unwrap_or_default().to_string();
            }
            "Ka" => current.ambient = scan::float3(&mut parts),
            "Kd" => current.diffuse = scan::float3(&mut parts),
            "Ks" => current.specular = scan::float3(&mut parts),
            "d" => current.opacity = scan::float_or_zero(parts.next()),
            "Ns" => current.shininess = scan::float_or_zero(parts.next()),
            _ => {
                // map_Kd, illum and the rest are not consumed.
            }
        }
    }
    flush(&mut materials, &mut current);

    Ok(materials)
}

/// Move the in-progress record into the library, overwriting an earlier
/// record of the same name. A record that never got a name is discarded.
fn flush(materials: &mut MaterialLibrary, current: &mut Material) {
    if current.name.is_empty() {
        *current = Material::default();
        return;
    }
    let material = mem::take(current);
    materials.insert(material.name.clone(), material);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_material_block() {
        let src = r#"
            # hand-authored library
            newmtl stone
            Ka 0.10 0.10 0.10
            Kd 0.55 0.50 0.45
            Ks 0.30 0.30 0.30
            d 1.0
            Ns 16
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials.len(), 1);
        let stone = &materials["stone"];
        assert_eq!(stone.name, "stone");
        assert_eq!(stone.ambient, [0.10, 0.10, 0.10]);
        assert_eq!(stone.diffuse, [0.55, 0.50, 0.45]);
        assert_eq!(stone.specular, [0.30, 0.30, 0.30]);
        assert_eq!(stone.opacity, 1.0);
        assert_eq!(stone.transparency, 0.0);
        assert_eq!(stone.shininess, 16.0);
    }

    #[test]
    fn last_record_is_flushed_at_end_of_input() {
        let src = r#"
            newmtl first
            Kd 1.0 0.0 0.0
            newmtl second
            Kd 0.0 1.0 0.0
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials.len(), 2);
        assert_eq!(materials["second"].diffuse, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn later_record_wins_within_one_file() {
        let src = r#"
            newmtl red
            Kd 1.0 0.0 0.0
            Ns 32
            newmtl red
            Kd 0.0 0.0 1.0
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials.len(), 1);
        assert_eq!(materials["red"].diffuse, [0.0, 0.0, 1.0]);
        // The whole record is replaced, not merged field by field.
        assert_eq!(materials["red"].shininess, 0.0);
    }

    #[test]
    fn merge_keeps_the_later_library() {
        let base = load_mtl_from_str("newmtl red\nKd 1.0 0.0 0.0\nNs 8").expect("parse base");
        let override_lib = load_mtl_from_str("newmtl red\nKd 0.0 0.0 1.0").expect("parse override");

        let mut merged = base;
        merged.extend(override_lib);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["red"].diffuse, [0.0, 0.0, 1.0]);
        assert_eq!(merged["red"].shininess, 0.0);
    }

    #[test]
    fn directives_before_newmtl_are_discarded() {
        let src = r#"
            Kd 1.0 1.0 1.0
            newmtl plain
            Ns 8
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials.len(), 1);
        assert_eq!(materials["plain"].diffuse, [0.0, 0.0, 0.0]);
        assert_eq!(materials["plain"].shininess, 8.0);
    }

    #[test]
    fn unnamed_record_is_never_flushed() {
        let src = r#"
            newmtl
            Kd 1.0 0.0 0.0
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert!(materials.is_empty());
    }

    #[test]
    fn ignores_unknown_directives() {
        let src = r#"
            newmtl textured
            map_Kd stone.png
            illum 2
            Kd 0.5 0.5 0.5
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials["textured"].diffuse, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let src = r#"
            newmtl rough
            Kd 0.5 oops 0.25
            Ns fast
        "#;
        let materials = load_mtl_from_str(src).expect("parse library");
        assert_eq!(materials["rough"].diffuse, [0.5, 0.0, 0.25]);
        assert_eq!(materials["rough"].shininess, 0.0);
    }
}
