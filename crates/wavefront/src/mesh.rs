//! CPU-side mesh representation produced by the OBJ/MTL loaders.

use crate::mtl::MaterialLibrary;

/// Attribute streams filled by `v`/`vn`/`vt` lines, in file order.
///
/// Streams are append-only and 0-indexed by insertion order. Entries are
/// never removed or reordered, so an index resolved against an earlier
/// length stays valid after later appends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
}

impl Attributes {
    /// Append a position declared by a `v` line.
    pub fn push_position(&mut self, x: f32, y: f32, z: f32) {
        self.positions.push([x, y, z]);
    }

    /// Append a normal declared by a `vn` line.
    pub fn push_normal(&mut self, x: f32, y: f32, z: f32) {
        self.normals.push([x, y, z]);
    }

    /// Append a texture coordinate declared by a `vt` line.
    pub fn push_texcoord(&mut self, u: f32, v: f32) {
        self.texcoords.push([u, v]);
    }
}

/// One corner of a polygon: resolved, absolute, 0-based offsets into
/// [`Attributes`], frozen at the moment the face line was parsed.
///
/// `None` means the field was omitted, empty, or written as the reserved
/// raw index `0`. A forward reference to an entry not declared yet is kept
/// as-is; whether it ever becomes valid is the consumer's problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: Option<usize>,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

/// A polygon as an ordered corner list.
///
/// The loader never triangulates and never enforces a minimum corner
/// count; a one- or two-corner face is stored as-is.
pub type Face = Vec<FaceVertex>;

/// All faces of one parsed file plus the material selected for them.
///
/// `usemtl` overwrites `material` in place, so only the last directive in
/// the file is observable. Empty string = no `usemtl` seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub faces: Vec<Face>,
    pub material: String,
}

/// Everything parsed out of one OBJ file. Exclusively owned by the load
/// call that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub attributes: Attributes,
    pub shapes: Vec<Shape>,
    pub materials: MaterialLibrary,
}

impl Mesh {
    /// Total face count across all shapes.
    pub fn face_count(&self) -> usize {
        self.shapes.iter().map(|shape| shape.faces.len()).sum()
    }
}
