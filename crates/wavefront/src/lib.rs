//! Wavefront OBJ/MTL text parsing into a CPU-side [`mesh::Mesh`].
//!
//! One load call consumes one complete file: `v`/`vn`/`vt` attribute
//! streams, polygonal `f` faces with OBJ's relative indexing rule, and the
//! material libraries the file names via `mtllib`. Triangulation, GPU
//! upload and rendering belong to the consumer.

pub mod error;
pub mod mesh;
pub mod mtl;
pub mod obj;

mod scan;
