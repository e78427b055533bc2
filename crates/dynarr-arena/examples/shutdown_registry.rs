//! Two independent sequences side by side: one ordered collection of
//! values, and one arena of handles released at shutdown.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p dynarr-arena --example shutdown_registry

use dynarr::{GrowableSequence, SeqError, SequenceConfig};
use dynarr_arena::{Release, ResourceArena};

/// Stand-in for an object name handed out by a graphics API.
struct ObjectName {
    kind: &'static str,
    id: u32,
}

impl Release for ObjectName {
    fn release(self) {
        log::info!("deleting {} {}", self.kind, self.id);
    }
}

fn main() -> Result<(), SeqError> {
    env_logger::init();

    // Ordered collection: vertex positions of three triangles.
    let mut vertices = GrowableSequence::with_capacity(3)?;
    for x in [-0.9f32, -0.45, 0.0, 0.0, 0.45, 0.9] {
        vertices.append(x)?;
    }
    log::info!(
        "{} vertex coordinates, capacity {}",
        vertices.len(),
        vertices.capacity()
    );

    // Registry: everything created during setup, released in one place.
    let mut objects = ResourceArena::with_config(&SequenceConfig::default())?;
    let vertex_shader = objects.track(ObjectName { kind: "shader", id: 1 })?;
    for id in 2..=4 {
        objects.track(ObjectName { kind: "shader", id })?;
        objects.track(ObjectName { kind: "program", id: id + 10 })?;
    }
    objects.track(ObjectName { kind: "vertex array", id: 20 })?;

    if let Some(shader) = objects.get(vertex_shader) {
        log::info!("vertex shader is {} {}", shader.kind, shader.id);
    }

    let released = objects.release_all();
    println!("released {released} objects");
    Ok(())
}
