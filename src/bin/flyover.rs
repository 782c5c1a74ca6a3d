//! Ring road flyover
//!
//! Drives the chunk manager along the ring road with the scripted camera
//! and mirrors every tick into an in-memory scene.
//!
//! Usage: `flyover [config.toml]`

use anyhow::Result;
use dune_stream::{
    camera::{flyover_look_target, flyover_position, log_camera_context},
    load_config,
    renderer::{
        create_recording_scene, scene_object_count, scene_triangle_count, scene_vertex_count,
        sync_scene,
    },
    ChunkManager, RingFlyoverData, StreamConfig,
};

/// Simulated frame time in milliseconds
const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: u32 = 60 * 60 * 4;
/// Frame at which the decorative assets finish loading
const POOLS_READY_FRAME: u32 = 90;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => StreamConfig::default(),
    };
    let chunk_size = config.chunk_size;

    let mut manager = ChunkManager::new(config)?;
    let mut scene = create_recording_scene();
    let flyover = RingFlyoverData::default();

    let mut lifecycle_ops = 0usize;
    for frame in 0..FRAMES {
        if frame == POOLS_READY_FRAME {
            manager.set_object_pools(
                vec![
                    "cactus".to_string(),
                    "cactus_tall".to_string(),
                    "rock".to_string(),
                    "dry_bush".to_string(),
                ],
                vec!["skull".to_string(), "wreck".to_string()],
            );
        }

        let time_ms = frame as f64 * FRAME_MS;
        let position = flyover_position(&flyover, time_ms);
        let report = manager.update(position);
        sync_scene(&manager, &report, &mut scene);
        lifecycle_ops += report.lifecycle_ops();

        if !report.is_noop() {
            log_camera_context(position, chunk_size);
            log::debug!(
                "[flyover] frame {} looking at {:?}",
                frame,
                flyover_look_target(&flyover, time_ms)
            );
        }
    }

    let stats = manager.stats();
    log::info!(
        "[flyover] {} frames: active={} created={} disposed={} objects={} slots={} ops={}",
        FRAMES,
        stats.active_chunks,
        stats.total_created,
        stats.total_disposed,
        stats.placed_objects,
        stats.claimed_slots,
        lifecycle_ops
    );
    log::info!(
        "[flyover] scene: chunks={} vertices={} triangles={} objects={} attached={} detached={}",
        scene.meshes.len(),
        scene_vertex_count(&scene),
        scene_triangle_count(&scene),
        scene_object_count(&scene),
        scene.total_attached,
        scene.total_detached
    );

    Ok(())
}
