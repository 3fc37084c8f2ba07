//! Fixed-capacity drifting particle pool for the page backdrop.
//!
//! Particles fly toward the camera along +Z; once one passes the wrap depth
//! it is recycled in place at the spawn depth with fresh random X/Y. The pool
//! never allocates after construction and its size never changes.

use crate::constants::{
    FIELD_HALF_EXTENT, FIELD_SPAWN_DEPTH, FIELD_WRAP_DEPTH, PARTICLE_ADVANCE_FACTOR,
    PARTICLE_COUNT, PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use glam::Vec3;
use rand::Rng;

/// Tunable parameters for the field. The wrap/spawn depths are kept
/// configurable rather than hard-coded; defaults match the shipped page.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub half_extent: f32,
    pub wrap_depth: f32,
    pub spawn_depth: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub advance_factor: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_extent: FIELD_HALF_EXTENT,
            wrap_depth: FIELD_WRAP_DEPTH,
            spawn_depth: FIELD_SPAWN_DEPTH,
            speed_min: PARTICLE_SPEED_MIN,
            speed_max: PARTICLE_SPEED_MAX,
            advance_factor: PARTICLE_ADVANCE_FACTOR,
        }
    }
}

pub struct ParticleField {
    params: FieldParams,
    positions: Vec<Vec3>,
    speeds: Vec<f32>,
}

impl ParticleField {
    pub fn new<R: Rng>(params: FieldParams, rng: &mut R) -> Self {
        let e = params.half_extent;
        let positions = (0..params.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-e..e),
                    rng.gen_range(-e..e),
                    rng.gen_range(-e..e),
                )
            })
            .collect();
        let speeds = (0..params.count)
            .map(|_| rng.gen_range(params.speed_min..params.speed_max))
            .collect();
        Self {
            params,
            positions,
            speeds,
        }
    }

    /// Advance one rendered frame. The step is frame-based rather than
    /// dt-scaled, matching the reference page's uncapped animation loop.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let p = self.params;
        for (pos, speed) in self.positions.iter_mut().zip(&self.speeds) {
            pos.z += speed * p.advance_factor;
            if pos.z > p.wrap_depth {
                pos.z = p.spawn_depth;
                pos.x = rng.gen_range(-p.half_extent..p.half_extent);
                pos.y = rng.gen_range(-p.half_extent..p.half_extent);
            }
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn params(&self) -> FieldParams {
        self.params
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
