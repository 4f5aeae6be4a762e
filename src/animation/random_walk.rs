use glam::DVec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::animation::role::EntityRole;
use crate::animation::sampler::{EndPolicy, PositionSampler, TimeBase};
use crate::errors::{CourtsideError, Result};
use crate::settings::RandomWalkSettings;

/// A finite, precomputed random walk for one entity.
///
/// Frame `F` is `positions[F mod N]`: once exhausted the sequence starts
/// over instead of freezing.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    role: EntityRole,
    positions: Vec<DVec3>,
}

impl FrameSequence {
    /// Generates the whole walk upfront from the given random source.
    ///
    /// Every frame draws an x sign and then a y sign, both uniform. The x
    /// sign is then overridden by the role's directional constraint, so
    /// all roles consume the random source identically. `z` is pinned to
    /// the role's depth plane. Frame 0 is already one step away from
    /// `origin`.
    pub fn generate<R: RngExt + ?Sized>(
        origin: DVec3,
        role: EntityRole,
        params: &RandomWalkSettings,
        rng: &mut R,
    ) -> Result<Self> {
        params.validate()?;
        if !origin.is_finite() {
            return Err(CourtsideError::config(format!(
                "random walk origin must be finite (got {origin})"
            )));
        }

        let depth = params.depth_for(role);
        let mut positions = Vec::with_capacity(params.frame_count);
        let mut prev = DVec3::new(origin.x, origin.y, depth);

        for _ in 0..params.frame_count {
            let dx = role.constrain_x(signed_step(rng, params.step));
            let dy = signed_step(rng, params.step);
            let next = DVec3::new(prev.x + dx, prev.y + dy, depth);
            positions.push(next);
            prev = next;
        }

        Ok(Self { role, positions })
    }

    /// Generates a walk from a dedicated seeded source.
    pub fn from_seed(
        origin: DVec3,
        role: EntityRole,
        params: &RandomWalkSettings,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(origin, role, params, &mut rng)
    }

    #[must_use]
    pub fn role(&self) -> EntityRole {
        self.role
    }

    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn frame(&self, frame_index: u64) -> DVec3 {
        let wrapped = frame_index % self.positions.len() as u64;
        self.positions[wrapped as usize]
    }
}

fn signed_step<R: RngExt + ?Sized>(rng: &mut R, step: f64) -> f64 {
    if rng.random_bool(0.5) { step } else { -step }
}

impl PositionSampler for FrameSequence {
    fn sample(&self, query: u64) -> DVec3 {
        self.frame(query)
    }

    fn time_base(&self) -> TimeBase {
        TimeBase::FrameIndex
    }

    fn end_policy(&self) -> EndPolicy {
        EndPolicy::Wrap
    }

    fn len(&self) -> usize {
        self.positions.len()
    }
}
