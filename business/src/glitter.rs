//! Mouse-trail glitter particle lifecycle.
//!
//! Pointer motion spawns short-lived particles near the cursor. The
//! population is bounded to the most recent [`MAX_PARTICLES`] entries and
//! each particle is retired by its own removal deadline [`PARTICLE_LIFETIME`]
//! seconds after insertion, independent of later events.
//!
//! Timing is driven externally: the UI feeds the current frame time (egui's
//! `Input::time`, seconds since app start) into [`GlitterField::on_pointer_move`]
//! and [`GlitterField::tick`]. Deadlines live in an explicit deadline → id
//! table rather than per-particle callbacks, so teardown is a single clear
//! and a deadline firing for an already-evicted id is a harmless no-op.

use egui::{Pos2, Vec2, pos2, vec2};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Maximum number of concurrently live particles. On overflow the oldest
/// entries are evicted immediately, never merely hidden.
pub const MAX_PARTICLES: usize = 10;

/// Total lifetime of a particle in seconds, counted from insertion.
pub const PARTICLE_LIFETIME: f64 = 2.0;

/// Upper bound (exclusive) for the per-particle animation stagger, seconds.
pub const MAX_SPAWN_DELAY: f32 = 1.0;

/// Uniform jitter applied to the spawn position, +/- per axis, in points.
pub const POSITION_JITTER: f32 = 25.0;

/// Visual offset of a sparkle relative to its glitter particle.
pub const SPARKLE_OFFSET: Vec2 = vec2(20.0, -10.0);

/// Additional animation stagger for sparkles, seconds.
pub const SPARKLE_EXTRA_DELAY: f32 = 0.5;

/// Identifier of a spawned particle, unique for the process lifetime.
pub type ParticleId = u64;

/// A single short-lived visual particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Jittered position relative to the tracking surface.
    pub pos: Pos2,
    /// Presentation stagger in seconds; delays the visual animation only,
    /// never the removal deadline.
    pub spawn_delay: f32,
    /// Frame time at insertion, seconds.
    pub spawned_at: f64,
}

/// Visual variant projected from the particle population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Glitter,
    Sparkle,
}

/// A renderable sprite projected from the current population.
///
/// Every particle yields a glitter sprite; every third snapshot entry
/// additionally yields an offset, further-delayed sparkle. This is a pure
/// projection over [`GlitterField::particles`], not stored state.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Pos2,
    pub delay: f32,
    pub spawned_at: f64,
}

/// Owner of the glitter particle population and its removal deadlines.
pub struct GlitterField {
    particles: Vec<Particle>,
    /// Removal deadline table: (due time in seconds, particle id).
    deadlines: Vec<(f64, ParticleId)>,
    next_id: ParticleId,
    rng: StdRng,
    running: bool,
}

impl Default for GlitterField {
    fn default() -> Self {
        Self::new()
    }
}

impl GlitterField {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic field for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            deadlines: Vec::new(),
            next_id: 0,
            rng,
            running: false,
        }
    }

    /// Begin accepting pointer input.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accepting pointer input and drop the population along with every
    /// pending removal deadline. Nothing can fire after this returns.
    pub fn stop(&mut self) {
        self.running = false;
        self.particles.clear();
        self.deadlines.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Spawn one particle from a pointer-move sample at frame time `now`.
    ///
    /// The position is jittered by up to [`POSITION_JITTER`] per axis and the
    /// particle gets a random animation stagger in `[0, MAX_SPAWN_DELAY)`.
    /// The population is truncated to its [`MAX_PARTICLES`] newest members.
    /// Ignored while stopped. Cannot fail.
    pub fn on_pointer_move(&mut self, pos: Pos2, now: f64) {
        if !self.running {
            return;
        }

        let id = self.next_id;
        self.next_id += 1;

        let particle = Particle {
            id,
            pos: pos2(
                pos.x + self.rng.gen_range(-POSITION_JITTER..=POSITION_JITTER),
                pos.y + self.rng.gen_range(-POSITION_JITTER..=POSITION_JITTER),
            ),
            spawn_delay: self.rng.gen_range(0.0..MAX_SPAWN_DELAY),
            spawned_at: now,
        };

        self.particles.push(particle);
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            // Evicted entries keep their deadline rows; firing one later is a no-op.
            self.particles.drain(..excess);
        }

        self.deadlines.push((now + PARTICLE_LIFETIME, id));
    }

    /// Fire every removal deadline that is due at frame time `now`.
    ///
    /// Removing an id that was already evicted by the population bound (or by
    /// [`GlitterField::stop`]) is an idempotent no-op.
    pub fn tick(&mut self, now: f64) {
        let mut i = 0;
        while i < self.deadlines.len() {
            if self.deadlines[i].0 <= now {
                let (_, id) = self.deadlines.swap_remove(i);
                self.particles.retain(|p| p.id != id);
            } else {
                i += 1;
            }
        }
    }

    /// Point-in-time snapshot of live particles, in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Project the population into renderable sprites.
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(self.particles.len() + self.particles.len() / 3 + 1);
        for (i, p) in self.particles.iter().enumerate() {
            sprites.push(Sprite {
                kind: SpriteKind::Glitter,
                pos: p.pos,
                delay: p.spawn_delay,
                spawned_at: p.spawned_at,
            });
            if i % 3 == 0 {
                sprites.push(Sprite {
                    kind: SpriteKind::Sparkle,
                    pos: p.pos + SPARKLE_OFFSET,
                    delay: p.spawn_delay + SPARKLE_EXTRA_DELAY,
                    spawned_at: p.spawned_at,
                });
            }
        }
        sprites
    }

    /// True when no particle is live and no deadline is pending.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.deadlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_field() -> GlitterField {
        let mut field = GlitterField::with_seed(42);
        field.start();
        field
    }

    #[test]
    fn test_population_bounded_to_ten_most_recent() {
        let mut field = started_field();
        for i in 0..25 {
            field.on_pointer_move(pos2(100.0, 100.0), f64::from(i) * 0.01);
        }

        let particles = field.particles();
        assert_eq!(particles.len(), MAX_PARTICLES);
        // The survivors are the 10 most recently inserted, in insertion order.
        let ids: Vec<ParticleId> = particles.iter().map(|p| p.id).collect();
        assert_eq!(ids, (15..25).collect::<Vec<ParticleId>>());
    }

    #[test]
    fn test_particle_removed_after_lifetime() {
        let mut field = started_field();
        field.on_pointer_move(pos2(0.0, 0.0), 1.0);
        assert_eq!(field.particles().len(), 1);

        // Just before the deadline the particle is still live.
        field.tick(1.0 + PARTICLE_LIFETIME - 0.001);
        assert_eq!(field.particles().len(), 1);

        field.tick(1.0 + PARTICLE_LIFETIME);
        assert!(field.particles().is_empty());
        assert!(field.is_idle());
    }

    #[test]
    fn test_removal_independent_of_spawn_delay() {
        let mut field = started_field();
        for _ in 0..5 {
            field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        }
        // Spawn delays range up to 1s but removal is always at 2s flat.
        field.tick(PARTICLE_LIFETIME);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_deadline_for_evicted_particle_is_noop() {
        let mut field = started_field();
        // Particle 0 is evicted by the population bound well before its deadline.
        for i in 0..=MAX_PARTICLES {
            field.on_pointer_move(pos2(0.0, 0.0), f64::from(i as u32) * 0.01);
        }
        assert!(field.particles().iter().all(|p| p.id != 0));

        // Firing particle 0's stale deadline must not disturb the rest.
        field.tick(PARTICLE_LIFETIME);
        assert!(field.particles().len() <= MAX_PARTICLES);
    }

    #[test]
    fn test_jitter_and_delay_within_bounds() {
        let mut field = started_field();
        for _ in 0..100 {
            field.on_pointer_move(pos2(200.0, 300.0), 0.0);
        }
        for p in field.particles() {
            assert!((p.pos.x - 200.0).abs() <= POSITION_JITTER);
            assert!((p.pos.y - 300.0).abs() <= POSITION_JITTER);
            assert!(p.spawn_delay >= 0.0 && p.spawn_delay < MAX_SPAWN_DELAY);
        }
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut field = started_field();
        for i in 0..10 {
            field.on_pointer_move(pos2(0.0, 0.0), f64::from(i) * 0.1);
        }
        let ids: Vec<ParticleId> = field.particles().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sparkle_projection_every_third_index() {
        let mut field = started_field();
        for i in 0..10 {
            field.on_pointer_move(pos2(50.0, 50.0), f64::from(i) * 0.01);
        }

        let sprites = field.sprites();
        let sparkles: Vec<&Sprite> = sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::Sparkle)
            .collect();
        // Snapshot indices {0, 3, 6, 9} carry the extra sparkle.
        assert_eq!(sparkles.len(), 4);
        assert_eq!(
            sprites
                .iter()
                .filter(|s| s.kind == SpriteKind::Glitter)
                .count(),
            10
        );

        let first_glitter = &sprites[0];
        let first_sparkle = &sprites[1];
        assert_eq!(first_sparkle.pos, first_glitter.pos + SPARKLE_OFFSET);
        assert!((first_sparkle.delay - first_glitter.delay - SPARKLE_EXTRA_DELAY).abs() < 1e-6);
    }

    #[test]
    fn test_stopped_field_ignores_pointer_input() {
        let mut field = GlitterField::with_seed(7);
        field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        assert!(field.particles().is_empty());

        field.start();
        field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        assert_eq!(field.particles().len(), 1);
    }

    #[test]
    fn test_stop_clears_population_and_deadlines() {
        let mut field = started_field();
        for _ in 0..5 {
            field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        }
        field.stop();
        assert!(field.is_idle());

        // Ticking past every deadline after stop must not panic or revive anything.
        field.tick(100.0);
        assert!(field.is_idle());

        // Restarting accepts input again with fresh ids.
        field.start();
        field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        assert_eq!(field.particles().len(), 1);
        assert!(field.particles()[0].id >= 5);
    }

    #[test]
    fn test_removal_interleaved_with_insertions() {
        let mut field = started_field();
        field.on_pointer_move(pos2(0.0, 0.0), 0.0);
        field.on_pointer_move(pos2(0.0, 0.0), 1.5);

        // Only the first particle's deadline is due.
        field.tick(2.0);
        assert_eq!(field.particles().len(), 1);
        assert_eq!(field.particles()[0].id, 1);

        field.tick(3.5);
        assert!(field.is_idle());
    }
}
