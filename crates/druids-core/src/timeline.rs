//! Effect timeline: transient, tick-bounded battle animations.
//!
//! Every resolved action emits entries here:
//! - [`DamageMarker`]: floating damage or heal number
//! - [`ParticleBurst`]: a handful of independently simulated particles
//! - a shake pulse: a scalar that doubles as its own remaining tick count
//!
//! # Lifecycle
//!
//! Each entry starts with a fixed lifetime and loses one tick per call to
//! [`Timeline::tick`]. Entries are removed the tick their lifetime reaches
//! zero and never come back. Ticking is pure: randomness is only drawn when a
//! burst is spawned and when a caller asks for a shake offset.
//!
//! Shake only jitters draw positions. Nothing in here touches combatants.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;

/// Uniform integer offset in `[-range, range]`, as a coordinate.
#[allow(clippy::cast_precision_loss)]
fn roll_axis<R: Rng + ?Sized>(rng: &mut R, range: i32) -> f32 {
    rng.gen_range(-range..=range) as f32
}

/// What a floating number represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Regular hit.
    Damage,
    /// Special attack or location burst; drawn larger and flashing.
    Special,
    /// Health restored.
    Heal,
}

/// A floating number anchored near the combatant it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageMarker {
    /// Current screen position.
    pub position: Vec2,
    /// Magnitude shown.
    pub amount: u32,
    /// Damage, special or heal.
    pub kind: MarkerKind,
    /// Ticks left before removal.
    pub remaining: u32,
}

impl DamageMarker {
    /// Creates a marker.
    #[must_use]
    pub fn new(position: Vec2, amount: u32, kind: MarkerKind, lifetime: u32) -> Self {
        Self {
            position,
            amount,
            kind,
            remaining: lifetime,
        }
    }
}

/// Particle variant of a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurstKind {
    /// Blade hit.
    Slash,
    /// Wand hit.
    Magic,
    /// Special attack.
    Special,
}

impl BurstKind {
    /// Number of particles spawned.
    #[must_use]
    pub const fn particle_count(self) -> usize {
        match self {
            Self::Slash => 8,
            Self::Magic => 12,
            Self::Special => 15,
        }
    }

    /// Maximum spawn offset from the origin on each axis.
    #[must_use]
    pub const fn spawn_spread(self) -> i32 {
        match self {
            Self::Slash => 20,
            Self::Magic => 30,
            Self::Special => 40,
        }
    }

    /// Maximum initial speed on each axis.
    #[must_use]
    pub const fn velocity_spread(self) -> i32 {
        match self {
            Self::Slash => 3,
            Self::Magic => 4,
            Self::Special => 5,
        }
    }

    /// Burst used for a basic attack with `weapon`.
    #[must_use]
    pub fn for_weapon(weapon: &str) -> Self {
        if weapon.contains("Wand") {
            Self::Magic
        } else {
            Self::Slash
        }
    }
}

/// One simulated particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Screen position.
    pub position: Vec2,
    /// Per-tick displacement.
    pub velocity: Vec2,
}

/// A short-lived cluster of particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    /// Spawn point.
    pub origin: Vec2,
    /// Variant.
    pub kind: BurstKind,
    /// The particles, fixed at spawn.
    pub particles: Vec<Particle>,
    /// Ticks left before removal.
    pub remaining: u32,
}

impl ParticleBurst {
    /// Spawns a burst around `origin`.
    pub fn spawn<R: Rng + ?Sized>(
        origin: Vec2,
        kind: BurstKind,
        lifetime: u32,
        rng: &mut R,
    ) -> Self {
        let spread = kind.spawn_spread();
        let speed = kind.velocity_spread();
        let particles = (0..kind.particle_count())
            .map(|_| Particle {
                position: origin + Vec2::new(roll_axis(rng, spread), roll_axis(rng, spread)),
                velocity: Vec2::new(roll_axis(rng, speed), roll_axis(rng, speed)),
            })
            .collect();
        Self {
            origin,
            kind,
            particles,
            remaining: lifetime,
        }
    }

    fn step(&mut self, gravity: f32) {
        self.remaining = self.remaining.saturating_sub(1);
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            particle.velocity.y += gravity;
        }
    }
}

/// A single emitted effect, as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineEntry {
    /// Floating number.
    Marker(DamageMarker),
    /// Particle burst.
    Burst(ParticleBurst),
    /// Shake pulse with the given magnitude.
    Shake(u32),
}

/// All live effects of one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    markers: Vec<DamageMarker>,
    bursts: Vec<ParticleBurst>,
    shake: u32,
    marker_float_speed: f32,
    particle_gravity: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(&TimelineConfig::default())
    }
}

impl Timeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            markers: Vec::new(),
            bursts: Vec::new(),
            shake: 0,
            marker_float_speed: config.marker_float_speed,
            particle_gravity: config.particle_gravity,
        }
    }

    /// Adds an entry. A shake pulse replaces the current magnitude.
    pub fn push(&mut self, entry: TimelineEntry) {
        match entry {
            TimelineEntry::Marker(marker) => {
                if marker.remaining > 0 {
                    self.markers.push(marker);
                }
            }
            TimelineEntry::Burst(burst) => {
                if burst.remaining > 0 {
                    self.bursts.push(burst);
                }
            }
            TimelineEntry::Shake(magnitude) => self.shake = magnitude,
        }
    }

    /// Advances every entry by `dt` ticks and drops expired ones.
    pub fn tick(&mut self, dt: u32) {
        for _ in 0..dt {
            if self.is_empty() {
                return;
            }
            let float_speed = self.marker_float_speed;
            for marker in &mut self.markers {
                marker.position.y -= float_speed;
                marker.remaining = marker.remaining.saturating_sub(1);
            }
            self.markers.retain(|marker| marker.remaining > 0);

            let gravity = self.particle_gravity;
            for burst in &mut self.bursts {
                burst.step(gravity);
            }
            self.bursts.retain(|burst| burst.remaining > 0);

            self.shake = self.shake.saturating_sub(1);
        }
    }

    /// Draw-only jitter for the current shake, in `[-shake, shake]` per axis.
    pub fn shake_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        if self.shake == 0 {
            return Vec2::ZERO;
        }
        let range = i32::try_from(self.shake).unwrap_or(i32::MAX);
        Vec2::new(roll_axis(rng, range), roll_axis(rng, range))
    }

    /// Live damage and heal markers.
    #[must_use]
    pub fn markers(&self) -> &[DamageMarker] {
        &self.markers
    }

    /// Live particle bursts.
    #[must_use]
    pub fn bursts(&self) -> &[ParticleBurst] {
        &self.bursts
    }

    /// Current shake magnitude.
    #[must_use]
    pub fn shake(&self) -> u32 {
        self.shake
    }

    /// Returns true when nothing is animating.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.bursts.is_empty() && self.shake == 0
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.bursts.clear();
        self.shake = 0;
    }
}
