use crate::config::SimConfig;
use crate::render::{Bounded, Renderable};
use glam::Vec2;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A square marker drifting around the window at constant speed.
///
/// Only the sign of each velocity component ever changes after creation,
/// so `velocity.length()` stays equal to the configured speed for the
/// NPC's whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Npc {
    pub position: Vec2,
    pub velocity: Vec2,
    size: u32,
    /// Reflection thresholds: `(WIDTH - size, HEIGHT - size)`
    limit: Vec2,
    color: Color,
}

impl Npc {
    /// Spawn an NPC at a random integer point with a random heading.
    ///
    /// The spawn range is `[0, WIDTH] x [0, HEIGHT]` inclusive, so an NPC
    /// may start partly outside the drawable area.
    pub fn new<R: Rng>(rng: &mut R, config: &SimConfig) -> Self {
        let position = Vec2::new(
            rng.random_range(0..=config.width) as f32,
            rng.random_range(0..=config.height) as f32,
        );
        let velocity = random_direction(rng) * config.npc_speed;

        Self::with_state(position, velocity, config)
    }

    /// Build an NPC with an explicit position and velocity
    pub fn with_state(position: Vec2, velocity: Vec2, config: &SimConfig) -> Self {
        Npc {
            position,
            velocity,
            size: config.npc_size,
            limit: Vec2::new(config.max_x(), config.max_y()),
            color: config.npc_color(),
        }
    }

    /// Advance by `delta_time` seconds, then bounce off the window edges.
    ///
    /// Position is never clamped: the flip is decided on this frame's new
    /// position and only affects the next frame's translation.
    pub fn update(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;

        if self.position.x <= 0.0 || self.position.x >= self.limit.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0.0 || self.position.y >= self.limit.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Uniform samples on `[-1, 1]` per axis, normalized.
fn random_direction<R: Rng>(rng: &mut R) -> Vec2 {
    normalized_sample(|| {
        Vec2::new(
            rng.random_range(-1.0f32..=1.0),
            rng.random_range(-1.0f32..=1.0),
        )
    })
}

/// Draw from `sample` until a draw can be normalized.
///
/// A draw too close to zero has no direction; it is thrown away.
fn normalized_sample(mut sample: impl FnMut() -> Vec2) -> Vec2 {
    loop {
        if let Some(direction) = sample().try_normalize() {
            return direction;
        }
    }
}

impl Bounded for Npc {
    fn get_bounds(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            self.size,
            self.size,
        )
    }
}

impl Renderable for Npc {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.color);
        canvas.fill_rect(self.get_bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn npc_at(x: f32, y: f32, vx: f32, vy: f32) -> Npc {
        Npc::with_state(Vec2::new(x, y), Vec2::new(vx, vy), &SimConfig::default())
    }

    #[test]
    fn test_spawn_speed_matches_config() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..100 {
            let npc = Npc::new(&mut rng, &config);
            assert_relative_eq!(npc.velocity.length(), config.npc_speed, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_spawn_position_is_integer_and_in_range() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..200 {
            let npc = Npc::new(&mut rng, &config);
            let Vec2 { x, y } = npc.position;

            assert_eq!(x, x.trunc());
            assert_eq!(y, y.trunc());
            assert!((0.0..=config.width as f32).contains(&x));
            assert!((0.0..=config.height as f32).contains(&y));
        }
    }

    #[test]
    fn test_zero_sample_is_redrawn() {
        let draws = [Vec2::ZERO, Vec2::new(0.0, -0.0), Vec2::new(3.0, 4.0)];
        let mut calls = 0;

        let direction = normalized_sample(|| {
            let draw = draws[calls];
            calls += 1;
            draw
        });

        assert_eq!(calls, 3);
        assert_relative_eq!(direction.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(direction.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_first_usable_sample_is_kept() {
        let mut calls = 0;

        let direction = normalized_sample(|| {
            calls += 1;
            Vec2::new(-2.0, 0.0)
        });

        assert_eq!(calls, 1);
        assert_eq!(direction, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_random_direction_is_unit_length() {
        let mut rng = Pcg32::seed_from_u64(11);

        for _ in 0..500 {
            let direction = random_direction(&mut rng);
            assert!(direction.is_finite());
            assert_relative_eq!(direction.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_update_zero_dt_keeps_position() {
        let mut npc = npc_at(123.0, 456.0, 60.0, -80.0);
        npc.update(0.0);

        assert_eq!(npc.position, Vec2::new(123.0, 456.0));
        assert_eq!(npc.velocity, Vec2::new(60.0, -80.0));
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut npc = npc_at(100.0, 100.0, 60.0, -80.0);
        npc.update(0.5);

        assert_relative_eq!(npc.position.x, 130.0);
        assert_relative_eq!(npc.position.y, 60.0);
    }

    #[test]
    fn test_bounce_right_edge() {
        let mut npc = npc_at(790.0, 300.0, 5.0, 3.0);
        npc.update(0.01);

        assert_eq!(npc.velocity.x, -5.0);
        assert_eq!(npc.velocity.y, 3.0);
    }

    #[test]
    fn test_bounce_left_edge() {
        let mut npc = npc_at(0.0, 300.0, -5.0, 3.0);
        npc.update(0.01);

        assert_eq!(npc.velocity.x, 5.0);
        assert_eq!(npc.velocity.y, 3.0);
    }

    #[test]
    fn test_bounce_top_and_bottom() {
        let mut top = npc_at(400.0, 0.0, 3.0, -5.0);
        top.update(0.01);
        assert_eq!(top.velocity, Vec2::new(3.0, 5.0));

        let mut bottom = npc_at(400.0, 590.0, 3.0, 5.0);
        bottom.update(0.01);
        assert_eq!(bottom.velocity, Vec2::new(3.0, -5.0));
    }

    #[test]
    fn test_no_clamp_on_overshoot() {
        // Position is left where the step put it; only the heading flips
        let mut npc = npc_at(789.5, 300.0, 100.0, 0.0);
        npc.update(0.1);

        assert_relative_eq!(npc.position.x, 799.5);
        assert_eq!(npc.velocity.x, -100.0);
    }

    #[test]
    fn test_speed_invariant_across_bounces() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut npc = Npc::new(&mut rng, &config);

        for _ in 0..1_000 {
            let before = npc.velocity.length();
            npc.update(1.0 / 30.0);
            assert_eq!(npc.velocity.length(), before);
        }
    }

    #[test]
    fn test_bounds_truncate_position() {
        let npc = npc_at(12.9, 7.2, 1.0, 0.0);

        assert_eq!(npc.get_bounds(), Rect::new(12, 7, 10, 10));
    }
}
