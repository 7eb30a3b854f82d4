// World: exclusive owner of the NPC set
//
// NPCs are created once at start-up and live until the world is dropped.
// A frame is two passes: every NPC moves, then every NPC is drawn.

use crate::config::SimConfig;
use crate::npc::Npc;
use crate::render::{self, Renderable};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct World {
    npcs: Vec<Npc>,
}

impl World {
    /// Spawn `config.npc_count` NPCs drawing from `rng`
    pub fn new<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let npcs: Vec<Npc> = (0..config.npc_count)
            .map(|_| Npc::new(rng, config))
            .collect();

        for (i, npc) in npcs.iter().enumerate() {
            log::debug!(
                "npc {}: pos=({}, {}), vel=({:.2}, {:.2})",
                i,
                npc.position.x,
                npc.position.y,
                npc.velocity.x,
                npc.velocity.y
            );
        }

        World { npcs }
    }

    /// Same seed and config always give the same starting set
    pub fn with_seed(config: &SimConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Move every NPC by `delta_time` seconds, in collection order
    pub fn update(&mut self, delta_time: f32) {
        for npc in self.npcs.iter_mut() {
            npc.update(delta_time);
        }
    }
}

impl Renderable for World {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render::render_all(canvas, &self.npcs)
    }
}
