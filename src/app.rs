// Simulation context and main loop
//
// SimContext owns every resource the loop touches: the SDL handles, the
// frame clock and the world. It is built once, consumed by run(), and
// dropping it releases the window and input subsystem.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::render::Renderable;
use crate::timing::FrameClock;
use crate::world::World;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Loop state machine. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Map one window event to a state transition.
///
/// Only a close request matters; everything else is ignored.
pub fn handle_event(event: &Event) -> Option<LoopState> {
    match event {
        Event::Quit { .. } => Some(LoopState::Stopped),
        _ => None,
    }
}

pub struct SimContext {
    config: SimConfig,
    world: World,
    clock: FrameClock,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _sdl_context: sdl2::Sdl,
}

impl SimContext {
    /// Open the window and spawn the world from `seed`
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;

        let sdl_context = sdl2::init().map_err(SimError::Init)?;
        let video_subsystem = sdl_context.video().map_err(SimError::Init)?;

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| SimError::Init(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| SimError::Init(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(SimError::Init)?;

        log::info!("Window open: {}x{} \"{}\"", config.width, config.height, config.title);

        let world = World::with_seed(&config, seed);
        let clock = FrameClock::new(config.frame_budget());

        Ok(SimContext {
            config,
            world,
            clock,
            canvas,
            event_pump,
            _sdl_context: sdl_context,
        })
    }

    /// Run frames until the window is closed.
    ///
    /// The state is only checked at the top of each iteration, so the
    /// frame that sees the quit event is still drawn and presented.
    pub fn run(mut self) -> Result<(), SimError> {
        let mut state = LoopState::Running;

        while state == LoopState::Running {
            let delta_time = self.clock.tick();

            self.canvas.set_draw_color(self.config.background_color());
            self.canvas.clear();

            for event in self.event_pump.poll_iter() {
                if let Some(next) = handle_event(&event) {
                    log::debug!("Quit requested");
                    state = next;
                }
            }

            self.world.update(delta_time);
            self.world.render(&mut self.canvas).map_err(SimError::Render)?;

            self.canvas.present();
        }

        log::info!("Stopped after {} frames", self.clock.frames());

        Ok(())
    }
}
