/// Drawing seam for everything that shows up on the canvas
///
/// # Architecture
///
/// - `Bounded` trait: the integer rectangle an entity covers on screen
/// - `Renderable` trait: how an entity draws itself
/// - `render_all()`: draw phase of the frame, run after every entity has moved
///
/// Splitting bounds from drawing keeps the footprint math testable without
/// an SDL context; only `render` needs a live canvas.
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Entities that occupy an axis-aligned box on screen.
pub trait Bounded {
    /// Returns the on-screen rectangle, in window pixels.
    fn get_bounds(&self) -> Rect;
}

/// Entities that can draw themselves onto the frame buffer.
pub trait Renderable {
    /// Render the entity to the canvas at its current position.
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String>;
}

/// Draw every item in collection order.
///
/// Stops at the first failing draw call and hands its error back.
pub fn render_all<T: Renderable>(canvas: &mut Canvas<Window>, items: &[T]) -> Result<(), String> {
    for item in items {
        item.render(canvas)?;
    }
    Ok(())
}
