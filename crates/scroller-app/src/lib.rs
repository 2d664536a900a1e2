pub mod application;
pub use application::*;

pub mod gameloop;
pub use gameloop::*;

pub mod logging;

pub use rendering::*;

/// what the event loop drives every frame.
///
/// the handler calls [Game::advance] once per elapsed tick, then asks for the
/// surface size with [Game::layout] and paints whatever [Game::frame] returns
pub trait Game
{
    /// advance the state by one tick
    fn advance(&mut self, input: &input::Input);

    /// describes what has to be drawn for the current state,
    /// it must not change the state
    fn frame(&self) -> Frame;

    /// negotiates the size of the surface the frame is drawn on,
    /// by default the window size is used unchanged
    fn layout(&self, outside: UVec2) -> UVec2
    {
        outside
    }
}
