use std::sync::Arc;
use std::time::Instant;

use input::winit::
{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{WindowAttributes, WindowId},
};

use crate::*;

/// everything the event loop needs to know before the window exists
#[derive(Debug, Clone)]
pub struct AppSettings
{
    /// keeps track of how to create the application window
    pub w_attributes: WindowAttributes,
    pub ticks_per_second: u32,
    /// closes the application when pressed
    pub exit_key: Option<input::KeyCode>,
}

impl Default for AppSettings
{
    fn default() -> Self
    {
        Self
        {
            w_attributes: Window::default_attributes(),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            exit_key: None,
        }
    }
}

/// drives a [Game] from winit events: ticks it, composites its frames and presents them
pub struct AppHandler<G: Game>
{
    game: G,
    assets: Assets,
    settings: AppSettings,

    input: input::Input,
    gameloop: GameLoop,
    canvas: Canvas,
    /// created on the first resume
    renderer: Option<Renderer>,
}

impl<G: Game> AppHandler<G>
{
    pub fn new(game: G, assets: Assets, settings: AppSettings) -> Self
    {
        Self
        {
            game,
            assets,
            gameloop: GameLoop::new(settings.ticks_per_second),
            settings,
            input: input::Input::new(),
            canvas: Canvas::new(0, 0),
            renderer: None,
        }
    }

    pub fn game(&self) -> &G
    {
        &self.game
    }

    /// runs the ticks that elapsed since the last redraw
    fn tick(&mut self, now: Instant)
    {
        for _ in 0..self.gameloop.ticks(now)
        {
            self.game.advance(&self.input);
            self.input.end_tick();
        }
    }

    fn exit_requested(&self) -> bool
    {
        self.settings.exit_key.is_some_and(|key| self.input.get_key_down(key))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop)
    {
        if self.exit_requested()
        {
            log::info!("exit key pressed");
            event_loop.exit();
            return
        }

        self.tick(Instant::now());

        let Some(renderer) = &mut self.renderer
        else
        {
            return
        };

        let outside = logical_size(renderer.window.inner_size(), renderer.window.scale_factor());
        self.canvas.resize(self.game.layout(outside));
        self.canvas.clear(Color::BLACK);
        self.canvas.draw(&self.game.frame(), &self.assets);

        match renderer.present(&self.canvas)
        {
            Ok(()) => (),
            Err(SurfaceError::Lost | SurfaceError::Outdated) =>
            {
                log::warn!("surface lost, reconfiguring");
                renderer.reconfigure()
            }
            Err(SurfaceError::OutOfMemory) =>
            {
                log::error!("out of memory while presenting, exiting");
                event_loop.exit()
            }
            Err(err) => log::warn!("skipping frame: {err}"),
        }
    }
}

/// window size in device independent pixels, the canvas is stretched over the
/// physical surface when presented
fn logical_size(size: PhysicalSize<u32>, scale_factor: f64) -> UVec2
{
    let size = size.to_logical::<u32>(scale_factor);
    UVec2::new(size.width, size.height)
}

impl<G: Game> ApplicationHandler for AppHandler<G>
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop)
    {
        if self.renderer.is_some()
        {
            return
        }

        let window = match event_loop.create_window(self.settings.w_attributes.clone())
        {
            Ok(window) => Arc::new(window),
            Err(err) =>
            {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return
            }
        };

        match Renderer::new(window)
        {
            Ok(renderer) =>
            {
                let size = renderer.surface_size();
                log::info!("window created ({}x{})", size.x, size.y);
                self.renderer = Some(renderer)
            }
            Err(err) =>
            {
                log::error!("failed to initialize the renderer: {err}");
                event_loop.exit()
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent)
    {
        self.input.check(&event);

        match event
        {
            WindowEvent::CloseRequested =>
            {
                log::info!("window close requested");
                event_loop.exit()
            }
            WindowEvent::Resized(size) => if let Some(renderer) = &mut self.renderer
            {
                renderer.resize(size.width, size.height)
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop)
    {
        if let Some(renderer) = &self.renderer
        {
            renderer.window.request_redraw()
        }
    }
}
