//! scroller is a tiny demo: a menu line of text that, once confirmed,
//! gives way to an endlessly scrolling background

pub use app;
pub use input;
pub use rendering;
pub use math;

pub mod demo;
pub mod config;

pub use demo::*;

use app::*;
use input::winit::*;

pub type WindowTheme = window::Theme;

#[must_use]
pub struct AppBuilder
{
    settings: AppSettings,
}

impl Default for AppBuilder
{
    fn default() -> Self
    {
        Self { settings: AppSettings::default() }
    }
}

/// returns a new [AppBuilder] that stores all your preferred options
pub fn new() -> AppBuilder
{
    AppBuilder::default()
}

impl AppBuilder
{
    pub fn set_title(mut self, title: impl Into<String>) -> Self
    {
        self.settings.w_attributes = self.settings.w_attributes.with_title(title);
        self
    }

    pub fn set_fullscreen(mut self) -> Self
    {
        self.settings.w_attributes = self.settings.w_attributes.with_fullscreen(Some(window::Fullscreen::Borderless(None)));
        self
    }

    pub fn set_resizable(mut self, value: bool) -> Self
    {
        self.settings.w_attributes = self.settings.w_attributes.with_resizable(value);
        self
    }

    /// size of the window in logical pixels, ignored when fullscreen
    pub fn set_inner_size(mut self, width: u32, height: u32) -> Self
    {
        self.settings.w_attributes = self.settings.w_attributes.with_inner_size(dpi::LogicalSize::new(width, height));
        self
    }

    pub fn set_theme(mut self, theme: WindowTheme) -> Self
    {
        self.settings.w_attributes = self.settings.w_attributes.with_theme(Some(theme));
        self
    }

    /// how many times per second the game is advanced
    pub fn set_ticks_per_second(mut self, ticks: u32) -> Self
    {
        self.settings.ticks_per_second = ticks;
        self
    }

    /// closes the application when `key` is pressed
    pub fn set_exit_key(mut self, key: input::KeyCode) -> Self
    {
        self.settings.exit_key = Some(key);
        self
    }

    pub fn settings(&self) -> &AppSettings
    {
        &self.settings
    }

    /// run the event loop until the window is closed
    ///
    /// # Errors
    ///
    /// fails if the event loop can't be created or stops abnormally
    pub fn run<G: Game>(self, game: G, assets: Assets) -> Result<(), error::EventLoopError>
    {
        let eventloop = event_loop::EventLoop::new()?;
        eventloop.run_app(&mut AppHandler::new(game, assets, self.settings))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn builder_collects_window_options()
    {
        let builder = new()
            .set_title("Scroller Example")
            .set_fullscreen()
            .set_resizable(false)
            .set_ticks_per_second(30)
            .set_exit_key(input::KeyCode::Escape);

        let settings = builder.settings();

        assert_eq!(settings.w_attributes.title, "Scroller Example");
        assert!(matches!(settings.w_attributes.fullscreen, Some(window::Fullscreen::Borderless(None))));
        assert!(!settings.w_attributes.resizable);
        assert_eq!(settings.ticks_per_second, 30);
        assert_eq!(settings.exit_key, Some(input::KeyCode::Escape));
    }

    #[test]
    fn defaults_run_windowed_at_sixty_ticks()
    {
        let settings = new().settings().clone();

        assert!(settings.w_attributes.fullscreen.is_none());
        assert_eq!(settings.ticks_per_second, 60);
        assert!(settings.exit_key.is_none());
    }
}
