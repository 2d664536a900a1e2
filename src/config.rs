//! command line options of the scroller binary

use std::path::PathBuf;

use clap::Parser;

pub const TITLE: &str = "Scroller Example";

/// window size used with `--windowed`
pub const WINDOWED_SIZE: (u32, u32) = (1000, 1000);

/// scrolls a background image after a menu is confirmed with space
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args
{
    /// image tiled as the scrolling background
    #[arg(long, default_value = "background.png")]
    pub background: PathBuf,

    /// font used for the menu text
    #[arg(long, default_value = "Square-Black.ttf")]
    pub font: PathBuf,

    /// font size in pixels
    #[arg(long, default_value_t = 55.)]
    pub font_size: f32,

    /// text shown on the menu
    #[arg(long, default_value = crate::DEFAULT_MESSAGE)]
    pub message: String,

    /// run in a resizable window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// update ticks per second
    #[arg(long, default_value_t = app::DEFAULT_TICKS_PER_SECOND)]
    pub tps: u32,

    /// minimum level of the log records printed
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    pub log_level: log::LevelFilter,
}

impl Args
{
    /// the window configuration these options ask for
    pub fn builder(&self) -> crate::AppBuilder
    {
        let builder = crate::new()
            .set_title(TITLE)
            .set_ticks_per_second(self.tps)
            .set_exit_key(input::KeyCode::Escape);

        match self.windowed
        {
            true => builder
                .set_inner_size(WINDOWED_SIZE.0, WINDOWED_SIZE.1)
                .set_resizable(true),
            false => builder.set_fullscreen()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn defaults_match_the_bundled_assets()
    {
        let args = Args::try_parse_from(["scroller"]).unwrap();

        assert_eq!(args.background, PathBuf::from("background.png"));
        assert_eq!(args.font, PathBuf::from("Square-Black.ttf"));
        assert_eq!(args.font_size, 55.);
        assert_eq!(args.message, crate::DEFAULT_MESSAGE);
        assert_eq!(args.tps, 60);
        assert_eq!(args.log_level, log::LevelFilter::Info);
        assert!(!args.windowed);
    }

    #[test]
    fn fullscreen_unless_windowed()
    {
        let args = Args::try_parse_from(["scroller"]).unwrap();
        assert!(args.builder().settings().w_attributes.fullscreen.is_some());

        let args = Args::try_parse_from(["scroller", "--windowed", "--tps", "30", "--log-level", "debug"]).unwrap();
        let builder = args.builder();

        assert!(builder.settings().w_attributes.fullscreen.is_none());
        assert!(builder.settings().w_attributes.resizable);
        assert_eq!(builder.settings().ticks_per_second, 30);
        assert_eq!(args.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn asset_paths_can_be_overridden()
    {
        let args = Args::try_parse_from(["scroller", "--background", "assets/sky.png", "--font-size", "32"]).unwrap();

        assert_eq!(args.background, PathBuf::from("assets/sky.png"));
        assert_eq!(args.font_size, 32.);
    }
}
