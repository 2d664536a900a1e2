use std::num::NonZeroU32;

use anyhow::Context;
use clap::Parser;

use scroller::config::Args;
use scroller::rendering::Assets;
use scroller::ScrollDemo;

fn main() -> anyhow::Result<()>
{
    let args = Args::parse();

    scroller::app::logging::init(args.log_level)?;

    let mut assets = Assets::new();

    let background = assets.load_image(&args.background)
        .context("unable to load background image")?;

    let font = assets.load_font(&args.font, args.font_size)
        .context("unable to load font")?;

    let width = assets.image_size(background)
        .and_then(|size| NonZeroU32::new(size.x))
        .context("background image has no width")?;

    let demo = ScrollDemo::new(background, width, font, args.message.as_str());

    args.builder()
        .run(demo, assets)
        .context("failed to run game")
}
