//! the scroll demo itself: a menu line of text and a tiled background
//! that scrolls to the left once the menu is confirmed

use std::num::NonZeroU32;

use app::{Color, FontId, Frame, Game, ImageId};
use input::KeyCode;
use math::IVec2;

/// pixels the background moves left every tick
pub const STEP: i32 = 4;

/// copies of the background drawn side by side
pub const TILE_COUNT: i32 = 3;

/// vertical position of every background copy, high enough that the band
/// in the middle of the image covers the screen
pub const BACKGROUND_Y: i32 = -1000;

/// top left corner of the menu text
pub const TEXT_POSITION: IVec2 = IVec2::new(350, 450);

pub const TEXT_COLOR: Color = Color::RED;

pub const DEFAULT_MESSAGE: &str = "Press SPACE to start scrolling";

/// widest background the tile positions can be computed for
pub const MAX_BACKGROUND_WIDTH: i32 = i32::MAX / 4;

/// key that leaves the menu
pub const CONFIRM_KEY: KeyCode = KeyCode::Space;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage
{
    /// the text screen, waiting for confirmation
    #[default]
    Menu,
    Scrolling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollDemo
{
    stage: Stage,
    /// always inside `[0, 2 * background_width)` once a tick ran
    scroll_offset: i32,
    background: ImageId,
    background_width: i32,
    font: FontId,
    text: String,
}

impl ScrollDemo
{
    /// starts on the menu with the background not scrolled yet
    pub fn new(background: ImageId, background_width: NonZeroU32, font: FontId, text: impl Into<String>) -> Self
    {
        let width = background_width.get();

        // keeps every tile position inside i32
        let clamped = i32::try_from(width).unwrap_or(i32::MAX).min(MAX_BACKGROUND_WIDTH);

        if i64::from(clamped) != i64::from(width)
        {
            log::warn!("background is {width} pixels wide, scrolling it as if it were {clamped}");
        }

        Self
        {
            stage: Stage::Menu,
            scroll_offset: 0,
            background,
            background_width: clamped,
            font,
            text: text.into(),
        }
    }

    pub fn stage(&self) -> Stage
    {
        self.stage
    }

    pub fn scroll_offset(&self) -> i32
    {
        self.scroll_offset
    }

    pub fn background_width(&self) -> i32
    {
        self.background_width
    }

    /// the offset wraps after scrolling two tiles,
    /// at that point the three copies line up the same way again
    pub fn period(&self) -> i32
    {
        self.background_width * 2
    }

    /// advances the demo by one tick, `confirm` is true only on the tick
    /// the confirm key went down
    pub fn update(&mut self, confirm: bool)
    {
        match self.stage
        {
            Stage::Menu => if confirm
            {
                log::info!("menu confirmed, scrolling");
                self.stage = Stage::Scrolling
            }
            Stage::Scrolling =>
            {
                self.scroll_offset = math::wrap(self.scroll_offset - STEP, self.period())
            }
        }
    }

    /// what the current state looks like
    pub fn render(&self) -> Frame
    {
        let mut frame = Frame::new();

        match self.stage
        {
            Stage::Menu => frame.push_text(self.text.as_str(), self.font, TEXT_POSITION, TEXT_COLOR),

            Stage::Scrolling => for i in 0..TILE_COUNT
            {
                let x = i * self.background_width + self.scroll_offset;
                frame.push_image(self.background, IVec2::new(x, BACKGROUND_Y))
            }
        }

        frame
    }
}

impl Game for ScrollDemo
{
    fn advance(&mut self, input: &input::Input)
    {
        self.update(input.get_key_down(CONFIRM_KEY))
    }

    fn frame(&self) -> Frame
    {
        self.render()
    }
}
