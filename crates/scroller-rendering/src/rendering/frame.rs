use crate::*;

/// straight (non premultiplied) rgba color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color
{
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self
    {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_array(self) -> [u8; 4]
    {
        [self.r, self.g, self.b, self.a]
    }
}

/// a single thing to draw, positions are in surface pixels
/// with the origin on the top left corner
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand
{
    /// draws `text` with its line box top left corner at `position`
    Text
    {
        text: String,
        font: FontId,
        position: IVec2,
        color: Color,
    },
    /// draws the image at its natural size with its top left corner at `position`
    Image
    {
        image: ImageId,
        position: IVec2,
    },
}

/// everything drawn during one frame, in painting order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame
{
    pub commands: Vec<DrawCommand>,
}

impl Frame
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn push_text(&mut self, text: impl Into<String>, font: FontId, position: IVec2, color: Color)
    {
        self.commands.push(DrawCommand::Text { text: text.into(), font, position, color })
    }

    pub fn push_image(&mut self, image: ImageId, position: IVec2)
    {
        self.commands.push(DrawCommand::Image { image, position })
    }

    /// positions of every image command in painting order
    pub fn image_positions(&self) -> impl Iterator<Item = IVec2> + '_
    {
        self.commands.iter().filter_map(|command| match command
        {
            DrawCommand::Image { position, .. } => Some(*position),
            DrawCommand::Text { .. } => None,
        })
    }

    pub fn len(&self) -> usize
    {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn commands_keep_painting_order()
    {
        let mut frame = Frame::new();
        frame.push_image(ImageId(0), IVec2::new(10, 0));
        frame.push_text("hi", FontId(0), IVec2::ZERO, Color::RED);
        frame.push_image(ImageId(0), IVec2::new(20, 0));

        assert_eq!(frame.len(), 3);
        assert_eq!
        (
            frame.image_positions().collect::<Vec<_>>(),
            vec![IVec2::new(10, 0), IVec2::new(20, 0)]
        );
        assert!(matches!(frame.commands[1], DrawCommand::Text { color: Color::RED, .. }));
    }
}
