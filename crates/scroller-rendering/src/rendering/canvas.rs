use crate::*;

/// cpu side surface a [Frame] is composited on before being presented
pub struct Canvas
{
    pixels: image::RgbaImage,
}

impl Canvas
{
    pub fn new(width: u32, height: u32) -> Self
    {
        Self { pixels: image::RgbaImage::new(width, height) }
    }

    pub fn size(&self) -> UVec2
    {
        UVec2::new(self.pixels.width(), self.pixels.height())
    }

    pub fn is_empty(&self) -> bool
    {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }

    /// changes the size of the canvas, the content is lost if the size differs
    pub fn resize(&mut self, size: UVec2)
    {
        if self.size() != size
        {
            self.pixels = image::RgbaImage::new(size.x, size.y)
        }
    }

    pub fn clear(&mut self, color: Color)
    {
        for pixel in self.pixels.pixels_mut()
        {
            pixel.0 = color.to_array();
        }
    }

    /// raw rgba8 bytes, row by row
    pub fn as_raw(&self) -> &[u8]
    {
        self.pixels.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color>
    {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|&image::Rgba([r, g, b, a])| Color { r, g, b, a })
    }

    /// paints every command of the frame in order,
    /// commands pointing to assets that don't exist are skipped
    pub fn draw(&mut self, frame: &Frame, assets: &Assets)
    {
        for command in &frame.commands
        {
            match command
            {
                DrawCommand::Image { image, position } => match assets.image(*image)
                {
                    Some(image) => self.draw_image(image, *position),
                    None => log::warn!("skipping draw of unknown image {image:?}"),
                },
                DrawCommand::Text { text, font, position, color } => match assets.font(*font)
                {
                    Some(font) => self.draw_text(text, font, *position, *color),
                    None => log::warn!("skipping draw of text with unknown font {font:?}"),
                },
            }
        }
    }

    /// blends the image over the canvas with its top left corner at `position`
    pub fn draw_image(&mut self, image: &image::RgbaImage, position: IVec2)
    {
        let Some((x_range, y_range)) = self.clip(position, image.width(), image.height())
        else
        {
            return
        };

        for y in y_range
        {
            let src_y = (y - i64::from(position.y)) as u32;

            for x in x_range.clone()
            {
                let src_x = (x - i64::from(position.x)) as u32;
                let src = image.get_pixel(src_x, src_y).0;

                blend(self.pixels.get_pixel_mut(x as u32, y as u32), src, 255)
            }
        }
    }

    /// draws a single line of text, `position` is the top left corner of the line box
    pub fn draw_text(&mut self, text: &str, face: &FontFace, position: IVec2, color: Color)
    {
        let baseline = position.y as f32 + face.ascent();
        let mut pen = position.x as f32;
        let mut previous = None;

        for character in text.chars()
        {
            if let Some(kern) = previous.and_then(|prev| face.font.horizontal_kern(prev, character, face.size))
            {
                pen += kern;
            }

            let (metrics, coverage) = face.font.rasterize(character, face.size);

            let origin = IVec2::new
            (
                pen.round() as i32 + metrics.xmin,
                baseline.round() as i32 - metrics.height as i32 - metrics.ymin
            );

            if let Some((x_range, y_range)) = self.clip(origin, metrics.width as u32, metrics.height as u32)
            {
                for y in y_range
                {
                    let row = (y - i64::from(origin.y)) as usize * metrics.width;

                    for x in x_range.clone()
                    {
                        let alpha = coverage[row + (x - i64::from(origin.x)) as usize];

                        if alpha > 0
                        {
                            blend(self.pixels.get_pixel_mut(x as u32, y as u32), color.to_array(), alpha)
                        }
                    }
                }
            }

            pen += metrics.advance_width;
            previous = Some(character);
        }
    }

    /// visible columns and rows of a `width` x `height` rect placed at `position`
    fn clip(&self, position: IVec2, width: u32, height: u32)
        -> Option<(std::ops::Range<i64>, std::ops::Range<i64>)>
    {
        let (x, y) = (i64::from(position.x), i64::from(position.y));

        let x_range = x.max(0)..(x + i64::from(width)).min(i64::from(self.pixels.width()));
        let y_range = y.max(0)..(y + i64::from(height)).min(i64::from(self.pixels.height()));

        match x_range.is_empty() || y_range.is_empty()
        {
            true => None,
            false => Some((x_range, y_range))
        }
    }
}

/// source over blending of straight alpha colors,
/// `coverage` scales the source alpha
fn blend(dst: &mut image::Rgba<u8>, src: [u8; 4], coverage: u8)
{
    let alpha = u32::from(src[3]) * u32::from(coverage) / 255;

    match alpha
    {
        0 => (),
        255 => dst.0 = src,
        _ =>
        {
            let inv = 255 - alpha;

            for channel in 0..3
            {
                dst.0[channel] = ((u32::from(src[channel]) * alpha + u32::from(dst.0[channel]) * inv) / 255) as u8;
            }

            dst.0[3] = (alpha + u32::from(dst.0[3]) * inv / 255) as u8;
        }
    }
}
