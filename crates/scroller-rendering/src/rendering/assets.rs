use std::path::{Path, PathBuf};

use crate::*;

/// handle to an image stored in [Assets], the default handle is the first image loaded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageId(pub(crate) u32);

/// handle to a font face stored in [Assets], the default handle is the first font loaded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub(crate) u32);

#[derive(Debug, thiserror::Error)]
pub enum AssetError
{
    #[error("failed to read {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode image {}: {source}", path.display())]
    Image
    {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to parse font {}: {reason}", path.display())]
    Font
    {
        path: PathBuf,
        reason: &'static str,
    },
    #[error("image {} has no pixels", path.display())]
    EmptyImage
    {
        path: PathBuf,
    },
}

/// a font rasterized at a fixed pixel size
pub struct FontFace
{
    pub font: fontdue::Font,
    /// pixel size glyphs are rasterized at
    pub size: f32,
}

impl FontFace
{
    /// parses a ttf/otf font from raw bytes
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, &'static str>
    {
        let settings = fontdue::FontSettings { scale: size, ..Default::default() };
        let font = fontdue::Font::from_bytes(bytes, settings)?;

        Ok(Self { font, size })
    }

    /// distance from the top of the line box to the baseline
    pub fn ascent(&self) -> f32
    {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(self.size, |metrics| metrics.ascent)
    }
}

/// every decoded image and font face of the session,
/// loaded once at startup and only read afterwards
#[derive(Default)]
pub struct Assets
{
    images: Vec<image::RgbaImage>,
    fonts: Vec<FontFace>,
}

impl Assets
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// reads and decodes an image file
    ///
    /// # Errors
    ///
    /// fails if the file can't be read, can't be decoded or has no pixels
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<ImageId, AssetError>
    {
        let path = path.as_ref();

        let bytes = std::fs::read(path)
            .map_err(|source| AssetError::Io { path: path.into(), source })?;

        let image = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Image { path: path.into(), source })?
            .to_rgba8();

        let (width, height) = image.dimensions();

        let id = self.insert_image(image)
            .ok_or_else(|| AssetError::EmptyImage { path: path.into() })?;

        log::info!("loaded image {} ({width}x{height})", path.display());
        Ok(id)
    }

    /// reads a font file and prepares it for rasterization at `size` pixels
    ///
    /// # Errors
    ///
    /// fails if the file can't be read or isn't a font fontdue understands
    pub fn load_font(&mut self, path: impl AsRef<Path>, size: f32) -> Result<FontId, AssetError>
    {
        let path = path.as_ref();

        let bytes = std::fs::read(path)
            .map_err(|source| AssetError::Io { path: path.into(), source })?;

        let face = FontFace::from_bytes(&bytes, size)
            .map_err(|reason| AssetError::Font { path: path.into(), reason })?;

        log::info!("loaded font {} at {size}px", path.display());
        Ok(self.insert_font(face))
    }

    /// stores an already decoded image, returns `None` if it has no pixels
    pub fn insert_image(&mut self, image: image::RgbaImage) -> Option<ImageId>
    {
        if image.width() == 0 || image.height() == 0
        {
            return None
        }

        self.images.push(image);
        Some(ImageId(self.images.len() as u32 - 1))
    }

    pub fn insert_font(&mut self, face: FontFace) -> FontId
    {
        self.fonts.push(face);
        FontId(self.fonts.len() as u32 - 1)
    }

    pub fn image(&self, id: ImageId) -> Option<&image::RgbaImage>
    {
        self.images.get(id.0 as usize)
    }

    /// width and height of the image in pixels
    pub fn image_size(&self, id: ImageId) -> Option<UVec2>
    {
        self.image(id).map(|image| UVec2::new(image.width(), image.height()))
    }

    pub fn font(&self, id: FontId) -> Option<&FontFace>
    {
        self.fonts.get(id.0 as usize)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn inserted_images_are_addressable()
    {
        let mut assets = Assets::new();
        let a = assets.insert_image(image::RgbaImage::new(800, 600)).unwrap();
        let b = assets.insert_image(image::RgbaImage::new(4, 2)).unwrap();

        assert_ne!(a, b);
        assert_eq!(assets.image_size(a), Some(UVec2::new(800, 600)));
        assert_eq!(assets.image_size(b), Some(UVec2::new(4, 2)));
        assert!(assets.font(FontId(0)).is_none());
    }

    #[test]
    fn empty_images_are_rejected()
    {
        let mut assets = Assets::new();
        assert!(assets.insert_image(image::RgbaImage::new(0, 10)).is_none());
        assert!(assets.image(ImageId(0)).is_none());
    }

    #[test]
    fn missing_files_are_reported_with_their_path()
    {
        let mut assets = Assets::new();
        let err = assets.load_image("definitely/not/here.png").unwrap_err();

        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.png"));

        let err = assets.load_font("definitely/not/here.ttf", 55.).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn garbage_is_not_an_image()
    {
        let path = std::env::temp_dir().join(format!("scroller-garbage-{}.png", std::process::id()));
        std::fs::write(&path, b"not a png at all").unwrap();

        let mut assets = Assets::new();
        let err = assets.load_image(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, AssetError::Image { .. }));
    }

    #[test]
    fn garbage_is_not_a_font()
    {
        assert!(FontFace::from_bytes(b"not a font", 55.).is_err());
    }

    #[test]
    fn fonts_load_from_disk()
    {
        let mut assets = Assets::new();
        let id = assets
            .load_font(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/DejaVuSans.ttf"), 55.)
            .unwrap();

        let face = assets.font(id).unwrap();
        assert_eq!(face.size, 55.);
        assert!(face.ascent() > 0. && face.ascent() < 55.);
    }

    #[test]
    fn png_round_trips_through_the_loader()
    {
        let path = std::env::temp_dir().join(format!("scroller-tile-{}.png", std::process::id()));
        image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let mut assets = Assets::new();
        let id = assets.load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(assets.image_size(id), Some(UVec2::new(3, 2)));
        assert_eq!(assets.image(id).unwrap().get_pixel(2, 1).0, [1, 2, 3, 255]);
    }
}
