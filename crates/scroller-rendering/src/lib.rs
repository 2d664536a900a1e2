//! # scroller-rendering
//! draw instructions, loaded assets and the way a frame reaches the window

pub use input::winit::window::Window;
pub use math::*;
/// image crate reexport
pub use image;

#[path ="rendering/frame.rs"]
pub mod frame;
#[path ="rendering/assets.rs"]
pub mod assets;
#[path ="rendering/canvas.rs"]
pub mod canvas;
#[path ="rendering/renderer.rs"]
pub mod renderer;

#[path ="rendering/raw/vertex.rs"]
pub mod vertex;
#[path ="rendering/raw/texture.rs"]
pub mod texture;

pub use frame::*;
pub use assets::*;
pub use canvas::*;
pub use renderer::*;
pub use vertex::*;
pub use texture::*;

pub use wgpu::SurfaceError;
