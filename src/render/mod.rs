pub mod drawable;
pub mod renderer;

pub use drawable::{Canvas, Drawable, Tile};
pub use renderer::Renderer;
