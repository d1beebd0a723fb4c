//! Terminal frontend: framebuffer, snapshot view, and renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::FrameBuffer;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
