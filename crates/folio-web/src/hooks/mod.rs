//! Browser hooks

mod presence;
mod window;

pub use presence::use_presence;
pub use window::{current_width, root_font_size, use_window_width};
