//! Host-side command implementations

mod set_colors;

pub use set_colors::SetColors;
