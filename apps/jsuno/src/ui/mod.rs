// HTML studio: page rendering, copy controls, and form handlers.

pub mod copy_button;
pub mod handlers;
pub mod render;
