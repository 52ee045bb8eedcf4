pub mod error;
pub mod gfx;
pub mod input;
pub mod mixer_device;
