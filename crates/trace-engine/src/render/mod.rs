pub mod buffer;
pub mod frame;
pub mod guidance;
pub mod primitive;
