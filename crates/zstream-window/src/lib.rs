//! Windowed display buffers
//!
//! Keeps the visible window bounded to the most recent `W` ticks while the
//! statistics tracker keeps growing. Each tick's point lands in exactly one of
//! the two series of the current window.

pub mod buffer;
pub mod frame;

pub use buffer::WindowBuffer;
pub use frame::WindowFrame;
pub use zstream_core::Point;
