//! Library exports for the textflut pipeline.
//!
//! Exposes the rasterizer separately from the wire client so the pixel-set
//! computation stays usable (and testable) without a server connection.

pub mod draw;
pub mod net;
pub mod stream;

pub use stream::Streamer;
