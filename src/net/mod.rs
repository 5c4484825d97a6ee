//! Output side of the pipeline: the pixelflut wire client.
//!
//! The streamer only needs "deliver this set of pixels somewhere", so that
//! seam is a narrow trait and the TCP client is one implementation of it.
//! Tests substitute the network with counting mocks.

pub mod client;

pub use client::PixelflutClient;

use std::collections::HashSet;
use std::io;

use thiserror::Error;

use crate::draw::Pixel;

/// Errors raised by a pixel sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to connect to {peer}: {source}")]
    Connect { peer: String, source: io::Error },

    #[error("Failed to send pixels to {peer}: {source}")]
    Send { peer: String, source: io::Error },
}

/// Abstraction over a write-only destination accepting pixel updates.
pub trait PixelSink {
    /// Delivers every pixel in `pixels`; order is unspecified and no
    /// acknowledgement is read back.
    fn draw_pixels(&mut self, pixels: &HashSet<Pixel>) -> Result<(), SinkError>;
}
