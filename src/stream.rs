//! The endless redraw loop keeping the text visible on the shared canvas.

use std::collections::HashSet;

use log::debug;

use crate::draw::Pixel;
use crate::net::{PixelSink, SinkError};

/// Re-asserts the rendered text against the canvas until the process dies.
///
/// Holds one sink for glyph ink and one for the black clearing fill. Both
/// converge to the same picture but stay independent channels, so the
/// transport may repaint them at different effective rates.
pub struct Streamer<T: PixelSink, B: PixelSink> {
    text_sink: T,
    background_sink: B,
}

impl<T: PixelSink, B: PixelSink> Streamer<T, B> {
    pub fn new(text_sink: T, background_sink: B) -> Self {
        Self {
            text_sink,
            background_sink,
        }
    }

    /// Sends both pixel sets forever.
    ///
    /// There is no exit condition: the canvas is shared and mutable, so the
    /// text survives only as long as it is repainted. Socket write latency
    /// is the only pacing. Returns only when a sink fails, and that error
    /// is fatal to the caller.
    pub fn run(
        &mut self,
        text_pixels: &HashSet<Pixel>,
        clear_pixels: &HashSet<Pixel>,
    ) -> Result<(), SinkError> {
        debug!(
            "Streaming {} text and {} clearing pixel(s)",
            text_pixels.len(),
            clear_pixels.len()
        );
        loop {
            self.send_frame(text_pixels, clear_pixels)?;
        }
    }

    /// One full redraw: the complete text set, then the complete clearing set.
    fn send_frame(
        &mut self,
        text_pixels: &HashSet<Pixel>,
        clear_pixels: &HashSet<Pixel>,
    ) -> Result<(), SinkError> {
        self.text_sink.draw_pixels(text_pixels)?;
        self.background_sink.draw_pixels(clear_pixels)?;
        Ok(())
    }
}
