//! Blocking TCP client for the pixelflut protocol.

use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use std::net::TcpStream;

use log::debug;

use super::{PixelSink, SinkError};
use crate::draw::Pixel;

/// One pixelflut server connection.
///
/// The connection is opened once and held for the lifetime of the client.
/// Pixels go out as `PX <x> <y> <rrggbb>` lines through a buffered writer,
/// flushed once per batch.
#[derive(Debug)]
pub struct PixelflutClient {
    writer: BufWriter<TcpStream>,
    peer: String,
}

impl PixelflutClient {
    /// Opens a connection to the server at `host:port`.
    pub fn connect(host: &str, port: u16) -> Result<Self, SinkError> {
        let peer = format!("{host}:{port}");
        let stream = TcpStream::connect((host, port)).map_err(|source| SinkError::Connect {
            peer: peer.clone(),
            source,
        })?;
        debug!("Connected to {peer}");
        Ok(Self {
            writer: BufWriter::new(stream),
            peer,
        })
    }

    fn send_all(&mut self, pixels: &HashSet<Pixel>) -> io::Result<()> {
        for pixel in pixels {
            write_pixel(&mut self.writer, pixel)?;
        }
        self.writer.flush()
    }
}

impl PixelSink for PixelflutClient {
    fn draw_pixels(&mut self, pixels: &HashSet<Pixel>) -> Result<(), SinkError> {
        self.send_all(pixels).map_err(|source| SinkError::Send {
            peer: self.peer.clone(),
            source,
        })
    }
}

/// Writes the draw command for one pixel.
fn write_pixel<W: Write>(writer: &mut W, pixel: &Pixel) -> io::Result<()> {
    writeln!(
        writer,
        "PX {} {} {}",
        pixel.position.x, pixel.position.y, pixel.color
    )
}
