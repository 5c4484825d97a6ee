use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, error, info};

use textflut::draw::{self, Point, TextBlock, font};
use textflut::net::PixelflutClient;
use textflut::stream::Streamer;

#[derive(Parser, Debug)]
#[command(name = "textflut")]
#[command(version, about = "Keeps a line of text painted on a pixelflut canvas")]
struct Cli {
    /// The host of the pixelflut server
    #[arg(long, default_value = "localhost")]
    host: String,

    /// The port of the server
    #[arg(short, long, default_value_t = 1234)]
    port: u16,

    /// Enable debug output
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,

    /// The x offset of the text on the canvas
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    x: i32,

    /// The y offset of the text on the canvas
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    y: i32,

    /// The name of a font installed on your system
    #[arg(long, default_value = "Arial")]
    font: String,

    /// The font size in pt
    #[arg(long = "size", default_value_t = 16.0)]
    font_size: f64,

    /// The text to display; a literal \n starts a new line
    text: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let block = TextBlock::new(&cli.text, &cli.font, cli.font_size, Point::new(cli.x, cli.y));

    // A bad font name must fail before any socket is opened.
    let font = match font::resolve(block.font_family(), block.font_size()) {
        Ok(font) => font,
        Err(err) => {
            let font::FontError::NotFound { ref available, .. } = err;
            error!("{err}");
            error!("Available fonts: {}", available.join(", "));
            std::process::exit(1);
        }
    };
    info!("Using font '{}'", font.family());

    let area = draw::text_box(block.lines(), &font)?;
    let text_pixels = draw::text_pixels(block.lines(), &font, &area, block.offset())?;
    let clear_pixels = draw::clear_space(&area, block.offset(), &text_pixels);
    debug!(
        "{} text pixel(s), {} clearing pixel(s)",
        text_pixels.len(),
        clear_pixels.len()
    );

    info!("Connecting to {}:{}", cli.host, cli.port);
    let text_sink = PixelflutClient::connect(&cli.host, cli.port)?;
    let background_sink = PixelflutClient::connect(&cli.host, cli.port)?;

    let mut streamer = Streamer::new(text_sink, background_sink);
    streamer.run(&text_pixels, &clear_pixels)?;

    Ok(())
}
