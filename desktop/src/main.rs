use std::{io::Write, path::Path};

use argh::FromArgs;
use img2cpp_core::{
    Error, PreviewSession, blend::MIN_FRAME_COUNT, convert_dither_blend, convert_single,
};
use log::{error, info, warn};

use crate::minifb_preview::MinifbPreview;

mod decode;
mod minifb_preview;

#[derive(FromArgs)]
/// Convert images to 1-bit PROGMEM byte arrays
struct Args {
    /// input image path, give it twice with --dither
    #[argh(option, short = 'i')]
    input: Vec<String>,

    /// output source file path, stdout if omitted
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// cross-fade the two inputs and dither every frame
    #[argh(switch, short = 'd')]
    dither: bool,

    /// number of blend frames, 0 picks the default of 10 and 1 is raised to 2
    #[argh(option, short = 'f', default = "DEFAULT_FRAME_COUNT")]
    frames: usize,

    /// show the dithered frames in a window
    #[argh(switch, short = 'p')]
    preview: bool,
}

const DEFAULT_FRAME_COUNT: usize = 10;

type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let result = if args.dither {
        run_dither_blend(&args)
    } else {
        run_single(&args)
    };
    if let Err(err) = result {
        error!("Conversion failed: {err}");
        std::process::exit(1);
    }
}

fn run_single(args: &Args) -> BoxResult<()> {
    let path = args.input.first().ok_or(Error::MissingInput)?;
    if args.input.len() > 1 {
        warn!("Ignoring {} extra input(s) without --dither", args.input.len() - 1);
    }
    if args.preview {
        warn!("Preview is only available with --dither");
    }

    let path = Path::new(path);
    let image = decode::load_image(path)?;
    let artifact = convert_single(&image, &decode::label_for(path))?;
    write_output(args.output.as_deref(), artifact.as_str())
}

fn run_dither_blend(args: &Args) -> BoxResult<()> {
    let [first, second, rest @ ..] = args.input.as_slice() else {
        return Err(Error::MissingInput.into());
    };
    if !rest.is_empty() {
        warn!("Ignoring {} extra input(s), blending needs two", rest.len());
    }

    let frame_count = clamp_frame_count(args.frames);
    let first = decode::load_image(Path::new(first))?;
    let second = decode::load_image(Path::new(second))?;
    if (first.width(), first.height()) != (second.width(), second.height()) {
        info!(
            "Input sizes differ ({}x{} and {}x{}), using the shared top-left region",
            first.width(),
            first.height(),
            second.width(),
            second.height()
        );
    }

    let result = convert_dither_blend(&first, &second, frame_count)?;
    write_output(args.output.as_deref(), result.artifact.as_str())?;

    if args.preview {
        let Some(frame) = result.frames.first() else {
            return Ok(());
        };
        let preview = MinifbPreview::new(frame.bitmap.width(), frame.bitmap.height())?;
        preview.run(PreviewSession::new(result.frames))?;
    }
    Ok(())
}

fn clamp_frame_count(requested: usize) -> usize {
    if requested == 0 {
        info!("No frame count given, using {DEFAULT_FRAME_COUNT}");
        DEFAULT_FRAME_COUNT
    } else if requested < MIN_FRAME_COUNT {
        warn!("Frame count {requested} is too low, using {MIN_FRAME_COUNT}");
        MIN_FRAME_COUNT
    } else {
        requested
    }
}

fn write_output(path: Option<&str>, text: &str) -> BoxResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)?;
            info!("Wrote {} bytes to {}", text.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
