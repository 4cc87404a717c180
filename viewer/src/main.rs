use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use quad::raster::{ScreenQuad, Target, draws_on_frame};
use quad::settings::{Resolution, Settings};
use quad::shader::DrawContract;
use quad::timing::{COLLECT_FRAMES, Recorder};

/// Draws the screen quad on the CPU and writes the color attachment as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 1920)]
    width: u32,
    #[arg(long, default_value_t = 1080)]
    height: u32,
    /// Output file, or output directory when rendering a frame sequence.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Render a flash sequence: even frames draw the quad, odd frames stay cleared.
    #[arg(long)]
    frames: Option<u64>,
    /// Write per-frame CPU timestamps as CSV. Implies a 1000-frame sequence
    /// unless `--frames` is given.
    #[arg(long)]
    timings: Option<PathBuf>,
    #[arg(long, default_value_t = 1)]
    instances: u32,
}

impl Args {
    fn frame_count(&self) -> Option<u64> {
        self.frames.or(self.timings.as_ref().map(|_| COLLECT_FRAMES))
    }

    fn output(&self, root: &Path) -> PathBuf {
        let default = match self.frame_count() {
            Some(_) => "frames",
            None => "screen_quad.png",
        };
        root.join(self.output.as_deref().unwrap_or(Path::new(default)))
    }
}

/// Relative paths in `args` resolve against `root`.
fn run(args: &Args, root: &Path) -> Result<()> {
    let settings = Settings::default()
        .resolution(Resolution::new(args.width, args.height))
        .instances(args.instances);
    let contract = DrawContract::SCREEN_QUAD;
    let mut target = Target::new(&settings);
    let output = args.output(root);

    let Some(frames) = args.frame_count() else {
        let stats = target.draw(&ScreenQuad, contract.vertices(), 0..settings.instances);
        info!("{} fragments over {} triangles", stats.fragments, stats.triangles);
        target.save(&output).with_context(|| format!("failed to write {}", output.display()))?;
        info!("wrote {}", output.display());
        return Ok(());
    };

    let mut recorder = Recorder::with_capacity(usize::try_from(frames).unwrap_or(0));
    for frame in 0..frames {
        target.clear(settings.clear_color);
        if draws_on_frame(frame) {
            target.draw(&ScreenQuad, contract.vertices(), 0..settings.instances);
        }

        let path = output.join(format!("frame_{frame:04}.png"));
        target.save(&path).with_context(|| format!("failed to write {}", path.display()))?;
        recorder.record(frame);
        info!("Collecting frame: {} / {}", frame + 1, frames);
    }

    if let Some(timings) = &args.timings {
        let timings = root.join(timings);
        recorder.save(&timings).with_context(|| format!("failed to write {}", timings.display()))?;
        info!("wrote {} timing records to {}", recorder.records().len(), timings.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(&Args::parse(), Path::new("."))
}
