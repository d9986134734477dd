//! Epicycles - draw a closed curve with a chain of rotating arrows
//!
//! The curve is sampled, decomposed with a discrete Fourier transform and
//! rebuilt as a sum of arrows whose last tip retraces it. Frames of the
//! animation are recorded as PNG images.

use std::process::ExitCode;

use clap::Parser;
use glam::DVec2;
use log::{error, info};

use epicycles::cli::Args;
use epicycles::driver::EpicycleSystem;
use epicycles::error::{EpicycleError, Result};
use epicycles::params::{AnalysisConfig, RecordingConfig, RenderConfig, SamplingConfig};
use epicycles::render::{Canvas, FrameRecorder};
use epicycles::sampling::{self, Resampler};

/// Curve size for presets, as a fraction of the smaller window side
const PRESET_SIZE_FRACTION: f64 = 0.35;

/// Dot radius for raw sample markers (pixels)
const SAMPLE_DOT_RADIUS_PX: i64 = 1;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let analysis = args.analysis_config();
    let sampling = args.sampling_config();
    let render = args.render_config();
    let recording = args.recording_config();
    validate(&analysis, &sampling, &render, &recording)?;

    let stroke = collect_stroke(args, &sampling, &render)?;
    let samples = sampling::to_samples(stroke.points(), render.screen_origin(), render.unit_px);
    info!("Sampled {} points", samples.len());

    let mut system = EpicycleSystem::from_samples(&samples, analysis)?;
    let steps = recording
        .step_count
        .or_else(|| system.steps_per_period())
        .unwrap_or(1);

    let mut recorder = FrameRecorder::new(recording.clone())?;
    for step in 0..steps {
        system.update();
        if step % recording.frame_stride != 0 {
            continue;
        }

        let mut canvas = Canvas::new(&render);
        for sample in &samples {
            canvas.draw_dot(
                DVec2::new(sample.re, sample.im),
                SAMPLE_DOT_RADIUS_PX,
                render.sample_color,
            );
        }
        canvas.draw_scene(&system.scene(&render));
        recorder.write(&canvas)?;
    }

    info!(
        "Wrote {} frames to {} ({} steps, path complete: {})",
        recorder.frames_written(),
        recording.frames_dir().display(),
        steps,
        system.chain().is_path_complete()
    );
    Ok(())
}

/// Screen-space stroke from a points file or a preset, resampled and closed
fn collect_stroke(
    args: &Args,
    sampling: &SamplingConfig,
    render: &RenderConfig,
) -> Result<Resampler> {
    let origin = render.screen_origin();
    let drag = match &args.points {
        Some(path) => {
            info!("Loading curve from {}", path.display());
            sampling::load_points(path)?
                .into_iter()
                .map(|p| sampling::curve_to_screen(p, origin, render.unit_px))
                .collect()
        }
        None => {
            let size_px = PRESET_SIZE_FRACTION
                * render.window_width.min(render.window_height) as f64;
            args.parse_shape().drag_path(origin, size_px)
        }
    };

    let mut stroke = Resampler::new(sampling.spacing_px);
    stroke.extend(drag);
    stroke.close();
    Ok(stroke)
}

fn validate(
    analysis: &AnalysisConfig,
    sampling: &SamplingConfig,
    render: &RenderConfig,
    recording: &RecordingConfig,
) -> Result<()> {
    analysis
        .validate()
        .and_then(|_| sampling.validate())
        .and_then(|_| render.validate())
        .and_then(|_| recording.validate())
        .map_err(EpicycleError::InvalidConfig)
}
