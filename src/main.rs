use gdownsample::blur::trace::{BlurObserver, PixelTrace};
use gdownsample::config::{load_config, InputFormat, RuntimeConfig};
use gdownsample::image::io::{
    load_csv_image, load_grayscale_image, save_csv_image, write_json_file,
};
use gdownsample::image::ImageView;
use gdownsample::{DownsampleReport, Downsampler};
use log::{log_enabled, trace, Level};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "gdownsample".to_string());
    let arg = env::args()
        .nth(1)
        .ok_or_else(|| format!("Usage: {program} <input.csv | config.json>"))?;

    let path = Path::new(&arg);
    let config = if path.extension().is_some_and(|ext| ext == "json") {
        load_config(path)?
    } else {
        RuntimeConfig::for_csv_input(path.to_path_buf())
    };

    let image = match config.input_format {
        InputFormat::Csv => load_csv_image(&config.input)?,
        InputFormat::Grayscale => load_grayscale_image(&config.input)?,
    };

    let mut downsampler = if log_enabled!(Level::Trace) {
        Downsampler::with_observer(Box::new(LogObserver))
    } else {
        Downsampler::new()
    };
    let report = downsampler.process_with_diagnostics(&image);

    print_report(&report);

    if let Some(path) = &config.output.csv_out {
        save_csv_image(&report.output, path)?;
        println!("CSV written to {}", path.display());
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn print_report(report: &DownsampleReport) {
    println!("=============================================");
    println!("Output image:");
    for row in report.output.rows() {
        println!("{row:?}");
    }
    println!("=============================================");
    println!(
        "Input Image - Width: {}, Height: {}",
        report.input.width, report.input.height
    );
    println!(
        "Output Image - Width: {}, Height: {}",
        report.output.w, report.output.h
    );
}

/// Forwards per-pixel blur events to `log::trace!`, mirroring the field set
/// of the reference tool's diagnostic lines.
struct LogObserver;

impl BlurObserver for LogObserver {
    fn on_pixel(&mut self, t: &PixelTrace) {
        let [n0, n1, n2, n3, n4] = t.neighbors;
        trace!(
            "Row: {:<3} Column: {:<3} Value: {:<3} Blurred: {:<3} {:?} | Neighbors: {n0:<3} {n1:<3} {n2:<3} {n3:<3} {n4:<3}",
            t.row,
            t.col,
            t.original,
            t.blurred,
            t.axis
        );
    }
}
