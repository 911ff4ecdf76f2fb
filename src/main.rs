use portrait_analyzer::config::load_config;
use portrait_analyzer::face_shape::FaceMeasurement;
use portrait_analyzer::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use portrait_analyzer::image::RgbaBuffer;
use portrait_analyzer::{AnalyzerParams, PortraitAnalyzer};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    match env::args().nth(1) {
        Some(config_path) => run_from_config(Path::new(&config_path)),
        None => run_demo(),
    }
}

fn run_from_config(config_path: &Path) -> Result<(), String> {
    let config = load_config(config_path)?;
    let buffer = load_rgba_image(&config.input_path)?;
    let (w, h) = buffer.dimensions();

    let analyzer = PortraitAnalyzer::new(config.params);
    let report = analyzer.analyze(&buffer, &FaceMeasurement::estimate(w, h));
    let output = analyzer
        .segment_foreground(buffer)
        .map_err(|e| format!("Segmentation failed: {e}"))?;

    println!(
        "face_shape={:?} tone={:?} undertone={:?} confidence={:.2}",
        report.face_shape.label, report.skin_tone.label, report.undertone.label, report.confidence
    );
    println!(
        "coverage={:.3} latency_ms={:.3}",
        output.report.coverage, output.report.latency_ms
    );

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &output.report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.png_out {
        save_rgba_image(&output.buffer, path)?;
        println!("Segmented image written to {}", path.display());
    }
    Ok(())
}

// Demo stub: creates a fake skin-toned RGBA buffer and runs the analyzer
fn run_demo() -> Result<(), String> {
    let w = 640usize;
    let h = 480usize;
    let buffer =
        RgbaBuffer::filled(w, h, [210, 170, 140, 255]).map_err(|e| format!("demo buffer: {e}"))?;

    let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.analyze(&buffer, &FaceMeasurement::estimate(w, h));
    println!(
        "face_shape={:?} tone={:?} undertone={:?} confidence={:.2}",
        report.face_shape.label, report.skin_tone.label, report.undertone.label, report.confidence
    );

    let output = analyzer
        .segment_foreground(buffer)
        .map_err(|e| format!("Segmentation failed: {e}"))?;
    println!(
        "coverage={:.3} latency_ms={:.3}",
        output.report.coverage, output.report.latency_ms
    );
    Ok(())
}
