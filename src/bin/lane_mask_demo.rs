use lane_mask::config::lane_demo::{self as cfg, DemoInput, LaneDemoConfig};
use lane_mask::image::io::{load_logits_json, load_probability_png, save_mask_png, write_json_file};
use lane_mask::lane::render::render_polyline;
use lane_mask::{LaneMaskPipeline, LaneReport};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cfg::load_config(Path::new(&config_path))?;

    fs::create_dir_all(&config.output.dir)
        .map_err(|e| format!("Failed to create {}: {e}", config.output.dir.display()))?;

    let pipeline = LaneMaskPipeline::new(config.lane.resolve());
    let report = run_pipeline(&pipeline, &config)?;
    report.print_text_summary();

    save_masks(&report, &config, pipeline.params().line_thickness)?;
    write_json_file(&config.output.report_path(), &report)?;
    println!(
        "Wrote diagnostics JSON to {}",
        config.output.report_path().display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: lane_mask_demo <config.json>".to_string()
}

fn run_pipeline(pipeline: &LaneMaskPipeline, config: &LaneDemoConfig) -> Result<LaneReport, String> {
    match &config.input {
        DemoInput::Logits(path) => {
            let logits = load_logits_json(path)?;
            pipeline
                .process_logits_with_diagnostics(logits.view())
                .map_err(|e| format!("Lane pipeline failed on {}: {e}", path.display()))
        }
        DemoInput::Channels(paths) => {
            let channels = paths
                .iter()
                .map(|p| load_probability_png(p))
                .collect::<Result<Vec<_>, _>>()?;
            pipeline
                .process_with_diagnostics(&channels)
                .map_err(|e| format!("Lane pipeline failed: {e}"))
        }
    }
}

fn save_masks(report: &LaneReport, config: &LaneDemoConfig, thickness: u32) -> Result<(), String> {
    for (i, line) in report.lines.iter().enumerate() {
        let path = config.output.mask_path(i);
        save_mask_png(&line.mask, &path)?;
        println!("Saved lane {i} mask to {}", path.display());

        if config.output.save_fitted && !line.fitted.is_empty() {
            let (w, h) = line.mask.dimensions();
            let fitted = render_polyline(&line.fitted, w, h, thickness);
            let path = config.output.fitted_path(i);
            save_mask_png(&fitted, &path)?;
            println!("Saved lane {i} fitted line to {}", path.display());
        }
    }
    Ok(())
}
