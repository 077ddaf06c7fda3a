// File: crates/demo/src/main.rs
// Summary: Demo loads a kiln pattern (CSV or JSON), drives a chart controller on the Skia
//          engine and writes the pattern and live-value frames as PNGs.
// Usage: profile-chart-demo <pattern.csv|pattern.json> [live_value] [theme]

use anyhow::{Context, Result};
use profile_chart_core::theme;
use profile_chart_core::{ChartController, ControllerConfig, SkiaEngine, Step, SurfaceSpec};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/bisque_firing.csv".to_string());
    let live_value = args
        .next()
        .map(|s| s.trim().parse::<f64>().with_context(|| format!("live value '{s}' is not a number")))
        .transpose()?;
    let style = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));

    let path = PathBuf::from(&raw);
    let steps = load_pattern(&path).with_context(|| format!("failed to load pattern '{}'", path.display()))?;
    println!("Loaded {} steps from {} (theme: {})", steps.len(), path.display(), style.name);

    let config = ControllerConfig { style, ..ControllerConfig::default() };
    let mut ctl = ChartController::with_config(SkiaEngine, SurfaceSpec::default(), config);
    ctl.initialize(live_value.is_some())?;

    let max_time = ctl.update_pattern(&steps)?.unwrap_or(0.0);
    println!("Pattern spans {max_time} minutes");
    let out = out_name_with(&path, None);
    write_frame(&mut ctl, &out)?;

    if let Some(pv) = live_value {
        ctl.update_live_value(pv, max_time)?;
        let out_live = out_name_with(&path, Some("live"));
        write_frame(&mut ctl, &out_live)?;
    }

    Ok(())
}

fn write_frame(ctl: &mut ChartController<SkiaEngine>, out: &Path) -> Result<()> {
    let chart = ctl.chart_mut().context("chart not initialized")?;
    chart.write_png(out).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/pattern_<stem>[_<suffix>].png
fn out_name_with(input: &Path, suffix: Option<&str>) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    match suffix {
        Some(suffix) => out.push(format!("pattern_{stem}_{suffix}.png")),
        None => out.push(format!("pattern_{stem}.png")),
    }
    out
}

fn load_pattern(path: &Path) -> Result<Vec<Step>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(serde_json::from_str(&text)?)
        }
        _ => load_pattern_csv(path),
    }
}

/// Read `time,temp[,step]` rows; header names are matched case-insensitively.
fn load_pattern_csv(path: &Path) -> Result<Vec<Step>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "minutes", "duration"]).context("missing time column")?;
    let i_temp = idx(&["temp", "temperature", "sv"]).context("missing temp column")?;
    let i_step = idx(&["step", "index"]);

    let mut steps = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| -> Result<f64> {
            let s = rec.get(i).unwrap_or_default();
            s.parse::<f64>().with_context(|| format!("row {}: '{s}' is not a number", row + 1))
        };
        let step_index = match i_step {
            Some(i) => field(i)? as usize,
            None => row,
        };
        steps.push(Step::new(step_index, field(i_time)?, field(i_temp)?));
    }
    Ok(steps)
}
