#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
use chrono::DateTime;
#[cfg(feature = "cairo-backend")]
use timeline_rs::api::{AxisView, AxisViewConfig};
#[cfg(feature = "cairo-backend")]
use timeline_rs::core::SurfaceSize;
#[cfg(feature = "cairo-backend")]
use timeline_rs::render::Color;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "timeline.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    width: u32,
    height: u32,
    focal_time_ms: Option<i64>,
    unit_seconds: Option<f64>,
    unit_count: Option<u32>,
    zoom_steps: i32,
    background: Option<Color>,
    font_family: Option<String>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use timeline_rs::render::CairoRenderer;

    let _ = timeline_rs::telemetry::init_default_tracing();
    let args = parse_args()?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            AxisViewConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => AxisViewConfig::starting_now(SurfaceSize::new(args.width, args.height)),
    };
    if let Some(focal_time_ms) = args.focal_time_ms {
        config.focal_time_ms = focal_time_ms;
    }
    if let Some(unit_seconds) = args.unit_seconds {
        config = config.with_unit_seconds(unit_seconds);
    }
    if let Some(unit_count) = args.unit_count {
        config = config.with_unit_count(unit_count);
    }

    let width = i32::try_from(config.surface.width)
        .map_err(|_| "surface width overflows i32".to_owned())?;
    let height = i32::try_from(config.surface.height)
        .map_err(|_| "surface height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    if let Some(background) = args.background {
        renderer
            .set_clear_color(background)
            .map_err(|err| err.to_string())?;
    }
    if let Some(family) = args.font_family {
        renderer.set_font_family(family);
    }
    let mut view = AxisView::new(renderer, config).map_err(|err| err.to_string())?;

    for _ in 0..args.zoom_steps.unsigned_abs() {
        let result = if args.zoom_steps > 0 {
            view.zoom_in()
        } else {
            view.zoom_out()
        };
        result.map_err(|err| err.to_string())?;
    }

    view.render().map_err(|err| err.to_string())?;
    view.renderer()
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;
    println!(
        "wrote {} ({} markers, unit {}s)",
        args.output_path.display(),
        view.markers().len(),
        view.view_state().unit_seconds()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        config_path: None,
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        width: 960,
        height: 80,
        focal_time_ms: None,
        unit_seconds: None,
        unit_count: None,
        zoom_steps: 0,
        background: None,
        font_family: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--config" => parsed.config_path = Some(PathBuf::from(value("--config")?)),
            "--out" => parsed.output_path = PathBuf::from(value("--out")?),
            "--width" => parsed.width = parse_number(&value("--width")?, "--width")?,
            "--height" => parsed.height = parse_number(&value("--height")?, "--height")?,
            "--focal" => {
                let raw = value("--focal")?;
                let time = DateTime::parse_from_rfc3339(&raw)
                    .map_err(|err| format!("invalid --focal `{raw}`: {err}"))?;
                parsed.focal_time_ms = Some(time.timestamp_millis());
            }
            "--unit-seconds" => {
                parsed.unit_seconds = Some(parse_number(&value("--unit-seconds")?, "--unit-seconds")?);
            }
            "--unit-count" => {
                parsed.unit_count = Some(parse_number(&value("--unit-count")?, "--unit-count")?);
            }
            "--zoom" => parsed.zoom_steps = parse_number(&value("--zoom")?, "--zoom")?,
            "--background" => {
                let raw = value("--background")?;
                parsed.background = Some(Color::from_hex(&raw).map_err(|err| err.to_string())?);
            }
            "--font" => parsed.font_family = Some(value("--font")?),
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --features cairo-backend --bin render_timeline_png -- [--config <json>] [--out <png>] [--width <px>] [--height <px>] [--focal <rfc3339>] [--unit-seconds <s>] [--unit-count <n>] [--zoom <steps, negative zooms out>] [--background <#rgb|#rrggbb>] [--font <family>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|err| format!("invalid value `{raw}` for {flag}: {err}"))
}
