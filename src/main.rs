use skymap::chart::Chart;
use skymap::config::{LabelConfig, Margin, SkyMapConfig, StarField, ZoomConfig};
use skymap::context::SkyContext;
use skymap::data::load_samples;
use skymap::encoding::SizeScale;
use skymap::scene::{sky_table, DomeScene, PolarScene};
use skymap::types::{LabelMode, Projection};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::{info, warn};
use std::fs::File;
use std::io::BufWriter;

#[derive(Parser, Debug)]
#[command(name = "skymap")]
#[command(about = "Sky maps of solar-system bodies with decluttered labels", version)]
struct Args {
    /// Positions CSV (name,altitude_deg,azimuth_deg[,magnitude]); may be gzipped
    #[arg(short = 'i', long = "input")]
    input: String,

    /// Output path: SVG for polar2d, JSON scene for the 3D projections
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Projection to draw, either polar2d, hemisphere3d, or dome3d
    #[arg(long, default_value = "polar2d")]
    projection: String,

    /// Optional scene JSON path written alongside a polar2d SVG
    #[arg(long)]
    json: Option<String>,

    /// Print the altitude-sorted object table to stdout as CSV
    #[arg(long)]
    table: bool,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Output image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// 3D radius; defaults to 1 for hemisphere3d and 1000 for dome3d
    #[arg(long)]
    radius: Option<f64>,

    /// Label mode: all, top, or smart (unknown values mean smart)
    #[arg(long, default_value = "smart")]
    labels: String,

    /// Most labels drawn in top and smart modes
    #[arg(long, default_value_t = 6)]
    max_labels: usize,

    /// Screen distance under which objects count as one cluster in smart mode
    #[arg(long, default_value_t = 22.0)]
    cluster_px: f64,

    /// Padding kept around each placed label
    #[arg(long, default_value_t = 10.0)]
    min_sep_px: f64,

    /// Candidate label offsets as "dx,dy;dx,dy;..." in pixels, y down
    #[arg(long)]
    offsets: Option<String>,

    /// Disable auto zoom and use --r-max
    #[arg(long)]
    no_auto_zoom: bool,

    /// Manual radial extent in degrees from the zenith (18 to 90)
    #[arg(long, default_value_t = 90.0)]
    r_max: f64,

    /// Margin below the lowest object when auto zooming, in degrees
    #[arg(long, default_value_t = 6.0)]
    zoom_margin: f64,

    /// Do not draw the horizon
    #[arg(long)]
    no_horizon: bool,

    /// Do not draw the altitude/azimuth grid
    #[arg(long)]
    no_grid: bool,

    /// Number of decorative background stars (0 disables them)
    #[arg(long, default_value_t = 150)]
    stars: usize,

    /// Seed for the background stars
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Camera field of view for the 3D projections, in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_projection(s: &str) -> Result<Projection> {
    Projection::from_str(&s.to_lowercase()).ok_or_else(|| {
        anyhow!("invalid projection '{s}'. Use: polar2d | hemisphere3d | dome3d")
    })
}

fn parse_label_mode(s: &str) -> LabelMode {
    let mode = LabelMode::parse_or_smart(s);
    if LabelMode::from_str(&s.to_lowercase()).is_none() {
        warn!("unknown label mode '{s}', using smart");
    }
    mode
}

fn parse_offsets(s: &str) -> Result<Vec<(f64, f64)>> {
    s.split(';')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            let (dx, dy) = part
                .split_once(',')
                .ok_or_else(|| anyhow!("bad offset '{part}', expected dx,dy"))?;
            let dx: f64 = dx.trim().parse().context("offset dx must be a number")?;
            let dy: f64 = dy.trim().parse().context("offset dy must be a number")?;
            Ok((dx, dy))
        })
        .collect()
}

fn build_config(args: &Args) -> Result<SkyMapConfig> {
    let projection = parse_projection(&args.projection)?;
    let mut labels = LabelConfig {
        mode: parse_label_mode(&args.labels),
        max_labels: args.max_labels,
        cluster_px: args.cluster_px,
        min_separation_px: args.min_sep_px,
        ..LabelConfig::default()
    };
    if let Some(offsets) = &args.offsets {
        labels.offsets = parse_offsets(offsets)?;
    }

    let cfg = SkyMapConfig {
        title: args.title.clone(),
        projection,
        radius: args.radius.unwrap_or_else(|| projection.default_radius()),
        width: args.width,
        height: args.height,
        margin: Margin::uniform(40),
        show_horizon: !args.no_horizon,
        show_grid: !args.no_grid,
        star_field: StarField {
            enabled: args.stars > 0,
            count: args.stars,
            seed: args.seed,
        },
        labels,
        zoom: ZoomConfig {
            auto: !args.no_auto_zoom,
            manual_r_max: args.r_max,
            margin_deg: args.zoom_margin,
        },
        size_scale: SizeScale::for_projection(projection),
        camera_fov_deg: args.fov,
    };
    cfg.validate().map_err(|e| anyhow!("invalid options: {e}"))?;
    Ok(cfg)
}

fn init_logging(level: &str) -> Result<LoggerHandle> {
    Logger::try_with_str(level)
        .with_context(|| format!("bad log level '{level}'"))?
        .log_to_stderr()
        .start()
        .context("starting logger")
}

fn write_json<T: serde::Serialize>(path: &str, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {path}"))
}

fn print_table(context: &SkyContext<'_>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in sky_table(context.samples) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args.log_level)?;

    let cfg = build_config(&args)?;
    let samples =
        load_samples(&args.input).with_context(|| format!("loading {}", args.input))?;
    info!("loaded {} objects from {}", samples.len(), args.input);

    let projection = cfg.projection;
    let context = SkyContext::new(&samples, cfg)?;

    if args.table {
        print_table(&context)?;
    }

    if projection.is_3d() {
        write_json(&args.out, &DomeScene::build(&context))?;
    } else {
        if let Some(path) = &args.json {
            write_json(path, &PolarScene::build(&context))?;
        }
        let chart = Chart::new(context, args.css.clone());
        chart
            .to_file(&args.out)
            .with_context(|| format!("writing {}", args.out))?;
    }
    info!("wrote {}", args.out);

    Ok(())
}
