use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use notchfit::{
    DeviceProfile, DisplayMetrics, ExecutionContext, FitterConfig, InMemoryHost, Orientation,
    Point, Rect, RelativeRect, SafeAreaFitter, SafeAreaProvider, Size, SolveInput, StaticDisplay,
    TargetRect,
};

#[derive(Parser, Debug)]
#[command(name = "notchfit", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve insets for a relative safe area and print the placement as JSON.
    Solve(SolveArgs),
    /// Preview a mocked device profile through the full fitter pipeline.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct RectArgs {
    /// Top-level container size, e.g. `800x600`.
    #[arg(long, value_parser = parse_size)]
    container: Size,

    /// Pivot of the driven rect, e.g. `0.5,0.5`.
    #[arg(long, value_parser = parse_point, default_value = "0.5,0.5")]
    pivot: Point,

    /// Fitter configuration JSON (edge modes, influence, flip).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Relative safe area `x,y,width,height` in screen fractions, origin bottom-left.
    #[arg(long, value_parser = parse_relative_rect)]
    safe_area: RelativeRect,

    /// Flip padding regardless of the configuration.
    #[arg(long)]
    flip: bool,

    #[command(flatten)]
    rect: RectArgs,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Device profile JSON.
    #[arg(long)]
    device: PathBuf,

    #[command(flatten)]
    rect: RectArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn parse_floats<const N: usize>(s: &str, sep: char) -> Result<[f64; N], String> {
    let parts = s
        .split(sep)
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; N]>::try_from(parts).map_err(|v| format!("expected {N} values, got {}", v.len()))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = parse_floats::<2>(s, 'x')?;
    Ok(Size::new(w, h))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_floats::<2>(s, ',')?;
    Ok(Point::new(x, y))
}

fn parse_relative_rect(s: &str) -> Result<RelativeRect, String> {
    let [x, y, w, h] = parse_floats::<4>(s, ',')?;
    Ok(RelativeRect::new(x, y, w, h))
}

fn read_config(path: Option<&Path>) -> anyhow::Result<FitterConfig> {
    let Some(path) = path else {
        return Ok(FitterConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    FitterConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))
}

fn read_device(path: &Path) -> anyhow::Result<DeviceProfile> {
    let f = File::open(path).with_context(|| format!("open device '{}'", path.display()))?;
    DeviceProfile::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load device '{}'", path.display()))
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON")?;
    writeln!(out).context("write JSON")?;
    Ok(())
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.rect.config.as_deref())?;
    let container = args.rect.container;
    let input = SolveInput {
        safe_area: args.safe_area,
        modes: cfg.modes.select(Orientation::of(container)),
        influence: cfg.influence,
        flip_padding: cfg.flip_padding || args.flip,
        container,
        pivot: args.rect.pivot,
    };
    let solution = notchfit::solve(&input);
    print_json(&serde_json::json!({
        "input": input,
        "solution": solution,
    }))
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.rect.config.as_deref())?;
    let device = read_device(&args.device)?;
    let container = args.rect.container;

    // The live display is the editor window; the device arrives through the simulator.
    let editor = StaticDisplay {
        safe_area: Rect::from_origin_size(Point::ORIGIN, container),
        cutouts: vec![],
        metrics: DisplayMetrics {
            context: ExecutionContext::EditorPreview,
            device_resolution: container,
            render_surface: None,
            preview_window: Some(container),
        },
    };
    let provider = SafeAreaProvider::live(editor);
    let mut host = InMemoryHost::new(TargetRect::with_pivot(args.rect.pivot), container);
    let mut fitter = SafeAreaFitter::new(cfg, provider);

    fitter.enable(&mut host);
    fitter.end_of_frame(&mut host)?;
    let solution = fitter
        .simulator_update(&mut host, device.to_simulated_screen())?
        .context("fitter is active after enable")?;

    print_json(&serde_json::json!({
        "device": device.name,
        "safe_area": fitter.input().current_safe_area(),
        "cutouts": fitter.input().cutouts_relative(),
        "solution": solution,
        "rect": host.rect,
    }))
}
