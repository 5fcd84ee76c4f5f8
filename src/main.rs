use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use densityshade::config::{ColorSpec, Config};
use densityshade::density::DensitySpec;
use densityshade::draw::CairoSurface;
use densityshade::shade::{DrawPlan, Interval, RegionRequest, RegionType};
use densityshade::output;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "densityshade")]
#[command(
    version,
    about = "Shade lower, upper, middle or two-tailed regions under a density curve",
    allow_negative_numbers = true
)]
struct Cli {
    /// Density to draw, e.g. `normal`, `t(df=5)`, `gamma(shape=2, rate=1)`
    #[arg(long, default_value = "normal", value_name = "SPEC")]
    dist: String,

    /// Region to shade: lower, upper, middle or two
    #[arg(long = "type", short = 't', default_value = "lower", value_name = "TYPE")]
    region: String,

    /// First cut point
    #[arg(short = 'a', value_name = "X")]
    a: Option<f64>,

    /// Second cut point
    #[arg(short = 'b', value_name = "X")]
    b: Option<f64>,

    /// Start of the plotted interval
    #[arg(long, default_value_t = -3.0)]
    from: f64,

    /// End of the plotted interval
    #[arg(long, default_value_t = 3.0)]
    to: f64,

    /// Intervals used to approximate the shaded area
    #[arg(long, value_name = "N")]
    breaks: Option<usize>,

    /// Fill color (name, #RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR")]
    shade_color: Option<String>,

    /// Curve color
    #[arg(long, value_name = "COLOR")]
    line_color: Option<String>,

    /// Curve width in pixels
    #[arg(long, value_name = "WIDTH")]
    line_width: Option<f64>,

    /// Horizontal axis title
    #[arg(long, value_name = "TEXT")]
    xlab: Option<String>,

    /// Vertical axis title
    #[arg(long, value_name = "TEXT")]
    ylab: Option<String>,

    /// Main title
    #[arg(long, value_name = "TEXT")]
    main: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Output PNG path (default: generated in the configured directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file (default: ~/.config/densityshade/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the draw plan instead of rendering an image
    #[arg(long, action = ArgAction::SetTrue)]
    print_plan: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !(cli.from.is_finite() && cli.to.is_finite() && cli.from < cli.to) {
        bail!(
            "--from ({}) must be finite and less than --to ({})",
            cli.from,
            cli.to
        );
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli)?;
    config.validate_and_clamp();

    let spec: DensitySpec = cli.dist.parse()?;
    let density = spec.resolve()?;
    let kind: RegionType = cli.region.parse()?;
    let request = RegionRequest::new(cli.a, cli.b, kind);
    let domain = Interval::new(cli.from, cli.to);
    let options = config.shade_options()?;

    log::info!(
        "Shading {} region of {} over [{}, {}]",
        kind,
        density,
        cli.from,
        cli.to
    );
    let plan = DrawPlan::build(&density, &request, domain, &options)?;

    if cli.print_plan {
        let region = plan.region();
        println!("region: [{}, {}]", region.lo, region.hi);
        for op in plan.ops() {
            println!("{op}");
        }
        return Ok(());
    }

    let mut surface = CairoSurface::new(
        config.output.width,
        config.output.height,
        config.background()?,
    )?;
    plan.execute(&mut surface)?;

    let path = output::resolve_output_path(cli.output.as_deref(), &config.output)
        .context("Failed to prepare output location")?;
    surface.write_png(&path)?;
    println!("{}", path.display());

    Ok(())
}

/// Command-line flags take precedence over the config file.
///
/// Colors given on the command line must parse; numeric values are clamped
/// afterwards by [`Config::validate_and_clamp`].
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(breaks) = cli.breaks {
        config.shading.break_count = breaks;
    }
    if let Some(color) = &cli.shade_color {
        config.shading.shade_color = checked_color(color)?;
    }
    if let Some(color) = &cli.line_color {
        config.shading.line_color = checked_color(color)?;
    }
    if let Some(width) = cli.line_width {
        config.shading.line_width = width;
    }
    if let Some(label) = &cli.xlab {
        config.labels.x_label = label.clone();
    }
    if let Some(label) = &cli.ylab {
        config.labels.y_label = label.clone();
    }
    if let Some(title) = &cli.main {
        config.labels.title = Some(title.clone());
    }
    if let Some(width) = cli.width {
        config.output.width = width;
    }
    if let Some(height) = cli.height {
        config.output.height = height;
    }
    Ok(())
}

fn checked_color(name: &str) -> Result<ColorSpec> {
    let spec = ColorSpec::named(name);
    spec.to_color()?;
    Ok(spec)
}
