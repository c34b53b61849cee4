use anyhow::{Context, Result};
use barchart_rs::sample::{SampleSettings, sample_chart};
use barchart_rs::viz::{self, DluScale, RenderOptions};
use barchart_rs::{BarStyle, ChartStyle, Color, LegendPlacement, Point};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "barchart",
    version,
    about = "Lay out & draw the sample bar chart to SVG, PNG or a JSON display list"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chart to a file (.svg, or bitmap for anything else).
    Render(RenderArgs),
    /// Print the drawing calls of the chart as JSON.
    Commands(ChartArgs),
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Axis origin X in dialog units.
    #[arg(long, default_value_t = 30)]
    start_x: i32,
    /// Axis origin Y in dialog units.
    #[arg(long, default_value_t = 250)]
    start_y: i32,
    /// Dialog base units as WIDTHxHEIGHT (e.g., 8x16).
    #[arg(long, default_value = "8x16")]
    base_units: String,
    /// Draw bars as open outlines instead of hatched rectangles.
    #[arg(long, default_value_t = false)]
    outline: bool,
    /// Axis color as #rrggbb.
    #[arg(long, default_value = "#000000")]
    axis_color: String,
    /// Do not draw the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// Legend anchor LEFT,TOP in chart units relative to the origin (default: automatic).
    #[arg(long)]
    legend_at: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    chart: ChartArgs,
    /// Output file (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Width of the image (default 800).
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Height of the image (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// TrueType font used for bitmap text.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Also write the drawing calls as JSON to this file.
    #[arg(long)]
    commands: Option<PathBuf>,
}

fn parse_pair(s: &str, seps: &[char]) -> Option<(i32, i32)> {
    let (a, b) = s.split_once(seps)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn parse_base_units(s: &str) -> Option<DluScale> {
    let (x, y) = parse_pair(s, &['x', 'X'])?;
    (x > 0 && y > 0).then_some(DluScale::new(x, y))
}

impl ChartArgs {
    fn settings(&self) -> Result<SampleSettings> {
        let legend_placement = match &self.legend_at {
            Some(s) => {
                let (left, top) = parse_pair(s, &[',', ';'])
                    .ok_or_else(|| anyhow::anyhow!("invalid --legend-at, expected LEFT,TOP"))?;
                LegendPlacement::At { left, top }
            }
            None => LegendPlacement::Auto,
        };
        Ok(SampleSettings {
            legend_enabled: !self.no_legend,
            legend_placement,
        })
    }

    fn options(&self, width: u32, height: u32) -> Result<RenderOptions> {
        let scale = parse_base_units(&self.base_units)
            .ok_or_else(|| anyhow::anyhow!("invalid --base-units, expected WIDTHxHEIGHT"))?;
        let axis_color = Color::from_hex(&self.axis_color).context("invalid --axis-color")?;
        Ok(RenderOptions {
            width,
            height,
            start: Point::new(self.start_x, self.start_y),
            scale,
            style: ChartStyle {
                axis_color,
                bar_style: if self.outline {
                    BarStyle::Outline
                } else {
                    BarStyle::Hatched
                },
            },
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Commands(args) => cmd_commands(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let chart = sample_chart(args.chart.settings()?)?;
    let options = args.chart.options(args.width, args.height)?;

    if let Some(font) = args.font.as_deref()
        && !viz::register_sans_serif(Some(font))
    {
        anyhow::bail!("could not load font {}", font.display());
    }

    viz::render_to_file(&chart, &args.out, &options)?;
    eprintln!("Wrote chart to {}", args.out.display());

    if let Some(path) = args.commands.as_ref() {
        let calls = viz::record_chart(&chart, &options);
        let mut f = File::create(path)?;
        f.write_all(serde_json::to_string_pretty(calls.commands())?.as_bytes())?;
        eprintln!(
            "Saved {} drawing calls to {}",
            calls.commands().len(),
            path.display()
        );
    }
    Ok(())
}

fn cmd_commands(args: ChartArgs) -> Result<()> {
    let chart = sample_chart(args.settings()?)?;
    let options = args.options(0, 0)?;
    let calls = viz::record_chart(&chart, &options);
    println!("{}", serde_json::to_string_pretty(calls.commands())?);
    Ok(())
}
