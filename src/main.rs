//! Devsim - Semiconductor Device Curve Generator
//!
//! Renders educational device-physics curves to plot images or CSV files.
//!
//! # Usage
//!
//! ```bash
//! devsim mosfet --vgs 2.0 --kn 120 -o mosfet.png
//! devsim junction --is-sat 1e-9 --csv -o junction.csv
//! devsim doping --nd 10 --na 50 -o profile.svg
//! devsim all -o curves/
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use devsim_core::{
    curve::Curve,
    devices::{doping, junction, mosfet},
    error::Result,
    output::{export_csv, render, PlotConfig},
    params::{DopingParams, JunctionParams, MosfetParams},
};

/// Semiconductor device curve generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the MOSFET I-V curve
    Mosfet(MosfetArgs),
    /// Generate the PN-junction I-V curve
    Junction(JunctionArgs),
    /// Generate the step doping profile
    Doping(DopingArgs),
    /// Generate all three curves with default file names
    All(AllArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file path (.png or .svg; any path with --csv)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Export raw samples as CSV instead of rendering a plot
    #[arg(long)]
    csv: bool,

    /// Plot width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,
}

impl OutputArgs {
    fn plot_config(&self, grid: bool) -> PlotConfig {
        PlotConfig {
            width: self.width,
            height: self.height,
            grid,
        }
    }

    fn write(&self, curve: &Curve, grid: bool) -> Result<()> {
        if self.csv {
            export_csv(curve, &self.output)
        } else {
            render(curve, &self.output, &self.plot_config(grid))
        }
    }
}

#[derive(Args, Debug)]
struct MosfetArgs {
    /// Gate-source voltage Vgs (V), range [0, 5]
    #[arg(long, default_value_t = 1.0)]
    vgs: f64,

    /// Drain-source sweep endpoint Vds_max (V), range [0, 5]
    #[arg(long, default_value_t = 2.0)]
    vds_max: f64,

    /// Threshold voltage Vth (V), range [0.5, 2]
    #[arg(long, default_value_t = 1.0)]
    vth: f64,

    /// Transconductance parameter Kn (mA/V^2), range [50, 500]
    #[arg(long, default_value_t = 100.0)]
    kn: f64,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct JunctionArgs {
    /// Reverse saturation current Is (A), range [1e-12, 1e-6]
    #[arg(long = "is-sat", default_value_t = 1e-12)]
    is_sat: f64,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct DopingArgs {
    /// Donor concentration Nd (10^15 cm^-3), range [1, 100]
    #[arg(long, default_value_t = 10)]
    nd: u32,

    /// Acceptor concentration Na (10^15 cm^-3), range [1, 100]
    #[arg(long, default_value_t = 10)]
    na: u32,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Output directory for mosfet.png, junction.png, and doping.png
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Export raw samples as CSV files instead of plots
    #[arg(long)]
    csv: bool,
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Mosfet(args) => {
            let params = MosfetParams::new(args.vgs, args.vds_max, args.vth, args.kn)?;
            args.out.write(&mosfet::iv_curve(&params), false)
        }
        Command::Junction(args) => {
            // The junction figure is the one reference plot drawn with a grid
            let params = JunctionParams::new(args.is_sat)?;
            args.out.write(&junction::iv_curve(&params), true)
        }
        Command::Doping(args) => {
            let params = DopingParams::new(args.nd, args.na)?;
            args.out.write(&doping::profile(&params), false)
        }
        Command::All(args) => {
            let ext = if args.csv { "csv" } else { "png" };
            let curves = [
                ("mosfet", mosfet::iv_curve(&MosfetParams::default()), false),
                (
                    "junction",
                    junction::iv_curve(&JunctionParams::default()),
                    true,
                ),
                ("doping", doping::profile(&DopingParams::default()), false),
            ];
            for (name, curve, grid) in &curves {
                let path = args.output.join(format!("{name}.{ext}"));
                if args.csv {
                    export_csv(curve, &path)?;
                } else {
                    let config = if *grid {
                        PlotConfig::default().with_grid()
                    } else {
                        PlotConfig::default()
                    };
                    render(curve, &path, &config)?;
                }
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
