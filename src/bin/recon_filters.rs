use clap::*;

use recon_filters::core::imageio::*;
use recon_filters::core::prelude::*;
use recon_filters::filters::*;
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Filter kernel: box, triangle, gaussian, mitchell or lanczos.
    #[arg(value_name = "filter")]
    pub name: String,

    /// Radius of the support along x.
    #[arg(long, value_name = "radius")]
    pub xwidth: Option<Float>,

    /// Radius of the support along y.
    #[arg(long, value_name = "radius")]
    pub ywidth: Option<Float>,

    /// Gaussian falloff.
    #[arg(long)]
    pub alpha: Option<Float>,

    /// Mitchell-Netravali B.
    #[arg(short = 'B', long = "b")]
    pub b: Option<Float>,

    /// Mitchell-Netravali C.
    #[arg(short = 'C', long = "c")]
    pub c: Option<Float>,

    /// Lanczos window width.
    #[arg(long)]
    pub tau: Option<Float>,

    /// JSON file with filter parameters. Command line values take precedence.
    #[arg(short, long, value_name = "file.json", env = "RECON_FILTER_PARAMS")]
    pub params: Option<PathBuf>,

    /// Sample counts used for the normalization estimate.
    #[arg(short, long, value_delimiter = ',', value_name = "n,n,...", default_value = "1024")]
    pub samples: Vec<usize>,

    /// Print a tabulated quadrant of the kernel with the given width.
    #[arg(long, value_name = "width")]
    pub table: Option<usize>,

    /// Write a grayscale PNG of the kernel over its support.
    #[arg(long, value_name = "file.png")]
    pub image: Option<PathBuf>,

    /// Image resolution in pixels.
    #[arg(long, value_name = "num", default_value = "64")]
    pub resolution: usize,

    /// Print the report as JSON.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    /// Suppress all text output other than error messages.
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct NormalizationEntry {
    samples: usize,
    factor: Float,
}

#[derive(Debug, Serialize)]
struct FilterReport {
    name: String,
    xradius: Float,
    yradius: Float,
    center: Float,
    normalization: Vec<NormalizationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Vec<Vec<Float>>>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn load_params(opts: &CommandOptions) -> Result<ParamSet, FilterError> {
    let mut params = match opts.params.as_ref() {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            ParamSet::from_json(&text)?
        }
        None => ParamSet::new(),
    };
    let overrides = [
        ("xwidth", opts.xwidth),
        ("ywidth", opts.ywidth),
        ("alpha", opts.alpha),
        ("B", opts.b),
        ("C", opts.c),
        ("tau", opts.tau),
    ];
    for (key, value) in overrides.iter() {
        if let Some(v) = value {
            params.add_float(key, *v);
        }
    }
    return Ok(params);
}

fn make_report(opts: &CommandOptions, filter: &Arc<dyn Filter>) -> FilterReport {
    let f = filter.as_ref();
    let normalization = opts
        .samples
        .par_iter()
        .map(|&n| NormalizationEntry {
            samples: n,
            factor: compute_normalization_factor(f, n),
        })
        .collect();
    let table = opts.table.map(|width| {
        let table = FilterTable::new(f, width);
        table
            .values()
            .chunks(table.width())
            .map(|row| row.to_vec())
            .collect()
    });
    FilterReport {
        name: opts.name.clone(),
        xradius: f.get_xradius(),
        yradius: f.get_yradius(),
        center: f.evaluate(0.0, 0.0),
        normalization,
        table,
    }
}

fn print_report(report: &FilterReport) {
    println!("filter: {}", report.name);
    println!("radius: ({}, {})", report.xradius, report.yradius);
    println!("evaluate(0, 0): {}", report.center);
    for entry in report.normalization.iter() {
        println!(
            "normalization factor [{} samples]: {}",
            entry.samples, entry.factor
        );
    }
    if let Some(table) = report.table.as_ref() {
        println!("table:");
        for row in table.iter() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:9.6}", v)).collect();
            println!("  {}", cells.join(" "));
        }
    }
}

fn run(opts: &CommandOptions) -> Result<(), FilterError> {
    let params = load_params(opts)?;
    let filter = create_filter(&opts.name, &params)?;
    let report = make_report(opts, &filter);

    if let Some(path) = opts.image.as_ref() {
        write_filter_image(filter.as_ref(), opts.resolution, path)?;
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !opts.quiet {
        print_report(&report);
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    if let Err(e) = run(&opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
