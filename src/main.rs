use anyhow::{bail, Result};
use argh::FromArgs;
use normdist::load::*;
use normdist::stats::*;
use std::io::{prelude::*, BufWriter};
use std::str::FromStr;

#[derive(FromArgs)]
/// NORMDIST evaluates the density, the cumulative distribution, or the
/// error function of a normal distribution at the given points.
struct Config {
    #[argh(option, default = "default_mean()")]
    /// mean of the distribution
    pub mean: f64,

    #[argh(option, default = "default_stddev()")]
    /// standard deviation of the distribution
    pub stddev: f64,

    #[argh(option, short = 'f', default = "Function::Cdf")]
    /// function to evaluate: pdf, cdf, or erf
    pub function: Function,

    #[argh(switch)]
    /// reject a standard deviation that is not a finite positive number
    pub validate: bool,

    #[argh(option)]
    /// consider only the given number of lines from the input file
    pub prefix: Option<usize>,

    #[argh(option, short = 'p')]
    /// path to a file with one point per line, possibly gzipped
    pub path: Option<String>,

    #[argh(positional)]
    /// points at which to evaluate the function, after `--` if negative
    pub points: Vec<String>,
}

fn default_mean() -> f64 {
    0.0
}

fn default_stddev() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Function {
    Pdf,
    Cdf,
    Erf,
}

impl Function {
    fn name(&self) -> &'static str {
        match self {
            Function::Pdf => "pdf",
            Function::Cdf => "cdf",
            Function::Erf => "erf",
        }
    }

    fn eval(&self, dist: &NormalDistribution, x: f64) -> f64 {
        match self {
            Function::Pdf => dist.pdf(x),
            Function::Cdf => dist.cdf(x),
            Function::Erf => erf(x),
        }
    }
}

impl FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Function::Pdf),
            "cdf" => Ok(Function::Cdf),
            "erf" => Ok(Function::Erf),
            other => Err(format!("unknown function {:?}, expected pdf, cdf, or erf", other)),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // read configuration
    let config: Config = argh::from_env();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Evaluates the configured function at every point, file points first,
/// and writes the results as CSV to `out`.
fn run<W: Write>(config: &Config, mut out: W) -> Result<()> {
    let dist = if config.validate {
        NormalDistribution::try_new(config.mean, config.stddev)?
    } else {
        NormalDistribution::new(config.mean, config.stddev)
    };
    log::info!("evaluating {} of {}", config.function.name(), dist);

    let mut points = match &config.path {
        Some(path) => load_points(path, config.prefix)?,
        None if config.prefix.is_some() => bail!("--prefix requires --path"),
        None => Vec::new(),
    };
    points.extend(parse_points(&config.points)?);
    if points.is_empty() {
        bail!("no points given, pass them as arguments or with --path");
    }

    writeln!(out, "x,{}", config.function.name())?;
    for x in points {
        writeln!(out, "{},{}", x, config.function.eval(&dist, x))?;
    }
    Ok(())
}
