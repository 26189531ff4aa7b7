use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{ArgAction, Parser, ValueEnum};
use leibniz::check::CrossCheck;
use leibniz::sink::{WrappingWriter, DEFAULT_WRAP};
use leibniz::{differentiate, Normalizer, NormalizerOptions, Polynomial, Style};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Normal-ordered expansion of (D + M)^n
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Degree of the expansion
  n: u32,

  /// Also expand by direct enumeration and compare both results
  #[arg(long)]
  check: bool,

  /// Report every degree from this one up to N
  #[arg(long, value_name = "M")]
  from: Option<u32>,

  /// How words are printed
  #[arg(long, value_enum, default_value_t = CliStyle::Explicit)]
  style: CliStyle,

  /// Write the polynomial to this file instead of stdout
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Wrap output lines after this many characters (0 disables wrapping)
  #[arg(long, value_name = "WIDTH", default_value_t = DEFAULT_WRAP)]
  wrap: usize,

  /// Log every rewrite step of the normalizer
  #[arg(long)]
  trace: bool,

  /// Increase log verbosity
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliStyle {
  /// Words ending in m[...] get a trailing .d[0]
  Explicit,
  /// No trailing .d[0]
  Compact,
}

impl From<CliStyle> for Style {
  fn from(style: CliStyle) -> Self {
    match style {
      CliStyle::Explicit => Style::Explicit,
      CliStyle::Compact => Style::Compact,
    }
  }
}

fn init_logger(cli: &Cli) {
  let level = if cli.trace {
    LevelFilter::Trace
  } else {
    match cli.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      _ => LevelFilter::Debug,
    }
  };
  let _ = TermLogger::init(
    level,
    Config::default(),
    TerminalMode::Stderr,
    ColorChoice::Auto,
  );
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logger(&cli);

  let options = NormalizerOptions { trace: cli.trace };
  let style = Style::from(cli.style);

  if let Some(first) = cli.from {
    if first > cli.n {
      bail!("--from {} exceeds degree {}", first, cli.n);
    }
  }

  let sink: Box<dyn Write> = match &cli.output {
    Some(path) => Box::new(
      File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?,
    ),
    None => Box::new(io::stdout().lock()),
  };
  let mut out = WrappingWriter::with_width(sink, cli.wrap);

  if cli.check || cli.from.is_some() {
    let first = cli.from.unwrap_or(cli.n);
    info!(
      "benchmark of degrees {}..={} started at {}",
      first,
      cli.n,
      Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    for n in first..=cli.n {
      let check = CrossCheck::run(n, cli.check, options)?;
      write!(out, "{}", check.report(style))?;
      out.flush()?;
    }
  } else {
    let mut normalizer = Normalizer::new(options);
    let poly = differentiate(&mut normalizer, &Polynomial::identity(), cli.n)?;
    let stats = normalizer.stats();
    debug!(
      "degree {}: {} terms, {} normalizer calls, max depth {}",
      cli.n,
      poly.len(),
      stats.calls,
      stats.max_depth
    );
    writeln!(out, "{}", poly.display(style))?;
    out.flush()?;
  }

  if let Some(path) = &cli.output {
    info!("output of degree {} written to {}", cli.n, path.display());
  }
  Ok(())
}
