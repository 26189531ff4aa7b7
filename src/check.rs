//! Cross-validation of the two expansion paths, with timings.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::expansion::{differentiate, enumerate_direct};
use crate::normalizer::{Normalizer, NormalizerOptions};
use crate::polynomial::Polynomial;
use crate::word::Style;
use crate::ExpansionError;

/// Separator printed around each report block.
pub const SEPARATOR: &str =
  "/////////////////////////////////////////////////////////////////";

/// Runs `f` and returns its result together with the wall-clock time it
/// took.
pub fn benchmark<T>(f: impl FnOnce() -> T) -> (T, Duration) {
  let beg = Instant::now();
  let res = f();
  (res, beg.elapsed())
}

/// One timed expansion.
#[derive(Debug, Clone)]
pub struct Timed {
  pub result: Polynomial,
  pub elapsed: Duration,
}

impl Timed {
  fn run(
    options: NormalizerOptions,
    f: impl FnOnce(&mut Normalizer) -> Result<Polynomial, ExpansionError>,
  ) -> Result<Self, ExpansionError> {
    let mut normalizer = Normalizer::new(options);
    let (result, elapsed) = benchmark(|| f(&mut normalizer));
    let stats = normalizer.stats();
    debug!(
      "normalizer: {} calls, max depth {}",
      stats.calls, stats.max_depth
    );
    Ok(Timed {
      result: result?,
      elapsed,
    })
  }
}

/// Outcome of expanding one degree both ways.
#[derive(Debug, Clone)]
pub struct CrossCheck {
  pub n: u32,
  /// Absent when only the iterative path was run.
  pub direct: Option<Timed>,
  pub iterative: Timed,
  /// `iterative - direct`, zero when both paths agree.
  pub difference: Option<Polynomial>,
}

impl CrossCheck {
  /// Expands degree `n` iteratively and, if `with_direct`, also by direct
  /// enumeration, then compares the two.
  pub fn run(
    n: u32,
    with_direct: bool,
    options: NormalizerOptions,
  ) -> Result<Self, ExpansionError> {
    let direct = if with_direct {
      Some(Timed::run(options, |nz| enumerate_direct(nz, n))?)
    } else {
      None
    };
    let iterative = Timed::run(options, |nz| {
      differentiate(nz, &Polynomial::identity(), n)
    })?;

    let difference = direct.as_ref().map(|d| &iterative.result - &d.result);
    if let Some(diff) = &difference {
      if !diff.is_zero() {
        warn!("degree {}: expansions differ in {} terms", n, diff.len());
      }
    }

    Ok(CrossCheck {
      n,
      direct,
      iterative,
      difference,
    })
  }

  /// True unless the direct path ran and disagreed.
  pub fn is_consistent(&self) -> bool {
    self.difference.as_ref().map_or(true, Polynomial::is_zero)
  }

  /// How many times faster the iterative path was.
  pub fn speedup(&self) -> Option<f64> {
    let direct = self.direct.as_ref()?.elapsed.as_secs_f64();
    let iterative = self.iterative.elapsed.as_secs_f64();
    if iterative > 0.0 {
      Some(direct / iterative)
    } else {
      None
    }
  }

  /// Renders the report with the given word style.
  pub fn report(&self, style: Style) -> CrossCheckReport<'_> {
    CrossCheckReport { check: self, style }
  }
}

pub struct CrossCheckReport<'a> {
  check: &'a CrossCheck,
  style: Style,
}

impl fmt::Display for CrossCheckReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let c = self.check;
    writeln!(f, "{} {} {}", SEPARATOR, c.n, SEPARATOR)?;

    if let Some(direct) = &c.direct {
      writeln!(f, "{} terms", direct.result.len())?;
      writeln!(
        f,
        "Elapsed time to compute {} directly: {} s",
        c.n,
        direct.elapsed.as_secs_f64()
      )?;
      writeln!(f, "{} {} {}", SEPARATOR, c.n, SEPARATOR)?;
    }

    writeln!(f, "{} terms", c.iterative.result.len())?;
    writeln!(
      f,
      "Elapsed time to compute {} iteratively: {} s",
      c.n,
      c.iterative.elapsed.as_secs_f64()
    )?;

    if let Some(diff) = &c.difference {
      writeln!(f, "Difference: {}", diff.display(self.style))?;
      if !diff.is_zero() {
        writeln!(f, "MISMATCH")?;
      }
      if let Some(ratio) = c.speedup() {
        writeln!(f, "Improvement: {}", ratio)?;
      }
    }
    Ok(())
  }
}
