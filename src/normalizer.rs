//! Rewriting of raw `m`/`d` words into canonical form.
//!
//! The only rule is the product rule: a single `d` standing left of a
//! multiplier `m[k]` is replaced by `m[k].d` (the `d` moved one step to the
//! right) plus `m[k+1]` (the pair collapsed into the next derivative).
//! Two adjacent `d` at the end of a word merge into one of summed order.
//! Rewriting stops once every `d` has reached the end of the word.

use log::trace;

use crate::polynomial::{Polynomial, Weight};
use crate::word::{is_d, is_m, Word, D1};
use crate::{invariant_violation, ExpansionError};

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizerOptions {
  /// Log every rewrite step at trace level.
  pub trace: bool,
}

/// Counters collected while normalizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerStats {
  /// Number of rewrite calls, commutator branches included.
  pub calls: u64,
  /// Deepest commutator nesting reached.
  pub max_depth: usize,
}

#[derive(Debug, Default)]
pub struct Normalizer {
  options: NormalizerOptions,
  stats: NormalizerStats,
}

impl Normalizer {
  pub fn new(options: NormalizerOptions) -> Self {
    Normalizer {
      options,
      stats: NormalizerStats::default(),
    }
  }

  pub fn stats(&self) -> NormalizerStats {
    self.stats
  }

  pub fn reset_stats(&mut self) {
    self.stats = NormalizerStats::default();
  }

  /// Normalizes a raw word and adds its canonical terms, each multiplied
  /// by `weight`, into `out`.
  ///
  /// The scan starts just left of the last symbol, so any arrangement of
  /// `m[k]` and `d[1]` symbols is accepted.
  pub fn normalize(
    &mut self,
    word: Word,
    weight: Weight,
    out: &mut Polynomial,
  ) -> Result<(), ExpansionError> {
    self.normalize_from(word, None, weight, out)
  }

  /// Like [`Normalizer::normalize`] with an explicit starting cursor.
  ///
  /// `Some(pos)` assumes that everything right of `pos` is already
  /// canonical and only the prefix up to `pos` still needs rewriting. A word
  /// that breaks this assumption by holding a `d` in front of another
  /// non-final `d` is rejected with [`ExpansionError::InvariantViolation`].
  pub fn normalize_from(
    &mut self,
    word: Word,
    start: Option<usize>,
    weight: Weight,
    out: &mut Polynomial,
  ) -> Result<(), ExpansionError> {
    self.rewrite(word, start, weight, out, 0)
  }

  fn rewrite(
    &mut self,
    mut word: Word,
    start: Option<usize>,
    weight: Weight,
    out: &mut Polynomial,
    depth: usize,
  ) -> Result<(), ExpansionError> {
    self.stats.calls += 1;
    self.stats.max_depth = self.stats.max_depth.max(depth);

    if self.options.trace {
      trace!("{:indent$}{}*{}", "", weight, word, indent = depth);
    }

    let mut pos = match start {
      Some(p) => Some(p.min(word.len().saturating_sub(1))),
      None => word.len().checked_sub(2),
    };

    while let Some(p) = pos {
      if word.len() <= 1 {
        break;
      }
      let last = word.len() - 1;
      let v = word.symbols()[p];

      if is_m(v) || p == last {
        pos = p.checked_sub(1);
        continue;
      }

      if v != D1 {
        return Err(invariant_violation!(
          "normalize",
          word,
          "d[{}] at position {} must be last",
          v.unsigned_abs(),
          p
        ));
      }

      let next = word.symbols()[p + 1];
      let next_is_last = p + 1 == last;

      if is_m(next) {
        if let Some(c) = commutator(&word, p) {
          self.rewrite(c, Some(p), weight, out, depth + 1)?;
        }
        word.symbols_mut().swap(p, p + 1);
        if self.options.trace {
          trace!("{:indent$}swapping {}*{}", "", weight, word, indent = depth);
        }
        // A d that reached the end stays there; the cursor then walks left.
        if !next_is_last {
          pos = Some(p + 1);
        }
      } else {
        debug_assert!(is_d(next));
        if !next_is_last {
          return Err(invariant_violation!(
            "normalize",
            word,
            "next must be last (d at position {} followed by d at {})",
            p,
            p + 1
          ));
        }
        let symbols = word.symbols_mut();
        symbols[p] += next;
        symbols.pop();
      }
    }

    if self.options.trace {
      trace!(
        "{:indent$}adding {} to {} (was {})",
        "",
        weight,
        word,
        out.weight(&word),
        indent = depth
      );
    }
    out.add_term(word, weight);
    Ok(())
  }
}

/// Product-rule term of moving the `d[1]` at `pos` past the multiplier
/// right after it: the pair collapses into that multiplier with its
/// derivative index raised by one.
///
/// Returns `None` unless `pos` holds `d[1]` and `pos + 1` holds an `m`.
pub fn commutator(word: &Word, pos: usize) -> Option<Word> {
  let s = word.symbols();
  let (&d, &m) = (s.get(pos)?, s.get(pos + 1)?);
  if d != D1 || !is_m(m) {
    return None;
  }
  let mut c = Vec::with_capacity(s.len() - 1);
  c.extend_from_slice(&s[..pos]);
  c.push(m + 1);
  c.extend_from_slice(&s[pos + 2..]);
  Some(Word::new(c))
}
