use std::fmt;

/// Symbol value of an undifferentiated multiplier, `m[0]`.
pub const M0: i32 = 0;

/// Symbol value of a single pending differentiation, `d[1]`.
pub const D1: i32 = -1;

/// True if the symbol is a multiplier `m[idx]` (including its derivatives).
pub fn is_m(symbol: i32) -> bool {
  symbol >= 0
}

/// True if the symbol is a pending differentiation `d[mag]`.
pub fn is_d(symbol: i32) -> bool {
  symbol < 0
}

/// How words are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
  /// Every word ends with an explicit differentiation order, `.d[0]` when
  /// nothing is pending.
  #[default]
  Explicit,
  /// Words ending in a multiplier carry no `.d[0]` suffix.
  Compact,
}

/// Ordered sequence of `m`/`d` symbols.
///
/// Non-negative entries are multipliers carrying their derivative index,
/// negative entries are pending differentiations carrying their magnitude.
/// Ordering is lexicographic over the raw integers, which fixes the order
/// in which polynomial terms are printed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Word(Vec<i32>);

impl Word {
  pub fn new(symbols: Vec<i32>) -> Self {
    Word(symbols)
  }

  /// The empty word, i.e. the identity.
  pub fn empty() -> Self {
    Word(Vec::new())
  }

  /// Raw word of length `n` for the `bits`-th term of `(D + M)^n`.
  ///
  /// Bit `j` set maps to `m[0]` at position `j`, unset maps to `d[1]`.
  pub fn from_bits(bits: u64, n: u32) -> Self {
    Word(
      (0..n)
        .map(|j| if (bits >> j) & 1 == 1 { M0 } else { D1 })
        .collect(),
    )
  }

  /// New word with `symbol` inserted at the front.
  pub fn prepend(&self, symbol: i32) -> Self {
    let mut symbols = Vec::with_capacity(self.0.len() + 1);
    symbols.push(symbol);
    symbols.extend_from_slice(&self.0);
    Word(symbols)
  }

  pub fn symbols(&self) -> &[i32] {
    &self.0
  }

  pub(crate) fn symbols_mut(&mut self) -> &mut Vec<i32> {
    &mut self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// True if no `d` precedes an `m`: multipliers first, then at most one
  /// trailing differentiation.
  pub fn is_canonical(&self) -> bool {
    match self.0.iter().position(|&s| is_d(s)) {
      None => true,
      Some(first_d) => first_d == self.0.len() - 1,
    }
  }

  /// Order of differentiation still pending on the right, 0 when the word
  /// ends with a multiplier.
  pub fn pending_order(&self) -> u32 {
    match self.0.last() {
      Some(&s) if is_d(s) => s.unsigned_abs(),
      _ => 0,
    }
  }

  /// Renders the word with the given style.
  pub fn display(&self, style: Style) -> WordDisplay<'_> {
    WordDisplay { word: self, style }
  }
}

pub struct WordDisplay<'a> {
  word: &'a Word,
  style: Style,
}

impl fmt::Display for WordDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let symbols = self.word.symbols();
    if symbols.is_empty() {
      return match self.style {
        Style::Explicit => write!(f, "d[0]"),
        Style::Compact => write!(f, "1"),
      };
    }

    for (i, &s) in symbols.iter().enumerate() {
      if i > 0 {
        write!(f, ".")?;
      }
      let tag = if is_m(s) { "m" } else { "d" };
      write!(f, "{}[{}]", tag, s.unsigned_abs())?;
    }

    if self.style == Style::Explicit && self.word.pending_order() == 0 {
      write!(f, ".d[0]")?;
    }
    Ok(())
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.display(Style::default()), f)
  }
}
