use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use crate::word::{Style, Word};

/// Integer coefficient of a word.
pub type Weight = i64;

/// Weighted sum of distinct canonical words.
///
/// A word that is not stored has weight 0, and zero weights are never
/// stored: [`Polynomial::add_term`] drops an entry as soon as it cancels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
  terms: BTreeMap<Word, Weight>,
}

impl Polynomial {
  pub fn zero() -> Self {
    Polynomial::default()
  }

  /// The empty word with weight 1.
  pub fn identity() -> Self {
    let mut p = Polynomial::zero();
    p.add_term(Word::empty(), 1);
    p
  }

  /// Adds `weight` to the coefficient of `word`.
  pub fn add_term(&mut self, word: Word, weight: Weight) {
    if weight == 0 {
      return;
    }
    match self.terms.entry(word) {
      Entry::Vacant(e) => {
        e.insert(weight);
      }
      Entry::Occupied(mut e) => {
        *e.get_mut() += weight;
        if *e.get() == 0 {
          e.remove();
        }
      }
    }
  }

  /// Drops every zero-weight entry.
  pub fn prune(&mut self) {
    self.terms.retain(|_, w| *w != 0);
  }

  pub fn weight(&self, word: &Word) -> Weight {
    self.terms.get(word).copied().unwrap_or(0)
  }

  /// Number of distinct words.
  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_zero(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn is_empty(&self) -> bool {
    self.is_zero()
  }

  /// Sum of the absolute values of all weights.
  pub fn mass(&self) -> u128 {
    self.terms.values().map(|w| w.unsigned_abs() as u128).sum()
  }

  pub fn iter(&self) -> btree_map::Iter<'_, Word, Weight> {
    self.terms.iter()
  }

  pub fn words(&self) -> btree_map::Keys<'_, Word, Weight> {
    self.terms.keys()
  }

  /// Renders the polynomial with the given word style.
  pub fn display(&self, style: Style) -> PolynomialDisplay<'_> {
    PolynomialDisplay { poly: self, style }
  }
}

impl FromIterator<(Word, Weight)> for Polynomial {
  fn from_iter<I: IntoIterator<Item = (Word, Weight)>>(iter: I) -> Self {
    let mut p = Polynomial::zero();
    for (word, weight) in iter {
      p.add_term(word, weight);
    }
    p
  }
}

impl<'a> IntoIterator for &'a Polynomial {
  type Item = (&'a Word, &'a Weight);
  type IntoIter = btree_map::Iter<'a, Word, Weight>;

  fn into_iter(self) -> Self::IntoIter {
    self.terms.iter()
  }
}

impl AddAssign<&Polynomial> for Polynomial {
  fn add_assign(&mut self, rhs: &Polynomial) {
    for (word, &weight) in rhs {
      self.add_term(word.clone(), weight);
    }
  }
}

impl Add for &Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: Self) -> Polynomial {
    let mut res = self.clone();
    res += rhs;
    res
  }
}

impl Sub for &Polynomial {
  type Output = Polynomial;

  fn sub(self, rhs: Self) -> Polynomial {
    let mut res = self.clone();
    for (word, &weight) in rhs {
      *res.terms.entry(word.clone()).or_insert(0) -= weight;
    }
    res.prune();
    res
  }
}

impl Neg for &Polynomial {
  type Output = Polynomial;

  fn neg(self) -> Polynomial {
    Polynomial {
      terms: self.terms.iter().map(|(w, c)| (w.clone(), -c)).collect(),
    }
  }
}

pub struct PolynomialDisplay<'a> {
  poly: &'a Polynomial,
  style: Style,
}

impl fmt::Display for PolynomialDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.poly.is_zero() {
      return write!(f, "0");
    }

    let mut first = true;
    for (word, &weight) in self.poly {
      if weight < 0 {
        write!(f, "-")?;
      } else if !first {
        write!(f, "+")?;
      }
      first = false;

      let abs = weight.unsigned_abs();
      if abs != 1 {
        write!(f, "{}*", abs)?;
      }
      write!(f, "{}", word.display(self.style))?;
    }
    Ok(())
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.display(Style::default()), f)
  }
}
