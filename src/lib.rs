use thiserror::Error;

/// Builds an [`ExpansionError::InvariantViolation`] tagged with the
/// location it was raised from.
macro_rules! invariant_violation {
  ($function:expr, $word:expr, $($arg:tt)+) => {
    $crate::ExpansionError::InvariantViolation {
      function: $function,
      line: line!(),
      file: file!(),
      message: format!($($arg)+),
      word: $word,
    }
  };
}
pub(crate) use invariant_violation;

pub mod check;
pub mod expansion;
pub mod normalizer;
pub mod polynomial;
pub mod sink;
pub mod word;

pub use check::CrossCheck;
pub use expansion::{differentiate, differentiate_once, enumerate_direct};
pub use normalizer::{Normalizer, NormalizerOptions, NormalizerStats};
pub use polynomial::{Polynomial, Weight};
pub use word::{Style, Word};

#[derive(Error, Debug)]
pub enum ExpansionError {
  #[error(
    "ERROR in function {function} at line {line} of file {file}: \"{message}\" (word {word})"
  )]
  InvariantViolation {
    function: &'static str,
    line: u32,
    file: &'static str,
    message: String,
    word: Word,
  },
  #[error("degree {n} is too large for direct enumeration (at most {max})")]
  DegreeTooLarge { n: u32, max: u32 },
}

/// Expansion of `(D + M)^n` by enumerating all `2^n` raw words.
pub fn compute_directly(n: u32) -> Result<Polynomial, ExpansionError> {
  let mut normalizer = Normalizer::default();
  enumerate_direct(&mut normalizer, n)
}

/// Expansion of `(D + M)^n` by differentiating the identity `n` times.
pub fn compute_iteratively(n: u32) -> Result<Polynomial, ExpansionError> {
  let mut normalizer = Normalizer::default();
  differentiate(&mut normalizer, &Polynomial::identity(), n)
}
