//! The two ways of expanding `(D + M)^n`.

use log::debug;

use crate::normalizer::Normalizer;
use crate::polynomial::Polynomial;
use crate::word::{Word, D1, M0};
use crate::ExpansionError;

/// Largest degree whose raw words can be counted by the enumeration loop.
pub const MAX_DIRECT_DEGREE: u32 = 63;

/// Expands `(D + M)^n` by normalizing each of its `2^n` raw words.
///
/// Exponential in `n`; meant as a reference for [`differentiate`].
pub fn enumerate_direct(
  normalizer: &mut Normalizer,
  n: u32,
) -> Result<Polynomial, ExpansionError> {
  if n > MAX_DIRECT_DEGREE {
    return Err(ExpansionError::DegreeTooLarge {
      n,
      max: MAX_DIRECT_DEGREE,
    });
  }

  let mut res = Polynomial::zero();
  for bits in 0..1u64 << n {
    normalizer.normalize(Word::from_bits(bits, n), 1, &mut res)?;
  }
  debug!("direct expansion of degree {}: {} terms", n, res.len());
  Ok(res)
}

/// Multiplies `poly` by `(D + M)` from the left and normalizes.
///
/// Every word of `poly` must be canonical, so only the symbol inserted at
/// the front needs to be moved into place.
pub fn differentiate_once(
  normalizer: &mut Normalizer,
  poly: &Polynomial,
) -> Result<Polynomial, ExpansionError> {
  let mut out = Polynomial::zero();
  for (word, &weight) in poly {
    for symbol in [M0, D1] {
      normalizer.normalize_from(word.prepend(symbol), Some(0), weight, &mut out)?;
    }
  }
  Ok(out)
}

/// Applies [`differentiate_once`] `n` times.
pub fn differentiate(
  normalizer: &mut Normalizer,
  poly: &Polynomial,
  n: u32,
) -> Result<Polynomial, ExpansionError> {
  let mut out = poly.clone();
  for step in 1..=n {
    out = differentiate_once(normalizer, &out)?;
    debug!("iterative expansion, step {}: {} terms", step, out.len());
  }
  Ok(out)
}
