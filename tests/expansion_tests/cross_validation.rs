use super::*;

#[test]
fn direct_and_iterative_agree() {
  for n in 0..=12 {
    let direct = compute_directly(n).unwrap();
    let iterative = compute_iteratively(n).unwrap();
    assert!((&iterative - &direct).is_zero(), "degree {n} differs");
    assert_eq!(direct, iterative);
  }
}

#[test]
fn cross_check_report() {
  let check =
    leibniz::CrossCheck::run(6, true, leibniz::NormalizerOptions::default())
      .unwrap();
  assert!(check.is_consistent());
  let report = check.report(Style::Explicit).to_string();
  assert!(report.contains("64 terms"));
  assert!(report.contains("Elapsed time to compute 6 directly"));
  assert!(report.contains("Elapsed time to compute 6 iteratively"));
  assert!(report.contains("Difference: 0"));
  assert!(!report.contains("MISMATCH"));
}

#[test]
fn shared_normalizer_counts_every_call() {
  let mut normalizer = Normalizer::default();
  let direct = enumerate_direct(&mut normalizer, 3).unwrap();
  let after_direct = normalizer.stats().calls;
  // 8 raw words plus one call per commutator branch.
  assert_eq!(after_direct, direct.mass() as u64);

  normalizer.reset_stats();
  differentiate(&mut normalizer, &Polynomial::identity(), 3).unwrap();
  assert!(normalizer.stats().calls > 0);
  assert!(normalizer.stats().max_depth <= 3);
}
