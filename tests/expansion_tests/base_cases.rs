use super::*;

#[test]
fn degree_zero() {
  let p = compute_iteratively(0).unwrap();
  assert_eq!(p, Polynomial::identity());
  assert_eq!(p.weight(&Word::empty()), 1);
  insta::assert_snapshot!(p.to_string(), @"d[0]");
}

#[test]
fn degree_one() {
  let p = compute_iteratively(1).unwrap();
  assert_eq!(p.len(), 2);
  assert_eq!(p.weight(&Word::new(vec![0])), 1);
  assert_eq!(p.weight(&Word::new(vec![-1])), 1);
  insta::assert_snapshot!(p.to_string(), @"d[1]+m[0].d[0]");
}

#[test]
fn degree_two() {
  let p = compute_iteratively(2).unwrap();
  insta::assert_snapshot!(p.to_string(), @"d[2]+2*m[0].d[1]+m[0].m[0].d[0]+m[1].d[0]");
  assert_eq!(p.mass(), 5);
}

#[test]
fn degree_three() {
  let p = compute_iteratively(3).unwrap();
  insta::assert_snapshot!(
    p.to_string(),
    @"d[3]+3*m[0].d[2]+3*m[0].m[0].d[1]+m[0].m[0].m[0].d[0]+2*m[0].m[1].d[0]+3*m[1].d[1]+m[1].m[0].d[0]+m[2].d[0]"
  );
}

#[test]
fn compact_style() {
  let p = compute_iteratively(2).unwrap();
  assert_eq!(
    p.display(Style::Compact).to_string(),
    "d[2]+2*m[0].d[1]+m[0].m[0]+m[1]"
  );
  assert_eq!(Polynomial::identity().display(Style::Compact).to_string(), "1");
}
