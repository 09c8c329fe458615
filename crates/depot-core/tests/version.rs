use std::cmp::Ordering;

use depot_core::version::{compare, Version};

#[test]
fn basic_ordering() {
    assert!(Version::parse("1.0") < Version::parse("2.0"));
    assert_eq!(compare("2.0", "1.0"), Ordering::Greater);
}

#[test]
fn three_part_ordering() {
    let v1 = Version::parse("1.0.0");
    let v2 = Version::parse("1.0.1");
    let v3 = Version::parse("1.1.0");
    assert!(v1 < v2);
    assert!(v2 < v3);
}

#[test]
fn trailing_zeros_equal() {
    assert_eq!(Version::parse("1.0"), Version::parse("1.0.0"));
    assert_eq!(compare("1", "1.0.0"), Ordering::Equal);
}

#[test]
fn shorter_version_pads_with_zero() {
    assert_eq!(compare("1.0", "1.0.1"), Ordering::Less);
    assert_eq!(compare("1.0.1", "1.0"), Ordering::Greater);
}

#[test]
fn malformed_segments_stay_orderable() {
    // "b" (98) sorts after "a" (97), both after any small number
    assert_eq!(compare("1.a", "1.b"), Ordering::Less);
    assert_eq!(compare("1.x", "1.5"), Ordering::Greater);
}

#[test]
fn empty_segment_counts_as_zero() {
    assert_eq!(compare("1..2", "1.0.2"), Ordering::Equal);
}
