use super::*;

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"zara");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'z');
    b.write_bytes(b"ara");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn negative_zero_hashes_like_zero() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn strings_are_length_prefixed() {
    let mut a = Fnv1a64::new_default();
    a.write_str("ab");
    a.write_str("c");
    let mut b = Fnv1a64::new_default();
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());
}
