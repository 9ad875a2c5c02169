use super::*;

#[test]
fn format_size_bytes_below_one_kib() {
    assert_eq!(format_size(0.0), "0.0 B");
    assert_eq!(format_size(512.0), "512 B");
    assert_eq!(format_size(9.0), "9.0 B");
}

#[test]
fn format_size_scales_units() {
    assert_eq!(format_size(1024.0), "1.0 KB");
    assert_eq!(format_size(4300.8), "4.2 KB");
    assert_eq!(format_size(1024.0 * 1024.0), "1.0 MB");
    assert_eq!(format_size(128.0 * 1024.0 * 1024.0), "128 MB");
}

#[test]
fn format_size_caps_at_gb() {
    let two_tib = 2.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0;
    assert_eq!(format_size(two_tib), "2048 GB");
}

#[test]
fn format_size_one_decimal_below_ten_units() {
    assert_eq!(format_size(9.9 * 1024.0), "9.9 KB");
    assert_eq!(format_size(10.0 * 1024.0), "10 KB");
}

#[test]
fn format_size_non_finite_is_dash() {
    assert_eq!(format_size(f64::NAN), "-");
    assert_eq!(format_size(f64::INFINITY), "-");
}
