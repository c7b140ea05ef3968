use fastnum::decimal::D128;
use vizenc::{Float, Range, finite_extent, safe_max, safe_min, scale_value};

#[test]
fn test_scale_value_with_decimal_ranges() {
    // Remap with D128 (Decimal 128-bit) on both sides
    let from = Range::new(D128::from(0), D128::from(100));
    let to = Range::new(D128::from(0), D128::from(1));

    let scaled = scale_value(D128::from(50), &from, &to);
    assert!((scaled - D128::from(0.5)).abs() < D128::from(1e-10));

    let scaled = scale_value(D128::from(25), &from, &to);
    assert!((scaled - D128::from(0.25)).abs() < D128::from(1e-10));
}

#[test]
fn test_scale_value_decimal_out_of_range() {
    let from = Range::new(D128::from(0), D128::from(100));
    let to = Range::new(D128::from(0), D128::from(1));

    // No clamping with decimals either
    let scaled = scale_value(D128::from(150), &from, &to);
    assert!((scaled - D128::from(1.5)).abs() < D128::from(1e-10));
}

#[test]
fn test_scale_value_decimal_reversed_target() {
    let from = Range::new(D128::from(0), D128::from(10));
    let to = Range::new(D128::from(1), D128::from(0));

    let scaled = scale_value(D128::from(2.5), &from, &to);
    assert!((scaled - D128::from(0.75)).abs() < D128::from(1e-10));
}

#[test]
fn test_safe_extrema_with_decimal() {
    let a = D128::from(3);
    let b = D128::from(5);

    assert_eq!(safe_min(a, b), a);
    assert_eq!(safe_max(a, b), b);

    // NaN decimals are ignored like NaN floats
    let nan: D128 = Float::nan();
    assert_eq!(safe_min(nan, b), b);
    assert_eq!(safe_max(a, nan), a);
}

#[test]
fn test_finite_extent_with_decimal() {
    let nan: D128 = Float::nan();
    let values = [D128::from(7), nan, D128::from(-2), D128::from(4)];

    let extent = finite_extent(&values).unwrap();
    assert_eq!(extent.min, D128::from(-2));
    assert_eq!(extent.max, D128::from(7));
}
