use super::*;

#[test]
fn ceil_mul_matches_fractional_rates() {
    let name = Rate::new(5, 2);
    assert_eq!(name.ceil_mul(0), 0);
    assert_eq!(name.ceil_mul(3), 8);
    assert_eq!(name.ceil_mul(4), 10);

    let cmd = Rate::new(9, 5);
    assert_eq!(cmd.ceil_mul(3), 6);
    assert_eq!(cmd.ceil_mul(10), 18);
    assert_eq!(cmd.ceil_mul(11), 20);
}

#[test]
fn ceil_mul_saturates() {
    assert_eq!(Rate::new(3, 1).ceil_mul(u64::MAX), u64::MAX);
    assert_eq!(Rate::new(1, 0).ceil_mul(7), 0);
}

#[test]
fn ceil_div_counts_reveal_frames() {
    let one_per_frame = Rate::new(1, 1);
    assert_eq!(one_per_frame.ceil_div(17), 17);
    let two_per_frame = Rate::new(2, 1);
    assert_eq!(two_per_frame.ceil_div(5), 3);
}

#[test]
fn interpolate_clamps_both_sides() {
    let input = [30.0, 60.0];
    let output = [0.0, 10.0];
    assert_eq!(interpolate_clamped(0.0, &input, &output), 0.0);
    assert_eq!(interpolate_clamped(45.0, &input, &output), 5.0);
    assert_eq!(interpolate_clamped(90.0, &input, &output), 10.0);
}

#[test]
fn interpolate_handles_multi_segment_envelope() {
    let input = [0.0, 1.0, 3.0, 4.0];
    let output = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(interpolate_clamped(0.5, &input, &output), 0.5);
    assert_eq!(interpolate_clamped(2.0, &input, &output), 1.0);
    assert_eq!(interpolate_clamped(3.5, &input, &output), 0.5);
}

#[test]
fn interpolate_degenerate_segment_takes_right_value() {
    let input = [10.0, 10.0];
    let output = [0.0, 4.0];
    assert_eq!(interpolate_clamped(10.0, &input, &output), 0.0);
    assert_eq!(interpolate_clamped(11.0, &input, &output), 4.0);
}
