use crate::scalar::Scalar;

/// Checks that `actual` and `expected` have the same length and that every pair
/// differs by at most `tolerance`.
/// Panics with the first offending index otherwise.
pub fn check_values_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// [`check_values_near`] on the forward values of `actual`.
pub fn check_scalars_near(actual: &[Scalar<'_>], expected: &[f64], tolerance: f64) {
    let values: Vec<f64> = actual.iter().map(|s| s.value()).collect();
    check_values_near(&values, expected, tolerance);
}

/// [`check_values_near`] on the gradients of `actual`.
pub fn check_grads_near(actual: &[Scalar<'_>], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = actual.iter().map(|s| s.grad()).collect();
    check_values_near(&grads, expected, tolerance);
}
