use scalargrad_core::model::Mlp;
use scalargrad_core::{ScalarGradError, Tape};

/// Initializes `env_logger` once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four samples of the micrograd lecture: 3 inputs, target +/-1.
#[allow(dead_code)]
pub fn lecture_samples() -> Vec<(Vec<f64>, f64)> {
    vec![
        (vec![2.0, 3.0, -1.0], 1.0),
        (vec![3.0, -1.0, 0.5], -1.0),
        (vec![0.5, 1.0, 1.0], -1.0),
        (vec![1.0, 1.0, -1.0], 1.0),
    ]
}

/// Initial values of an MLP(3, [4, 4, 1]) in parameter order.
#[allow(dead_code)]
pub const LECTURE_PARAMS: [f64; 41] = [
    0.11, -0.37, -0.76, -0.67, 0.24, 0.03, -0.95, 0.65, 0.88, -0.43, 0.97, 0.45, -0.92, 0.08,
    -0.34, 0.41, -0.01, -0.62, -0.63, 0.34, -0.75, 0.6, 0.06, -0.12, -0.44, 0.02, -0.8, 0.62,
    -0.32, 0.95, 0.06, -0.92, -0.38, 0.58, 0.25, -0.78, 0.97, 0.88, 0.45, -0.17, -0.48,
];

/// MLP(3, [4, 4, 1]) built from [`LECTURE_PARAMS`].
#[allow(dead_code)]
pub fn lecture_mlp(tape: &Tape) -> Result<Mlp, ScalarGradError> {
    Mlp::from_values(tape, 3, &[4, 4, 1], &LECTURE_PARAMS)
}
