//! Operator sugar over the fallible `xxx_op` functions.
//!
//! `a + b`, `a * 2.0`, `1.0 - a`, ... forward to [`crate::ops`]. The only way
//! these can fail is mixing handles from two different tapes, which is a
//! programming error, so the operator impls panic in that case. Use the
//! `xxx_op` functions directly to get a `Result` instead.

use crate::error::ScalarGradError;
use crate::ops::{
    add_op, div_op, exp_op, mul_op, neg_op, pow_op, rdiv_op, rsub_op, sub_op, tanh_op, Operand,
};
use crate::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<'t> Scalar<'t> {
    /// `self ** exponent`. The exponent must be a finite constant.
    pub fn pow(self, exponent: impl Into<Operand<'t>>) -> Result<Scalar<'t>, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// `self ** n` for an integer exponent, which can never be rejected.
    pub fn powi(self, n: i32) -> Scalar<'t> {
        pow_op(self, n).unwrap_or_else(|e| panic!("Scalar powi failed: {:?}", e))
    }

    pub fn exp(self) -> Scalar<'t> {
        exp_op(self)
    }

    pub fn tanh(self) -> Scalar<'t> {
        tanh_op(self)
    }
}

impl<'t, R: Into<Operand<'t>>> Add<R> for Scalar<'t> {
    type Output = Scalar<'t>;

    fn add(self, rhs: R) -> Self::Output {
        add_op(self, rhs).unwrap_or_else(|e| panic!("Scalar addition failed: {:?}", e))
    }
}

impl<'t, R: Into<Operand<'t>>> Sub<R> for Scalar<'t> {
    type Output = Scalar<'t>;

    fn sub(self, rhs: R) -> Self::Output {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Scalar subtraction failed: {:?}", e))
    }
}

impl<'t, R: Into<Operand<'t>>> Mul<R> for Scalar<'t> {
    type Output = Scalar<'t>;

    fn mul(self, rhs: R) -> Self::Output {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Scalar multiplication failed: {:?}", e))
    }
}

impl<'t, R: Into<Operand<'t>>> Div<R> for Scalar<'t> {
    type Output = Scalar<'t>;

    fn div(self, rhs: R) -> Self::Output {
        div_op(self, rhs).unwrap_or_else(|e| panic!("Scalar division failed: {:?}", e))
    }
}

impl<'t> Neg for Scalar<'t> {
    type Output = Scalar<'t>;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}

// --- Reflected operators (constant on the left) ---

impl<'t> Add<Scalar<'t>> for f64 {
    type Output = Scalar<'t>;

    fn add(self, rhs: Scalar<'t>) -> Self::Output {
        rhs + self
    }
}

impl<'t> Mul<Scalar<'t>> for f64 {
    type Output = Scalar<'t>;

    fn mul(self, rhs: Scalar<'t>) -> Self::Output {
        rhs * self
    }
}

impl<'t> Sub<Scalar<'t>> for f64 {
    type Output = Scalar<'t>;

    fn sub(self, rhs: Scalar<'t>) -> Self::Output {
        rsub_op(self, rhs).unwrap_or_else(|e| panic!("Scalar subtraction failed: {:?}", e))
    }
}

impl<'t> Div<Scalar<'t>> for f64 {
    type Output = Scalar<'t>;

    fn div(self, rhs: Scalar<'t>) -> Self::Output {
        rdiv_op(self, rhs).unwrap_or_else(|e| panic!("Scalar division failed: {:?}", e))
    }
}
