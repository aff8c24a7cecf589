//! Provides operations on [`f32`] lanes.

use num_traits::Float;

macro_rules! zeroes_with_opposite_signs {
    ($z_1:ident, $z_2:ident) => {
        $z_1 == 0.0 && $z_2 == 0.0 && $z_1.is_sign_positive() == $z_2.is_sign_negative()
    };
}

/// Returns the smaller of two [`f32`] lanes.
///
/// If either operand is *NaN*, that operand is returned (preferring `z_1`), and `-0.0` is
/// considered smaller than `+0.0`.
pub fn f32_min(z_1: f32, z_2: f32) -> f32 {
    if z_1.is_nan() {
        z_1
    } else if z_2.is_nan() {
        z_2
    } else if zeroes_with_opposite_signs!(z_1, z_2) {
        -0.0
    } else {
        z_1.min(z_2)
    }
}

/// Returns the larger of two [`f32`] lanes.
///
/// If either operand is *NaN*, that operand is returned (preferring `z_1`), and `+0.0` is
/// considered larger than `-0.0`.
pub fn f32_max(z_1: f32, z_2: f32) -> f32 {
    if z_1.is_nan() {
        z_1
    } else if z_2.is_nan() {
        z_2
    } else if zeroes_with_opposite_signs!(z_1, z_2) {
        0.0
    } else {
        z_1.max(z_2)
    }
}

/// Like [`f32_min()`], except that a single *NaN* operand is ignored.
pub fn f32_min_num(z_1: f32, z_2: f32) -> f32 {
    if z_1.is_nan() {
        z_2
    } else if z_2.is_nan() {
        z_1
    } else {
        f32_min(z_1, z_2)
    }
}

/// Like [`f32_max()`], except that a single *NaN* operand is ignored.
pub fn f32_max_num(z_1: f32, z_2: f32) -> f32 {
    if z_1.is_nan() {
        z_2
    } else if z_2.is_nan() {
        z_1
    } else {
        f32_max(z_1, z_2)
    }
}

/// Calculates `1 / n`, computed in [`f64`] precision.
pub fn reciprocal_approximation(n: f32) -> f32 {
    if n.is_nan() {
        n
    } else if n == 0.0 {
        if n.is_sign_negative() {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        }
    } else if n.is_infinite() {
        0.0
    } else {
        #[allow(clippy::cast_possible_truncation)]
        {
            (1.0 / f64::from(n)) as f32
        }
    }
}

/// Calculates `1 / sqrt(n)`, computed in [`f64`] precision.
///
/// Negative values other than `-0.0` produce *NaN*.
pub fn reciprocal_sqrt_approximation(n: f32) -> f32 {
    if n.is_nan() {
        n
    } else if n == 0.0 {
        if n.is_sign_negative() {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        }
    } else if n < 0.0 {
        f32::NAN
    } else if n.is_infinite() {
        0.0
    } else {
        #[allow(clippy::cast_possible_truncation)]
        {
            (1.0 / Float::sqrt(f64::from(n))) as f32
        }
    }
}
