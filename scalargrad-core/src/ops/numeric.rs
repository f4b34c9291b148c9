//! Overflow-safe scalar kernels shared by the activation functions.
//!
//! Every function with a saturating tail switches to its exact limit once
//! the argument leaves `[-SATURATION_BOUND, SATURATION_BOUND]`, so `exp` is
//! never evaluated on a large-magnitude argument.

use num_traits::Float;

/// Beyond this magnitude sigmoid-like curves are treated as saturated.
pub const SATURATION_BOUND: f64 = 20.0;

/// √(2/π), the GELU tanh-approximation scale.
const GELU_SCALE: f64 = 0.797_884_560_802_865_4;
/// Cubic coefficient of the GELU tanh approximation.
const GELU_CUBIC: f64 = 0.044_715;

#[inline]
fn constant<F: Float>(c: f64) -> F {
    F::from(c).unwrap_or_else(F::nan)
}

/// Returns `true` if `z` lies in the clamped region of [`sigmoid`].
#[inline]
pub fn is_saturated<F: Float>(z: F) -> bool {
    z.abs() > constant(SATURATION_BOUND)
}

/// Logistic function σ(z) = 1 / (1 + e^(−z)).
///
/// Exactly 0 for z < −20 and exactly 1 for z > 20. Inside that range it
/// takes `exp` of the non-positive argument (`e^(−z)` when z > 0, `e^z`
/// otherwise), which can neither overflow nor lose the small tail.
pub fn sigmoid<F: Float>(z: F) -> F {
    let bound = constant::<F>(SATURATION_BOUND);
    if z < -bound {
        F::zero()
    } else if z > bound {
        F::one()
    } else if z > F::zero() {
        F::one() / (F::one() + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (F::one() + ez)
    }
}

/// ln(1 + e^z), equal to `z` once z > 20 (the log term is below 2e-9).
pub fn softplus<F: Float>(z: F) -> F {
    if z > constant(SATURATION_BOUND) {
        z
    } else {
        z.exp().ln_1p()
    }
}

/// Argument of `tanh` in the GELU approximation: √(2/π)(x + 0.044715x³).
#[inline]
fn gelu_inner<F: Float>(x: F) -> F {
    constant::<F>(GELU_SCALE) * (x + constant::<F>(GELU_CUBIC) * x * x * x)
}

/// GELU(x) ≈ 0.5x(1 + tanh(√(2/π)(x + 0.044715x³))).
pub fn gelu<F: Float>(x: F) -> F {
    let u = gelu_inner(x);
    let bound = constant::<F>(SATURATION_BOUND);
    if u > bound {
        x
    } else if u < -bound {
        F::zero()
    } else {
        constant::<F>(0.5) * x * (F::one() + u.tanh())
    }
}

/// Exact derivative of [`gelu`]:
///
/// 0.5(1 + tanh u) + 0.5x(1 − tanh²u)·√(2/π)(1 + 3·0.044715x²)
///
/// In the saturated tails it returns the limits 1 and 0; evaluating the
/// formula there would compute `0 · ∞` for huge |x|.
pub fn gelu_derivative<F: Float>(x: F) -> F {
    let u = gelu_inner(x);
    let bound = constant::<F>(SATURATION_BOUND);
    if u > bound {
        return F::one();
    }
    if u < -bound {
        return F::zero();
    }
    let half = constant::<F>(0.5);
    let t = u.tanh();
    let du_dx =
        constant::<F>(GELU_SCALE) * (F::one() + constant::<F>(3.0 * GELU_CUBIC) * x * x);
    half * (F::one() + t) + half * x * (F::one() - t * t) * du_dx
}
