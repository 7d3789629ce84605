//! Scalar reduction kernels
//!
//! Every kernel consumes its input strictly in index order (0..n), so
//! results are reproducible even for non-associative floating-point folds.

use crate::dtype::{Element, RealElement};

/// Sum with additive identity `0`
#[inline]
pub fn sum<T: Element, I: Iterator<Item = T>>(values: I) -> T {
    values.fold(T::zero(), |acc, v| acc + v)
}

/// Product with multiplicative identity `1`
#[inline]
pub fn prod<T: Element, I: Iterator<Item = T>>(values: I) -> T {
    values.fold(T::one(), |acc, v| acc * v)
}

/// In-order sum divided by the element count
///
/// Divides in `T` when the count is exactly representable there. Otherwise
/// (a `u8` column longer than 255, an `f16` column longer than 2048) the
/// quotient is formed in `f64` and converted back once, which for integers
/// truncates toward zero like the exact path does.
pub fn mean<T: Element, I: ExactSizeIterator<Item = T>>(values: I) -> T {
    let len = values.len();
    let total = sum(values);
    let n = T::from_f64(len as f64);
    if n.to_f64() == len as f64 {
        total / n
    } else {
        T::from_f64(total.to_f64() / len as f64)
    }
}

/// Left fold seeded by the first element; `None` when empty
#[inline]
pub fn fold_seeded<T, I, F>(mut values: I, f: F) -> Option<T>
where
    I: Iterator<Item = T>,
    F: Fn(T, T) -> T,
{
    let first = values.next()?;
    Some(values.fold(first, f))
}

/// Sum of squares without any rescaling
#[inline]
pub fn squared_norm<T: Element, I: Iterator<Item = T>>(values: I) -> T {
    values.fold(T::zero(), |acc, v| acc + v * v)
}

/// Euclidean norm with a running scale factor
///
/// Keeps `ssq * scale^2 == sum of squares so far` with `scale` equal to the
/// largest magnitude seen, so no intermediate square exceeds 1 relative to
/// the scale.
pub fn stable_norm<T: RealElement, I: Iterator<Item = T>>(values: I) -> T {
    let zero = <T as Element>::zero();
    let one = <T as Element>::one();
    let mut scale = zero;
    let mut ssq = one;

    for v in values {
        if v == zero {
            continue;
        }
        let a = v.abs();
        if a.is_infinite() {
            return a;
        }
        if scale < a {
            let r = scale / a;
            ssq = one + ssq * r * r;
            scale = a;
        } else {
            let r = a / scale;
            ssq = ssq + r * r;
        }
    }

    if scale == zero {
        zero
    } else {
        scale * ssq.sqrt()
    }
}

/// Euclidean norm by Blue's algorithm
///
/// Magnitudes are split into small, medium and large bins. Small and large
/// values are scaled by powers of the radix before squaring so that none of
/// the three partial sums can overflow or underflow, and the bins are merged
/// at the end.
pub fn blue_norm<T: RealElement, I: ExactSizeIterator<Item = T>>(values: I) -> T {
    let zero = <T as Element>::zero();
    let one = <T as Element>::one();
    let n = values.len();
    if n == 0 {
        return zero;
    }

    let radix = T::from_f64(T::RADIX as f64);
    let digits = T::MANTISSA_DIGITS as i32;
    let emin = T::MIN_EXP;
    let emax = T::MAX_EXP;

    // Thresholds and scale factors are exact powers of the radix
    let b1 = radix.powi((emin - 1) / 2);
    let b2 = radix.powi((emax + 1 - digits) / 2);
    let s1m = radix.powi((2 - emin) / 2);
    let s2m = radix.powi(-((emax + digits) / 2));
    let rbig = T::max_value();
    let overflow = rbig * s2m;
    let relerr = T::epsilon().sqrt();
    let ab2 = b2 / T::from_f64(n as f64);

    let mut asml = zero;
    let mut amed = zero;
    let mut abig = zero;
    for v in values {
        let ax = v.abs();
        if ax > ab2 {
            let s = ax * s2m;
            abig = abig + s * s;
        } else if ax < b1 {
            let s = ax * s1m;
            asml = asml + s * s;
        } else {
            amed = amed + ax * ax;
        }
    }

    if abig > zero {
        abig = abig.sqrt();
        if abig > overflow {
            // Result is not representable
            return T::infinity();
        }
        if amed > zero {
            abig = abig / s2m;
            amed = amed.sqrt();
        } else {
            return abig / s2m;
        }
    } else if asml > zero {
        if amed > zero {
            abig = amed.sqrt();
            amed = asml.sqrt() / s1m;
        } else {
            return asml.sqrt() / s1m;
        }
    } else {
        return amed.sqrt();
    }

    let small = abig.min(amed);
    let big = abig.max(amed);
    if small <= big * relerr {
        big
    } else {
        let r = small / big;
        big * (one + r * r).sqrt()
    }
}

/// Euclidean norm as a left fold of `hypot` over magnitudes
pub fn hypot_norm<T: RealElement, I: Iterator<Item = T>>(values: I) -> T {
    fold_seeded(values.map(|v| v.abs()), |acc, v| acc.hypot(v))
        .unwrap_or_else(<T as Element>::zero)
}
