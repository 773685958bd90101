use num::Float;

use crate::error::{Error, Result};

#[inline]
fn check_dim<N>(a: &[N], b: &[N]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { left: a.len(), right: b.len() });
    }
    Ok(())
}

#[inline]
fn has_nan<N>(a: &[N], b: &[N]) -> bool
where
    N: Float,
{
    a.iter().chain(b).any(|x| x.is_nan())
}

/// dot積
/// d(a, b) = Σ(a_i * b_i)
///
/// # Errors
/// * `Error::DimensionMismatch` - lengths differ
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> Result<N>
where
    N: Float,
{
    check_dim(a, b)?;
    Ok(a.iter()
        .zip(b)
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y))
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Returns exactly 0 when either vector has zero magnitude, a zero vector
/// included. The result is clamped to `[-1, 1]`.
///
/// Each vector is divided by its largest absolute component before the sums
/// are accumulated, so large or tiny components neither overflow nor
/// underflow. Non-finite input (NaN, infinity) gives NaN.
///
/// # Errors
/// * `Error::DimensionMismatch` - lengths differ
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> Result<N>
where
    N: Float,
{
    check_dim(a, b)?;
    if has_nan(a, b) {
        return Ok(N::nan());
    }
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == N::zero() || scale_b == N::zero() {
        return Ok(N::zero());
    }
    let mut dot = N::zero();
    let mut norm_a = N::zero();
    let mut norm_b = N::zero();
    for (&x, &y) in a.iter().zip(b) {
        // |x|, |y| <= 1
        let x = x / scale_a;
        let y = y / scale_b;
        dot = dot + x * y;
        norm_a = norm_a + x * x;
        norm_b = norm_b + y * y;
    }
    let cos = dot / (norm_a.sqrt() * norm_b.sqrt());
    // NaN は clamp に通さない
    if cos.is_nan() {
        return Ok(cos);
    }
    Ok(cos.max(-N::one()).min(N::one()))
}

/// 最大絶対値
#[inline]
fn max_abs<N>(v: &[N]) -> N
where
    N: Float,
{
    v.iter().fold(N::zero(), |acc, &x| acc.max(x.abs()))
}

/// ユークリッド距離
/// d(a, b) = sqrt(Σ((a_i - b_i)^2))
///
/// The differences are scaled by the largest one before squaring, so the
/// sum does not overflow while the distance itself is representable.
///
/// # Errors
/// * `Error::DimensionMismatch` - lengths differ
pub fn euclidean_distance<N>(a: &[N], b: &[N]) -> Result<N>
where
    N: Float,
{
    check_dim(a, b)?;
    if has_nan(a, b) {
        return Ok(N::nan());
    }
    let scale = a
        .iter()
        .zip(b)
        .fold(N::zero(), |acc, (&x, &y)| acc.max((x - y).abs()));
    if scale == N::zero() || !scale.is_finite() {
        return Ok(scale);
    }
    let sum = a.iter().zip(b).fold(N::zero(), |acc, (&x, &y)| {
        let diff = (x - y) / scale;
        acc + diff * diff
    });
    Ok(scale * sum.sqrt())
}

/// マンハッタン距離
/// d(a, b) = Σ(|a_i - b_i|)
///
/// # Errors
/// * `Error::DimensionMismatch` - lengths differ
pub fn manhattan_distance<N>(a: &[N], b: &[N]) -> Result<N>
where
    N: Float,
{
    check_dim(a, b)?;
    Ok(a.iter()
        .zip(b)
        .fold(N::zero(), |acc, (&x, &y)| acc + (x - y).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn cosine_of_vector_with_itself_is_one() {
        let vectors: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[0.0, 0.0, 5.5], &[-1.0, 0.3, 1e-3]];
        for v in vectors {
            let sim = cosine_similarity(v, v).unwrap();
            assert!((sim - 1.0).abs() < EPS, "cos(v, v) = {sim}");
        }
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = [0.2, 0.0, 0.9, 1.5];
        let b = [1.0, 0.4, 0.0, 0.7];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), cosine_similarity(&b, &a).unwrap());
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        let zero = [0.0f64; 3];
        let v = [1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &v).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero).unwrap(), 0.0);
        let empty: [f64; 0] = [];
        assert_eq!(cosine_similarity(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn cosine_stays_in_range() {
        let a = [1.0, -2.0, 3.0];
        let b = [-1.0, 2.0, -3.0];
        assert!((cosine_similarity(&a, &b).unwrap() + 1.0).abs() < EPS);
        let orthogonal = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert_eq!(orthogonal, 0.0);
    }

    #[test]
    fn cosine_works_for_f32() {
        let v = [0.5f32, 0.25, 4.0];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_large_components_does_not_overflow() {
        let v = [1e200f64, 1e200];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < EPS);
        let w = [-1e200f64, -1e200];
        assert!((cosine_similarity(&v, &w).unwrap() + 1.0).abs() < EPS);

        let v32 = [1e20f32, 0.0];
        assert!((cosine_similarity(&v32, &v32).unwrap() - 1.0).abs() < 1e-6);
        let big = [3e38f32, 3e38, 1.0];
        assert!((cosine_similarity(&big, &big).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_tiny_components_does_not_underflow() {
        let v = [1e-200f64, 3e-200];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < EPS);
        let v32 = [1e-30f32, 1e-30];
        assert!((cosine_similarity(&v32, &v32).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_input_is_nan_not_clamped() {
        let v = [1.0, f64::NAN];
        assert!(cosine_similarity(&v, &v).unwrap().is_nan());
        let inf = [f64::INFINITY, 1.0];
        assert!(cosine_similarity(&inf, &inf).unwrap().is_nan());
        assert!(euclidean_distance(&v, &[1.0, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn euclidean_distance_of_large_components_does_not_overflow() {
        let d = euclidean_distance(&[3e200f64, 0.0], &[0.0, 4e200]).unwrap();
        assert!((d / 5e200 - 1.0).abs() < EPS);
        let d32 = euclidean_distance(&[3e30f32, 0.0], &[0.0, 4e30]).unwrap();
        assert!((d32 / 5e30 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn euclidean_distance_basics() {
        let a = [1.0, 2.0, 3.0];
        assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
        let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < EPS);
        assert_eq!(
            euclidean_distance(&[3.0, 4.0], &[0.0, 0.0]).unwrap(),
            euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn dot_and_manhattan() {
        assert!((dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap() - 32.0).abs() < EPS);
        assert!((manhattan_distance(&[1.0, -1.0], &[-2.0, 3.0]).unwrap() - 7.0).abs() < EPS);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0, 4.0];
        let expected = Error::DimensionMismatch { left: 3, right: 4 };
        assert_eq!(cosine_similarity(&a, &b), Err(expected.clone()));
        assert_eq!(euclidean_distance(&a, &b), Err(expected.clone()));
        assert_eq!(dot(&a, &b), Err(expected.clone()));
        assert_eq!(manhattan_distance(&a, &b), Err(expected));
    }
}
