//! Vector similarity functions.
//!
//! Components are `f32` on input; accumulation is `f64` so long vectors do
//! not drift.

/// Added to the norm product so near-zero vectors never divide by zero.
pub const SIMILARITY_EPSILON: f64 = 1e-10;

/// Dot product of two equal-length vectors, `None` if lengths differ.
pub fn dot(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .map(|(x, y)| f64::from(*x) * f64::from(*y))
            .sum(),
    )
}

/// L2 (Euclidean) norm of a vector.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity: `dot(a, b) / (|a| * |b| + ε)`.
///
/// Returns `None` when the dimensions differ. A zero vector scores `0.0`
/// against anything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    let dot = dot(a, b)?;
    Some(dot / (l2_norm(a) * l2_norm(b) + SIMILARITY_EPSILON))
}
