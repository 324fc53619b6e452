//! Cosine similarity over f64 vectors.

/// `dot(a, b) / (|a| * |b|)` in double precision.
///
/// Both vectors must have the same length. An all-zero vector makes the
/// denominator zero and the result follows IEEE-754 zero division (NaN
/// for two zero vectors); the degenerate value is returned as-is rather
/// than special-cased.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
