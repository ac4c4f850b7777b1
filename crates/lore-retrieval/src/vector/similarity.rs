/// Dot product of two pre-normalized vectors, equal to their cosine similarity.
///
/// Accumulates in f64. Returns `None` when lengths differ.
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
