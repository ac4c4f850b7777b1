//! Reduction of token-level model output to one sentence vector.

use lore_core::config::Pooling;

/// Pool a `[seq, dims]` row-major hidden-state matrix.
///
/// Mean pooling averages the token vectors whose attention mask is set;
/// CLS pooling takes the first token vector.
pub fn pool(hidden: &[f32], seq: usize, dims: usize, mask: &[i64], pooling: Pooling) -> Vec<f32> {
    if seq == 0 || dims == 0 || hidden.len() < seq * dims {
        return vec![0.0; dims];
    }
    match pooling {
        Pooling::Cls => hidden[..dims].to_vec(),
        Pooling::Mean => {
            let mut pooled = vec![0.0f32; dims];
            let mut counted = 0usize;
            for s in 0..seq {
                if mask.get(s).is_some_and(|&m| m == 0) {
                    continue;
                }
                counted += 1;
                let row = &hidden[s * dims..(s + 1) * dims];
                for (acc, v) in pooled.iter_mut().zip(row) {
                    *acc += v;
                }
            }
            if counted > 0 {
                for v in &mut pooled {
                    *v /= counted as f32;
                }
            }
            pooled
        }
    }
}

/// Scale `v` to unit length in place. Zero vectors are left unchanged.
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
