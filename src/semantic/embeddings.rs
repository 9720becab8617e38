//! Text embedding and cosine similarity.

use unicode_segmentation::UnicodeSegmentation;

/// Black-box numeric similarity boundary. Implementations turn text into a
/// fixed-dimension vector; tests substitute stubs through this trait.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f32>;
    fn dimension(&self) -> usize;
}

/// Hashed bag-of-words embedder: each token is hashed into a fixed-dimension
/// term-frequency vector which is then L2-normalized. Cheap, deterministic,
/// and an explicit handle rather than a hidden singleton; construct once and
/// share for the process lifetime.
pub struct HashedEmbedder {
    dimension: usize,
}

impl HashedEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl TextEmbedder for HashedEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for word in text.to_lowercase().unicode_words() {
            if word.len() < 2 {
                continue;
            }
            let bucket = (fnv1a(word) % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Cosine similarity between two vectors; 0.0 for zero-norm or mismatched
/// inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

fn fnv1a(input: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = HashedEmbedder::new(256);
        let text = "python developer with aws experience";
        assert_eq!(embedder.embed(text), embedder.embed(text));
    }

    #[test]
    fn test_identical_texts_score_one() {
        let embedder = HashedEmbedder::default();
        let a = embedder.embed("rust systems programming");
        let similarity = cosine_similarity(&a, &a);
        assert!((similarity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_disjoint_texts_score_near_zero() {
        let embedder = HashedEmbedder::default();
        let a = embedder.embed("kubernetes docker terraform");
        let b = embedder.embed("watercolor painting portraits");
        assert!(cosine_similarity(&a, &b) < 0.2);
    }

    #[test]
    fn test_empty_text_zero_vector() {
        let embedder = HashedEmbedder::default();
        let empty = embedder.embed("");
        let other = embedder.embed("python");
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
    }

    #[test]
    fn test_mismatched_dimensions() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }
}
