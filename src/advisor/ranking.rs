//! Shared ranking shape for both recommenders
//!
//! Score every discovered item, stable-sort by score descending, keep the
//! first `limit`. Equal scores keep their catalog order.

/// Something that can be ranked by a totally ordered score
pub trait Scored {
    type Key: Ord;

    fn score_key(&self) -> Self::Key;
}

/// Stable sort, highest score first
pub fn rank<T: Scored>(mut candidates: Vec<T>) -> Vec<T> {
    // sort_by is stable; comparing b to a gives descending order
    candidates.sort_by(|a, b| b.score_key().cmp(&a.score_key()));
    candidates
}

/// Highest-scoring prefix of an already ranked list
pub fn select_top<T: Clone>(ranked: &[T], limit: usize) -> Vec<T> {
    ranked.iter().take(limit).cloned().collect()
}
