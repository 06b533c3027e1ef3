//! Rating aggregate arithmetic.

/// Computes a book's aggregate from the full set of its review ratings.
///
/// Returns `(average_rating, total_reviews)`: the mean rating rounded to
/// 1 decimal place, or 0 when there are no reviews. The result is always
/// written as an absolute value, so recomputation converges even when two
/// writers interleave.
pub fn compute_aggregate(ratings: &[i32]) -> (f64, i32) {
    let total = ratings.len() as i32;
    if total == 0 {
        return (0.0, 0);
    }

    let sum: i32 = ratings.iter().sum();
    let average = sum as f64 / total as f64;
    ((average * 10.0).round() / 10.0, total)
}
