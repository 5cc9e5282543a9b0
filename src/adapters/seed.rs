use crate::domain::Review;
use chrono::DateTime;

/// Fixed demo dataset for the in-memory backend.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        seed(
            "seed-1",
            5.0,
            "Exceeded expectations",
            "Setup took five minutes and it just works.",
            1_704_448_800,
        ),
        seed(
            "seed-2",
            4.0,
            "Solid value",
            "Does what it says. Docs could be better.",
            1_705_917_600,
        ),
        seed(
            "seed-3",
            2.0,
            "Shipping was slow",
            "Product is fine but arrived two weeks late.",
            1_707_300_000,
        ),
    ]
}

fn seed(id: &str, rating: f64, title: &str, comment: &str, created_at: i64) -> Review {
    Review {
        id: id.to_string(),
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        created_at: DateTime::from_timestamp(created_at, 0).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_reviews(), seed_reviews());
        assert_eq!(seed_reviews().len(), 3);
        assert!(seed_reviews().iter().all(|r| (1.0..=5.0).contains(&r.rating)));
    }
}
