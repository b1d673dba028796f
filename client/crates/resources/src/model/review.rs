//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};
use crate::model::datetime;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewID")]
    pub review_id: i64,
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "datetime::option::deserialize", skip_serializing)]
    pub date: Option<DateTime<Utc>>,
}

/// Body of `POST /Review` and `PUT /Review/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDraft {
    #[serde(rename = "hotelID")]
    pub hotel_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub rating: i32,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> ResourceResult<()> {
        if self.comment.trim().is_empty() {
            return Err(ResourceError::validation(
                "Please provide a comment for your review.",
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ResourceError::validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(())
    }
}

/// Mean rating, `None` without reviews
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    Some(total as f64 / reviews.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: i32, comment: &str) -> ReviewDraft {
        ReviewDraft {
            hotel_id: 1,
            user_id: 2,
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft(5, "Lovely stay").validate().is_ok());
        assert!(draft(5, "   ").validate().is_err());
        assert!(draft(0, "ok").validate().is_err());
        assert!(draft(6, "ok").validate().is_err());
    }

    #[test]
    fn test_review_from_api_json() {
        let review: Review = serde_json::from_str(
            r#"{"reviewID":1,"hotelID":3,"userID":9,"rating":4,"comment":"Nice","date":"2025-01-02T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(review.rating, 4);
        assert!(review.date.is_some());

        let without_date: Review =
            serde_json::from_str(r#"{"reviewID":2,"hotelID":3,"userID":9,"rating":2}"#).unwrap();
        assert_eq!(without_date.date, None);
    }

    #[test]
    fn test_average_rating() {
        let mut a: Review =
            serde_json::from_str(r#"{"reviewID":1,"hotelID":3,"userID":9,"rating":4}"#).unwrap();
        assert_eq!(average_rating(&[]), None);
        let b = Review {
            rating: 5,
            ..a.clone()
        };
        a.rating = 2;
        assert_eq!(average_rating(&[a, b]), Some(3.5));
    }
}
