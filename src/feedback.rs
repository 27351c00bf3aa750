// Guest feedback after the stay

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::guest::GuestId;
use crate::validation::valid_rating;

// Star rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = BookingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(BookingError::InvalidRating(value.to_string()))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !valid_rating(s) {
            return Err(BookingError::InvalidRating(s.to_string()));
        }
        // valid_rating guarantees a single significant digit in 1..=5
        let digit = s.trim_start_matches('0').as_bytes()[0] - b'0';
        Rating::try_from(digit)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    guest: GuestId,
    rating: Rating,
    comments: String,
}

impl Feedback {
    pub fn new(guest: GuestId, rating: Rating, comments: impl Into<String>) -> Self {
        Self {
            guest,
            rating,
            comments: comments.into(),
        }
    }

    pub fn guest(&self) -> GuestId {
        self.guest
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn summary(&self, guest_name: &str) -> String {
        format!(
            "Feedback from {}: {} - {}",
            guest_name, self.rating, self.comments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", Some(1); "#1 lowest")]
    #[test_case("5", Some(5); "#2 highest")]
    #[test_case("004", Some(4); "#3 leading zeros")]
    #[test_case("0", None; "#4 zero")]
    #[test_case("6", None; "#5 six")]
    #[test_case("four", None; "#6 word")]
    fn test_rating_from_str(input: &str, expected: Option<u8>) {
        let parsed = input.parse::<Rating>().ok().map(Rating::value);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_rating_try_from_bounds() {
        assert!(Rating::try_from(0).is_err());
        assert_eq!(Rating::try_from(3).unwrap().value(), 3);
        assert!(Rating::try_from(6).is_err());
    }

    #[test]
    fn test_rating_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&Rating::try_from(4).unwrap()).unwrap(), "4");
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_feedback_summary() {
        let feedback = Feedback::new(GuestId(0), Rating::try_from(5).unwrap(), "Great stay");
        assert_eq!(feedback.rating().value(), 5);
        assert_eq!(feedback.comments(), "Great stay");
        assert_eq!(
            feedback.summary("Jane Doe"),
            "Feedback from Jane Doe: 5/5 - Great stay"
        );
    }
}
