use serde::{Deserialize, Serialize};
use std::fmt;

/// Star rating of a template
///
/// # Invariants
/// - Between 0 and 5 inclusive (0 means unrated)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest star count
    pub const MAX: u8 = 5;

    /// Creates a new Rating value object
    ///
    /// # Example
    /// ```
    /// use promptforge_api::domain::template::Rating;
    ///
    /// assert_eq!(Rating::new(4).unwrap().stars(), 4);
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(stars: i64) -> Result<Self, String> {
        if !(0..=i64::from(Self::MAX)).contains(&stars) {
            return Err(format!(
                "Rating must be between 0 and {}, got {}",
                Self::MAX,
                stars
            ));
        }
        Ok(Rating(stars as u8))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(stars: i64) -> Result<Self, Self::Error> {
        Rating::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
