//! Account level badges.

use serde::{Deserialize, Serialize};

/// Badge counts making up an account level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub crown_num: u32,
    pub sun_num: u32,
    pub moon_num: u32,
    pub star_num: u32,
}

impl Level {
    /// Create a new Level.
    pub fn new(crown_num: u32, sun_num: u32, moon_num: u32, star_num: u32) -> Self {
        Self {
            crown_num,
            sun_num,
            moon_num,
            star_num,
        }
    }

    /// Numeric level: a crown is 4 suns, a sun 4 moons, a moon 4 stars.
    pub fn score(&self) -> u64 {
        u64::from(self.crown_num) * 64
            + u64::from(self.sun_num) * 16
            + u64::from(self.moon_num) * 4
            + u64::from(self.star_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score() {
        assert_eq!(Level::default().score(), 0);
        assert_eq!(Level::new(1, 2, 3, 1).score(), 64 + 32 + 12 + 1);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let level: Level =
            serde_json::from_str(r#"{"crownNum":0,"sunNum":1,"moonNum":0,"starNum":2}"#).unwrap();
        assert_eq!(level.score(), 18);
    }
}
