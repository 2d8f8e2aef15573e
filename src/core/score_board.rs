//! Rides ranked by a numeric priority score using bucket sort.
//!
//! Rides with equal scores keep their insertion order after [`ScoreBoard::sort`].

use serde::{Deserialize, Serialize};

use crate::core::{DispatchError, DispatchResult};

/// A ride with a free-form score, as entered at the booking desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRide {
    /// Ride identifier.
    pub ride_id: String,
    /// Pick-up / drop-off notes.
    pub ride_data: String,
    /// Priority score; finite.
    pub score: f64,
}

/// Collection of scored rides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    rides: Vec<ScoredRide>,
}

impl ScoreBoard {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ride. Non-finite scores are rejected.
    pub fn add_ride(
        &mut self,
        ride_id: impl Into<String>,
        ride_data: impl Into<String>,
        score: f64,
    ) -> DispatchResult<()> {
        let ride_id = ride_id.into();
        if !score.is_finite() {
            return Err(DispatchError::InvalidScore(ride_id));
        }
        self.rides.push(ScoredRide {
            ride_id,
            ride_data: ride_data.into(),
            score,
        });
        Ok(())
    }

    /// Reorder rides by ascending score.
    pub fn sort(&mut self) {
        let rides = std::mem::take(&mut self.rides);
        self.rides = bucket_sort(rides);
    }

    /// Rides in their current order.
    pub fn rides(&self) -> &[ScoredRide] {
        &self.rides
    }

    /// Number of rides.
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Whether the board holds no rides.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

/// One bucket per ride; scores are scaled linearly onto bucket indices.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bucket_sort(rides: Vec<ScoredRide>) -> Vec<ScoredRide> {
    let (min, max) = rides
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.score), hi.max(r.score))
        });
    if rides.len() < 2 || min == max {
        return rides;
    }

    let bucket_count = rides.len();
    let span = max - min;
    let mut buckets: Vec<Vec<ScoredRide>> = vec![Vec::new(); bucket_count];
    for ride in rides {
        let scaled = (ride.score - min) / span * (bucket_count - 1) as f64;
        let index = (scaled as usize).min(bucket_count - 1);
        buckets[index].push(ride);
    }

    buckets
        .into_iter()
        .flat_map(|mut bucket| {
            // Stable: equal scores stay in insertion order.
            bucket.sort_by(|a, b| a.score.total_cmp(&b.score));
            bucket
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &ScoreBoard) -> Vec<&str> {
        board.rides().iter().map(|r| r.ride_id.as_str()).collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let mut board = ScoreBoard::new();
        for (id, score) in [("a", 7.5), ("b", 1.0), ("c", 10.0), ("d", 3.2), ("e", 3.1)] {
            board.add_ride(id, "Kigali -> Huye", score).unwrap();
        }
        board.sort();
        assert_eq!(ids(&board), vec!["b", "e", "d", "a", "c"]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut board = ScoreBoard::new();
        for (id, score) in [("x", 5.0), ("y", 2.0), ("z", 5.0), ("w", 2.0), ("v", 9.0)] {
            board.add_ride(id, "", score).unwrap();
        }
        board.sort();
        assert_eq!(ids(&board), vec!["y", "w", "x", "z", "v"]);
    }

    #[test]
    fn test_all_equal_is_untouched() {
        let mut board = ScoreBoard::new();
        board.add_ride("first", "", 4.0).unwrap();
        board.add_ride("second", "", 4.0).unwrap();
        board.sort();
        assert_eq!(ids(&board), vec!["first", "second"]);
    }

    #[test]
    fn test_rejects_nan() {
        let mut board = ScoreBoard::new();
        assert_eq!(
            board.add_ride("bad", "", f64::NAN),
            Err(DispatchError::InvalidScore("bad".into()))
        );
        assert!(board.is_empty());
        board.sort();
    }
}
