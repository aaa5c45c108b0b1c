use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many entries the leaderboard keeps.
pub const LEADERBOARD_CAP: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub submitted_at: DateTime<Utc>,
}

/// In-memory top-10 list, highest score first. Ties keep insertion order, so
/// an earlier submission ranks above a later one with the same score.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, score: u32) {
        self.entries.push(LeaderboardEntry {
            name: name.into(),
            score,
            submitted_at: Utc::now(),
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_sorted_by_score_descending() {
        let mut board = Leaderboard::new();
        board.record("low", 2);
        board.record("high", 9);
        board.record("mid", 5);

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
    }

    #[test]
    fn leaderboard_is_capped_at_ten() {
        let mut board = Leaderboard::new();
        for i in 0..15u32 {
            board.record(format!("player-{}", i), i);
        }

        assert_eq!(board.entries().len(), LEADERBOARD_CAP);
        assert_eq!(board.entries()[0].score, 14);
        assert_eq!(board.entries()[LEADERBOARD_CAP - 1].score, 5);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.record("first", 7);
        board.record("second", 7);

        assert_eq!(board.entries()[0].name, "first");
        assert_eq!(board.entries()[1].name, "second");
    }
}
