pub mod chat;
pub mod facts;
pub mod leaderboard;
pub mod question;
pub mod session;

pub use chat::{ChatMessage, ChatRole};
pub use facts::FactJourney;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use question::{Difficulty, QuizQuestion};
pub use session::{AnswerOutcome, QuizSession};
