//! Prompt text and fixed catalogs for the model-facing features.

pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates space-related quiz questions.";

pub const CHAT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant specializing in space and astronomy.";

pub const FACT_SYSTEM_PROMPT: &str = "You are a knowledgeable assistant specializing in space \
and astronomy. Generate a brief, interesting, and accurate fact about space, astronomy, or \
cosmic phenomena.";

pub const FACT_USER_PROMPT: &str = "Tell me an interesting fact about space.";

/// Subject areas rotated through while generating questions, so a session
/// does not get ten questions about the same thing.
pub const TOPIC_CATALOG: [&str; 10] = [
    "planets",
    "stars",
    "galaxies",
    "space exploration",
    "astronauts",
    "space technology",
    "comets and asteroids",
    "black holes",
    "space agencies",
    "space missions",
];

/// Canned trivia served without a model call.
pub const TRIVIA_FACTS: [&str; 5] = [
    "The largest known star, UY Scuti, is about 1,700 times larger than the Sun.",
    "A day on Venus is longer than its year.",
    "The Great Red Spot on Jupiter has been raging for over 400 years.",
    "There's a planet made almost entirely of diamond.",
    "The footprints on the Moon will be there for 100 million years.",
];
