use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

const ADJECTIVES: [&str; 15] = [
    "Swift", "Grand", "Silent", "Bold", "Clever", "Brave", "Calm", "Eager", "Happy", "Jolly",
    "Kind", "Lively", "Proud", "Silly", "Witty",
];
const NOUNS: [&str; 15] = [
    "Pawn", "Knight", "Bishop", "Rook", "Queen", "King", "Tiger", "Eagle", "Wolf", "Bear", "Lion",
    "Hawk", "Fox", "Owl", "Shark",
];

/// Display names for both sides of a game. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    white: String,
    black: String,
}

impl Names {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
        }
    }
    /// Same seed, same names.
    pub fn seeded(seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        Self {
            white: Self::generate(rng),
            black: Self::generate(rng),
        }
    }
    pub fn white(&self) -> &str {
        &self.white
    }
    pub fn black(&self) -> &str {
        &self.black
    }
    fn generate(rng: &mut SmallRng) -> String {
        format!(
            "{} {} #{}",
            ADJECTIVES.choose(rng).expect("non empty adjectives"),
            NOUNS.choose(rng).expect("non empty nouns"),
            rng.random_range(0..100)
        )
    }
}
