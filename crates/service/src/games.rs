//! Random game catalogue generator.
//!
//! Nothing is stored: every call draws fresh records from a fixed vocabulary.

use chrono::NaiveDate;
use models::Game;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

/// Number of games served per `GET /games`.
pub const GAMES_PER_REQUEST: usize = 5;

pub const TITLES: [&str; 5] = [
    "Adventure Quest",
    "Mystery Manor",
    "Fantasy World",
    "Space Odyssey",
    "Pirate's Cove",
];

pub const DESCRIPTIONS: [&str; 5] = [
    "An exciting journey awaits you in this thrilling adventure game.",
    "Solve puzzles and uncover secrets in this mysterious game.",
    "A magical world filled with mythical creatures and quests.",
    "Explore the galaxy and face unknown dangers in space.",
    "A pirate-themed game where you search for hidden treasures.",
];

pub const MIN_PRICE: f64 = 5.0;
pub const MAX_PRICE: f64 = 50.0;

fn random_game<R: Rng + ?Sized>(rng: &mut R) -> Game {
    let title = TITLES[rng.gen_range(0..TITLES.len())];
    let description = DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())];
    let price = (rng.gen_range(MIN_PRICE..=MAX_PRICE) * 100.0).round() / 100.0;
    let year = rng.gen_range(2000..=2023);
    let month = rng.gen_range(1..=12);
    // day is capped at 28, so the date exists in every month
    let day = rng.gen_range(1..=28);
    let date_released = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    Game {
        title: title.to_string(),
        description: description.to_string(),
        price,
        date_released,
    }
}

/// Draw `n` independent games. Deterministic for a seeded `rng`.
pub fn generate_random_games<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Game> {
    (0..n).map(|_| random_game(rng)).collect()
}

/// Shared generator owning its RNG, so concurrent requests draw from one stream.
pub struct GameGenerator {
    rng: Mutex<StdRng>,
}

impl GameGenerator {
    /// Seeded when `seed` is given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng: Mutex::new(rng) }
    }

    pub async fn generate(&self, n: usize) -> Vec<Game> {
        let mut rng = self.rng.lock().await;
        let games = generate_random_games(&mut *rng, n);
        debug!(count = games.len(), "generated games");
        games
    }
}

impl Default for GameGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}
