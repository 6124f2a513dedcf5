use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::quiz_engine::{
    error::QuizError,
    models::{GameConfig, DEFAULT_QUESTION_TOTAL, DEFAULT_TABLE},
    operands::RngSource,
    session::GameSession,
};

/// A session backed by the standard seeded generator.
pub type SeededSession = GameSession<RngSource<StdRng>>;

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub table: u32,
    pub question_total: u32,
    /// `Some` replays the exact same questions every time; `None` draws from
    /// OS entropy.
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Default difficulty (table 3, five questions) with entropy.
    pub fn new() -> Self {
        SessionRequest {
            table: DEFAULT_TABLE,
            question_total: DEFAULT_QUESTION_TOTAL,
            rng_seed: None,
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            table: self.table,
            question_total: self.question_total,
        }
    }
}

impl Default for SessionRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameConfig> for SessionRequest {
    fn from(config: GameConfig) -> Self {
        SessionRequest {
            table: config.table,
            question_total: config.question_total,
            rng_seed: None,
        }
    }
}

/// Session ID: table number plus one word from the session's own RNG, so a
/// fixed seed always yields the same ID.
fn make_session_id(table: u32, rng: &mut impl RngCore) -> String {
    format!("MT{:02}-{:08X}", table, rng.next_u32())
}

/// Start a session for `request`.
pub fn start_session(request: SessionRequest) -> Result<SeededSession, QuizError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let session_id = make_session_id(request.table, &mut rng);
    let session = GameSession::new(request.config(), RngSource::new(rng))?
        .with_session_id(session_id);

    info!(
        session_id = session.session_id(),
        table = session.table(),
        question_total = session.question_total(),
        seeded = request.rng_seed.is_some(),
        "session started"
    );
    Ok(session)
}
