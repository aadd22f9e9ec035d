//! Shared helpers for integration tests: scripted line input and a
//! deterministic session runner.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use escaperoom::config::Config;
use escaperoom::game::{GameError, LineInput, ReadOutcome, Session, SessionSummary};

/// Line input fed from a prepared script. Reads past the end behave like
/// Ctrl-D so an exhausted script ends the session instead of hanging it.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, GameError> {
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Eof,
        })
    }
}

/// Run a scripted session with a seeded RNG, returning the summary and
/// everything the game printed.
pub fn run_scripted(config: Config, lines: &[&str], seed: u64) -> (SessionSummary, String) {
    let mut out = Vec::new();
    let session = Session::new(
        config,
        ScriptedInput::new(lines),
        StdRng::seed_from_u64(seed),
        &mut out,
    );
    let summary = session.run().expect("scripted session failed");
    (summary, String::from_utf8(out).expect("non-utf8 game output"))
}

/// Config whose rooms always contain the full item catalog, so scripts can
/// name items without depending on the RNG.
pub fn full_room_config() -> Config {
    let mut config = Config::default();
    config.room.min_items = 10;
    config.room.max_items = 10;
    config
}
