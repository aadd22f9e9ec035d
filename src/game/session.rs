//! # Game Session Management
//!
//! Represents one interactive sitting of the escape-room game. The session
//! owns the input source, RNG, and output sink, and drives the whole flow:
//! greeting, skill selection, room generation, and the command loop.
//!
//! ## Session Lifecycle
//!
//! 1. **Greeting** - Welcome line, player-name prompt (validated)
//! 2. **Skill Selection** - Interactive prompt, or `default_skill` from config
//! 3. **Exploration** - Command loop over the generated room
//! 4. **Escape or Quit** - On escape the player may play again with a fresh
//!    room; points and badges persist for the whole sitting
//!
//! ## Input Abstraction
//!
//! Terminal input goes through the [`LineInput`] trait so the interactive
//! binary can use rustyline while tests drive sessions from scripted lines.
//! Ctrl-C and Ctrl-D surface as [`ReadOutcome::Interrupted`] and
//! [`ReadOutcome::Eof`] and end the session cleanly.

use std::io::Write;

use log::{debug, info};
use rand::Rng;
use rustyline::error::ReadlineError;

use crate::config::Config;
use crate::logutil::escape_log;

use super::badges::{BadgeTier, Scorecard};
use super::errors::GameError;
use super::hints::HintProvider;
use super::resolver;
use super::room::{Room, SolveOutcome};
use super::types::{Command, SkillLevel};

/// Result of reading one line from the player.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A line was successfully read.
    Line(String),
    /// The player pressed Ctrl+C.
    Interrupted,
    /// The player pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line input.
///
/// Allows swapping the interactive rustyline editor for scripted input in
/// tests without changing the session code.
pub trait LineInput {
    /// Read a line with the given prompt.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, GameError>;

    /// Add a line to input history. No-op by default.
    fn add_history(&mut self, _line: &str) {}
}

/// Interactive line input backed by rustyline.
pub struct RustylineInput {
    editor: rustyline::DefaultEditor,
}

impl RustylineInput {
    pub fn new() -> Result<Self, GameError> {
        Ok(Self {
            editor: rustyline::DefaultEditor::new()?,
        })
    }
}

impl LineInput for RustylineInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, GameError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(GameError::Readline(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// What a finished session looked like.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub player: String,
    pub skill: Option<SkillLevel>,
    pub points: u32,
    pub badges: Vec<BadgeTier>,
    /// Number of rooms escaped this sitting.
    pub escapes: u32,
    /// Number of rooms played (including an abandoned final room).
    pub plays: u32,
}

/// Outcome of one room's command loop.
enum RoomOutcome {
    Escaped,
    Quit,
}

/// One interactive sitting of the game.
pub struct Session<I: LineInput, R: Rng, W: Write> {
    config: Config,
    input: I,
    rng: R,
    out: W,
    hints: HintProvider,
    scorecard: Scorecard,
    plays: u32,
    escapes: u32,
}

impl<I: LineInput, R: Rng, W: Write> Session<I, R, W> {
    pub fn new(config: Config, input: I, rng: R, out: W) -> Self {
        let hints = HintProvider::new(config.hints.enabled);
        Self {
            config,
            input,
            rng,
            out,
            hints,
            scorecard: Scorecard::new(),
            plays: 0,
            escapes: 0,
        }
    }

    /// Run the session to completion.
    pub fn run(mut self) -> Result<SessionSummary, GameError> {
        let welcome = self.config.game.welcome_message.clone();
        self.say(&welcome)?;

        let Some(player) = self.prompt_name()? else {
            self.say("Goodbye!")?;
            return Ok(self.finish(String::new(), None));
        };
        self.say(&format!("Hello, {}! Let's begin.", player))?;

        let Some(skill) = self.choose_skill_level()? else {
            self.say("Goodbye!")?;
            return Ok(self.finish(player, None));
        };
        info!("session started for '{}' at skill level {}", player, skill);

        loop {
            self.plays += 1;
            let mut room = Room::generate(&mut self.rng, skill, &self.config.room);
            debug!(
                "generated room with {} items (play {})",
                room.unfound_names().len(),
                self.plays
            );
            self.say(&room.describe())?;

            match self.play_room(&mut room)? {
                RoomOutcome::Escaped => {
                    self.escapes += 1;
                    self.say("Congratulations! You've escaped the room.")?;
                    info!(
                        "'{}' escaped room {} with {} points",
                        player,
                        self.plays,
                        self.scorecard.points()
                    );
                    if !self.prompt_play_again()? {
                        break;
                    }
                }
                RoomOutcome::Quit => {
                    self.say("Thanks for playing. Goodbye!")?;
                    break;
                }
            }
        }

        Ok(self.finish(player, Some(skill)))
    }

    fn finish(self, player: String, skill: Option<SkillLevel>) -> SessionSummary {
        SessionSummary {
            player,
            skill,
            points: self.scorecard.points(),
            badges: self.scorecard.earned_badges(),
            escapes: self.escapes,
            plays: self.plays,
        }
    }

    /// Command loop for a single room.
    fn play_room(&mut self, room: &mut Room) -> Result<RoomOutcome, GameError> {
        loop {
            let line = match self.input.read_line("\nWhat would you like to do? ")? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted | ReadOutcome::Eof => return Ok(RoomOutcome::Quit),
            };
            // Blank input re-prompts silently.
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            self.input.add_history(line.trim());
            debug!("player input: {}", escape_log(line.trim()));

            match command {
                Command::Hint => self.offer_hint(room.skill())?,
                Command::Solve => {
                    self.say("You attempt to solve the puzzle...")?;
                    if room.attempt_solve() == SolveOutcome::Solved {
                        return Ok(RoomOutcome::Escaped);
                    }
                }
                Command::Look => {
                    let description = room.describe();
                    self.say(&description)?;
                }
                Command::Score => {
                    let summary = self.scorecard.summary();
                    self.say(&summary)?;
                }
                Command::Quit => return Ok(RoomOutcome::Quit),
                Command::Search(text) => self.search(room, &text)?,
            }
        }
    }

    fn offer_hint(&mut self, skill: SkillLevel) -> Result<(), GameError> {
        match self.hints.offer(&mut self.rng, skill) {
            Some(hint) => self.say(&format!("Here's a hint for you - {}", hint)),
            None => self.say("Hints are disabled for this game."),
        }
    }

    /// Fuzzy-search the room for an item; award points and badges on a find.
    fn search(&mut self, room: &mut Room, text: &str) -> Result<(), GameError> {
        let candidates = room.unfound_names();
        let matched = resolver::resolve(text, &candidates, self.config.room.match_cutoff);
        let Some(name) = matched else {
            self.say("Sorry, I don't understand that command.")?;
            return Ok(());
        };

        room.mark_found(name);
        self.say(&format!("You found: {}", name))?;
        info!("found item '{}' from input '{}'", name, escape_log(text));

        self.scorecard.award_points(self.config.scoring.points_per_find);
        if let Some(tier) = self.scorecard.check_badges(&self.config.scoring) {
            self.say(&format!(
                "Congratulations! You've earned the {} badge.",
                tier
            ))?;
            info!("badge earned: {}", tier);
        }
        // Difficulty only adapts once the player is on a repeat play.
        if self.plays > 1 {
            if let Some(message) =
                room.adapt_difficulty(self.scorecard.points(), &self.config.scoring)
            {
                self.say(message)?;
            }
        }
        Ok(())
    }

    /// Prompt for a player name until a valid one is entered.
    ///
    /// Returns `None` when the player bails out (Ctrl-C / Ctrl-D).
    fn prompt_name(&mut self) -> Result<Option<String>, GameError> {
        let max_len = self.config.game.max_name_length;
        loop {
            let line = match self.input.read_line("What's your name? ")? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted | ReadOutcome::Eof => return Ok(None),
            };
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            if name.chars().count() > max_len {
                self.say(&format!(
                    "That name is a bit long; please use up to {} characters.",
                    max_len
                ))?;
                continue;
            }
            if name.chars().any(char::is_control) {
                self.say("Names cannot contain control characters.")?;
                continue;
            }
            return Ok(Some(name.to_string()));
        }
    }

    /// Prompt the player to choose their skill level, unless the config
    /// pins a default.
    ///
    /// Returns `None` when the player bails out (Ctrl-C / Ctrl-D).
    fn choose_skill_level(&mut self) -> Result<Option<SkillLevel>, GameError> {
        if let Some(skill) = self.config.game.default_skill {
            return Ok(Some(skill));
        }
        loop {
            let prompt = "Please choose your skill level (beginner, intermediate, expert): ";
            let line = match self.input.read_line(prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted | ReadOutcome::Eof => return Ok(None),
            };
            match line.parse::<SkillLevel>() {
                Ok(skill) => return Ok(Some(skill)),
                Err(()) => {
                    self.say(
                        "Invalid skill level. Please choose from 'beginner', 'intermediate', or 'expert'.",
                    )?;
                }
            }
        }
    }

    fn prompt_play_again(&mut self) -> Result<bool, GameError> {
        match self.input.read_line("Play again? (y/n) ")? {
            ReadOutcome::Line(line) => {
                let answer = line.trim().to_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            ReadOutcome::Interrupted | ReadOutcome::Eof => Ok(false),
        }
    }

    fn say(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
