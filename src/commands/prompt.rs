//! Line-oriented prompting for values the user didn't pass as flags.

use std::io::{self, BufRead, Write};

use crate::{GameCount, Result, StatCode};

pub const PLAYER_PROMPT: &str = "Enter NBA player full name (e.g. LeBron James): ";
pub const PROCEED_PROMPT: &str =
    "\nWould you like to predict stats for next game? (type: yes or no): ";
pub const GAMES_PROMPT: &str = "\nDo you want to analyze the last 5 or 10 games? Enter 5 or 10: ";
pub const STAT_PROMPT: &str = "Which stat would you like to predict? (PTS, AST, REB, BLK, STL): ";

/// Why a game-count answer was rejected; each maps to its own hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCountInput {
    NotANumber,
    OutOfRange,
}

impl GameCountInput {
    pub fn hint(&self) -> &'static str {
        match self {
            GameCountInput::NotANumber => "Invalid input. Please enter a number.",
            GameCountInput::OutOfRange => "Please enter either 5 or 10.",
        }
    }
}

pub fn parse_game_count_answer(answer: &str) -> std::result::Result<GameCount, GameCountInput> {
    let n: i64 = answer
        .trim()
        .parse()
        .map_err(|_| GameCountInput::NotANumber)?;
    GameCount::from_count(n).ok_or(GameCountInput::OutOfRange)
}

/// Only an explicit "yes" continues.
pub fn wants_prediction(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// A threshold that doesn't parse as a finite number turns threshold mode off.
pub fn parse_threshold_answer(answer: &str) -> Option<f64> {
    answer
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Input and output for one run. All console text goes through `output` so
/// a run can be driven from memory in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, then read one line. End of input is an error.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn ask_player_name(&mut self) -> Result<String> {
        self.ask(PLAYER_PROMPT)
    }

    pub fn ask_proceed(&mut self) -> Result<bool> {
        Ok(wants_prediction(&self.ask(PROCEED_PROMPT)?))
    }

    /// Re-asks until the answer is 5 or 10.
    pub fn ask_game_count(&mut self) -> Result<GameCount> {
        loop {
            let answer = self.ask(GAMES_PROMPT)?;
            match parse_game_count_answer(&answer) {
                Ok(count) => return Ok(count),
                Err(rejected) => self.say(rejected.hint())?,
            }
        }
    }

    /// Asked once; an unknown stat is fatal.
    pub fn ask_stat(&mut self) -> Result<StatCode> {
        self.ask(STAT_PROMPT)?.parse()
    }

    pub fn ask_threshold(&mut self, stat: StatCode) -> Result<Option<f64>> {
        let answer = self.ask(&format!("Enter threshold for {stat} (e.g., 20): "))?;
        Ok(parse_threshold_answer(&answer))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
