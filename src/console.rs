//! Line-oriented terminal front-end.
//!
//! Purely a presentation layer: it prints whatever the models expose and
//! forwards each line the player types as one intent. All game rules live in
//! [`quiz_engine`](crate::quiz_engine).

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::quiz_engine::{
    generator::{start_session, SessionRequest},
    helpers::{
        action_label, feedback_message, feedback_title, progress_label, prompt, score_label,
        summary_line, QUESTION_TOTAL_HEADING, SETTINGS_TITLE, START_LABEL, TABLE_HEADING,
    },
    models::{GameConfig, SessionState},
    operands::OperandSource,
    session::GameSession,
    settings::SettingsModel,
    QuizError,
};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Where the player wants to go once a session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Settings,
    Quit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Settings screen, game, repeat until the player quits or input ends.
    pub fn run(&mut self, config: &AppConfig) -> Result<(), ConsoleError> {
        loop {
            // A fresh model on every visit; nothing carries over from the last game.
            let settings = config.settings()?;
            let Some(game) = self.settings_screen(settings)? else {
                return Ok(());
            };

            let request = SessionRequest {
                rng_seed: config.rng_seed,
                ..SessionRequest::from(game)
            };
            let mut session = start_session(request)?;
            if self.play(&mut session)? == Next::Quit {
                info!("player quit");
                return Ok(());
            }
        }
    }

    /// Ask for both values. `None` means input ended.
    pub fn settings_screen(&mut self, mut settings: SettingsModel) -> Result<Option<GameConfig>, ConsoleError> {
        writeln!(self.output, "== {SETTINGS_TITLE} ==")?;

        let label = format!("{TABLE_HEADING} (2-12)");
        let current = settings.table();
        if !self.ask_setting(&label, current, |v| settings.set_table(v))? {
            return Ok(None);
        }

        let label = format!("{QUESTION_TOTAL_HEADING} (5, 10, 20)");
        let current = settings.question_total();
        if !self.ask_setting(&label, current, |v| settings.set_question_total(v))? {
            return Ok(None);
        }

        writeln!(self.output, "{START_LABEL}")?;
        Ok(Some(settings.start_game()))
    }

    /// Drive one session until it is finished and the player picks what to
    /// do next.
    pub fn play<S: OperandSource>(&mut self, session: &mut GameSession<S>) -> Result<Next, ConsoleError> {
        loop {
            match session.state() {
                SessionState::AwaitingAnswer => {
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "Question {}    {}",
                        progress_label(session),
                        score_label(session.score())
                    )?;
                    write!(self.output, "{} = ", prompt(session.question()))?;
                    self.output.flush()?;

                    let Some(line) = self.read_line()? else {
                        return Ok(Next::Quit);
                    };
                    match line.parse::<i64>() {
                        Ok(value) => {
                            session.submit_answer(value)?;
                        }
                        Err(_) => {
                            debug!(input = %line, "non-numeric answer ignored");
                            writeln!(self.output, "Please enter a whole number.")?;
                        }
                    }
                }

                SessionState::ShowingFeedback { .. } => {
                    if let Some(result) = session.last_result() {
                        writeln!(
                            self.output,
                            "{} {}. {}",
                            feedback_title(result),
                            feedback_message(result),
                            score_label(session.score())
                        )?;
                    }
                    write!(self.output, "[{}] ", action_label(session))?;
                    self.output.flush()?;
                    if self.read_line()?.is_none() {
                        return Ok(Next::Quit);
                    }
                    session.advance()?;
                }

                SessionState::Finished => {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", summary_line(session))?;
                    write!(self.output, "[p]lay again, [s]ettings, [q]uit: ")?;
                    self.output.flush()?;

                    let Some(line) = self.read_line()? else {
                        return Ok(Next::Quit);
                    };
                    match line.to_ascii_lowercase().as_str() {
                        "" | "p" | "play" => session.restart()?,
                        "s" | "settings" => return Ok(Next::Settings),
                        "q" | "quit" => return Ok(Next::Quit),
                        _ => writeln!(self.output, "Please choose p, s or q.")?,
                    }
                }
            }
        }
    }

    /// Prompt until `apply` accepts a value or the line is empty (keep
    /// `current`). Returns `false` if input ended.
    fn ask_setting(
        &mut self,
        label: &str,
        current: u32,
        mut apply: impl FnMut(i64) -> Result<(), QuizError>,
    ) -> Result<bool, ConsoleError> {
        loop {
            write!(self.output, "{label} [{current}]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if line.is_empty() {
                return Ok(true);
            }
            match line.parse::<i64>() {
                Ok(value) => match apply(value) {
                    Ok(()) => return Ok(true),
                    Err(e) => writeln!(self.output, "{e}")?,
                },
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// One trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
