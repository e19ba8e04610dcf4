use std::io::{self, BufRead, Write};

use crate::ai::{Agent, Difficulty, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, Player, COLS};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 0-based column; the user types it 1-based.
    Drop(usize),
    Restart,
    Quit,
    SetDifficulty(Difficulty),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "q" | "quit" => Some(Command::Quit),
            "r" | "restart" => Some(Command::Restart),
            "e" | "easy" => Some(Command::SetDifficulty(Difficulty::Easy)),
            "m" | "medium" => Some(Command::SetDifficulty(Difficulty::Medium)),
            "h" | "hard" => Some(Command::SetDifficulty(Difficulty::Hard)),
            other => other
                .parse::<usize>()
                .ok()
                .map(|col| Command::Drop(col.wrapping_sub(1))),
        }
    }
}

const HELP: &str = "Columns 1-7 drop a piece, e/m/h set difficulty, r restarts, q quits.";

/// Text front end: owns the authoritative game and asks the engine for the
/// AI's replies.
pub struct Console<R, W> {
    input: R,
    output: W,
    state: GameState,
    agent: MinimaxAgent,
    first: Player,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        let first = config.game.first_player();
        Console {
            input,
            output,
            state: GameState::initial(first),
            agent: MinimaxAgent::from_config(&config.search),
            first,
        }
    }

    /// Main loop; returns on `q` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{HELP}")?;
        self.render()?;

        loop {
            if !self.state.is_terminal() && self.state.current_player() == Player::Ai {
                self.ai_move()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Restart) => {
                    self.state = GameState::initial(self.first);
                    log::info!("new round");
                    writeln!(self.output, "New game started!")?;
                    self.render()?;
                }
                Some(Command::SetDifficulty(difficulty)) => {
                    self.agent.set_depth(difficulty.depth());
                    writeln!(self.output, "Difficulty set to {}.", difficulty.name())?;
                }
                Some(Command::Drop(col)) => self.human_move(col)?,
                None => writeln!(self.output, "Unknown command. {HELP}")?,
            }
        }
        Ok(())
    }

    fn human_move(&mut self, col: usize) -> io::Result<()> {
        if self.state.is_terminal() {
            return writeln!(self.output, "Game over! Press 'r' to restart.");
        }
        if col >= COLS {
            return writeln!(self.output, "Invalid column!");
        }
        match self.state.play(col) {
            Ok(_) => {
                self.render()?;
                self.announce_outcome()
            }
            Err(err) => writeln!(self.output, "Cannot play there: {err}."),
        }
    }

    fn ai_move(&mut self) -> io::Result<()> {
        let Some(col) = self.agent.select_action(&self.state) else {
            return Ok(());
        };
        self.state
            .play(col)
            .map_err(io::Error::other)?;
        writeln!(self.output, "AI plays column {}.", col + 1)?;
        self.render()?;
        self.announce_outcome()
    }

    fn announce_outcome(&mut self) -> io::Result<()> {
        let Some(outcome) = self.state.outcome() else {
            return Ok(());
        };
        log::info!("round over: {outcome:?}");
        match outcome {
            GameOutcome::Winner(player) => writeln!(self.output, "{} wins!", player.name())?,
            GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        writeln!(self.output, "Press 'r' to play again or 'q' to quit.")
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}\n", self.state.board())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
