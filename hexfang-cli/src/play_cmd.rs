//! Play command - console game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: Session::play() - read/evaluate/print loop
//! - Level 3: parse_command(), Session::place(), Session::ai_move()
//! - Level 4: board rendering and message formatting

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexfang_core::{
    Animal, Board, Cell, FinalScore, GameConfig, GameEngine, GameMode, GameResult, Hex,
    MoveOutcome, Player, Score,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board radius (defaults to the config file, then 3)
    #[arg(long)]
    pub radius: Option<u8>,

    /// Let the computer play Player B
    #[arg(long)]
    pub vs_ai: bool,

    /// Seed for the computer's moves (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Place(Hex, Animal),
    Ai,
    Reset,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  q r animal   place an animal at axial coordinate (q, r), e.g. `1 -2 rabbit`
               animals: tiger (t), rabbit (r), dragon (d)
  ai           let the computer move for the side to play
  reset        start over on the same board
  help         show this text
  quit         leave the game

Board: upper case = Player A, lower case = Player B, `.` = empty.
Tiger beats Rabbit, Rabbit beats Dragon, Dragon beats Tiger.";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// This function reads like a table of contents:
/// 1. Resolve the game configuration
/// 2. Start a session
/// 3. Play on stdin/stdout until the players quit
pub fn run(args: PlayArgs, game_config: GameConfig) -> Result<()> {
    let config = build_game_config(&args, game_config);
    let mut session = Session::new(config, args.seed)?;

    tracing::info!(
        "Starting game: radius {}, mode {:?}",
        config.board_radius,
        config.mode
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.play(stdin.lock(), stdout.lock())
}

/// Command arguments take precedence over the config file
fn build_game_config(args: &PlayArgs, mut config: GameConfig) -> GameConfig {
    if let Some(radius) = args.radius {
        config.board_radius = radius;
    }
    if args.vs_ai {
        config.mode = GameMode::vs_ai();
    }
    config
}

// ============================================================================
// LEVEL 2 - SESSION LOOP
// ============================================================================

/// A console game in progress
pub struct Session {
    engine: GameEngine,
    rng: ChaCha8Rng,
}

impl Session {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let engine = GameEngine::with_config(config).context("Invalid game configuration")?;
        Ok(Self {
            engine,
            rng: create_rng(seed),
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Read commands until `quit` or end of input
    pub fn play<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{HELP}\n")?;
        self.print_position(&mut out)?;

        let mut lines = input.lines();
        loop {
            while self.engine.is_ai_turn() {
                self.ai_move(&mut out)?;
            }

            write!(out, "{}> ", prompt(&self.engine))?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(Command::Reset) => {
                    self.engine.reset();
                    writeln!(out, "New game.")?;
                    self.print_position(&mut out)?;
                }
                Ok(Command::Ai) => self.ai_move(&mut out)?,
                Ok(Command::Place(hex, animal)) => self.place(hex, animal, &mut out)?,
                Err(err) => writeln!(out, "{err}. Type `help` for commands.")?,
            }
        }

        Ok(())
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    fn place<W: Write>(&mut self, hex: Hex, animal: Animal, out: &mut W) -> Result<()> {
        match self.engine.submit_move(hex, animal) {
            Ok(outcome) => self.report(&outcome, out),
            Err(err) => {
                writeln!(out, "Rejected: {err}")?;
                Ok(())
            }
        }
    }

    fn ai_move<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let seed = self.rng.gen::<u64>();
        match self.engine.request_ai_move(seed) {
            Ok(outcome) => self.report(&outcome, out),
            Err(err) => {
                writeln!(out, "Rejected: {err}")?;
                Ok(())
            }
        }
    }

    fn report<W: Write>(&self, outcome: &MoveOutcome, out: &mut W) -> Result<()> {
        writeln!(out, "{}", describe_outcome(outcome))?;
        self.print_position(out)?;
        if let Some(final_score) = outcome.final_score {
            writeln!(out, "{}", describe_final(&final_score))?;
            writeln!(out, "Type `reset` to play again or `quit` to leave.")?;
        }
        Ok(())
    }

    fn print_position<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", render_board(self.engine.state().board()))?;
        writeln!(out, "{}", describe_score(&self.engine.score()))?;
        Ok(())
    }
}

/// Parse `q r animal` or a keyword
fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [word] => match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "help" | "h" | "?" => Ok(Command::Help),
            "reset" | "restart" => Ok(Command::Reset),
            "ai" => Ok(Command::Ai),
            other => bail!("unknown command `{other}`"),
        },
        [q, r, animal] => {
            let q: i32 = q.parse().with_context(|| format!("bad q coordinate `{q}`"))?;
            let r: i32 = r.parse().with_context(|| format!("bad r coordinate `{r}`"))?;
            let animal: Animal = animal.parse()?;
            Ok(Command::Place(Hex::new(q, r), animal))
        }
        _ => bail!("expected `q r animal`"),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Seeded RNG, or one from OS entropy
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn prompt(engine: &GameEngine) -> String {
    if engine.is_ended() {
        "game over".to_string()
    } else {
        engine.current_player().to_string()
    }
}

/// Rows from r = -R down to r = R, each indented so hexes line up
fn render_board(board: &Board) -> String {
    let radius = board.radius() as i32;
    let mut rows = Vec::with_capacity(2 * radius as usize + 1);

    for r in -radius..=radius {
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);
        let cells: Vec<String> = (q_min..=q_max)
            .map(|q| cell_glyph(board.cell_at(Hex::new(q, r))).to_string())
            .collect();
        rows.push(format!("{}{}", " ".repeat(r.unsigned_abs() as usize), cells.join(" ")));
    }

    rows.join("\n")
}

fn cell_glyph(cell: Option<Cell>) -> char {
    let Some(piece) = cell.and_then(|c| c.piece()) else {
        return '.';
    };
    let glyph = match piece.animal {
        Animal::Tiger => 'T',
        Animal::Rabbit => 'R',
        Animal::Dragon => 'D',
    };
    match piece.owner {
        Player::PlayerA => glyph,
        Player::PlayerB => glyph.to_ascii_lowercase(),
    }
}

fn describe_outcome(outcome: &MoveOutcome) -> String {
    let mut text = format!(
        "{} placed {} at {}",
        outcome.player, outcome.animal, outcome.placed
    );
    if !outcome.captured.is_empty() {
        let cells: Vec<String> = outcome.captured.iter().map(Hex::to_string).collect();
        text.push_str(&format!(
            ", capturing {} ({} outflanked, {} dominated): {}",
            outcome.captured.len(),
            outcome.captures.outflanked.len(),
            outcome.captures.dominated.len(),
            cells.join(" ")
        ));
    }
    text
}

fn describe_score(score: &Score) -> String {
    format!("Score: A {} - B {}", score.player_a, score.player_b)
}

fn describe_final(final_score: &FinalScore) -> String {
    let score = final_score.score;
    match final_score.result {
        GameResult::PlayerAWins => format!("Player A wins {}-{}", score.player_a, score.player_b),
        GameResult::PlayerBWins => format!("Player B wins {}-{}", score.player_b, score.player_a),
        GameResult::Draw | GameResult::Ongoing => {
            format!("Draw {}-{}", score.player_a, score.player_b)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
