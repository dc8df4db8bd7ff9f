//! Line-oriented text protocol for driving the engine from another program.
//!
//! This is a host adapter built on [`Game`]. The engine itself speaks only
//! through the functions in [`game`](crate::game), and nothing here is part
//! of that contract.
//!
//! Modelled on GTP: one command per line, an optional numeric id in front,
//! and each response framed as `=[id] message` on success or `?[id] message`
//! on failure, followed by a blank line.
//!
//! Pits are numbered 1 to 6 on the wire, counting from the pit farthest
//! from its owner's store.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new round
//! - `play <a|b> <pit>` - Play a move for a side
//! - `genmove <a|b>` - Let the engine choose and play a move
//! - `showboard` - Print the board
//! - `depth [n]` - Show or set the search depth
//! - `undo` - Take back the last turn
//! - `final_score` - Result of a finished round
//! - `rules [even_capture|lone_stone] [on|off]` - Show or toggle rule variants

use std::io::{self, BufRead, Write};

use crate::board::Side;
use crate::constants::{DEFAULT_DEPTH, MAX_DEPTH, PITS};
use crate::game::{Game, Turn};
use crate::rules::{Resolution, RuleConfig};
use crate::terminal::Outcome;

/// The list of known protocol commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "depth",
    "final_score",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "rules",
    "showboard",
    "undo",
    "version",
];

/// Parse a side name: `a`/`1` for side A, `b`/`2` for side B.
pub fn parse_side(s: &str) -> Option<Side> {
    match s.to_ascii_lowercase().as_str() {
        "a" | "1" => Some(Side::A),
        "b" | "2" => Some(Side::B),
        _ => None,
    }
}

/// Parse a 1-based pit number into a 0-based index.
pub fn parse_pit(s: &str) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(n) if (1..=PITS).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Render a 0-based pit index as its 1-based wire form.
pub fn str_pit(pit: usize) -> String {
    (pit + 1).to_string()
}

/// Protocol engine state.
pub struct ProtocolEngine {
    game: Game,
    depth: u8,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new(RuleConfig::default(), DEFAULT_DEPTH)
    }
}

impl ProtocolEngine {
    pub fn new(rules: RuleConfig, depth: u8) -> Self {
        Self {
            game: Game::new(rules),
            depth: depth.min(MAX_DEPTH),
        }
    }

    /// Current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Run the command loop on stdin and stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "depth" => match args.first() {
                None => (true, self.depth.to_string()),
                Some(arg) => match arg.parse::<u8>() {
                    Ok(d) if d <= MAX_DEPTH => {
                        self.depth = d;
                        (true, String::new())
                    }
                    _ => (false, format!("depth must be 0..={MAX_DEPTH}")),
                },
            },

            "undo" => {
                if self.game.undo() {
                    (true, String::new())
                } else {
                    (false, "cannot undo".to_string())
                }
            }

            "final_score" => match self.game.outcome() {
                Some(outcome) => (true, format_outcome(outcome)),
                None => (false, "round in progress".to_string()),
            },

            "rules" => self.rules_command(args),

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(side) = parse_side(args[0]) else {
                    return (false, format!("invalid side: {}", args[0]));
                };
                let Some(pit) = parse_pit(args[1]) else {
                    return (false, format!("invalid pit: {}", args[1]));
                };
                match self.game.play(side, pit) {
                    Ok(turn) => (true, describe_turn(&turn)),
                    Err(e) => {
                        log::warn!("rejected play {side} {}: {e}", str_pit(pit));
                        (false, e.to_string())
                    }
                }
            }

            "genmove" => {
                let Some(side) = args.first().and_then(|s| parse_side(s)) else {
                    return (false, "missing or invalid side".to_string());
                };
                if self.game.is_over() {
                    return (false, "round is over".to_string());
                }
                if side != self.game.mover() {
                    return (false, format!("it is {}'s turn", self.game.mover()));
                }
                match self.game.engine_move(self.depth) {
                    Ok(Some((pit, _))) => (true, str_pit(pit)),
                    Ok(None) => (false, "no legal move".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn rules_command(&mut self, args: &[&str]) -> (bool, String) {
        let mut rules = *self.game.rules();
        match args {
            [] => {
                let show = |on: bool| if on { "on" } else { "off" };
                (
                    true,
                    format!(
                        "even_capture {}\nlone_stone {}",
                        show(rules.opponent_even_capture),
                        show(rules.capture_lone_stone)
                    ),
                )
            }
            [name, value] => {
                let on = match *value {
                    "on" => true,
                    "off" => false,
                    _ => return (false, format!("expected on|off, got {value}")),
                };
                match *name {
                    "even_capture" => rules.opponent_even_capture = on,
                    "lone_stone" => rules.capture_lone_stone = on,
                    _ => return (false, format!("unknown rule: {name}")),
                }
                self.game.set_rules(rules);
                (true, String::new())
            }
            _ => (false, "usage: rules [even_capture|lone_stone] [on|off]".to_string()),
        }
    }
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(Side::A) => "A".to_string(),
        Outcome::Win(Side::B) => "B".to_string(),
        Outcome::Draw => "draw".to_string(),
    }
}

/// Short summary of a turn: what fired, who moves next.
fn describe_turn(turn: &Turn) -> String {
    let rule = match turn.resolution {
        Resolution::ExtraTurn => "extra turn".to_string(),
        Resolution::EvenCapture { stones, .. } => format!("even capture {stones}"),
        Resolution::OppositeCapture { stones, .. } => format!("capture {stones}"),
        Resolution::LoneStoneBanked { .. } => "lone stone banked".to_string(),
        Resolution::Nothing => String::new(),
    };
    let next = match turn.winner {
        Some(outcome) => format!("over {}", format_outcome(outcome)),
        None => format!("next {}", turn.next_mover),
    };
    if rule.is_empty() {
        next
    } else {
        format!("{rule}; {next}")
    }
}
