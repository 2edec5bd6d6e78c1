//! Line-oriented text protocol for driving the engine from a front end.
//!
//! The format follows GTP conventions: one command per line, an optional
//! numeric id in front, and replies of the form `=id payload` or
//! `?id message`, each followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the session
//! - `new <light|dark>` - Start a game; the given color is the player's and moves first
//! - `click <x> <y>` - Feed a clicked cell to the selection state machine
//! - `moves [<x> <y>]` - Legal targets of the selected piece, or of the piece at `(x, y)`
//! - `board` - Print the board
//! - `snapshot` - One line per live piece: `x y color rank [selected]`
//! - `status` - Side to move or winner, and capture counts
//! - `rules` - Active rule toggles
//!
//! ## Example
//!
//! ```ignore
//! use checkers_rust::protocol::Session;
//! let mut session = Session::new(Default::default());
//! session.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};

use crate::board::{Color, Point};
use crate::config::Rules;
use crate::game::{GameResult, GameState, TurnOutcome};
use crate::moves::{self, ActionKind, MoveRecord};
use crate::selection::ClickOutcome;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "click",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new",
    "protocol_version",
    "quit",
    "rules",
    "snapshot",
    "status",
    "version",
];

/// Protocol session state.
pub struct Session {
    /// Current game, if one was started
    game: Option<GameState>,
    /// Rules applied to every new game
    rules: Rules,
    /// Trace applied actions to stderr
    verbose: bool,
}

impl Session {
    pub fn new(rules: Rules) -> Self {
        Self {
            game: None,
            rules,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (prefix, message) = match self.execute(&command, args) {
                Ok(payload) => ('=', payload),
                Err(err) => ('?', err.to_string()),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("writing reply")?;
            output.flush().context("flushing reply")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
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

    /// Execute a command and return its reply payload.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("1".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let cmd = args.first().ok_or_else(|| anyhow!("missing argument"))?;
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "rules" => Ok(self.rules.to_string()),

            "new" => {
                let arg = args.first().ok_or_else(|| anyhow!("missing color"))?;
                let color = Color::parse(arg).ok_or_else(|| anyhow!("invalid color: {arg}"))?;
                let game = GameState::new(color, self.rules);
                let reply = format!("{} to move", game.side_to_move());
                self.game = Some(game);
                Ok(reply)
            }

            "click" => {
                let cell = parse_point(args)?;
                let verbose = self.verbose;
                let game = self.game_mut()?;
                let outcome = game.click(cell);
                if verbose {
                    if let ClickOutcome::Moved { record, turn } = &outcome {
                        eprintln!(
                            "ply {} {} {turn:?}",
                            game.plies(),
                            describe_move(record)
                        );
                    }
                }
                let mut reply = describe_click(&outcome);
                if let GameResult::Won(winner) = game.result() {
                    reply.push_str(&format!(" winner {winner}"));
                }
                Ok(reply)
            }

            "moves" => {
                let game = self.game()?;
                let index = if args.is_empty() {
                    game.selected().ok_or_else(|| anyhow!("no piece selected"))?
                } else {
                    let cell = parse_point(args)?;
                    game.board()
                        .piece_at(cell)
                        .ok_or_else(|| anyhow!("no piece at {} {}", cell.0, cell.1))?
                };
                // The side to move is bound by the turn; any other piece is
                // listed by board geometry alone.
                let actions: Vec<_> = if game.board().piece(index).color == game.side_to_move() {
                    game.legal_actions()
                        .into_iter()
                        .filter(|a| a.piece() == index)
                        .collect()
                } else {
                    moves::legal_actions(game.board(), index)
                };
                let targets: Vec<String> =
                    actions.iter().map(|a| describe_move(&a.record())).collect();
                Ok(targets.join("\n"))
            }

            "board" => Ok(format!("\n{}", self.game()?.board())),

            "snapshot" => {
                let snap = self.game()?.snapshot();
                let lines: Vec<String> = snap
                    .pieces
                    .iter()
                    .map(|p| {
                        let mark = if p.selected { " selected" } else { "" };
                        format!("{} {} {} {}{mark}", p.x, p.y, p.color, p.rank)
                    })
                    .collect();
                Ok(lines.join("\n"))
            }

            "status" => {
                let snap = self.game()?.snapshot();
                let state = match snap.result {
                    GameResult::InProgress => format!("{} to move", snap.side_to_move),
                    GameResult::Won(winner) => format!("{winner} wins"),
                };
                Ok(format!(
                    "{state}, captures light {} dark {}",
                    snap.light_captures, snap.dark_captures
                ))
            }

            _ => bail!("unknown command: {command}"),
        }
    }

    fn game(&self) -> Result<&GameState> {
        self.game.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    fn game_mut(&mut self) -> Result<&mut GameState> {
        self.game.as_mut().ok_or_else(|| anyhow!("no game in progress"))
    }
}

fn parse_point(args: &[&str]) -> Result<Point> {
    let [x, y] = args else {
        bail!("expected two coordinates");
    };
    let x = x.parse::<i32>().with_context(|| format!("invalid x: {x}"))?;
    let y = y.parse::<i32>().with_context(|| format!("invalid y: {y}"))?;
    Ok((x, y))
}

fn describe_move(record: &MoveRecord) -> String {
    let (fx, fy) = record.from;
    let (tx, ty) = record.to;
    match record.kind {
        ActionKind::Step => format!("{fx} {fy} {tx} {ty}"),
        ActionKind::Capture { .. } => format!("{fx} {fy} {tx} {ty} capture"),
    }
}

fn describe_click(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "ignored".to_string(),
        ClickOutcome::Selected(_) => "selected".to_string(),
        ClickOutcome::Deselected => "deselected".to_string(),
        ClickOutcome::Moved { record, turn } => {
            let tail = match turn {
                TurnOutcome::Passed => "",
                TurnOutcome::Continue => " continue",
            };
            format!("moved {}{tail}", describe_move(record))
        }
    }
}
