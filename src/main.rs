//! Checkers-Rust: a rules engine for 8x8 checkers.
//!
//! ## Usage
//!
//! - `checkers-rust` - Start the text protocol session on stdin/stdout
//! - `checkers-rust protocol` - Same as above
//! - `checkers-rust demo` - Play a seeded random game and print it

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use checkers_rust::board::Color;
use checkers_rust::config::Rules;
use checkers_rust::constants::MAX_PLAYOUT_PLIES;
use checkers_rust::game::{GameResult, GameState};
use checkers_rust::playout::random_playout;
use checkers_rust::protocol::Session;

/// Checkers-Rust: a rules engine for 8x8 checkers
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    rules: RuleArgs,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct RuleArgs {
    /// Only probe distance-two jumps when deciding whether a king must keep capturing
    #[arg(long, global = true)]
    short_continuation: bool,

    /// Reject targets on squares with even x + y
    #[arg(long, global = true)]
    strict_squares: bool,
}

impl From<&RuleArgs> for Rules {
    fn from(args: &RuleArgs) -> Self {
        Rules {
            long_range_continuation: !args.short_continuation,
            strict_squares: args.strict_squares,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum ColorArg {
    Light,
    Dark,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Light => Color::Light,
            ColorArg::Dark => Color::Dark,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol session for use with a front end
    Protocol,
    /// Play a random game and print the board before and after
    Demo {
        /// Color picked by the player (moves first)
        #[arg(long, value_enum, default_value = "light")]
        color: ColorArg,
        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many actions
        #[arg(long, default_value_t = MAX_PLAYOUT_PLIES)]
        max_plies: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rules = Rules::from(&cli.rules);

    match cli.command {
        Some(Commands::Demo {
            color,
            seed,
            max_plies,
        }) => run_demo(rules, color.into(), seed, max_plies, cli.verbose),
        Some(Commands::Protocol) | None => Session::new(rules).verbose(cli.verbose).run(),
    }
}

fn run_demo(
    rules: Rules,
    player: Color,
    seed: Option<u64>,
    max_plies: usize,
    verbose: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);

    println!("Checkers-Rust: random game (seed {seed})\n");
    println!("Rules: {rules}");

    let mut state = GameState::new(player, rules);
    println!("{}", state.board());

    let result = random_playout(&mut state, &mut rng, max_plies);
    if verbose {
        eprintln!("playout finished after {} plies", state.plies());
    }

    println!("{}", state.board());
    match result {
        GameResult::Won(winner) => println!("{winner} wins after {} plies", state.plies()),
        GameResult::InProgress => println!("no result after {} plies", state.plies()),
    }
    println!(
        "Captures: light {}, dark {}",
        state.board().captured_by(Color::Light),
        state.board().captured_by(Color::Dark)
    );
    Ok(())
}
