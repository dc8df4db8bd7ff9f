//! Mangala engine host.
//!
//! ## Usage
//!
//! - `mangala` - Show a demo
//! - `mangala protocol` - Speak the text protocol on stdin/stdout
//! - `mangala selfplay` - Play engine against engine and report results
//! - `mangala perft --plies 6` - Count leaf positions of the move tree

use std::cmp::max;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use mangala::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use mangala::playout::{perft, random_move, MAX_PLAYOUT_TURNS};
use mangala::protocol::{str_pit, ProtocolEngine};
use mangala::{Game, Outcome, RuleConfig, Side};

/// Mangala: sowing game engine with alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "mangala")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Copy)]
struct GlobalOpts {
    /// Enable debug logging with timestamps and source locations.
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Minimum log level.
    #[arg(global = true, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Search depth in plies.
    #[arg(global = true, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Disable the even capture on the opponent's row.
    #[arg(global = true, long, default_value_t = false)]
    no_even_capture: bool,

    /// Bank a lone stone even when the pit across is empty (older rules).
    #[arg(global = true, long, default_value_t = false)]
    capture_lone_stone: bool,
}

impl GlobalOpts {
    fn rules(&self) -> RuleConfig {
        RuleConfig {
            opponent_even_capture: !self.no_even_capture,
            capture_lone_stone: self.capture_lone_stone,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the text protocol server for use with other programs
    Protocol,
    /// Play the engine against itself
    Selfplay(SelfplayArgs),
    /// Count leaf positions from the opening board
    Perft {
        /// Deepest ply to count
        #[arg(long, default_value_t = 6)]
        plies: u8,
    },
    /// Run a short demo game
    Demo,
}

#[derive(Args, Debug)]
struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Search depth for side A (defaults to --depth)
    #[arg(long)]
    depth_a: Option<u8>,

    /// Search depth for side B (defaults to --depth)
    #[arg(long)]
    depth_b: Option<u8>,

    /// Random moves at the start of each game, so games differ
    #[arg(long, default_value_t = 2)]
    random_plies: usize,

    /// Seed for the opening moves
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn init_logging(opts: &GlobalOpts) -> Result<()> {
    let level = if opts.debug {
        max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut builder = ConfigBuilder::new();
    if opts.debug {
        builder.set_time_level(LevelFilter::Error);
        builder.set_location_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
        builder.set_location_level(LevelFilter::Off);
    }
    builder.set_thread_level(LevelFilter::Off);
    builder.set_target_level(LevelFilter::Off);

    TermLogger::init(level, builder.build(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.global_opts;
    init_logging(&opts)?;
    log::debug!("Parsed arguments: {cli:?}");

    if opts.depth > MAX_DEPTH {
        bail!("--depth must be at most {MAX_DEPTH}");
    }

    match cli.command {
        Some(Commands::Protocol) => {
            let mut engine = ProtocolEngine::new(opts.rules(), opts.depth);
            engine.run_stdio()?;
        }
        Some(Commands::Selfplay(args)) => run_selfplay(&opts, &args)?,
        Some(Commands::Perft { plies }) => {
            let rules = opts.rules();
            let board = mangala::new_round();
            for d in 1..=plies {
                println!("perft({d}) = {}", perft(&board, Side::A, d, &rules));
            }
        }
        Some(Commands::Demo) | None => run_demo(&opts)?,
    }
    Ok(())
}

fn run_selfplay(opts: &GlobalOpts, args: &SelfplayArgs) -> Result<()> {
    let depth_a = args.depth_a.unwrap_or(opts.depth);
    let depth_b = args.depth_b.unwrap_or(opts.depth);
    if depth_a > MAX_DEPTH || depth_b > MAX_DEPTH {
        bail!("side depths must be at most {MAX_DEPTH}");
    }

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let (mut wins_a, mut wins_b, mut draws) = (0usize, 0usize, 0usize);

    for game_no in 1..=args.games {
        let mut game = Game::new(opts.rules());

        while !game.is_over() && game.turns_played() < MAX_PLAYOUT_TURNS {
            let mover = game.mover();
            if game.turns_played() < args.random_plies {
                let Some(pit) = random_move(game.board(), mover, &mut rng) else {
                    break;
                };
                game.play(mover, pit)?;
            } else {
                let depth = if mover == Side::A { depth_a } else { depth_b };
                if game.engine_move(depth)?.is_none() {
                    break;
                }
            }
        }

        let board = game.board();
        match game.outcome() {
            Some(Outcome::Win(Side::A)) => wins_a += 1,
            Some(Outcome::Win(Side::B)) => wins_b += 1,
            Some(Outcome::Draw) => draws += 1,
            None => log::warn!("game {game_no} stopped before the round ended"),
        }
        log::info!(
            "game {game_no}: {} turns, A {} - B {}",
            game.turns_played(),
            board.store(Side::A),
            board.store(Side::B)
        );
    }

    println!(
        "{} games (depth A {depth_a}, depth B {depth_b}): A {wins_a}, B {wins_b}, draws {draws}",
        args.games
    );
    Ok(())
}

fn run_demo(opts: &GlobalOpts) -> Result<()> {
    println!("Mangala: sowing game engine\n");

    let mut game = Game::new(opts.rules());
    println!("{}", game.board());

    while !game.is_over() && game.turns_played() < MAX_PLAYOUT_TURNS {
        let mover = game.mover();
        let Some((pit, turn)) = game.engine_move(opts.depth)? else {
            break;
        };
        println!("{mover} plays pit {} ({:?})", str_pit(pit), turn.resolution);
        println!("{}", game.board());
    }

    if let Some(outcome) = game.outcome() {
        println!("Result: {outcome}");
    }
    Ok(())
}
