//! Console front end for the minefield game: argument parsing, board
//! rendering, and the input loop. All game rules live in `minefield-core`.

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use minefield_core::{Board, GameState, Player, update_state};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(version, about = "Cross the board without stepping on a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board rows
    #[arg(long, default_value_t = 8)]
    rows: u8,

    /// Board columns
    #[arg(long, default_value_t = 8)]
    columns: u8,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 20)]
    mines: u16,

    /// Starting lives
    #[arg(short, long, default_value_t = 3)]
    lives: i32,

    /// Starting position in notation form, e.g. A1
    #[arg(long, default_value = "A1")]
    start: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        play(&args, &mut lines)?;

        println!("Press \"q\" to quit or enter to play another game.");
        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim().eq_ignore_ascii_case("q") {
            break;
        }
    }
    Ok(())
}

/// Runs a single game to completion (or until stdin closes).
fn play(args: &Args, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    let mut player =
        Player::new(args.lives, &args.start).context("invalid starting position")?;
    let mut board = Board::new(args.rows, args.columns);

    let seed = args.seed.unwrap_or_else(entropy_seed);
    log::debug!("seed: {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);
    board
        .place_hazards(args.mines, player.coords(), &mut rng)
        .context("could not place mines")?;

    let mut state = GameState::New;
    loop {
        render(&board, &player, state);
        if state.is_terminal() {
            return Ok(());
        }

        println!("Enter a direction (up, down, left, right):");
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let direction = line?.trim().to_lowercase();
        state = update_state(&mut board, &mut player, &direction);
    }
}

fn render(board: &Board, player: &Player, state: GameState) {
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let tile = board[(row, column)];
            if tile.is_visited {
                print!("{}", if tile.is_hazard { "[X]" } else { "[ ]" });
            } else if (row, column) == player.coords() {
                print!("[P]");
            } else {
                print!("[?]");
            }
        }
        println!();
    }

    match state {
        GameState::InvalidInput => {
            stats(player);
            println!("Invalid input. Please enter 'up', 'down', 'left', or 'right'.");
        }
        GameState::Won => {
            println!("Congratulations! You reached the other end of the board.");
            println!("Your final score: {}", player.final_score());
        }
        GameState::Lost => {
            println!("Alas! You just hit a mine and lost your last life. Game over.");
            println!("Your final score: {}", player.final_score());
        }
        GameState::LifeLost => {
            println!("Sorry, you just lost a life.");
            stats(player);
        }
        GameState::New | GameState::InProgress => stats(player),
    }
}

fn stats(player: &Player) {
    println!("Player position: {}", player.position());
    println!("Lives left: {}", player.lives());
    println!("Moves taken: {}", player.moves());
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
