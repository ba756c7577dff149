use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};
use swiss_pairing::{status::Status, tournament::Tournament, utils};

/// Swiss tournament simulator
///
/// Builds a roster, pairs every round with the Swiss engine, rolls random
/// results, and prints pairings and final standings.
#[derive(Debug, Parser)]
#[command(about = "Swiss tournament simulator")]
struct Args {
    /// How many players enter
    #[arg(default_value_t = 9, long)]
    players: u32,

    /// How many rounds to play
    #[arg(default_value_t = 5, long)]
    rounds: u32,

    /// Seed for the random ratings and results
    #[arg(default_value_t = 0, long)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut tournament = Tournament::new();

    for n in 1..=args.players {
        let rating = 1_000 + rng.random_range(0..800);
        tournament.add_player(&format!("player-{n}"), rating);
    }

    for round in 1..=args.rounds {
        let pairings = tournament.generate_round(round)?;

        println!("round {round}");
        for pairing in &pairings {
            let white = &tournament.player(pairing.white)?.name;
            match pairing.black {
                Some(black) => {
                    println!(
                        "  board {}: {white} vs {}",
                        pairing.board,
                        tournament.player(black)?.name
                    );
                }
                None => println!("  board {}: {white} has the bye", pairing.board),
            }
        }

        for pairing in &pairings {
            if pairing.is_bye() {
                continue;
            }

            let result = match rng.random_range(0..10) {
                0..=3 => Status::WhiteWins,
                4..=7 => Status::BlackWins,
                _ => Status::Draw,
            };
            tournament.record_result(round, pairing.board, result)?;
        }

        tournament.recalculate_tiebreaks();
    }

    println!("\nstandings (name rating points tiebreak)");
    print!("{tournament}");

    info!(
        "simulated {} rounds for {} players",
        args.rounds, args.players
    );

    Ok(())
}
