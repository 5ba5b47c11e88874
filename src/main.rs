use std::io;

use chesslogic::chess_board::{ChessBoard, Move, SafeSquares, Square};

use clap::arg;
use clap::command;
use clap::Command;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() {
    let matches = command!()
        .propagate_version(true)
        .subcommand(Command::new("show").about("Render the initial position"))
        .subcommand(Command::new("play").about("Play a game on the terminal"))
        .subcommand(
            Command::new("moves")
                .about("List the safe squares of a position")
                .arg(
                    arg!(
                    -m --moves <moves> "Moves applied from the initial position"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Play a seeded random game")
                .arg(
                    arg!(
                    -s --seed <seed> "RNG seed"
                            )
                    .default_value("42")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -p --plies <plies> "Maximum number of plies"
                            )
                    .default_value("40")
                    .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("show", _)) => {
            show();
        }
        Some(("play", _)) => {
            play();
        }
        Some(("moves", arg_matches)) => {
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            list_safe_squares(moves);
        }
        Some(("demo", arg_matches)) => {
            let seed = *arg_matches.get_one::<u64>("seed").unwrap();
            let plies = *arg_matches.get_one::<usize>("plies").unwrap();
            demo(seed, plies);
        }
        None => {
            play();
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn is_offered(safe_squares: &SafeSquares, mv: &Move) -> bool {
    safe_squares
        .get(&mv.from)
        .map_or(false, |destinations| destinations.contains(&mv.to))
}

fn show() {
    let board = ChessBoard::new();
    println!("{}", board.render_to_string());
}

/// Interactive drive loop: only moves present in the safe-move map are ever
/// applied, so illegal moves are rejected by construction.
fn play() {
    let mut board = ChessBoard::new();

    loop {
        println!("{}", board.render_to_string());
        if board.is_in_check(board.active_color) {
            println!("{:?} is in check!", board.active_color);
        }

        let safe_squares = board.find_safe_squares();
        if safe_squares.is_empty() {
            println!("No safe moves left for {:?}.", board.active_color);
            break;
        }

        println!("{:?} to move (e.g. e2e4, or 'quit'):", board.active_color);
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input == "quit" {
            break;
        }

        match Move::from_algebraic(input) {
            Ok(mv) if is_offered(&safe_squares, &mv) => board.make_move(mv),
            Ok(mv) => println!("Illegal move: {}", mv.as_algebraic()),
            Err(e) => println!("{}", e),
        }
    }
}

#[derive(Tabled)]
struct SafeSquareRow {
    from: String,
    piece: char,
    count: usize,
    destinations: String,
}

fn list_safe_squares(moves: Vec<&String>) {
    let mut board = ChessBoard::new();
    for m in moves {
        let mv = match Move::from_algebraic(m) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{}", e);
                return;
            }
        };
        if !is_offered(&board.find_safe_squares(), &mv) {
            println!("Illegal move: {}", m);
            return;
        }
        board.make_move(mv);
    }

    println!("{}", board.render_to_string());

    let safe_squares = board.find_safe_squares();
    let mut sources: Vec<_> = safe_squares.keys().copied().collect();
    sources.sort();

    let mut table_rows = Vec::new();
    for from in sources {
        let destinations = &safe_squares[&from];
        let piece = match board.squares[from.row as usize][from.col as usize] {
            Square::Occupied(p) => p.to_char(),
            Square::Empty => ' ',
        };
        table_rows.push(SafeSquareRow {
            from: from.as_algebraic(),
            piece,
            count: destinations.len(),
            destinations: destinations
                .iter()
                .map(|d| d.as_algebraic())
                .collect::<Vec<_>>()
                .join(" "),
        });
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

fn demo(seed: u64, plies: usize) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut board = ChessBoard::new();

    for ply in 1..=plies {
        let safe_squares = board.find_safe_squares();
        if safe_squares.is_empty() {
            println!("No safe moves left for {:?} after {} plies.", board.active_color, ply - 1);
            break;
        }

        // Sort the sources for a reproducible pick; map order is arbitrary.
        let mut sources: Vec<_> = safe_squares.keys().copied().collect();
        sources.sort();
        let from = sources[rng.gen_range(0..sources.len())];
        let destinations = &safe_squares[&from];
        let to = destinations[rng.gen_range(0..destinations.len())];

        let mv = Move { from, to };
        println!("{}. {}", ply, mv.as_algebraic());
        board.make_move(mv);
    }

    println!("{}", board.render_to_string());
}
