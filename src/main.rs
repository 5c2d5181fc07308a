use chessfigures::chess::figure::setup::default_setup;
use chessfigures::chess::figure::{Color, Kind};
use log::info;

fn main() {
    env_logger::init();

    let figures = default_setup();
    for y in 0..8 {
        let rank: String = (0..8)
            .map(|x| {
                figures
                    .iter()
                    .find(|f| f.x() == x && f.y() == y)
                    .map_or('.', |f| f.symbol())
            })
            .collect();
        println!("{}", rank);
    }
    info!("{} figures placed", figures.len());

    for kind in Kind::ALL {
        for color in [Color::White, Color::Black] {
            if kind != Kind::Pawn && color == Color::Black {
                continue;
            }
            let moves = kind.moves(color);
            println!();
            match kind {
                Kind::Pawn => println!("{} {} ({} cells)", color, kind, moves.len()),
                _ => println!("{} ({} cells)", kind, moves.len()),
            }
            print!("{}", moves);
        }
    }
}
