use log::debug;

use crate::chess::figure::{Color, Figure, Kind};

const BACK_RANK: [Kind; 8] = [
    Kind::Castle,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Castle,
];

/// Figures of the initial position, indexed in the order they are created:
/// white back rank, white pawns, black pawns, black back rank.
///
/// White sits on rows 7 and 6, black on rows 1 and 0.
pub fn default_setup() -> Vec<Figure> {
    let mut figures = Vec::with_capacity(32);

    place_rank(&mut figures, Color::White, 7, &BACK_RANK);
    place_rank(&mut figures, Color::White, 6, &[Kind::Pawn; 8]);
    place_rank(&mut figures, Color::Black, 1, &[Kind::Pawn; 8]);
    place_rank(&mut figures, Color::Black, 0, &BACK_RANK);

    debug!("default setup created with {} figures", figures.len());
    figures
}

fn place_rank(figures: &mut Vec<Figure>, color: Color, y: i32, kinds: &[Kind; 8]) {
    for (x, kind) in kinds.iter().enumerate() {
        let name = format!("{} {}", color, kind);
        let index = figures.len();
        figures.push(Figure::new(*kind, x as i32, y, color, &name, index));
    }
}
