use super::super::Square;

pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    matches!((dr.abs(), df.abs()), (1, 2) | (2, 1))
}
