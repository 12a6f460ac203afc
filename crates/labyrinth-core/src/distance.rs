use crate::geom::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Manhattan distance from `p` to the nearest of `targets`, or `None` if
/// `targets` is empty.
#[inline]
pub fn manhattan_to_nearest(p: Pos, targets: &[Pos]) -> Option<i32> {
    targets.iter().map(|&t| manhattan(p, t)).min()
}
