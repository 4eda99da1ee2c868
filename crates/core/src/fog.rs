//! Bulk fog-of-war reveal triggered by picking up a map piece.
//!
//! The per-ray reveal lives in the ray caster, which marks cells as it walks them.

use log::debug;

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::Pos;

/// Patch centres are rejected while they sit inside this box around the pickup.
pub const PATCH_EXCLUSION: u32 = 20;
const PATCH_ATTEMPTS: u32 = 100;

/// Marks a filled disc of `radius` cells explored, centred somewhere away from
/// `(exclude_x, exclude_y)`. Returns the chosen centre.
pub fn reveal_distant_patch(
    grid: &mut Grid,
    rng: &mut impl RandomSource,
    exclude_x: i32,
    exclude_y: i32,
    radius: u32,
) -> Pos {
    let exclude = Pos { y: exclude_y, x: exclude_x };
    let centre = (0..PATCH_ATTEMPTS)
        .map(|_| random_cell(grid, rng))
        .find(|&candidate| exclude.chebyshev(candidate) >= PATCH_EXCLUSION)
        .unwrap_or_else(|| {
            debug!("no distant patch centre found, taking an unconstrained sample");
            random_cell(grid, rng)
        });

    reveal_disc(grid, centre, radius);
    centre
}

/// Every in-bounds cell with `dx² + dy² <= radius²`. Only the part of the bounding box that
/// overlaps the grid is visited, whatever the radius.
pub fn reveal_disc(grid: &mut Grid, centre: Pos, radius: u32) {
    let reach = i64::from(radius);
    let reach_sq = reach * reach;
    let (cx, cy) = (i64::from(centre.x), i64::from(centre.y));
    let max_x = grid.width() as i64 - 1;
    let max_y = grid.height() as i64 - 1;
    for y in (cy - reach).max(0)..=(cy + reach).min(max_y) {
        for x in (cx - reach).max(0)..=(cx + reach).min(max_x) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= reach_sq {
                grid.reveal(Pos { y: y as i32, x: x as i32 });
            }
        }
    }
}

fn random_cell(grid: &Grid, rng: &mut impl RandomSource) -> Pos {
    let x = rng.below(grid.width());
    let y = rng.below(grid.height());
    Pos { y: y as i32, x: x as i32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SeededRng};

    #[test]
    fn disc_matches_euclidean_radius() {
        let mut grid = Grid::new(21, 21);
        reveal_disc(&mut grid, Pos { y: 10, x: 10 }, 3);
        assert!(grid.is_explored(Pos { y: 10, x: 13 }));
        assert!(grid.is_explored(Pos { y: 12, x: 12 }));
        assert!(!grid.is_explored(Pos { y: 13, x: 13 }));
        assert!(!grid.is_explored(Pos { y: 10, x: 14 }));
        // Lattice points inside a radius-3 circle.
        assert_eq!(grid.explored_count(), 29);
    }

    #[test]
    fn disc_is_clipped_at_the_grid_edge() {
        let mut grid = Grid::new(10, 10);
        reveal_disc(&mut grid, Pos { y: 0, x: 0 }, 2);
        // Quarter of the radius-2 disc: (0,0) (1,0) (2,0) (0,1) (1,1) (0,2).
        assert_eq!(grid.explored_count(), 6);
    }

    #[test]
    fn oversized_radius_only_walks_the_grid() {
        let mut grid = Grid::new(12, 9);
        reveal_disc(&mut grid, Pos { y: 4, x: 6 }, u32::MAX);
        assert_eq!(grid.explored_count(), 12 * 9);
    }

    #[test]
    fn patch_centre_lands_away_from_the_pickup() {
        let mut grid = Grid::new(101, 101);
        for seed in 0..20_u64 {
            let centre = reveal_distant_patch(&mut grid, &mut SeededRng::new(seed), 50, 50, 5);
            assert!(Pos { y: 50, x: 50 }.chebyshev(centre) >= PATCH_EXCLUSION, "seed={seed}");
        }
    }

    #[test]
    fn exhausted_attempts_still_reveal_something() {
        // Every draw is 0, so every candidate is the corner the pickup sits on.
        let mut grid = Grid::new(30, 30);
        let centre = reveal_distant_patch(&mut grid, &mut ScriptedRng::new(vec![0]), 0, 0, 55);
        assert_eq!(centre, Pos { y: 0, x: 0 });
        assert_eq!(grid.explored_count(), 30 * 30);
    }

    #[test]
    fn reveal_never_hides_cells() {
        let mut grid = Grid::new(101, 101);
        grid.reveal(Pos { y: 1, x: 1 });
        reveal_distant_patch(&mut grid, &mut SeededRng::new(4), 90, 90, 10);
        assert!(grid.is_explored(Pos { y: 1, x: 1 }));
    }
}
