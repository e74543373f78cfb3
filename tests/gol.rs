use gridzip::life::{alive_cells, board, gameover, population, resize, step, Board, Cell};
use gridzip::{Focused, TorusDirection};

fn blinker_horizontal() -> Board {
    board(5, 5, vec![(1, 2), (2, 2), (3, 2)]).unwrap()
}

fn blinker_vertical() -> Board {
    board(5, 5, vec![(2, 1), (2, 2), (2, 3)]).unwrap()
}

#[test]
fn gol_empty_stays_empty() {
    let empty = board(5, 5, vec![]).unwrap();
    assert!(gameover(&empty));
    let next = step(&empty);
    assert_eq!(next, empty);
    assert!(gameover(&next));
}

#[test]
fn gol_isolated_cell_dies() {
    let lonely = board(5, 5, vec![(2, 2)]).unwrap();
    assert_eq!(population(&lonely), 1);
    let next = step(&lonely);
    assert_eq!(population(&next), 0);
    assert!(gameover(&next));
}

#[test]
fn gol_blinker() {
    let mut grid = blinker_horizontal();
    grid = step(&grid);
    assert_eq!(grid, blinker_vertical(), "\n{}", grid);
    grid = step(&grid);
    assert_eq!(grid, blinker_horizontal(), "\n{}", grid);
}

#[test]
fn gol_blinker_across_the_seam() {
    // The same oscillator split over the wrapping edges.
    let grid = board(6, 4, vec![(5, 0), (0, 0), (1, 0)]).unwrap();
    let next = step(&grid);
    assert_eq!(alive_cells(&next), vec![(0, 0), (0, 1), (0, 3)]);
    assert_eq!(step(&next), grid);
}

#[test]
fn gol_block_is_still() {
    for &(width, height) in &[(4, 4), (6, 5)] {
        let block = board(width, height, vec![(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        assert_eq!(step(&block), block, "\n{}", block);
    }
}

#[test]
fn gol_glider_returns_after_lapping_the_torus() {
    // A glider moves one cell diagonally every four generations.
    let glider = board(6, 6, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap();
    let mut grid = glider.clone();
    for _ in 0..4 {
        grid = step(&grid);
        assert_eq!(population(&grid), 5);
    }
    let moved = board(6, 6, vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]).unwrap();
    assert_eq!(grid, moved, "\n{}", grid);
    for _ in 4..24 {
        grid = step(&grid);
    }
    assert_eq!(grid, glider);
}

#[test]
fn gol_step_does_not_depend_on_focus() {
    let grid = board(5, 6, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
    let mut focused = grid.clone();
    focused.focus_at((3, 4));
    let next = step(&focused);
    assert_eq!(next.index(), (3, 4));
    assert_eq!(alive_cells(&next), alive_cells(&step(&grid)));
}

#[test]
fn gol_step_keeps_shape_after_shifts() {
    let mut grid = blinker_horizontal();
    grid.shift(TorusDirection::South);
    grid.shift(TorusDirection::West);
    let next = step(&grid);
    assert_eq!(next.size(), grid.size());
    assert_eq!(next.index(), grid.index());
    assert_eq!(*next.get((2, 1)), Cell::Alive);
}

#[test]
fn gol_resize_restores_dimensions() {
    let grid = blinker_horizontal();
    let shrunk = resize(&grid, -1, 0);
    assert_eq!(shrunk.size(), (4, 5));
    // The removed column was dead, so growing it back restores the board exactly.
    assert_eq!(resize(&shrunk, 1, 0), grid);

    let wide = board(3, 3, vec![(2, 0)]).unwrap();
    let regrown = resize(&resize(&wide, -1, 0), 1, 0);
    assert_eq!(regrown.size(), wide.size());
    assert!(gameover(&regrown));
}
