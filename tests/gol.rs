use lifeduel::{Activation, Grid, GridEngine};

fn engine_from(grid: &Grid) -> GridEngine {
    let mut engine = GridEngine::new(grid.side(), 0);
    engine.set_state(grid).unwrap();
    engine
}

#[test]
fn gol_blinker() {
    let vertical = Grid::from_fn(5, |x, y| x == 1 && (1..=3).contains(&y));
    let horizontal = Grid::from_fn(5, |x, y| y == 2 && x <= 2);
    let mut engine = engine_from(&vertical);
    assert!(engine.step());
    assert_eq!(engine.grid(), &horizontal);
    assert!(engine.step());
    assert_eq!(engine.grid(), &vertical);
}

#[test]
fn gol_block_is_still() {
    let block: Grid = "
        ......
        .oo...
        .oo...
        ......
        ......
        ......
    "
    .parse()
    .unwrap();
    let mut engine = engine_from(&block);
    for _ in 0..10 {
        assert!(!engine.step());
        assert_eq!(engine.grid(), &block);
    }
}

#[test]
fn gol_glider_moves_diagonally() {
    let glider: Grid = "
        .o....
        ..o...
        ooo...
        ......
        ......
        ......
    "
    .parse()
    .unwrap();
    let mut engine = engine_from(&glider);
    for _ in 0..4 {
        engine.step();
    }
    let moved: Grid = "
        ......
        ..o...
        ...o..
        .ooo..
        ......
        ......
    "
    .parse()
    .unwrap();
    assert_eq!(engine.grid(), &moved);
}

#[test]
fn gol_empty_board_is_quiet() {
    let mut engine = GridEngine::new(7, 0);
    assert!(!engine.step());
    assert_eq!(engine.count_active(), 0);
}

#[test]
fn gol_lonely_cell_with_one_activation() {
    let mut engine = GridEngine::new(3, 1);
    assert_eq!(engine.activate(1, 1).unwrap(), Activation::Activated);
    assert_eq!(engine.remaining(), 0);
    assert!(engine.step());
    assert!(!engine.is_active(1, 1).unwrap());
    assert!(!engine.step());
}

#[test]
fn gol_birth_on_three_neighbors() {
    let mut engine = engine_from(&Grid::from_alive(4, vec![(0, 0), (2, 0), (0, 2)]).unwrap());
    assert!(engine.step());
    assert!(engine.is_active(1, 1).unwrap());
}
