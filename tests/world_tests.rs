use lifegrid::Cell;
use lifegrid::Dimensions;
use lifegrid::World;
use lifegrid::WorldError;

/// Every `(x, y)` around the center of a 3x3 world, in the order they get switched on.
const RING: [(isize, isize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

fn world_with(alive: &[(isize, isize)]) -> anyhow::Result<World> {
    let mut world = World::new(3, 3)?;
    for &(x, y) in alive {
        world.set_cell(x, y, 1)?;
    }

    Ok(world)
}

#[test]
fn new_world_is_all_dead() -> anyhow::Result<()> {
    let world = World::new(3, 3)?;

    assert_eq!(world.grid(), [[0, 0, 0], [0, 0, 0], [0, 0, 0]]);

    Ok(())
}

#[test]
fn non_integer_dimensions() {
    let res = "3xthree".parse::<Dimensions>();

    assert!(matches!(res, Err(WorldError::InvalidDimensions { .. })));
}

#[test]
fn resize_grows_and_shrinks() -> anyhow::Result<()> {
    let mut world = World::new(3, 3)?;
    world.resize(4, 4)?;
    assert_eq!(world.grid(), vec![vec![0; 4]; 4]);

    let mut world = World::new(3, 3)?;
    world.resize(2, 2)?;
    assert_eq!(world.grid(), [[0, 0], [0, 0]]);

    assert!(matches!(
        world.resize(4, 0),
        Err(WorldError::InvalidDimensions { .. })
    ));

    Ok(())
}

#[test]
fn resize_growth_keeps_overlap() -> anyhow::Result<()> {
    let mut world = world_with(&[(1, 1)])?;
    world.resize(4, 4)?;

    assert_eq!(
        world.grid(),
        [[0, 0, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );

    Ok(())
}

#[test]
fn resize_shrink_keeps_overlap() -> anyhow::Result<()> {
    let mut world = world_with(&[(1, 1)])?;
    world.resize(2, 2)?;

    assert_eq!(world.grid(), [[0, 0], [0, 1]]);

    Ok(())
}

#[test]
fn resize_axes_independently() -> anyhow::Result<()> {
    let mut world = World::from_rows(&[[1u8, 0, 1], [0, 1, 0], [1, 0, 1]])?;

    // Wider, but shorter
    world.resize(5, 2)?;
    assert_eq!(world.grid(), [[1, 0, 1, 0, 0], [0, 1, 0, 0, 0]]);

    // Narrower, but taller
    world.resize(2, 4)?;
    assert_eq!(world.grid(), [[1, 0], [0, 1], [0, 0], [0, 0]]);

    Ok(())
}

#[test]
fn get_grid_is_idempotent() -> anyhow::Result<()> {
    let world = world_with(&[(0, 2), (2, 0)])?;

    assert_eq!(world.grid(), world.grid());

    Ok(())
}

#[test]
fn set_cell_alive_then_dead() -> anyhow::Result<()> {
    let mut world = World::new(3, 3)?;

    world.set_cell(0, 0, 1)?;
    assert_eq!(world.grid(), [[1, 0, 0], [0, 0, 0], [0, 0, 0]]);

    world.set_cell(0, 0, 0)?;
    assert_eq!(world.grid(), [[0, 0, 0], [0, 0, 0], [0, 0, 0]]);

    Ok(())
}

#[test]
fn set_cell_out_of_bounds() -> anyhow::Result<()> {
    let mut world = World::new(3, 3)?;

    for (x, y) in [(-1, -1), (4, 4), (3, 0), (0, 3)] {
        assert!(matches!(
            world.set_cell(x, y, 1),
            Err(WorldError::OutOfBounds { .. })
        ));
    }

    Ok(())
}

#[test]
fn set_cell_invalid_state() -> anyhow::Result<()> {
    let mut world = World::new(3, 3)?;

    assert!(matches!(
        world.set_cell(0, 0, 2),
        Err(WorldError::InvalidCellState { .. })
    ));
    assert!(matches!(
        "true".parse::<Cell>(),
        Err(WorldError::InvalidCellState { .. })
    ));
    assert_eq!(world.population(), 0);

    Ok(())
}

#[test]
fn is_cell_alive() -> anyhow::Result<()> {
    let world = world_with(&[(1, 1)])?;

    assert!(world.is_cell_alive(1, 1)?);
    assert!(!world.is_cell_alive(0, 1)?);
    assert!(matches!(
        world.is_cell_alive(-1, -1),
        Err(WorldError::OutOfBounds { .. })
    ));

    Ok(())
}

#[test]
fn neighbors_exclude_self() -> anyhow::Result<()> {
    let world = world_with(&[(0, 0), (0, 1), (0, 2)])?;
    assert_eq!(world.count_cell_neighbors(1, 1)?, 3);

    let world = world_with(&[(0, 0), (0, 1), (0, 2), (1, 1)])?;
    assert_eq!(world.count_cell_neighbors(1, 1)?, 3);

    Ok(())
}

#[test]
fn corner_neighbors_do_not_wrap() -> anyhow::Result<()> {
    let cases = [
        ((0, 0), [(0, 1), (1, 0)]),
        ((0, 2), [(0, 1), (1, 2)]),
        ((2, 0), [(1, 0), (2, 1)]),
        ((2, 2), [(1, 2), (2, 1)]),
    ];

    for ((x, y), alive) in cases {
        let world = world_with(&alive)?;
        assert_eq!(world.count_cell_neighbors(x, y)?, 2, "corner ({x}, {y})");
    }

    // Cells on the opposite edges would be neighbors on a torus
    let world = world_with(&[(2, 2), (0, 2), (2, 0)])?;
    assert_eq!(world.count_cell_neighbors(0, 0)?, 0);

    Ok(())
}

#[test]
fn neighbors_out_of_bounds() -> anyhow::Result<()> {
    let world = World::new(3, 3)?;

    assert!(matches!(
        world.count_cell_neighbors(-1, -1),
        Err(WorldError::OutOfBounds { .. })
    ));

    Ok(())
}

#[test]
fn survival_rule() -> anyhow::Result<()> {
    for n in 0..=RING.len() {
        let dead = world_with(&RING[..n])?;
        assert!(!dead.cell_survives(1, 1)?, "dead cell with {n} neighbors");

        let mut alive = dead.clone();
        alive.set_cell(1, 1, 1)?;
        assert_eq!(
            alive.cell_survives(1, 1)?,
            n == 2 || n == 3,
            "live cell with {n} neighbors"
        );
    }

    assert!(matches!(
        World::new(3, 3)?.cell_survives(-1, -1),
        Err(WorldError::OutOfBounds { .. })
    ));

    Ok(())
}

#[test]
fn birth_rule() -> anyhow::Result<()> {
    for n in 0..=RING.len() {
        let dead = world_with(&RING[..n])?;
        assert_eq!(dead.cell_is_born(1, 1)?, n == 3, "dead cell with {n} neighbors");

        let mut alive = dead.clone();
        alive.set_cell(1, 1, 1)?;
        assert!(!alive.cell_is_born(1, 1)?, "live cell with {n} neighbors");
    }

    assert!(matches!(
        World::new(3, 3)?.cell_is_born(3, 3),
        Err(WorldError::OutOfBounds { .. })
    ));

    Ok(())
}

#[test]
fn blinker_oscillates() -> anyhow::Result<()> {
    let mut world = world_with(&[(1, 0), (1, 1), (1, 2)])?;

    world.next_tick();
    assert_eq!(world.grid(), [[0, 1, 0], [0, 1, 0], [0, 1, 0]]);
    assert_eq!(world.generation(), 1);

    world.next_tick();
    assert_eq!(world.grid(), [[0, 0, 0], [1, 1, 1], [0, 0, 0]]);

    Ok(())
}

#[test]
fn block_in_corner_is_still() -> anyhow::Result<()> {
    let mut world = world_with(&[(0, 0), (0, 1), (1, 0), (1, 1)])?;
    let before = world.grid();

    world.steps(3);

    assert_eq!(world.grid(), before);
    assert_eq!(world.generation(), 3);

    Ok(())
}
