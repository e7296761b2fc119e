use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::*;
use crate::domain::builtin::{
    EL_FIRE, EL_OIL, EL_SAND, EL_SMOKE, EL_STEAM, EL_STONE, EL_WATER, EL_WOOD,
};
use crate::domain::elements::{ElementDefinition, ElementType, Rule, AMBIENT_TEMPERATURE, EL_EMPTY};

fn config(width: u32, height: u32) -> SimConfig {
    SimConfig {
        width,
        height,
        ..SimConfig::default()
    }
}

fn world_with(width: u32, height: u32, defs: Vec<ElementDefinition>) -> WorldCore {
    let content = ContentRegistry::from_definitions(defs).expect("test content is valid");
    WorldCore::with_config(config(width, height), Arc::new(content)).expect("valid config")
}

/// Write a cell directly, keeping the ambient temperature
fn put(world: &mut WorldCore, x: i32, y: i32, id: ElementId) {
    let mut rng = SmallRng::seed_from_u64(99);
    assert!(world.grid.set(x, y, id, false, &mut rng));
}

/// Write a cell with its definition temperature
fn put_hot(world: &mut WorldCore, x: i32, y: i32, id: ElementId) {
    let mut rng = SmallRng::seed_from_u64(99);
    assert!(world.grid.set(x, y, id, true, &mut rng));
}

fn empty_def() -> ElementDefinition {
    ElementDefinition::new(EL_EMPTY, "test:empty", "Empty", ElementType::None)
}

fn non_empty(world: &WorldCore) -> usize {
    world.grid.size() - world.count_of(EL_EMPTY)
}

#[test]
fn solid_square_spawn_is_stable() {
    let mut world = WorldCore::new(64, 64);
    assert_eq!(world.spawn(10, 10, EL_STONE), 100);
    assert_eq!(world.count_of(EL_STONE), 100);
    for y in 5..15 {
        for x in 5..15 {
            assert_eq!(world.element_at(x, y), EL_STONE);
        }
    }
    assert_eq!(world.element_at(15, 10), EL_EMPTY);

    world.step();
    assert_eq!(world.count_of(EL_STONE), 100);
    assert_eq!(world.element_at(5, 5), EL_STONE);
}

#[test]
fn denser_liquid_sinks_below_lighter_one() {
    let heavy = 1;
    let light = 2;
    let mut world = world_with(
        1,
        2,
        vec![
            empty_def(),
            ElementDefinition::new(heavy, "test:heavy", "Heavy", ElementType::Liquid)
                .with_gravity(1)
                .with_density(10.0)
                .with_colors(&[0xFFFF_0000]),
            ElementDefinition::new(light, "test:light", "Light", ElementType::Liquid)
                .with_gravity(1)
                .with_density(5.0)
                .with_colors(&[0xFF00_00FF]),
        ],
    );
    put(&mut world, 0, 0, heavy);
    put(&mut world, 0, 1, light);

    world.step();
    assert_eq!(world.element_at(0, 0), light);
    assert_eq!(world.element_at(0, 1), heavy);
}

#[test]
fn neighbor_rule_turns_wood_and_fire_into_ash() {
    let (wood, fire, ash) = (1, 2, 3);
    let mut world = world_with(
        4,
        4,
        vec![
            empty_def(),
            ElementDefinition::new(wood, "test:wood", "Wood", ElementType::Solid)
                .with_colors(&[0xFF8B_5A2B])
                .with_rule(Rule::Neighbor {
                    element: fire,
                    neighbor_result: ash,
                    result: ash,
                }),
            ElementDefinition::new(fire, "test:fire", "Fire", ElementType::Solid)
                .with_colors(&[0xFFFF_8000]),
            ElementDefinition::new(ash, "test:ash", "Ash", ElementType::Solid)
                .with_colors(&[0xFF50_5050]),
        ],
    );
    put(&mut world, 1, 1, wood);
    put(&mut world, 2, 1, fire);

    world.step();
    assert_eq!(world.element_at(1, 1), ash);
    assert_eq!(world.element_at(2, 1), ash);
    assert_eq!(world.name_at(1, 1), "Ash");
}

#[test]
fn fire_travels_along_a_wood_beam() {
    let mut world = WorldCore::new(40, 12);
    for x in 4..36 {
        put(&mut world, x, 8, EL_WOOD);
    }
    put_hot(&mut world, 4, 7, EL_FIRE);

    world.step();
    assert!(world.temperature_at(4, 8) > 350.0, "lit wood burns hot");

    for _ in 0..100 {
        world.step();
    }
    assert_eq!(world.count_of(EL_WOOD), 0);
    assert_ne!(world.element_at(35, 8), EL_WOOD);
}

#[test]
fn falling_powder_moves_one_row_per_tick_across_bands() {
    let mut world = WorldCore::new(10, 20);
    // Band height is 2 here, so (5,9) -> (5,10) crosses into a band scanned later
    put(&mut world, 5, 9, EL_SAND);

    world.step();
    assert_eq!(world.element_at(5, 10), EL_SAND);
    world.step();
    assert_eq!(world.element_at(5, 11), EL_SAND);
    assert_eq!(world.count_of(EL_SAND), 1);
}

#[test]
fn rising_gas_moves_one_row_per_tick() {
    let mut world = WorldCore::new(10, 20);
    // Scanning runs bottom to top, so the gas lands in rows that are still ahead
    put_hot(&mut world, 5, 12, EL_SMOKE);

    world.step();
    assert_eq!(world.element_at(5, 11), EL_SMOKE);
    assert_eq!(world.element_at(5, 10), EL_EMPTY);
    world.step();
    assert_eq!(world.element_at(5, 10), EL_SMOKE);
}

#[test]
fn movement_conserves_mass() {
    let mut world = WorldCore::new(64, 48);
    world.spawn(20, 10, EL_SAND);
    world.spawn(32, 12, EL_WATER);
    world.spawn(44, 8, EL_OIL);
    world.spawn(32, 40, EL_STONE);

    let counts = |w: &WorldCore| {
        [EL_SAND, EL_WATER, EL_OIL, EL_STONE].map(|id| w.count_of(id))
    };
    let before = counts(&world);
    let total = non_empty(&world);
    assert!(total > 100);

    for _ in 0..60 {
        world.step();
    }
    assert_eq!(counts(&world), before);
    assert_eq!(non_empty(&world), total);
}

#[test]
fn heavier_material_ends_up_below() {
    let mut world = WorldCore::new(1, 10);
    for y in 0..5 {
        put(&mut world, 0, y, EL_SAND);
    }
    for y in 5..10 {
        put(&mut world, 0, y, EL_WATER);
    }

    for _ in 0..40 {
        world.step();
    }
    for y in 0..5 {
        assert_eq!(world.element_at(0, y), EL_WATER, "row {}", y);
    }
    for y in 5..10 {
        assert_eq!(world.element_at(0, y), EL_SAND, "row {}", y);
    }
}

#[test]
fn same_seed_gives_same_world() {
    let run = || {
        let mut world = WorldCore::with_config(
            SimConfig {
                seed: 1234,
                ..config(96, 64)
            },
            Arc::new(ContentRegistry::builtin()),
        )
        .expect("valid config");
        world.spawn(30, 10, EL_SAND);
        world.spawn(60, 10, EL_WATER);
        world.spawn(48, 50, EL_STEAM);
        for _ in 0..25 {
            world.step();
        }
        (world.grid.types().to_vec(), world.grid.colors().to_vec())
    };
    assert_eq!(run(), run());
}

#[cfg(feature = "parallel")]
#[test]
fn thread_count_does_not_change_the_outcome() {
    let run = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("thread pool");
        pool.install(|| {
            let mut world = WorldCore::new(128, 96);
            world.spawn(40, 20, EL_SAND);
            world.spawn(80, 20, EL_WATER);
            world.spawn(64, 60, EL_SMOKE);
            for _ in 0..20 {
                world.step();
            }
            (world.grid.types().to_vec(), world.grid.temperatures().to_vec())
        })
    };
    assert_eq!(run(1), run(4));
}

#[test]
fn heat_spreads_from_a_hot_cell() {
    let mut world = WorldCore::new(16, 16);
    world.grid.set_temperature(8, 8, 1000.0);

    world.step();
    assert!(world.temperature_at(8, 8) < 1000.0);
    assert!(world.temperature_at(7, 8) > AMBIENT_TEMPERATURE);
    assert_eq!(world.temperature_at(0, 15), AMBIENT_TEMPERATURE);
    assert_eq!(world.temperature_at(-1, 3), AMBIENT_TEMPERATURE);
}

#[test]
fn temperature_rule_fires_after_heating() {
    let mut world = WorldCore::new(8, 8);
    put(&mut world, 3, 7, EL_WATER);
    world.grid.set_temperature(3, 7, 300.0);

    world.step();
    // Diffusion runs first and cools it to about 160, then the boiling rule fires.
    // Rules keep the cell temperature, so the steam is still hot.
    assert_eq!(world.element_at(3, 7), EL_STEAM);
    assert!(world.temperature_at(3, 7) >= 100.0);
    assert_eq!(world.count_of(EL_WATER), 0);
}

#[test]
fn spawn_patterns_follow_element_type() {
    let mut world = WorldCore::new(64, 64);

    let placed = world.spawn(32, 32, EL_WATER);
    assert_eq!(placed, 50);
    let water = world.count_of(EL_WATER);
    assert!(water > 0 && water <= 50);
    for y in 0..64 {
        for x in 0..64 {
            if world.element_at(x, y) == EL_WATER {
                assert!((x - 32).abs() <= 5 && (y - 32).abs() <= 5);
            }
        }
    }

    world.clear();
    assert_eq!(world.spawn(32, 32, EL_SAND), 10);
    world.clear();
    assert_eq!(world.spawn(32, 32, EL_STEAM), 100);
    for y in 0..64 {
        for x in 0..64 {
            if world.element_at(x, y) == EL_STEAM {
                assert!((x - 32).abs() <= 10 && (y - 32).abs() <= 10);
                assert_eq!(world.temperature_at(x, y), 110.0);
            }
        }
    }
}

#[test]
fn spawn_skips_out_of_range_cells() {
    let mut world = WorldCore::new(32, 32);
    assert_eq!(world.spawn(0, 0, EL_STONE), 25);
    assert_eq!(world.spawn(-20, -20, EL_STONE), 0);
    assert_eq!(world.spawn(5, 5, 999), 0);
}

#[test]
fn empty_spawn_erases_a_square() {
    let mut world = WorldCore::new(32, 32);
    world.spawn(10, 10, EL_STONE);
    assert_eq!(world.spawn(10, 10, EL_EMPTY), 100);
    assert_eq!(world.count_of(EL_STONE), 0);
}

#[test]
fn erasing_restores_the_configured_ambient() {
    let mut cold = config(32, 32);
    cold.ambient_temperature = -5.0;
    let mut world =
        WorldCore::with_config(cold, Arc::new(ContentRegistry::builtin())).expect("valid config");

    world.spawn(10, 10, EL_STONE);
    world.grid.set_temperature(7, 7, 400.0);
    assert_eq!(world.spawn(10, 10, EL_EMPTY), 100);
    for y in 5..15 {
        for x in 5..15 {
            assert_eq!(world.element_at(x, y), EL_EMPTY);
            assert_eq!(world.temperature_at(x, y), -5.0);
        }
    }
}

#[test]
fn clear_resets_cells_and_frame() {
    let mut world = WorldCore::new(32, 32);
    world.spawn(10, 10, EL_SAND);
    world.step();
    assert_eq!(world.frame(), 1);

    world.clear();
    assert_eq!(world.frame(), 0);
    assert_eq!(world.count_of(EL_EMPTY), 32 * 32);
}

#[test]
fn render_handoff_checks_buffer_length() {
    let mut world = WorldCore::new(8, 4);
    world.spawn(4, 2, EL_STONE);

    let mut short = vec![0u32; 31];
    assert!(!world.draw_elements(&mut short));
    assert!(short.iter().all(|&c| c == 0));
    assert!(!world.draw_heatmap(&mut short));

    let mut colors = vec![0u32; 32];
    assert!(world.draw_elements(&mut colors));
    assert_eq!(&colors[..], world.grid.colors());

    let mut heat = vec![0u32; 32];
    assert!(world.draw_heatmap(&mut heat));
    let min = world.config.heatmap_min;
    let span = world.config.heatmap_max - min;
    assert_eq!(heat[0], heat_color((AMBIENT_TEMPERATURE - min) / span));

    let ptr = world.heatmap_ptr();
    assert!(!ptr.is_null());
    assert_eq!(world.heatmap, heat);

    assert_eq!(world.colors_ptr(), world.grid.colors().as_ptr());
    assert_eq!(world.types_ptr(), world.grid.types().as_ptr());
    assert_eq!(world.temperature_ptr(), world.grid.temperatures().as_ptr());
}

#[test]
fn snapshot_round_trip_restores_the_world() {
    let mut world = WorldCore::new(32, 24);
    world.spawn(10, 5, EL_SAND);
    world.spawn(20, 5, EL_WATER);
    world.step();

    let mut bytes = Vec::new();
    world.save(&mut bytes).expect("save");
    let types = world.grid.types().to_vec();
    let temps = world.grid.temperatures().to_vec();

    for _ in 0..10 {
        world.step();
    }
    world.load(&mut bytes.as_slice()).expect("load");
    assert_eq!(world.grid.types(), &types[..]);
    assert_eq!(world.grid.temperatures(), &temps[..]);
    assert!(world.grid.touched.iter().all(|&t| t == 0));

    let mut other = WorldCore::new(24, 32);
    assert!(matches!(
        other.load(&mut bytes.as_slice()),
        Err(SnapshotError::DimensionMismatch { .. })
    ));
}

#[test]
fn content_bundle_swap_rebuilds_the_grid() {
    let mut world = WorldCore::new(16, 16);
    world.spawn(8, 8, EL_STONE);

    let bundle = r#"{ "elements": [
        { "id": 0, "key": "test:empty", "type": "none" },
        { "id": 1, "key": "test:goo", "name": "Goo", "type": "liquid", "gravity": 1,
          "density": 2.0, "dispersion": 1, "colors": [4278255360] }
    ] }"#;
    world.load_content_bundle_json(bundle).expect("bundle loads");
    assert_eq!(world.count_of(EL_EMPTY), 256);
    assert_eq!(world.content().element_count(), 2);
    assert_eq!(world.spawn(8, 8, 1), 50);

    assert!(world.load_content_bundle_json("{").is_err());
    assert_eq!(world.content().element_count(), 2);
}

#[test]
fn from_json_builds_a_configured_world() {
    let world = WorldCore::from_json(r#"{ "width": 40, "height": 30, "bands": 3, "strips": 2 }"#, None)
        .expect("valid");
    assert_eq!(world.width(), 40);
    assert_eq!(world.height(), 30);
    assert_eq!(world.partition().band_count(), 3);
    assert_eq!(world.partition().strip_count(), 2);

    assert!(WorldCore::from_json(r#"{ "width": 0 }"#, None).is_err());
}

#[test]
fn perf_stats_are_collected_when_enabled() {
    let mut world = WorldCore::new(32, 32);
    world.spawn(16, 4, EL_SAND);
    world.step();
    assert_eq!(world.get_perf_stats().cells_processed(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 32 * 32);
    assert_eq!(stats.non_empty_cells() as usize, non_empty(&world));
    assert!(stats.cells_processed() > 0);
    assert!(stats.swaps() > 0);
}

#[test]
fn queries_are_bounds_safe() {
    let world = WorldCore::new(8, 8);
    assert_eq!(world.name_at(3, 3), "Empty");
    assert_eq!(world.name_at(-1, 3), "");
    assert_eq!(world.temperature_at(100, 100), AMBIENT_TEMPERATURE);
    assert_eq!(world.element_at(8, 0), EL_EMPTY);
}

#[test]
fn new_world_has_a_validated_size() {
    let world = WorldCore::new(0, 0);
    assert_eq!((world.width(), world.height()), (1, 1));
    assert!(world.config().validate().is_ok());

    let world = WorldCore::new(24, 16);
    assert_eq!((world.width(), world.height()), (24, 16));
    assert_eq!(world.config(), &SimConfig::with_size(24, 16));
}
