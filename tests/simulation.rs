use elastic_pit::sim::{
    Body, Bounds, Color, MassPoint, Palette, Simulation, Vector2d, World, initialize, tick,
};
use elastic_pit::{Preset, SimSettings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn body(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Body {
    Body::new(
        Vector2d::new(x, y),
        Vector2d::new(vx, vy),
        radius,
        Color::default(),
        1.0,
    )
}

// ==================================================================================
// End-to-end scenarios
// ==================================================================================

#[test]
fn overlap_stays_bounded_over_many_ticks() {
    let settings = SimSettings {
        seed: 7,
        ..SimSettings::from_preset(Preset::Sparse)
    };
    let (r_min, _) = settings.radius_range;
    let mut sim = Simulation::new(settings).unwrap();
    assert_eq!(sim.world.max_overlap(), 0.0);

    let mut worst: f64 = 0.0;
    for _ in 0..500 {
        sim.step();
        worst = worst.max(sim.world.max_overlap());
    }
    assert!(worst < 0.75 * r_min, "worst overlap {} too deep", worst);
}

#[test]
fn bodies_stay_inside_world() {
    let settings = SimSettings {
        seed: 11,
        ..SimSettings::from_preset(Preset::Sparse)
    };
    let bounds = settings.bounds;
    let mut sim = Simulation::new(settings).unwrap();

    for _ in 0..500 {
        sim.step();
        for body in sim.world.bodies() {
            assert!(body.pos.x() >= 0.0 && body.pos.x() <= bounds.width);
            assert!(body.pos.y() >= 0.0 && body.pos.y() <= bounds.height);
        }
    }
}

#[test]
fn kinetic_energy_is_conserved() {
    let settings = SimSettings {
        seed: 3,
        ..SimSettings::default()
    };
    let mut sim = Simulation::new(settings).unwrap();
    let before = sim.world.system_totals().kinetic_energy;

    let mut contacts = 0;
    for _ in 0..300 {
        contacts += sim.step().contacts.len();
    }
    let after = sim.world.system_totals().kinetic_energy;

    assert!(contacts > 0, "scenario should produce collisions");
    assert!(
        (after - before).abs() < 1e-6 * before,
        "energy drifted {} -> {}",
        before,
        after
    );
}

#[test]
fn isolated_pair_conserves_momentum() {
    let bounds = Bounds::new(1000.0, 1000.0);
    let mut world = World::new(0);
    world.spawn(body(480.0, 500.0, 2.0, 0.5, 12.0));
    world.spawn(body(515.0, 504.0, -1.0, -0.5, 8.0));
    let before = world.system_totals().momentum;

    let mut collided = false;
    for _ in 0..10 {
        collided |= !tick(&mut world, bounds).contacts.is_empty();
    }
    let after = world.system_totals().momentum;

    assert!(collided);
    assert!(before.distance_to(after) < 1e-9 * before.norm());
}

#[test]
fn contact_colors_converge() {
    let bounds = Bounds::new(500.0, 500.0);
    let mut world = World::new(99).with_palette(Palette::Random);
    let a = world.spawn(Body {
        color: Color(0x111111),
        ..body(200.0, 250.0, 3.0, 0.0, 10.0)
    });
    let b = world.spawn(Body {
        color: Color(0x222222),
        ..body(224.0, 250.0, -3.0, 0.0, 10.0)
    });

    let report = tick(&mut world, bounds);
    assert!(!report.contacts.is_empty());
    let ca = world.get(a).unwrap().color;
    let cb = world.get(b).unwrap().color;
    assert_eq!(ca, cb);
    assert_eq!(report.contacts.last().unwrap().color, ca);
}

#[test]
fn injected_rng_drives_initialization() {
    let settings = SimSettings::from_preset(Preset::Crowded);
    let mut w1 = World::new(0);
    let mut w2 = World::new(0);
    initialize(&mut w1, &settings, &mut Pcg32::seed_from_u64(5)).unwrap();
    initialize(&mut w2, &settings, &mut Pcg32::seed_from_u64(6)).unwrap();

    assert_eq!(w1.len(), settings.body_count);
    assert_eq!(w1.max_overlap(), 0.0);
    assert_ne!(w1.bodies(), w2.bodies());

    let mass: f64 = w1.bodies().iter().map(|b| b.mass()).sum();
    assert!(mass > 0.0);
}
