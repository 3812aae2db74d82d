use flocking::{Color, DebugSnapshot, Flock, SimulationConfig, UpdateOrder, Vector3, WorldBounds};

fn scenario_config() -> SimulationConfig {
    SimulationConfig {
        vision_dist: 100.0,
        field_of_view_deg: 360.0,
        collision_dist: 10.0,
        world: WorldBounds::new(200.0, 200.0, 200.0),
        ..Default::default()
    }
}

#[test]
fn close_pair_triggers_avoidance() {
    let config = scenario_config();
    let mut flock = Flock::new();
    let a = flock.spawn(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), Color::default());
    flock.spawn(Vector3::new(5.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), Color::default());
    flock.set_debug(a, true);

    flock.advance(&config);

    let boid = flock.get(a).unwrap();
    assert_eq!(boid.seen_neighbors(), &[Vector3::new(5.0, 0.0, 0.0)]);
    assert!(boid.velocity.y > 0.0, "velocity {:?}", boid.velocity);
    assert!(boid.velocity.x < 0.0, "velocity {:?}", boid.velocity);
    assert!(boid.velocity.magnitude() <= config.max_speed + 1.0e-4);
}

#[test]
fn lone_boid_keeps_heading() {
    let config = scenario_config();
    let mut flock = Flock::new();
    let velocity = Vector3::new(1.0, -1.0, 0.5);
    let id = flock.spawn(Vector3::new(100.0, 100.0, 100.0), velocity, Color::default());

    for _ in 0..5 {
        flock.advance(&config);
    }

    let boid = flock.get(id).unwrap();
    assert_eq!(boid.velocity, velocity);
    assert_eq!(boid.position, Vector3::new(105.0, 95.0, 102.5));
}

#[test]
fn zero_vision_means_no_steering() {
    let config = SimulationConfig {
        vision_dist: 0.0,
        ..scenario_config()
    };
    let mut flock = Flock::new();
    let a = flock.spawn(Vector3::new(50.0, 50.0, 50.0), Vector3::new(0.0, 2.0, 0.0), Color::default());
    flock.spawn(Vector3::new(51.0, 50.0, 50.0), Vector3::new(2.0, 0.0, 0.0), Color::default());

    flock.advance(&config);

    assert_eq!(flock.get(a).unwrap().velocity, Vector3::new(0.0, 2.0, 0.0));
}

#[test]
fn boids_wrap_to_opposite_faces() {
    let config = SimulationConfig {
        vision_dist: 0.0,
        ..scenario_config()
    };
    let width = config.world.width;
    let mut flock = Flock::new();
    let east = flock.spawn(Vector3::new(width + 1.0, 100.0, 100.0), Vector3::new(4.0, 0.0, 0.0), Color::default());
    let west = flock.spawn(Vector3::new(1.0, 100.0, 100.0), Vector3::new(-4.0, 0.0, 0.0), Color::default());
    let corner = flock.spawn(Vector3::new(199.0, 199.0, 50.0), Vector3::new(2.0, 2.0, 0.0), Color::default());

    flock.advance(&config);

    assert_eq!(flock.get(east).unwrap().position.x, 1.0);
    assert_eq!(flock.get(west).unwrap().position.x, width - 1.0);
    let corner = flock.get(corner).unwrap().position;
    assert_eq!((corner.x, corner.y, corner.z), (1.0, 1.0, 50.0));
}

#[test]
fn identical_twins_see_each_other_not_themselves() {
    let config = scenario_config();
    let mut flock = Flock::new();
    let position = Vector3::new(80.0, 80.0, 80.0);
    let velocity = Vector3::new(1.0, 0.0, 0.0);
    let a = flock.spawn(position, velocity, Color::default());
    let b = flock.spawn(position, velocity, Color::default());
    flock.set_debug_all(true);

    flock.advance(&config);

    for id in [a, b] {
        let boid = flock.get(id).unwrap();
        assert_eq!(boid.seen_neighbors(), &[position]);
        assert!(boid.velocity.is_finite());
    }
}

#[test]
fn snapshot_order_is_independent_of_spawn_order() {
    let config = scenario_config();
    let first = (Vector3::new(60.0, 60.0, 60.0), Vector3::new(1.0, 0.0, 0.0));
    let second = (Vector3::new(66.0, 62.0, 60.0), Vector3::new(0.0, -1.0, 1.0));

    let mut forward = Flock::new();
    forward.spawn(first.0, first.1, Color::default());
    forward.spawn(second.0, second.1, Color::default());

    let mut reversed = Flock::new();
    reversed.spawn(second.0, second.1, Color::default());
    reversed.spawn(first.0, first.1, Color::default());

    forward.advance(&config);
    reversed.advance(&config);

    assert_eq!(forward.boids()[0].velocity, reversed.boids()[1].velocity);
    assert_eq!(forward.boids()[1].velocity, reversed.boids()[0].velocity);

    let immediate = SimulationConfig {
        update_order: UpdateOrder::Immediate,
        ..config
    };
    let mut forward = Flock::new();
    forward.spawn(first.0, first.1, Color::default());
    forward.spawn(second.0, second.1, Color::default());
    forward.advance(&immediate);
    assert_ne!(forward.boids()[1].velocity, reversed.boids()[0].velocity);
}

#[test]
fn debug_snapshot_serializes_to_json() {
    let config = scenario_config();
    let mut flock = Flock::new();
    let a = flock.spawn(Vector3::new(10.0, 10.0, 10.0), Vector3::new(1.0, 0.0, 0.0), Color::default());
    flock.spawn(Vector3::new(30.0, 10.0, 10.0), Vector3::new(1.0, 0.0, 0.0), Color::default());
    flock.set_debug(a, true);
    flock.advance(&config);

    let json = serde_json::to_string(&flock.debug_snapshot()).unwrap();
    let parsed: DebugSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.frame, 1);
    let record = parsed.agent(a).unwrap();
    assert_eq!(record.seen_neighbors, vec![Vector3::new(30.0, 10.0, 10.0)]);
    assert_eq!(record.local_center_of_mass, Some(Vector3::new(30.0, 10.0, 10.0)));
}
