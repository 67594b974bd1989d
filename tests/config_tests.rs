// Host-side tests for particle configuration parsing and the slide table.

use slide_fx::constants::PARTICLE_MAX_COUNT;
use slide_fx::core::config::configured_slides;
use slide_fx::core::{slide_config, ConfigError, ParticleColor, ParticleConfig, Physics, Shape};

#[test]
fn table_entries_match_authored_values() {
    let cfg = slide_config("slide-2");
    assert_eq!(cfg.shape, Shape::Triangle);
    assert_eq!(cfg.physics, Physics::Gravity);
    assert_eq!(cfg.count, 50);
    assert!((cfg.speed - 0.8).abs() < 1e-6);

    let cfg = slide_config("slide-4");
    assert_eq!(cfg.shape, Shape::SquareOutline);
    assert_eq!(cfg.physics, Physics::Drift);
    assert!(cfg.show_coords);

    let cfg = slide_config("slide-24");
    assert_eq!(cfg.color, ParticleColor::Black);
    assert_eq!(cfg.physics, Physics::Rise);
}

#[test]
fn unknown_slide_gets_defaults() {
    let cfg = slide_config("slide-99");
    assert_eq!(cfg, ParticleConfig::default());
    assert_eq!(cfg.count, 30);
    assert_eq!((cfg.size_min, cfg.size_max), (2.0, 6.0));
}

#[test]
fn every_table_entry_is_sane() {
    let ids: Vec<_> = configured_slides().collect();
    assert_eq!(ids.len(), 26);
    assert!(ids.contains(&"slide-stats"));
    for id in ids {
        let cfg = slide_config(id);
        assert!(cfg.count > 0 && cfg.count <= PARTICLE_MAX_COUNT, "{id}");
        assert!(cfg.size_min > 0.0 && cfg.size_min <= cfg.size_max, "{id}");
        assert!(cfg.speed > 0.0, "{id}");
    }
}

#[test]
fn tags_parse_from_their_authored_names() {
    assert_eq!("triangleOutline".parse::<Shape>(), Ok(Shape::TriangleOutline));
    assert_eq!("orbit".parse::<Physics>(), Ok(Physics::Orbit));
    assert_eq!("yellow".parse::<ParticleColor>(), Ok(ParticleColor::Yellow));
    assert_eq!(
        "hexagon".parse::<Shape>(),
        Err(ConfigError::UnknownShape("hexagon".to_string()))
    );
    assert!(Shape::SquareOutline.is_outline());
    assert!(!Shape::Square.is_outline());
    assert_eq!(ParticleColor::Yellow.rgb(), [255, 214, 0]);
}

#[test]
fn overrides_apply_on_top_of_table_entry() {
    let mut cfg = slide_config("slide-0");
    cfg.apply_overrides("shape=square physics=drift count=12 speed=2.5 showCoords=true")
        .expect("valid overrides");
    assert_eq!(cfg.shape, Shape::Square);
    assert_eq!(cfg.physics, Physics::Drift);
    assert_eq!(cfg.count, 12);
    assert_eq!(cfg.speed, 2.5);
    assert!(cfg.show_coords);
    // untouched keys keep the table value
    assert_eq!(cfg.color, ParticleColor::White);
    assert_eq!(cfg.size_max, 3.0);
}

#[test]
fn inverted_size_range_is_swapped() {
    let mut cfg = ParticleConfig::default();
    cfg.apply_overrides("sizeMin=8 sizeMax=4").expect("valid overrides");
    assert_eq!((cfg.size_min, cfg.size_max), (4.0, 8.0));
}

#[test]
fn bad_overrides_are_reported() {
    let mut cfg = ParticleConfig::default();
    assert_eq!(
        cfg.apply_overrides("wobble=3"),
        Err(ConfigError::UnknownKey("wobble".to_string()))
    );
    assert_eq!(
        cfg.apply_overrides("count"),
        Err(ConfigError::MalformedPair("count".to_string()))
    );
    assert_eq!(
        cfg.apply_overrides("speed=-1"),
        Err(ConfigError::InvalidValue {
            key: "speed".to_string(),
            value: "-1".to_string()
        })
    );
    assert!(matches!(
        cfg.apply_overrides("physics=bounce"),
        Err(ConfigError::UnknownPhysics(_))
    ));
    assert_eq!(
        ConfigError::UnknownColor("teal".to_string()).to_string(),
        "unknown color `teal`"
    );
}

#[test]
fn oversized_count_is_rejected() {
    let mut cfg = slide_config("slide-1");
    assert_eq!(
        cfg.apply_overrides("count=4000000000"),
        Err(ConfigError::InvalidValue {
            key: "count".to_string(),
            value: "4000000000".to_string()
        })
    );
    assert_eq!(cfg.count, 40, "rejected override leaves count alone");
    cfg.apply_overrides(&format!("count={PARTICLE_MAX_COUNT}"))
        .expect("upper bound is accepted");
    assert_eq!(cfg.count, PARTICLE_MAX_COUNT);
}
