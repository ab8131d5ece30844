use super::*;

#[test]
fn empty_table_uses_defaults() {
    let cfg: UciEngineConfig = toml::from_str("").unwrap();
    assert_eq!(cfg, UciEngineConfig::default());
    assert_eq!(cfg.path, PathBuf::from("stockfish"));
    assert_eq!(cfg.skill_level, 10);
    assert_eq!(cfg.limits().move_time, Duration::from_millis(500));
}

#[test]
fn fields_override_defaults() {
    let cfg: UciEngineConfig = toml::from_str(
        r#"
        path = "/opt/sf/stockfish"
        candidates = []
        skill_level = 3
        move_time_ms = 100
        depth = 12
        "#,
    )
    .unwrap();
    assert_eq!(cfg.path, PathBuf::from("/opt/sf/stockfish"));
    assert_eq!(cfg.executables().count(), 1);
    assert_eq!(cfg.skill_level, 3);
    assert_eq!(cfg.depth, Some(12));
    assert_eq!(cfg.threads, 4);
    assert_eq!(cfg.limits().move_time, Duration::from_millis(100));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<UciEngineConfig>("skil_level = 3").is_err());
}

#[test]
fn executables_start_with_path() {
    let cfg = UciEngineConfig::default();
    let all: Vec<_> = cfg.executables().collect();
    assert_eq!(all[0], &cfg.path);
    assert_eq!(all.len(), 1 + cfg.candidates.len());
}
