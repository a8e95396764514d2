//! Tests for the walk binary's argument and config handling.

use std::path::Path;

use mg_core::DegeneratePolicy;

use super::*;

fn plus_json() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("plus.json")
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let args = Args::try_parse_from(["walk"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.script.is_none());
        assert_eq!(args.random, DEFAULT_RANDOM_MOVES);
        assert_eq!(args.out, PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn flags_are_typed() {
        let args = Args::try_parse_from([
            "walk", "--config", "run.json", "--random", "7", "--out", "/tmp/walk",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("run.json")));
        assert_eq!(args.random, 7);
        assert_eq!(args.out, PathBuf::from("/tmp/walk"));
    }

    #[test]
    fn bad_move_count_rejected() {
        assert!(Args::try_parse_from(["walk", "--random", "many"]).is_err());
    }

    #[test]
    fn script_and_random_conflict() {
        assert!(Args::try_parse_from(["walk", "--script", "up", "--random", "3"]).is_err());
        let args = Args::try_parse_from(["walk", "--script", "up k"]).unwrap();
        assert_eq!(args.script.as_deref(), Some("up k"));
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn missing_path_gives_default() {
        assert_eq!(load_config(None).unwrap(), LocalizationConfig::default());
    }

    #[test]
    fn sample_config_loads() {
        let cfg = load_config(Some(&plus_json())).unwrap();
        assert_eq!((cfg.rows, cfg.cols, cfg.seed), (3, 3, 7));
        assert_eq!(cfg.on_degenerate, DegeneratePolicy::ResetUniform);
        assert_eq!(cfg.max_commands, Some(50));
        cfg.validate().unwrap();
    }

    #[test]
    fn unreadable_config_names_the_path() {
        let err = load_config(Some(Path::new("no/such/run.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/run.json"), "{err:#}");
    }
}
