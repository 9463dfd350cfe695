use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use tempfile::TempDir;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_affect_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("AFFECT_PORT");
        env::remove_var("AFFECT_BIND_ADDR");
        env::remove_var("AFFECT_MODEL_PATH");
        env::remove_var("AFFECT_MODEL_ID");
        env::remove_var("AFFECT_SCORE_THRESHOLD");
        env::remove_var("AFFECT_MAX_EMOTIONS");
        env::remove_var("AFFECT_CORS_ORIGINS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.model_path.is_none());
    assert_eq!(
        config.model_id,
        "j-hartmann/emotion-english-distilroberta-base"
    );
    assert_eq!(config.score_threshold, 0.1);
    assert_eq!(config.max_emotions, 3);
    assert_eq!(config.cors_origins, vec!["*".to_string()]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8000");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_affect_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8000);
    assert!(config.model_path.is_none());
    assert_eq!(config.max_emotions, 3);
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_zero_port_rejected() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_non_numeric_port_rejected() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_PORT", "eighty")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_BIND_ADDR", "::1")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    });
}

#[test]
#[serial]
fn test_from_env_invalid_bind_addr() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_BIND_ADDR", "not-an-ip")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_model_settings() {
    clear_affect_env();

    with_env_vars(
        &[
            ("AFFECT_MODEL_PATH", " /models/emotion "),
            ("AFFECT_MODEL_ID", "acme/emotion-large"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.model_path, Some(PathBuf::from("/models/emotion")));
            assert_eq!(config.model_id, "acme/emotion-large");

            let classifier = config.classifier_config();
            assert_eq!(classifier.model_path, config.model_path);
            assert_eq!(classifier.model_id, "acme/emotion-large");
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_model_path_is_unset() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_MODEL_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.model_path.is_none());
        assert!(config.classifier_config().model_path.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_ranking_settings() {
    clear_affect_env();

    with_env_vars(
        &[
            ("AFFECT_SCORE_THRESHOLD", "0.25"),
            ("AFFECT_MAX_EMOTIONS", "5"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            let policy = config.ranking_policy();
            assert_eq!(policy.threshold(), 0.25);
            assert_eq!(policy.max_labels(), 5);
        },
    );
}

#[test]
#[serial]
fn test_from_env_threshold_out_of_range() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_SCORE_THRESHOLD", "1.5")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_threshold_not_a_number() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_SCORE_THRESHOLD", "high")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdParseError { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_zero_max_emotions_rejected() {
    clear_affect_env();

    with_env_vars(&[("AFFECT_MAX_EMOTIONS", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxEmotions { .. }));
    });
}

#[test]
#[serial]
fn test_from_env_cors_origins_list() {
    clear_affect_env();

    with_env_vars(
        &[(
            "AFFECT_CORS_ORIGINS",
            "http://localhost:3000, https://journal.example.com ,",
        )],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(
                config.cors_origins,
                vec![
                    "http://localhost:3000".to_string(),
                    "https://journal.example.com".to_string()
                ]
            );
            assert!(!config.cors_origins.iter().any(|o| o == "*"));
        },
    );
}

#[test]
fn test_validate_missing_model_path() {
    let config = Config {
        model_path: Some(PathBuf::from("/nonexistent/affect/model")),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_model_path_must_be_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("model.safetensors");
    std::fs::write(&file, b"").unwrap();

    let config = Config {
        model_path: Some(file),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_accepts_existing_model_dir() {
    let dir = TempDir::new().unwrap();

    let config = Config {
        model_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_ranking_bounds() {
    let config = Config {
        score_threshold: -0.5,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold { .. })
    ));

    let config = Config {
        max_emotions: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMaxEmotions { .. })
    ));
}

#[test]
fn test_validate_rejects_empty_model_id_and_origins() {
    let config = Config {
        model_id: " ".to_string(),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyValue { .. })));

    let config = Config {
        cors_origins: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyValue { .. })));
}

#[test]
fn test_error_messages() {
    let err = ConfigError::InvalidThreshold {
        value: "2".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "invalid score threshold '2': must be between 0.0 and 1.0"
    );

    let err = ConfigError::EmptyValue {
        name: "AFFECT_MODEL_ID",
    };
    assert_eq!(err.to_string(), "AFFECT_MODEL_ID must not be empty");
}
