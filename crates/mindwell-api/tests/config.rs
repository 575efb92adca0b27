use std::collections::HashMap;
use std::time::Duration;

use mindwell_api::config::{Config, ConfigError, StoreConfig};

fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn bucket_selects_s3_store() {
    let cfg = config(&[
        ("MINDWELL_BUCKET", "mindwell-records"),
        ("MINDWELL_JWT_SECRET", "s3cret"),
    ])
    .unwrap();

    assert_eq!(
        cfg.store,
        StoreConfig::S3 {
            bucket: "mindwell-records".to_string(),
            endpoint: None,
        }
    );
    assert_eq!(cfg.port, 5000);
    assert!(cfg.oracle.is_none());
    assert!(cfg.client_url.is_none());
}

#[test]
fn store_location_has_no_default() {
    let err = config(&[("MINDWELL_JWT_SECRET", "s3cret")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("MINDWELL_BUCKET")));

    let err = config(&[("MINDWELL_BUCKET", ""), ("MINDWELL_JWT_SECRET", "s3cret")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("MINDWELL_BUCKET")));
}

#[test]
fn memory_store_is_explicit_opt_in() {
    let cfg = config(&[("MINDWELL_STORE", "memory"), ("MINDWELL_JWT_SECRET", "s3cret")]).unwrap();
    assert_eq!(cfg.store, StoreConfig::Memory);

    let err = config(&[("MINDWELL_STORE", "mongo"), ("MINDWELL_JWT_SECRET", "s3cret")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "MINDWELL_STORE", .. }));
}

#[test]
fn jwt_secret_is_required() {
    let err = config(&[("MINDWELL_STORE", "memory")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("MINDWELL_JWT_SECRET")));
}

#[test]
fn oracle_settings() {
    let cfg = config(&[
        ("MINDWELL_STORE", "memory"),
        ("MINDWELL_JWT_SECRET", "s3cret"),
        ("MINDWELL_ORACLE_URL", "http://localhost:5001/predict"),
    ])
    .unwrap();
    let oracle = cfg.oracle.unwrap();
    assert_eq!(oracle.url, "http://localhost:5001/predict");
    assert_eq!(oracle.timeout, Duration::from_millis(3000));

    let cfg = config(&[
        ("MINDWELL_STORE", "memory"),
        ("MINDWELL_JWT_SECRET", "s3cret"),
        ("MINDWELL_ORACLE_URL", "http://localhost:5001/predict"),
        ("MINDWELL_ORACLE_TIMEOUT_MS", "750"),
        ("PORT", "8080"),
    ])
    .unwrap();
    assert_eq!(cfg.oracle.unwrap().timeout, Duration::from_millis(750));
    assert_eq!(cfg.port, 8080);

    let err = config(&[
        ("MINDWELL_STORE", "memory"),
        ("MINDWELL_JWT_SECRET", "s3cret"),
        ("MINDWELL_ORACLE_URL", "http://localhost:5001/predict"),
        ("MINDWELL_ORACLE_TIMEOUT_MS", "soon"),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "MINDWELL_ORACLE_TIMEOUT_MS", .. }));
}

#[test]
fn cors_origin_must_be_a_header_value() {
    assert!(mindwell_api::cors_layer(Some("http://localhost:5173")).is_ok());
    assert!(mindwell_api::cors_layer(Some("bad\norigin")).is_err());
    assert!(mindwell_api::cors_layer(None).is_ok());
}
