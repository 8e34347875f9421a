#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::time::Duration;

use ability_resolver::AbilityResolverConfig;
use ability_resolver::domain::DomainError;
use tempfile::NamedTempFile;

fn yaml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_without_file_or_env() {
    temp_env::with_vars_unset(
        [
            "ABILITY_RESOLVER__ADMIN_GROUP",
            "ABILITY_RESOLVER__MEMBERSHIP_TIMEOUT_MS",
        ],
        || {
            let cfg = AbilityResolverConfig::load(None).unwrap();

            assert_eq!(cfg.admin_group, "admin");
            assert_eq!(cfg.membership_timeout(), Duration::from_secs(2));
        },
    );
}

#[test]
fn file_overrides_defaults() {
    let file = yaml("admin_group: owners\nmembership_timeout_ms: 250\n");

    temp_env::with_vars_unset(
        [
            "ABILITY_RESOLVER__ADMIN_GROUP",
            "ABILITY_RESOLVER__MEMBERSHIP_TIMEOUT_MS",
        ],
        || {
            let cfg = AbilityResolverConfig::load(Some(file.path())).unwrap();

            assert_eq!(cfg.admin_group, "owners");
            assert_eq!(cfg.membership_timeout_ms, 250);
            assert_eq!(cfg.failure_log_throttle_ms, 10_000);
        },
    );
}

#[test]
fn env_overrides_file() {
    let file = yaml("membership_timeout_ms: 250\n");

    temp_env::with_var("ABILITY_RESOLVER__MEMBERSHIP_TIMEOUT_MS", Some("75"), || {
        let cfg = AbilityResolverConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.membership_timeout(), Duration::from_millis(75));
    });
}

#[test]
fn unknown_field_is_rejected() {
    let file = yaml("admin_group: admin\ncache_ttl_ms: 1000\n");

    let err = AbilityResolverConfig::load(Some(file.path())).unwrap_err();

    assert!(matches!(err, DomainError::InvalidConfig(msg) if msg.contains("cache_ttl_ms")));
}

#[test]
fn zero_timeout_from_env_is_rejected() {
    temp_env::with_var("ABILITY_RESOLVER__MEMBERSHIP_TIMEOUT_MS", Some("0"), || {
        let err = AbilityResolverConfig::load(None).unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidConfig(msg) if msg.contains("membership_timeout_ms")
        ));
    });
}
