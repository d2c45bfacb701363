//! Tests for the `configure_credentials` application service.
//!
//! Validation happens before any I/O, a configured profile is never
//! clobbered without `overwrite`, and other profiles are left byte-identical.

#![allow(clippy::expect_used)]

use deployctl_cli::application::services::credentials::{
    CredentialsOptions, CredentialsOutcome, configure_credentials,
};
use deployctl_cli::domain::error::{CredentialsError, error_code};

use crate::mocks::{MemoryCredentialsStore, NoopReporter, RecordingReporter};

const EXISTING: &str = "\
[default]
aws_access_key_id = OLDKEY
aws_secret_access_key = OLDSECRET
region = eu-west-1

[ci]
aws_access_key_id=CIKEY
aws_secret_access_key=CISECRET
";

fn options(key: &str, secret: &str) -> CredentialsOptions {
    CredentialsOptions {
        provider: "aws".into(),
        key: Some(key.into()),
        secret: Some(secret.into()),
        profile: None,
        overwrite: false,
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_secret_fails_before_io() {
    let store = MemoryCredentialsStore::new(Some(EXISTING));
    let opts = CredentialsOptions {
        secret: None,
        ..options("AKIA", "unused")
    };

    let err = configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect_err("should fail");

    assert_eq!(
        err.downcast_ref::<CredentialsError>(),
        Some(&CredentialsError::MissingCredentialsOption)
    );
    assert_eq!(error_code(&err), "MISSING_KEY_AND_SECRET_CLI_OPTIONS");
    assert_eq!(store.io_count(), 0);
}

#[tokio::test]
async fn test_empty_key_fails_before_io() {
    let store = MemoryCredentialsStore::new(None);
    let err = configure_credentials(&store, &options("", "secret"), &NoopReporter)
        .await
        .expect_err("should fail");
    assert_eq!(error_code(&err), "MISSING_KEY_AND_SECRET_CLI_OPTIONS");
    assert_eq!(store.io_count(), 0);
}

#[tokio::test]
async fn test_unsupported_provider_is_a_noop() {
    let store = MemoryCredentialsStore::new(Some(EXISTING));
    let opts = CredentialsOptions {
        provider: "azure".into(),
        key: None,
        secret: None,
        ..CredentialsOptions::default()
    };

    let outcome = configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("no-op");

    assert_eq!(
        outcome,
        CredentialsOutcome::UnsupportedProvider {
            provider: "azure".into()
        }
    );
    assert_eq!(store.io_count(), 0);
}

#[tokio::test]
async fn test_provider_name_is_case_insensitive() {
    let store = MemoryCredentialsStore::new(None);
    let opts = CredentialsOptions {
        provider: "AWS".into(),
        ..options("AKIA", "s3cr3t")
    };

    let outcome = configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("configured");

    assert_eq!(
        outcome,
        CredentialsOutcome::Configured {
            profile: "default".into()
        }
    );
    assert_eq!(store.save_count(), 1);
}

// ── Writing ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_file_gets_new_default_section() {
    let store = MemoryCredentialsStore::new(None);

    configure_credentials(&store, &options("AKIA", "s3cr3t"), &NoopReporter)
        .await
        .expect("configured");

    assert_eq!(
        store.content().expect("written"),
        "[default]\naws_access_key_id=AKIA\naws_secret_access_key=s3cr3t\n"
    );
}

#[tokio::test]
async fn test_new_profile_is_appended_after_existing_sections() {
    let store = MemoryCredentialsStore::new(Some(EXISTING));
    let opts = CredentialsOptions {
        profile: Some("staging".into()),
        ..options("STGKEY", "STGSECRET")
    };

    configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("configured");

    let content = store.content().expect("written");
    assert!(content.starts_with(EXISTING), "existing sections unchanged");
    assert!(content.ends_with("[staging]\naws_access_key_id=STGKEY\naws_secret_access_key=STGSECRET\n"));
}

#[tokio::test]
async fn test_configured_profile_without_overwrite_is_rejected() {
    let store = MemoryCredentialsStore::new(Some(EXISTING));

    let err = configure_credentials(&store, &options("NEW", "NEW"), &NoopReporter)
        .await
        .expect_err("should fail");

    assert_eq!(error_code(&err), "CREDENTIALS_PROFILE_ALREADY_CONFIGURED");
    assert!(err.to_string().contains("\"default\""));
    assert_eq!(store.content().as_deref(), Some(EXISTING));
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_overwrite_replaces_keys_in_place() {
    let store = MemoryCredentialsStore::new(Some(EXISTING));
    let opts = CredentialsOptions {
        overwrite: true,
        ..options("NEWKEY", "NEWSECRET")
    };

    configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("configured");

    let content = store.content().expect("written");
    assert!(content.starts_with(
        "[default]\naws_access_key_id=NEWKEY\naws_secret_access_key=NEWSECRET\nregion = eu-west-1\n"
    ));
    assert!(content.contains("[ci]\naws_access_key_id=CIKEY\naws_secret_access_key=CISECRET\n"));
}

#[tokio::test]
async fn test_padded_profile_is_not_appended_twice() {
    let store = MemoryCredentialsStore::new(None);
    let opts = CredentialsOptions {
        profile: Some(" dev ".into()),
        ..options("AKIA", "s3cr3t")
    };

    let outcome = configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("configured");
    assert_eq!(
        outcome,
        CredentialsOutcome::Configured {
            profile: "dev".into()
        }
    );

    let err = configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect_err("second run must hit the overwrite guard");
    assert_eq!(error_code(&err), "CREDENTIALS_PROFILE_ALREADY_CONFIGURED");
    assert_eq!(
        store.content().expect("written"),
        "[dev]\naws_access_key_id=AKIA\naws_secret_access_key=s3cr3t\n"
    );
}

#[tokio::test]
async fn test_blank_profile_falls_back_to_default() {
    let store = MemoryCredentialsStore::new(None);
    let opts = CredentialsOptions {
        profile: Some("  ".into()),
        ..options("AKIA", "s3cr3t")
    };

    configure_credentials(&store, &opts, &NoopReporter)
        .await
        .expect("configured");

    assert!(store.content().expect("written").starts_with("[default]\n"));
}

#[tokio::test]
async fn test_success_is_reported_with_profile_name() {
    let store = MemoryCredentialsStore::new(None);
    let reporter = RecordingReporter::default();
    let opts = CredentialsOptions {
        profile: Some("dev".into()),
        ..options("AKIA", "s3cr3t")
    };

    configure_credentials(&store, &opts, &reporter)
        .await
        .expect("configured");

    assert!(
        reporter
            .messages()
            .contains(&("success", "Profile \"dev\" has been configured".to_string()))
    );
}
