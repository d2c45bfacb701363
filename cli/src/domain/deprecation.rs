//! Detection of deprecated service file settings.
//!
//! Pure functions only. Emission (dedup, silencing) lives in
//! `application::services::deprecation`.

use serde_yaml::Value;

use crate::domain::service::ServiceConfig;

pub const PROVIDER_IAM_SETTINGS: &str = "PROVIDER_IAM_SETTINGS";
pub const PACKAGE_PATTERNS: &str = "PACKAGE_PATTERNS";

/// `provider.*` IAM keys moved under `provider.iam`.
pub const PROVIDER_IAM_PROPERTIES: &[(&str, &str)] = &[
    ("provider.role", "provider.iam.role"),
    (
        "provider.rolePermissionsBoundary",
        "provider.iam.role.permissionsBoundary",
    ),
    ("provider.iamRoleStatements", "provider.iam.role.statements"),
    (
        "provider.iamManagedPolicies",
        "provider.iam.role.managedPolicies",
    ),
    ("provider.cfnRole", "provider.iam.deploymentRole"),
];

const PACKAGE_PATTERNS_MESSAGE: &str = "Support for \"package.include\" and \"package.exclude\" \
     will be removed in the next major release. Please use \"package.patterns\" instead";

/// A deprecation that should be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub code: &'static str,
    pub message: String,
}

/// Looks up a dotted path; `null` counts as absent.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |node, segment| node.get(segment))
        .filter(|v| !v.is_null())
}

/// Builds the replacement notice for every `(old, new)` pair set in `config`.
#[must_use]
pub fn deprecated_properties_message(props: &[(&str, &str)], config: &Value) -> Option<String> {
    let warnings: Vec<&(&str, &str)> = props
        .iter()
        .filter(|(old, _)| lookup(config, old).is_some())
        .collect();
    if warnings.is_empty() {
        return None;
    }
    let what = if warnings.len() > 1 {
        "properties"
    } else {
        "property"
    };
    let details = warnings
        .iter()
        .map(|(old, new)| format!("  \"{old}\" -> \"{new}\""))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!(
        "Starting with version 4.0.0, following {what} will be replaced:\n{details}"
    ))
}

/// Whether the service, a function, or a layer uses `package.include`/`exclude`.
#[must_use]
pub fn uses_legacy_package_patterns(service: &ServiceConfig) -> bool {
    let uses = |p: Option<&crate::domain::service::PackageConfig>| {
        p.is_some_and(crate::domain::service::PackageConfig::uses_include_or_exclude)
    };
    uses(service.package.as_ref())
        || service
            .functions
            .values()
            .flatten()
            .any(|f| uses(f.package.as_ref()))
        || service
            .layers
            .values()
            .flatten()
            .any(|l| uses(l.package.as_ref()))
}

/// All deprecations that apply to a loaded service file.
#[must_use]
pub fn service_deprecations(service: &ServiceConfig) -> Vec<Deprecation> {
    let mut found = Vec::new();
    if let Some(message) = deprecated_properties_message(PROVIDER_IAM_PROPERTIES, &service.raw) {
        found.push(Deprecation {
            code: PROVIDER_IAM_SETTINGS,
            message,
        });
    }
    if uses_legacy_package_patterns(service) {
        found.push(Deprecation {
            code: PACKAGE_PATTERNS,
            message: PACKAGE_PATTERNS_MESSAGE.to_string(),
        });
    }
    found
}
