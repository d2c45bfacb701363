//! Shared credentials file model (`~/.aws/credentials`).
//!
//! Pure functions only: no I/O, no async, no filesystem access.
//!
//! The file is kept as its original lines so that an update touches only
//! the credential entries of the target profile. Everything else (other
//! profiles, comments, blank lines, unknown keys, spacing) is re-emitted
//! byte for byte.
//!
//! Parsing is tolerant:
//! - `[name]` starts a section; the name is trimmed.
//! - `key = value` is an entry; whitespace around key and value is ignored.
//! - Lines starting with `#` or `;`, lines without `=`, and lines before the
//!   first section are kept verbatim and never matched.
//! - A profile may appear in several sections; every section with that name
//!   counts as the profile, later entries overriding earlier ones.

use crate::domain::error::CredentialsError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const DEFAULT_PROFILE: &str = "default";
pub const SUPPORTED_PROVIDER: &str = "aws";

/// Case-folds a provider identifier for comparison.
#[must_use]
pub fn normalize_provider(provider: &str) -> String {
    provider.to_lowercase()
}

/// Trims a profile name the way section headers are trimmed on parse.
/// Absent or blank names resolve to `default`.
#[must_use]
pub fn normalize_profile(profile: Option<&str>) -> String {
    profile
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PROFILE)
        .to_string()
}

// ── Credentials ──────────────────────────────────────────────────────────────

/// A validated access key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
}

impl Credentials {
    /// Builds a key pair from CLI input.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentialsOption` if either value is empty.
    pub fn new(
        access_key_id: Option<&str>,
        secret_access_key: Option<&str>,
    ) -> Result<Self, CredentialsError> {
        match (access_key_id, secret_access_key) {
            (Some(key), Some(secret)) if !key.trim().is_empty() && !secret.trim().is_empty() => {
                Ok(Self {
                    access_key_id: key.trim().to_string(),
                    secret_access_key: secret.trim().to_string(),
                })
            }
            _ => Err(CredentialsError::MissingCredentialsOption),
        }
    }

    fn value_for(&self, key: &str) -> &str {
        if key == ACCESS_KEY_ID {
            &self.access_key_id
        } else {
            &self.secret_access_key
        }
    }
}

// ── File model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    Section(String),
    Entry { key: String, value: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    raw: String,
    kind: LineKind,
}

impl Line {
    fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let kind = if text.starts_with('[') && text.ends_with(']') && text.len() >= 2 {
            LineKind::Section(text[1..text.len() - 1].trim().to_string())
        } else if text.starts_with('#') || text.starts_with(';') {
            LineKind::Other
        } else {
            match text.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => LineKind::Entry {
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                },
                _ => LineKind::Other,
            }
        };
        Self {
            raw: raw.to_string(),
            kind,
        }
    }

    fn entry(key: &str, value: &str, eol: &str) -> Self {
        Self {
            raw: format!("{key}={value}{eol}"),
            kind: LineKind::Entry {
                key: key.to_string(),
                value: value.to_string(),
            },
        }
    }

    fn section(name: &str, eol: &str) -> Self {
        Self {
            raw: format!("[{name}]{eol}"),
            kind: LineKind::Section(name.to_string()),
        }
    }

    fn is_entry(&self) -> bool {
        matches!(self.kind, LineKind::Entry { .. })
    }

    fn key_matches(&self, wanted: &str) -> bool {
        matches!(&self.kind, LineKind::Entry { key, .. } if key.eq_ignore_ascii_case(wanted))
    }
}

/// A profile as seen by readers of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Entries in file order; duplicates resolved to the last value.
    pub entries: Vec<(String, String)>,
}

impl Profile {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Line-preserving credentials file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsFile {
    /// Raw lines with their `\r` (if any) but without `\n`.
    lines: Vec<Line>,
    trailing_newline: bool,
    crlf: bool,
}

impl CredentialsFile {
    /// Parses file content. Never fails; see the module docs for tolerance.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self::default();
        }
        let trailing_newline = content.ends_with('\n');
        let body = content.strip_suffix('\n').unwrap_or(content);
        let lines: Vec<Line> = body.split('\n').map(Line::parse).collect();
        let crlf = lines.first().is_some_and(|l| l.raw.ends_with('\r'));
        Self {
            lines,
            trailing_newline,
            crlf,
        }
    }

    /// Serializes the file back to text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(|l| l.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }

    /// Profile names in order of first appearance.
    #[must_use]
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for line in &self.lines {
            if let LineKind::Section(name) = &line.kind {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Merged view of every section named `name`.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<Profile> {
        let ranges = self.section_ranges(name);
        if ranges.is_empty() {
            return None;
        }
        let mut entries: Vec<(String, String)> = Vec::new();
        for range in ranges {
            for line in &self.lines[range] {
                if let LineKind::Entry { key, value } = &line.kind {
                    match entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
                        Some(existing) => existing.1.clone_from(value),
                        None => entries.push((key.clone(), value.clone())),
                    }
                }
            }
        }
        Some(Profile {
            name: name.to_string(),
            entries,
        })
    }

    /// Whether the profile already holds a non-empty key id or secret.
    #[must_use]
    pub fn has_credentials(&self, name: &str) -> bool {
        self.profile(name).is_some_and(|p| {
            [ACCESS_KEY_ID, SECRET_ACCESS_KEY]
                .iter()
                .any(|key| p.get(key).is_some_and(|v| !v.is_empty()))
        })
    }

    /// Sets both credential entries of `name`.
    ///
    /// Existing entries are rewritten in place as `key=value` in every
    /// section of the profile. Missing entries go after the last entry of
    /// the first section. An unknown profile is appended as a new section.
    pub fn set_credentials(&mut self, name: &str, credentials: &Credentials) {
        let eol = if self.crlf { "\r" } else { "" };
        let ranges = self.section_ranges(name);

        let Some(first) = ranges.first().cloned() else {
            self.lines.push(Line::section(name, eol));
            for key in [ACCESS_KEY_ID, SECRET_ACCESS_KEY] {
                self.lines
                    .push(Line::entry(key, credentials.value_for(key), eol));
            }
            self.trailing_newline = true;
            return;
        };

        let mut missing = Vec::new();
        for key in [ACCESS_KEY_ID, SECRET_ACCESS_KEY] {
            let mut found = false;
            for range in &ranges {
                for line in &mut self.lines[range.clone()] {
                    if line.key_matches(key) {
                        let line_eol = if line.raw.ends_with('\r') { "\r" } else { "" };
                        *line = Line::entry(key, credentials.value_for(key), line_eol);
                        found = true;
                    }
                }
            }
            if !found {
                missing.push(key);
            }
        }

        let mut insert_at = self.lines[first.clone()]
            .iter()
            .rposition(Line::is_entry)
            .map_or(first.start + 1, |offset| first.start + offset + 1);
        for key in missing {
            self.lines
                .insert(insert_at, Line::entry(key, credentials.value_for(key), eol));
            insert_at += 1;
        }
    }

    /// Line index ranges (header included) of every section named `name`.
    fn section_ranges(&self, name: &str) -> Vec<std::ops::Range<usize>> {
        let headers: Vec<(usize, &str)> = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| match &l.kind {
                LineKind::Section(n) => Some((i, n.as_str())),
                _ => None,
            })
            .collect();
        headers
            .iter()
            .enumerate()
            .filter(|(_, (_, n))| *n == name)
            .map(|(h, (start, _))| {
                let end = headers.get(h + 1).map_or(self.lines.len(), |(i, _)| *i);
                *start..end
            })
            .collect()
    }
}

/// Rewrites `content` so that `profile` holds `credentials`.
///
/// # Errors
///
/// Returns `ProfileAlreadyConfigured` if the profile already has credentials
/// and `overwrite` is `false`.
pub fn apply_credentials(
    content: &str,
    profile: &str,
    credentials: &Credentials,
    overwrite: bool,
) -> Result<String, CredentialsError> {
    let profile = profile.trim();
    let mut file = CredentialsFile::parse(content);
    if !overwrite && file.has_credentials(profile) {
        return Err(CredentialsError::ProfileAlreadyConfigured {
            profile: profile.to_string(),
        });
    }
    file.set_credentials(profile, credentials);
    Ok(file.render())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
