use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::models::EnvFileConfig;
use crate::domain::StartupError;

/// Merges `.env`-style files into the process environment.
///
/// Variables already set in the process are never overridden, so when
/// several candidates define the same key the first file loaded wins.
/// Malformed lines are skipped and the rest of the file still applies.
/// Unreadable files are logged and skipped: the credential check runs
/// against whatever environment exists.
#[derive(Debug, Clone)]
pub struct EnvFileLoader {
    candidates: Vec<PathBuf>,
    explicit: bool,
}

/// Outcome of applying one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ApplySummary {
    parsed: usize,
    applied: usize,
    malformed: usize,
}

impl EnvFileLoader {
    /// Loader for the configured candidate list.
    pub fn from_config(config: &EnvFileConfig) -> Self {
        let candidates = if config.enabled {
            config.paths.clone()
        } else {
            Vec::new()
        };
        Self {
            candidates,
            explicit: false,
        }
    }

    /// Loader for a single file named on the command line.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
            explicit: true,
        }
    }

    /// Loader that touches nothing.
    pub const fn disabled() -> Self {
        Self {
            candidates: Vec::new(),
            explicit: false,
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load every existing candidate, returning the files that contributed.
    ///
    /// A file counts as loaded when it parsed cleanly or when at least one
    /// of its entries was read despite malformed lines elsewhere.
    pub fn load(&self) -> Vec<PathBuf> {
        let mut loaded = Vec::new();

        for path in &self.candidates {
            if !path.exists() {
                if self.explicit {
                    warn!(path = %path.display(), "env file not found");
                } else {
                    debug!(path = %path.display(), "env file not present, skipping");
                }
                continue;
            }

            let contents = match read_env_file(path) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!(error = %err, "continuing without env file");
                    continue;
                }
            };

            let summary = apply_entries(path, &contents);
            debug!(
                path = %path.display(),
                applied = summary.applied,
                malformed = summary.malformed,
                "loaded env file"
            );
            if summary.parsed > 0 || summary.malformed == 0 {
                loaded.push(path.clone());
            }
        }

        loaded
    }
}

fn read_env_file(path: &Path) -> Result<String, StartupError> {
    std::fs::read_to_string(path).map_err(|err| StartupError::EnvFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Parse `contents` and set every key the process does not already have.
///
/// dotenvy folds everything after an unterminated quote into one failing
/// entry; parsing resumes on the physical line after the bad one. Parse
/// errors are logged by position only since their text echoes file values.
fn apply_entries(path: &Path, contents: &str) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for item in dotenvy::from_read_iter(contents.as_bytes()) {
        match item {
            Ok((key, value)) => {
                summary.parsed += 1;
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(&key, value);
                    summary.applied += 1;
                }
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                summary.malformed += 1;
                warn!(path = %path.display(), index, "skipping malformed env file line");
                if let Some((_, rest)) = line.split_once('\n') {
                    let nested = apply_entries(path, rest);
                    summary.parsed += nested.parsed;
                    summary.applied += nested.applied;
                    summary.malformed += nested.malformed;
                }
            }
            Err(_) => {
                summary.malformed += 1;
                warn!(path = %path.display(), "skipping unreadable env file entry");
            }
        }
    }

    summary
}
