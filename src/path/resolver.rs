use std::collections::BTreeSet;
use std::env;
use std::ffi::{CString, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::core::commands::{Builtin, BuiltinRegistry};

/// Outcome of looking up a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Builtin(Builtin),
    Executable(PathBuf),
    NotFound,
}

/// Directories from a PATH value, in search order. Empty entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn from_env() -> Self {
        env::var_os("PATH")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn parse(value: &std::ffi::OsStr) -> Self {
        let dirs = env::split_paths(value)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// First `dir/name` that is an executable regular file, in directory order.
    ///
    /// Relative names may contain `/` and are joined as given. Absolute names
    /// never match, since joining them would discard the directory.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || Path::new(name).is_absolute() {
            return None;
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable_file(candidate))
    }

    pub fn executables_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        let mut names = BTreeSet::new();

        for dir in &self.dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                    continue;
                };
                if name.starts_with(prefix) && is_executable_file(&entry.path()) {
                    names.insert(name);
                }
            }
        }

        names
    }
}

/// Regular file (after following symlinks) that the current user may execute.
pub fn is_executable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => return false,
    }

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[derive(Debug, Clone)]
enum PathSource {
    Environment,
    Fixed(OsString),
}

/// Classifies command names as builtins or PATH executables.
///
/// PATH is read again on every lookup, so environment changes apply to the
/// next command.
#[derive(Debug, Clone)]
pub struct Resolver {
    builtins: BuiltinRegistry,
    source: PathSource,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            builtins: BuiltinRegistry::new(),
            source: PathSource::Environment,
        }
    }

    /// Resolver that searches `path` instead of the process environment.
    pub fn with_search_path(path: impl Into<OsString>) -> Self {
        Self {
            builtins: BuiltinRegistry::new(),
            source: PathSource::Fixed(path.into()),
        }
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn search_path(&self) -> SearchPath {
        match &self.source {
            PathSource::Environment => SearchPath::from_env(),
            PathSource::Fixed(value) => SearchPath::parse(value),
        }
    }

    pub fn resolve(&self, name: &str) -> Resolution {
        if name.is_empty() {
            return Resolution::NotFound;
        }
        if let Some(builtin) = self.builtins.get(name) {
            return Resolution::Builtin(builtin);
        }

        match self.find_in_path(name) {
            Some(path) => Resolution::Executable(path),
            None => Resolution::NotFound,
        }
    }

    /// PATH search only, without consulting the builtin table.
    pub fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        let found = self.search_path().find(name);
        tracing::trace!(name, ?found, "path lookup");
        found
    }

    /// Builtin and PATH command names starting with `prefix`, sorted.
    pub fn commands_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut names = self.search_path().executables_with_prefix(prefix);
        names.extend(
            self.builtins
                .names()
                .filter(|name| name.starts_with(prefix))
                .map(str::to_owned),
        );
        names.into_iter().collect()
    }
}
