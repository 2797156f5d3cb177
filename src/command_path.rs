//! Resolution of external programs on `PATH`.

use once_cell::sync::OnceCell;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

#[derive(Debug, Clone)]
struct CachedPathError {
    kind: io::ErrorKind,
    message: String,
}

static SSH_PATH: OnceCell<Result<PathBuf, CachedPathError>> = OnceCell::new();

/// Location of the `ssh` client, looked up once per process.
pub fn ssh_path() -> io::Result<PathBuf> {
    let cached = SSH_PATH.get_or_init(|| {
        resolve_program("ssh").map_err(|err| CachedPathError {
            kind: err.kind(),
            message: err.to_string(),
        })
    });
    match cached {
        Ok(path) => Ok(path.clone()),
        Err(err) => Err(io::Error::new(err.kind, err.message.clone())),
    }
}

/// Find `program` on `PATH` and check that it is safe to run.
pub fn resolve_program(program: &str) -> io::Result<PathBuf> {
    let located = which::which(program).map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{program} not found in PATH: {err}")))?;
    validate_executable_path(&located, program)
}

fn validate_executable_path(path: &Path, label: &str) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to canonicalize {label} path '{}': {err}", path.display()),
        )
    })?;

    let metadata = fs::metadata(&canonical)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{label} path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    validate_unix_permissions(&canonical, &metadata, label)?;

    Ok(canonical)
}

#[cfg(unix)]
fn validate_unix_permissions(path: &Path, metadata: &fs::Metadata, label: &str) -> io::Result<()> {
    let mode = metadata.permissions().mode();
    if mode & WORLD_WRITABLE_BIT != 0 {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' is world-writable", path.display()),
        ));
    }
    if mode & EXECUTE_BITS == 0 {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' is not executable", path.display()),
        ));
    }

    let owner_uid = metadata.uid();
    let effective_uid = nix::unistd::Uid::effective().as_raw();
    if owner_uid != 0 && owner_uid != effective_uid {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' must be owned by root or the current user", path.display()),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
