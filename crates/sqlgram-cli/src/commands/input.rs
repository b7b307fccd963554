use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a command reads its SQL from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

/// SQL text plus the name diagnostics are reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSql {
    pub name: Option<String>,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("SQL is required: use a positional file, `-` for stdin, or -s/--sql")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SqlInput {
    pub fn load(&self) -> Result<LoadedSql, InputError> {
        if let Some(text) = &self.text {
            return Ok(LoadedSql {
                name: None,
                text: text.clone(),
            });
        }

        match self.path.as_deref() {
            Some(path) if path.as_os_str() == "-" => load_stdin(),
            Some(path) => load_file(path),
            None => Err(InputError::Missing),
        }
    }
}

fn load_stdin() -> Result<LoadedSql, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(LoadedSql {
        name: Some("<stdin>".to_string()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<LoadedSql, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSql {
        name: Some(path.to_string_lossy().into_owned()),
        text,
    })
}
