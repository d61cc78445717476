use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error, source: {source:?}, path: {path:?}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("toml parsing error: {0:?}")]
    TomlParsingError(#[from] toml::de::Error),
    #[error("input directory does not exist: {0:?}")]
    MissingInputDir(PathBuf),
}

/// Optional run configuration. It can only relocate where the fixed
/// cohort filenames are read and written; the cohort and panel sets are
/// not configurable.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_toml_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut s = String::new();
        let p: &Path = path.as_ref();
        std::fs::File::open(p)
            .map_err(|e| Error::Io {
                source: e,
                path: p.to_owned(),
            })?
            .read_to_string(&mut s)
            .map_err(|e| Error::Io {
                source: e,
                path: p.to_owned(),
            })?;
        let config: RunConfig = toml::from_str(&s)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if let Some(dir) = self.input_dir.as_ref() {
            if !dir.is_dir() {
                return Err(Error::MissingInputDir(dir.to_owned()));
            }
        }
        Ok(())
    }
}
