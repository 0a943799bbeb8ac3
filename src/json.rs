use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::QRResult;

// Json mapper
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum JsonBackend {
    #[default]
    Compact,
    Pretty,
}

/// Serializes values to JSON text and files with the selected [`JsonBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonMapper {
    backend: JsonBackend,
}

impl JsonMapper {
    pub fn new(backend: JsonBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> JsonBackend {
        self.backend
    }

    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> QRResult<String> {
        let text = match self.backend {
            JsonBackend::Compact => serde_json::to_string(value)?,
            JsonBackend::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(text)
    }

    pub fn deserialize<T: DeserializeOwned>(&self, text: &str) -> QRResult<T> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes `value` to `output_path` with a `.json` extension appended.
    pub fn save_to_file<T: Serialize + ?Sized>(
        &self,
        value: &T,
        output_path: impl AsRef<Path>,
    ) -> QRResult<PathBuf> {
        let mut path = output_path.as_ref().as_os_str().to_owned();
        path.push(".json");
        let path = PathBuf::from(path);

        fs::write(&path, self.serialize(value)?)?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Reads `path` into a `T`, or `None` if there is no such file.
    pub fn read_file<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> QRResult<Option<T>> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("{} does not exist", path.display());
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        self.deserialize(&text).map(Some)
    }
}
