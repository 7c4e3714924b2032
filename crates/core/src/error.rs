use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MosaicError {
    #[error("image file '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save image '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("face detection model '{name}' not found (searched: {})", join_paths(.searched))]
    ModelUnavailable { name: String, searched: Vec<PathBuf> },
    #[error("{0}")]
    Unexpected(String),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl MosaicError {
    pub(crate) fn not_found(path: &Path) -> Self {
        MosaicError::NotFound {
            path: path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = MosaicError::not_found(Path::new("/tmp/missing.png"));
        assert_eq!(err.to_string(), "image file '/tmp/missing.png' not found");
    }

    #[test]
    fn test_model_unavailable_lists_searched_dirs() {
        let err = MosaicError::ModelUnavailable {
            name: "model.bin".into(),
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        let msg = err.to_string();
        assert!(msg.contains("model.bin"));
        assert!(msg.contains("/a, /b"));
    }
}
