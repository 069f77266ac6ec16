use std::io;
use std::path::PathBuf;
use hard_xml::XmlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to find directory {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to find template file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error on template file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("Malformed drink template document: {0}")]
    Xml(String),

    #[error("Expected a <drinkTemplateManager> document, found {found}")]
    UnexpectedRoot { found: String }
}

impl From<XmlError> for CodecError {
    fn from(error: XmlError) -> Self {
        CodecError::Xml(format!("{:?}", error))
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Couldn't determine a data directory; set APP_DATA_DIR")]
    NoDataDirectory,

    #[error("Couldn't create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Couldn't load string resources from {}: {reason}", .path.display())]
    Resources { path: PathBuf, reason: String }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateServiceError {
    #[error("Drink templates need a name")]
    EmptyName,

    #[error("A drink template named \"{0}\" already exists")]
    AlreadyExists(String),

    #[error("No drink template named \"{0}\"")]
    NotFound(String)
}
