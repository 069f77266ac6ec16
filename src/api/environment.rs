use std::path::{ Path, PathBuf };
use crate::api::errors::StorageError;

pub const DEFAULT_DATA_DIRECTORY_NAME: &str = "drink-log";
pub const DEFAULT_TEMPLATES_FILE_NAME: &str = "templates";

#[derive(Debug, Clone, PartialEq)]
pub struct AppEnvironment {
    pub data_root: PathBuf,
    pub strings_xml_file_path: Option<PathBuf>,
    pub templates_file_name: String
}

impl AppEnvironment {
    pub fn from_env() -> Result<AppEnvironment, StorageError> {
        let data_root = match dotenv::var("APP_DATA_DIR") {
            Ok(app_data_dir) => resolve_against_home(&app_data_dir),
            Err(_) => dirs::data_dir()
                .ok_or(StorageError::NoDataDirectory)?
                .join(DEFAULT_DATA_DIRECTORY_NAME)
        };
        let strings_xml_file_path = dotenv::var("STRINGS_XML_FILE_PATH")
            .ok()
            .map(|path| resolve_against_home(&path));
        let templates_file_name = dotenv::var("TEMPLATES_FILE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATES_FILE_NAME.to_string());
        Ok(AppEnvironment { data_root, strings_xml_file_path, templates_file_name })
    }

    pub fn with_data_root(data_root: &Path) -> AppEnvironment {
        AppEnvironment {
            data_root: data_root.to_path_buf(),
            strings_xml_file_path: None,
            templates_file_name: DEFAULT_TEMPLATES_FILE_NAME.to_string()
        }
    }
}

/// Relative paths are taken from the home directory; absolute paths are kept.
pub fn resolve_against_home(path: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home_dir) => home_dir.join(path),
        None => PathBuf::from(path)
    }
}
