use std::fs;
use std::path::{ Path, PathBuf };
use crate::api::errors::StorageError;

pub const APP_ROOT_DIRECTORY_NAME: &str = "appDir";
pub const IMAGE_DIRECTORY_NAME: &str = "imgDir";

/// The app's directories under a data root: `appDir` for the template file
/// and `appDir/imgDir` for template images.
#[derive(Debug, Clone, PartialEq)]
pub struct AppStorage {
    root_directory: PathBuf,
    image_directory: PathBuf
}

impl AppStorage {
    pub fn initialize(data_root: &Path) -> Result<AppStorage, StorageError> {
        let root_directory = ensure_directory(data_root.join(APP_ROOT_DIRECTORY_NAME))?;
        let image_directory = ensure_directory(root_directory.join(IMAGE_DIRECTORY_NAME))?;
        Ok(AppStorage { root_directory, image_directory })
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn image_directory(&self) -> &Path {
        &self.image_directory
    }
}

fn ensure_directory(path: PathBuf) -> Result<PathBuf, StorageError> {
    if path.is_dir() {
        return Ok(path);
    }
    if path.exists() {
        return Err(StorageError::NotADirectory(path));
    }
    match fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(source) => Err(StorageError::CreateDirectory { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_directories() {
        let data_root = TempDir::new().unwrap();
        let storage = AppStorage::initialize(data_root.path()).unwrap();
        assert_eq!(storage.root_directory(), data_root.path().join("appDir"));
        assert_eq!(storage.image_directory(), data_root.path().join("appDir").join("imgDir"));
        assert!(storage.image_directory().is_dir());
    }

    #[test]
    fn reuses_existing_directories() {
        let data_root = TempDir::new().unwrap();
        fs::create_dir_all(data_root.path().join("appDir/imgDir")).unwrap();
        fs::write(data_root.path().join("appDir/templates.xml"), "<drinkTemplateManager/>").unwrap();
        let storage = AppStorage::initialize(data_root.path()).unwrap();
        assert!(storage.root_directory().join("templates.xml").is_file());
    }

    #[test]
    fn file_in_place_of_directory_is_an_error() {
        let data_root = TempDir::new().unwrap();
        fs::write(data_root.path().join("appDir"), "not a directory").unwrap();
        assert!(matches!(
            AppStorage::initialize(data_root.path()),
            Err(StorageError::NotADirectory(_))
        ));
    }
}
