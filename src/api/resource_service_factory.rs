use std::fs;
use std::path::Path;
use hard_xml::XmlRead;
use crate::api::errors::StorageError;
use crate::api::models::resources_xml::ResourcesElement;
use crate::api::ResourceService;

const DEFAULT_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    pub fn create(strings_xml_file_path: Option<&Path>) -> Result<ResourceService, StorageError> {
        let file_path = match strings_xml_file_path {
            Some(file_path) => file_path,
            None => return Ok(Self::create_default())
        };
        let resources_error = |reason: String| StorageError::Resources { path: file_path.to_path_buf(), reason };
        let resource_xml_content = fs::read_to_string(file_path).map_err(|error| resources_error(error.to_string()))?;
        let resource_element = ResourcesElement::from_str(&resource_xml_content)
            .map_err(|error| resources_error(format!("{:?}", error)))?;
        Ok(ResourceService::new(resource_element))
    }

    pub fn create_default() -> ResourceService {
        match ResourcesElement::from_str(DEFAULT_STRINGS_XML) {
            Ok(resource_element) => ResourceService::new(resource_element),
            Err(error) => {
                log::warn!("Built-in string resources are malformed: {:?}", error);
                ResourceService::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_resources_contain_service_messages() {
        let resource_service = ResourceServiceFactory::create(None).unwrap();
        assert_eq!(
            resource_service.message("empty_template_name_error_message"),
            "Drink templates need a name"
        );
    }

    #[test]
    fn override_file_replaces_defaults() {
        let directory = TempDir::new().unwrap();
        let file_path = directory.path().join("strings.xml");
        fs::write(&file_path, r#"<resources><string name="empty_template_name_error_message">Name it!</string></resources>"#).unwrap();
        let resource_service = ResourceServiceFactory::create(Some(&file_path)).unwrap();
        assert_eq!(resource_service.message("empty_template_name_error_message"), "Name it!");
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let directory = TempDir::new().unwrap();
        let file_path = directory.path().join("absent.xml");
        assert!(matches!(
            ResourceServiceFactory::create(Some(&file_path)),
            Err(StorageError::Resources { .. })
        ));
    }
}
