use serde_json::json;
use crate::api::environment::AppEnvironment;
use crate::api::errors::StorageError;
use crate::api::{ AppStorage, ResourceService, TemplateService, TemplateStore };

pub struct TemplateServiceFactory {}

impl TemplateServiceFactory {
    pub fn create(environment: &AppEnvironment, resource_service: ResourceService) -> Result<TemplateService, StorageError> {
        let storage = AppStorage::initialize(&environment.data_root)?;
        let storage_ready_message = resource_service.render_message(
            "storage_ready_info_message_template",
            &json!({ "path": storage.root_directory().display().to_string() })
        );
        log::info!("{}", storage_ready_message);
        let template_service = TemplateService::new(resource_service, storage, &environment.templates_file_name, TemplateStore::new());
        template_service.load();
        Ok(template_service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::DrinkTemplate;
    use crate::api::ResourceServiceFactory;
    use tempfile::TempDir;

    #[test]
    fn restores_templates_written_by_a_previous_run() {
        let data_root = TempDir::new().unwrap();
        let environment = AppEnvironment::with_data_root(data_root.path());
        let first_run = TemplateServiceFactory::create(&environment, ResourceServiceFactory::create_default()).unwrap();
        first_run.create_template(DrinkTemplate::new("Negroni")).unwrap();

        let second_run = TemplateServiceFactory::create(&environment, ResourceServiceFactory::create_default()).unwrap();
        assert!(second_run.get_template("Negroni").is_some());
        assert!(second_run.storage().image_directory().is_dir());
    }
}
