use std::sync::{ PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard };
use serde_json::json;
use crate::api::errors::TemplateServiceError;
use crate::api::models::{ Drink, DrinkTemplate };
use crate::api::template_codec::{ self, template_file_path };
use crate::api::{ AppStorage, ResourceService, TemplateStore };

/// Owns the app's template store and keeps `<appDir>/<templates_file_name>.xml` in sync with it.
pub struct TemplateService {
    resource_service: ResourceService,
    storage: AppStorage,
    templates_file_name: String,
    store: RwLock<TemplateStore>
}

impl TemplateService {
    pub fn new(resource_service: ResourceService, storage: AppStorage, templates_file_name: &str, store: TemplateStore) -> TemplateService {
        TemplateService {
            resource_service,
            storage,
            templates_file_name: templates_file_name.to_string(),
            store: RwLock::new(store)
        }
    }

    pub fn storage(&self) -> &AppStorage {
        &self.storage
    }

    pub fn get_templates(&self) -> Vec<DrinkTemplate> {
        let store = self.read_store();
        let mut templates: Vec<DrinkTemplate> = store.list().into_iter().cloned().collect();
        templates.sort_by(|a, b| a.name().cmp(b.name()));
        templates
    }

    pub fn get_template(&self, name: &str) -> Option<DrinkTemplate> {
        self.read_store().get(name).cloned()
    }

    pub fn create_template(&self, template: DrinkTemplate) -> Result<DrinkTemplate, TemplateServiceError> {
        if template.name().is_empty() {
            return Err(TemplateServiceError::EmptyName);
        }
        if !self.write_store().put(template.clone()) {
            return Err(TemplateServiceError::AlreadyExists(template.name().to_string()));
        }
        self.save();
        Ok(template)
    }

    pub fn update_template(&self, template: DrinkTemplate) -> Result<DrinkTemplate, TemplateServiceError> {
        if !self.write_store().modify(template.clone()) {
            return Err(TemplateServiceError::NotFound(template.name().to_string()));
        }
        self.save();
        Ok(template)
    }

    pub fn delete_template(&self, name: &str) -> Result<(), TemplateServiceError> {
        if !self.write_store().remove(name) {
            return Err(TemplateServiceError::NotFound(name.to_string()));
        }
        self.save();
        Ok(())
    }

    pub fn produce_drink(&self, name: &str, occasion: &str, hour: i32, minute: i32) -> Option<Drink> {
        self.read_store().produce_drink(name, occasion, hour, minute)
    }

    pub fn save(&self) -> bool {
        let store = self.read_store();
        let file_path = template_file_path(self.storage.root_directory(), &self.templates_file_name);
        let message_data = &json!({ "count": store.len(), "path": file_path.display().to_string() });
        if template_codec::write_templates(self.storage.root_directory(), &self.templates_file_name, &store) {
            log::info!("{}", self.resource_service.render_message("templates_saved_info_message_template", message_data));
            true
        } else {
            log::warn!("{}", self.resource_service.render_message("templates_save_failed_error_message_template", message_data));
            false
        }
    }

    pub fn load(&self) -> bool {
        let file_path = template_file_path(self.storage.root_directory(), &self.templates_file_name);
        let path = file_path.display().to_string();
        if !file_path.exists() {
            log::info!("{}", self.resource_service.render_message("no_saved_templates_info_message_template", &json!({ "path": path })));
            return false;
        }
        let mut store = self.write_store();
        match template_codec::read_templates_with_report(self.storage.root_directory(), &self.templates_file_name, &mut store, false) {
            Ok(report) => {
                let message_data = &json!({ "inserted": report.inserted, "discarded": report.discarded, "path": path });
                log::info!("{}", self.resource_service.render_message("templates_loaded_info_message_template", message_data));
                true
            },
            Err(error) => {
                let message_data = &json!({ "path": path, "reason": error.to_string() });
                log::debug!("{}", self.resource_service.render_message("templates_load_failed_error_message_template", message_data));
                false
            }
        }
    }

    fn read_store(&self) -> RwLockReadGuard<'_, TemplateStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, TemplateStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceServiceFactory;
    use tempfile::TempDir;

    fn template_service(data_root: &TempDir) -> TemplateService {
        let storage = AppStorage::initialize(data_root.path()).unwrap();
        TemplateService::new(ResourceServiceFactory::create_default(), storage, "templates", TemplateStore::new())
    }

    fn template(name: &str, price: f32) -> DrinkTemplate {
        let mut template = DrinkTemplate::new(name);
        template.set_price(price);
        template
    }

    #[test]
    fn create_saves_to_disk() {
        let data_root = TempDir::new().unwrap();
        let service = template_service(&data_root);
        service.create_template(template("Beer A", 5.0)).unwrap();
        assert!(data_root.path().join("appDir/templates.xml").is_file());

        let reloaded = template_service(&data_root);
        assert!(reloaded.load());
        assert_eq!(reloaded.get_template("Beer A").map(|t| t.price()), Some(5.0));
    }

    #[test]
    fn create_refuses_duplicates_and_empty_names() {
        let data_root = TempDir::new().unwrap();
        let service = template_service(&data_root);
        service.create_template(template("Beer A", 5.0)).unwrap();
        assert_eq!(
            service.create_template(template("Beer A", 7.0)),
            Err(TemplateServiceError::AlreadyExists("Beer A".to_string()))
        );
        assert_eq!(service.get_template("Beer A").map(|t| t.price()), Some(5.0));
        assert_eq!(service.create_template(template("", 1.0)), Err(TemplateServiceError::EmptyName));
    }

    #[test]
    fn update_and_delete_need_existing_templates() {
        let data_root = TempDir::new().unwrap();
        let service = template_service(&data_root);
        assert!(service.update_template(template("Cider", 4.0)).is_err());
        assert!(service.delete_template("Cider").is_err());

        service.create_template(template("Cider", 4.0)).unwrap();
        service.update_template(template("Cider", 4.5)).unwrap();
        assert_eq!(service.get_template("Cider").map(|t| t.price()), Some(4.5));
        service.delete_template("Cider").unwrap();
        assert!(service.get_templates().is_empty());
    }

    #[test]
    fn templates_are_listed_by_name() {
        let data_root = TempDir::new().unwrap();
        let service = template_service(&data_root);
        for name in ["Stout", "Ale", "Porter"] {
            service.create_template(template(name, 1.0)).unwrap();
        }
        let names: Vec<String> = service.get_templates().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["Ale", "Porter", "Stout"]);
    }

    #[test]
    fn load_without_saved_file_keeps_store_empty() {
        let data_root = TempDir::new().unwrap();
        let service = template_service(&data_root);
        assert!(!service.load());
        assert!(service.get_templates().is_empty());
    }
}
