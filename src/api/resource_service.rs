use std::collections::HashMap;
use handlebars::{ no_escape, Handlebars };
use serde::Serialize;
use crate::api::models::resources_xml::ResourcesElement;

#[derive(Clone, Debug, Default)]
pub struct ResourceService {
    strings: HashMap<String, String>
}

impl ResourceService {
    pub fn new(resources_element: ResourcesElement) -> ResourceService {
        ResourceService { strings: resources_element.into_string_map() }
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let template_string = self.get_resource_string_by_name(name)?;
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.render_template(template_string, data).ok()
    }

    pub fn message(&self, name: &str) -> String {
        self.get_resource_string_by_name(name).unwrap_or(name).to_string()
    }

    pub fn render_message<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.render_resource_template_string_by_name(name, data)
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::resources_xml::StringElement;
    use serde_json::json;

    fn resource_service() -> ResourceService {
        ResourceService::new(ResourcesElement {
            strings: vec![
                StringElement::new("plain", "Plain text"),
                StringElement::new("named", "Template \"{{name}}\" & co")
            ]
        })
    }

    #[test]
    fn looks_up_strings_by_name() {
        let resource_service = resource_service();
        assert_eq!(resource_service.get_resource_string_by_name("plain"), Some("Plain text"));
        assert_eq!(resource_service.get_resource_string_by_name("missing"), None);
        assert_eq!(resource_service.message("missing"), "missing");
    }

    #[test]
    fn renders_without_html_escaping() {
        let rendered = resource_service().render_message("named", &json!({ "name": "<Gin & Tonic>" }));
        assert_eq!(rendered, "Template \"<Gin & Tonic>\" & co");
    }
}
