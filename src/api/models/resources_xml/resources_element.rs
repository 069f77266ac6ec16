use std::collections::HashMap;
use hard_xml::{ XmlRead, XmlWrite };
use crate::api::models::resources_xml::StringElement;

#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone, Default)]
#[xml(tag = "resources")]
pub struct ResourcesElement {
    #[xml(child = "string")]
    pub strings: Vec<StringElement>,
}

impl ResourcesElement {
    /// Later strings win when a name repeats.
    pub fn into_string_map(self) -> HashMap<String, String> {
        self.strings
            .into_iter()
            .map(|string_element| (string_element.name, string_element.content))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_strings() {
        let resources = ResourcesElement::from_str(
            r#"<resources><string name="saved">Saved {{count}}</string><string name="empty"></string></resources>"#
        ).unwrap();
        assert_eq!(resources.strings, vec![
            StringElement::new("saved", "Saved {{count}}"),
            StringElement::new("empty", "")
        ]);
    }

    #[test]
    fn repeated_names_keep_the_last_string() {
        let resources = ResourcesElement::from_str(
            r#"<resources><string name="greeting">Hi</string><string name="greeting">Hello</string></resources>"#
        ).unwrap();
        let strings = resources.into_string_map();
        assert_eq!(strings.len(), 1);
        assert_eq!(strings["greeting"], "Hello");
    }
}
