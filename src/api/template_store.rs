use std::collections::HashMap;
use crate::api::models::{ Drink, DrinkTemplate };

/// In-memory templates keyed by name, at most one per name.
///
/// `put` only creates and `modify` only updates; the store never upserts.
/// Access is single-threaded; hosts sharing a store wrap it in a lock.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TemplateStore {
    templates: HashMap<String, DrinkTemplate>
}

impl TemplateStore {
    pub fn new() -> TemplateStore {
        TemplateStore { templates: HashMap::new() }
    }

    pub fn get(&self, name: &str) -> Option<&DrinkTemplate> {
        self.templates.get(name)
    }

    /// Returns false and leaves the existing entry untouched when the name is taken.
    /// Templates without a name are refused.
    pub fn put(&mut self, template: DrinkTemplate) -> bool {
        if template.name().is_empty() || self.templates.contains_key(template.name()) {
            return false;
        }
        self.templates.insert(template.name().to_string(), template);
        true
    }

    pub fn modify(&mut self, template: DrinkTemplate) -> bool {
        match self.templates.get_mut(template.name()) {
            Some(existing) => {
                *existing = template;
                true
            },
            None => false
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.templates.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn list(&self) -> Vec<&DrinkTemplate> {
        self.templates.values().collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }

    pub fn produce_drink(&self, name: &str, occasion: &str, hour: i32, minute: i32) -> Option<Drink> {
        self.get(name).map(|template| template.produce_drink(occasion, hour, minute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, servings: i16, price: f32) -> DrinkTemplate {
        let mut template = DrinkTemplate::new(name);
        template.set_servings(servings);
        template.set_price(price);
        template
    }

    #[test]
    fn put_then_get_returns_equal_template() {
        let mut store = TemplateStore::new();
        let beer = template("Beer A", 1, 5.0);
        assert!(store.put(beer.clone()));
        assert_eq!(store.get("Beer A"), Some(&beer));
        assert!(store.contains("Beer A"));
        assert_eq!(store.get("Beer B"), None);
    }

    #[test]
    fn second_put_with_same_name_is_refused() {
        let mut store = TemplateStore::new();
        assert!(store.put(template("Beer A", 1, 5.0)));
        assert!(!store.put(template("Beer A", 1, 7.0)));
        assert_eq!(store.get("Beer A").map(DrinkTemplate::price), Some(5.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn nameless_template_is_refused() {
        let mut store = TemplateStore::new();
        assert!(!store.put(DrinkTemplate::new("")));
        assert!(store.is_empty());
        assert!(store.put(DrinkTemplate::new(" ")));
    }

    #[test]
    fn modify_requires_an_existing_name() {
        let mut store = TemplateStore::new();
        assert!(!store.modify(template("Wine", 1, 10.0)));
        assert!(store.is_empty());

        store.put(template("Wine", 1, 10.0));
        assert!(store.modify(template("Wine", 10, 12.0)));
        assert_eq!(store.get("Wine").map(DrinkTemplate::servings), Some(10));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_missing_names() {
        let mut store = TemplateStore::new();
        (0..10).for_each(|i| { store.put(template(&format!("test name {}", i), 1, 1.0)); });
        for i in 0..10 {
            assert!(store.remove(&format!("test name {}", i)));
        }
        assert!(store.is_empty());
        assert!(!store.remove("test name 0"));
    }

    #[test]
    fn list_contains_every_template() {
        let mut store = TemplateStore::new();
        store.put(template("Gin", 1, 8.0));
        store.put(template("Rum", 2, 9.0));
        let mut names: Vec<&str> = store.list().into_iter().map(DrinkTemplate::name).collect();
        names.sort();
        assert_eq!(names, vec!["Gin", "Rum"]);
    }

    #[test]
    fn produce_drink_by_name() {
        let mut store = TemplateStore::new();
        store.put(template("Gin", 1, 8.0));
        let drink = store.produce_drink("Gin", "Party", 22, 45).unwrap();
        assert_eq!(drink.name(), "Gin");
        assert_eq!(drink.occasion(), "Party");
        assert!(store.produce_drink("Vodka", "", 0, 0).is_none());
    }
}
