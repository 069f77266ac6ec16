use std::sync::{ PoisonError, RwLock };
use crate::api::models::Drink;

/// Drinks logged during this session, in the order they were logged. Not persisted.
#[derive(Default)]
pub struct DrinkLogService {
    drinks: RwLock<Vec<Drink>>
}

impl DrinkLogService {
    pub fn new() -> DrinkLogService {
        DrinkLogService::default()
    }

    pub fn put_drink(&self, drink: Drink) -> Vec<Drink> {
        let mut drinks = self.drinks.write().unwrap_or_else(PoisonError::into_inner);
        drinks.push(drink);
        drinks.clone()
    }

    pub fn remove_drink(&self, index: usize) -> bool {
        let mut drinks = self.drinks.write().unwrap_or_else(PoisonError::into_inner);
        if index >= drinks.len() {
            return false;
        }
        drinks.remove(index);
        true
    }

    pub fn get_drinks(&self) -> Vec<Drink> {
        self.drinks.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
