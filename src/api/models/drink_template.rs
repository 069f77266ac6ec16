use serde::{ Serialize, Serializer };
use crate::api::models::{ Drink, DrinkType };

/// Every numeric setter clamps negative input to zero instead of rejecting it.
#[derive(Serialize, PartialEq, Debug, Clone, Default)]
pub struct DrinkTemplate {
    name: String,
    #[serde(rename = "type", serialize_with = "serialize_type_name")]
    type_ordinal: i16,
    servings: u16,
    #[serde(rename = "alcoholPerVolume")]
    alcohol_per_volume: f32,
    price: f32,
    calories: f32,
    #[serde(rename = "imageFilePath")]
    image_file_path: String
}

impl DrinkTemplate {
    pub fn new(name: &str) -> DrinkTemplate {
        DrinkTemplate {
            name: name.to_string(),
            ..DrinkTemplate::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn drink_type(&self) -> DrinkType {
        DrinkType::from_ordinal(i32::from(self.type_ordinal))
    }

    /// The stored ordinal. Ordinals past the last type are kept as given and read as `Unknown`.
    pub fn type_ordinal(&self) -> i16 {
        self.type_ordinal
    }

    pub fn set_type(&mut self, drink_type: DrinkType) {
        self.set_type_ordinal(drink_type.ordinal() as i16);
    }

    pub fn set_type_ordinal(&mut self, ordinal: i16) {
        self.type_ordinal = ordinal.max(0);
    }

    /// Unrecognized names fall back to the first type.
    pub fn set_type_name(&mut self, name: &str) {
        self.set_type_ordinal(DrinkType::ordinal_from_name(name) as i16);
    }

    pub fn servings(&self) -> u16 {
        self.servings
    }

    pub fn set_servings(&mut self, servings: i16) {
        self.servings = servings.max(0) as u16;
    }

    pub fn alcohol_per_volume(&self) -> f32 {
        self.alcohol_per_volume
    }

    pub fn set_alcohol_per_volume(&mut self, alcohol_per_volume: f32) {
        self.alcohol_per_volume = clamp_non_negative(alcohol_per_volume);
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    pub fn set_price(&mut self, price: f32) {
        self.price = clamp_non_negative(price);
    }

    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    pub fn calories(&self) -> f32 {
        self.calories
    }

    pub fn set_calories(&mut self, calories: f32) {
        self.calories = clamp_non_negative(calories);
    }

    pub fn image_file_path(&self) -> &str {
        &self.image_file_path
    }

    pub fn set_image_file_path(&mut self, image_file_path: &str) {
        self.image_file_path = image_file_path.to_string();
    }

    pub fn has_image(&self) -> bool {
        !self.image_file_path.is_empty()
    }

    pub fn produce_drink(&self, occasion: &str, hour: i32, minute: i32) -> Drink {
        Drink::produce(self, occasion, hour, minute)
    }
}

fn serialize_type_name<S: Serializer>(ordinal: &i16, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(DrinkType::name_from_ordinal(i32::from(*ordinal)))
}

fn clamp_non_negative(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}
