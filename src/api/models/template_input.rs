use serde::Deserialize;
use crate::api::models::DrinkTemplate;

#[derive(Deserialize, PartialEq, Debug, Clone)]
#[serde(untagged)]
pub enum DrinkTypeInput {
    Ordinal(i16),
    Name(String)
}

/// Template fields as submitted by a client. Numbers are signed so that
/// negative input reaches the clamping setters instead of failing to parse.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DrinkTemplateInput {
    pub name: String,
    #[serde(rename = "type")]
    pub drink_type: Option<DrinkTypeInput>,
    pub servings: i16,
    #[serde(rename = "alcoholPerVolume")]
    pub alcohol_per_volume: f32,
    pub price: f32,
    pub calories: f32,
    #[serde(rename = "imageFilePath")]
    pub image_file_path: String
}

impl DrinkTemplateInput {
    pub fn into_template(self) -> DrinkTemplate {
        let mut template = DrinkTemplate::new(self.name.trim());
        match self.drink_type {
            Some(DrinkTypeInput::Ordinal(ordinal)) => template.set_type_ordinal(ordinal),
            Some(DrinkTypeInput::Name(name)) => template.set_type_name(&name),
            None => {}
        }
        template.set_servings(self.servings);
        template.set_alcohol_per_volume(self.alcohol_per_volume);
        template.set_price(self.price);
        template.set_calories(self.calories);
        template.set_image_file_path(&self.image_file_path);
        template
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogDrinkInput {
    #[serde(default)]
    pub occasion: String,
    pub hour: i32,
    pub minute: i32
}
