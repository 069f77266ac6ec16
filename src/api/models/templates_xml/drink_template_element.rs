use hard_xml::XmlWrite;
use crate::api::models::DrinkTemplate;

#[derive(XmlWrite, PartialEq, Debug, Clone)]
#[xml(tag = "drinkTemplate")]
pub struct DrinkTemplateElement {
    #[xml(flatten_text = "name")]
    pub name: String,
    #[xml(flatten_text = "servings")]
    pub servings: u16,
    #[xml(flatten_text = "type")]
    pub drink_type: i16,
    #[xml(flatten_text = "apv")]
    pub alcohol_per_volume: f32,
    #[xml(flatten_text = "calories")]
    pub calories: f32,
    #[xml(flatten_text = "price")]
    pub price: f32,
    #[xml(flatten_text = "imgFilePath")]
    pub image_file_path: String,
}

impl From<&DrinkTemplate> for DrinkTemplateElement {
    fn from(template: &DrinkTemplate) -> Self {
        DrinkTemplateElement {
            name: template.name().to_string(),
            servings: template.servings(),
            drink_type: template.type_ordinal(),
            alcohol_per_volume: template.alcohol_per_volume(),
            calories: template.calories(),
            price: template.price(),
            image_file_path: template.image_file_path().to_string(),
        }
    }
}
