mod drink_template_manager_element;
mod drink_template_element;

pub use drink_template_manager_element::*;
pub use drink_template_element::*;

pub const DRINK_TEMPLATE_MANAGER_TAG: &str = "drinkTemplateManager";
pub const DRINK_TEMPLATE_TAG: &str = "drinkTemplate";
pub const NAME_TAG: &str = "name";
pub const SERVINGS_TAG: &str = "servings";
pub const TYPE_TAG: &str = "type";
pub const APV_TAG: &str = "apv";
pub const CALORIES_TAG: &str = "calories";
pub const PRICE_TAG: &str = "price";
pub const IMAGE_FILE_PATH_TAG: &str = "imgFilePath";
