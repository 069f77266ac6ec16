use hard_xml::XmlWrite;
use crate::api::models::templates_xml::DrinkTemplateElement;

#[derive(XmlWrite, PartialEq, Debug, Clone)]
#[xml(tag = "drinkTemplateManager")]
pub struct DrinkTemplateManagerElement {
    #[xml(child = "drinkTemplate")]
    pub templates: Vec<DrinkTemplateElement>,
}
