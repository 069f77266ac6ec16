use hard_xml::{ XmlRead, XmlWrite };

#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "string")]
pub struct StringElement {
    #[xml(attr = "name")]
    pub name: String,
    #[xml(text)]
    pub content: String,
}

impl StringElement {
    pub fn new(name: &str, content: &str) -> StringElement {
        StringElement {
            name: name.to_string(),
            content: content.to_string()
        }
    }
}
