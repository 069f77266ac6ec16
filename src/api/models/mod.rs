mod drink_type;
mod drink_template;
mod drink;
mod template_input;
mod input_error;
pub mod resources_xml;
pub mod templates_xml;

pub use drink_type::*;
pub use drink_template::*;
pub use drink::*;
pub use template_input::*;
pub use input_error::*;
