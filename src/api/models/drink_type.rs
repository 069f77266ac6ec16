use std::fmt;
use serde::{ Deserialize, Serialize };

pub const UNKNOWN_DRINK_TYPE_ORDINAL: i32 = -1;
pub const UNKNOWN_DRINK_TYPE_NAME: &str = "n/a";

const DRINK_TYPE_NAMES: [&str; 4] = ["Beer", "Wine", "Cocktail", "Liquor"];

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum DrinkType {
    Beer,
    Wine,
    Cocktail,
    Liquor,
    #[serde(rename = "n/a")]
    Unknown
}

impl DrinkType {
    pub fn from_ordinal(ordinal: i32) -> DrinkType {
        match ordinal {
            0 => DrinkType::Beer,
            1 => DrinkType::Wine,
            2 => DrinkType::Cocktail,
            3 => DrinkType::Liquor,
            _ => DrinkType::Unknown
        }
    }

    pub fn from_name(name: &str) -> DrinkType {
        DrinkType::from_ordinal(DrinkType::ordinal_from_name(name))
    }

    pub fn ordinal_from_name(name: &str) -> i32 {
        DRINK_TYPE_NAMES.iter()
            .position(|type_name| *type_name == name)
            .map_or(UNKNOWN_DRINK_TYPE_ORDINAL, |index| index as i32)
    }

    pub fn name_from_ordinal(ordinal: i32) -> &'static str {
        DrinkType::from_ordinal(ordinal).name()
    }

    pub fn names() -> &'static [&'static str] {
        &DRINK_TYPE_NAMES
    }

    pub fn ordinal(self) -> i32 {
        match self {
            DrinkType::Beer => 0,
            DrinkType::Wine => 1,
            DrinkType::Cocktail => 2,
            DrinkType::Liquor => 3,
            DrinkType::Unknown => UNKNOWN_DRINK_TYPE_ORDINAL
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DrinkType::Unknown => UNKNOWN_DRINK_TYPE_NAME,
            known => DRINK_TYPE_NAMES[known.ordinal() as usize]
        }
    }
}

impl Default for DrinkType {
    fn default() -> Self {
        DrinkType::Beer
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wine_round_trips_through_its_ordinal() {
        let ordinal = DrinkType::ordinal_from_name("Wine");
        assert_eq!(ordinal, 1);
        assert_eq!(DrinkType::name_from_ordinal(ordinal), "Wine");
    }

    #[test]
    fn out_of_range_ordinal_has_placeholder_name() {
        assert_eq!(DrinkType::name_from_ordinal(99), "n/a");
        assert_eq!(DrinkType::name_from_ordinal(-5), "n/a");
        assert_eq!(DrinkType::from_ordinal(4), DrinkType::Unknown);
    }

    #[test]
    fn unrecognized_name_maps_to_reserved_ordinal() {
        assert_eq!(DrinkType::ordinal_from_name("Mead"), -1);
        assert_eq!(DrinkType::ordinal_from_name("wine"), -1);
        assert_eq!(DrinkType::from_name("Mead"), DrinkType::Unknown);
    }

    #[test]
    fn names_are_listed_in_ordinal_order() {
        for (index, name) in DrinkType::names().iter().enumerate() {
            assert_eq!(DrinkType::from_ordinal(index as i32).name(), *name);
        }
        assert_eq!(DrinkType::Unknown.to_string(), "n/a");
    }
}
