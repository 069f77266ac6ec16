use serde::Serialize;
use crate::api::models::{ DrinkTemplate, DrinkType };

#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct Drink {
    name: String,
    #[serde(rename = "type")]
    drink_type: DrinkType,
    servings: u16,
    #[serde(rename = "alcoholPerVolume")]
    alcohol_per_volume: f32,
    price: f32,
    calories: f32,
    #[serde(rename = "imageFilePath")]
    image_file_path: String,
    occasion: String,
    #[serde(rename = "hourOfConsumption")]
    hour_of_consumption: u32,
    #[serde(rename = "minuteOfConsumption")]
    minute_of_consumption: u32
}

impl Drink {
    /// Copies the template and clamps negative times to zero.
    /// Upper bounds are not checked: hour 30 or minute 70 pass through unchanged.
    pub fn produce(template: &DrinkTemplate, occasion: &str, hour: i32, minute: i32) -> Drink {
        Drink {
            name: template.name().to_string(),
            drink_type: template.drink_type(),
            servings: template.servings(),
            alcohol_per_volume: template.alcohol_per_volume(),
            price: template.price(),
            calories: template.calories(),
            image_file_path: template.image_file_path().to_string(),
            occasion: occasion.to_string(),
            hour_of_consumption: hour.max(0) as u32,
            minute_of_consumption: minute.max(0) as u32
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn drink_type(&self) -> DrinkType {
        self.drink_type
    }

    pub fn servings(&self) -> u16 {
        self.servings
    }

    pub fn alcohol_per_volume(&self) -> f32 {
        self.alcohol_per_volume
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    pub fn calories(&self) -> f32 {
        self.calories
    }

    pub fn image_file_path(&self) -> &str {
        &self.image_file_path
    }

    pub fn occasion(&self) -> &str {
        &self.occasion
    }

    pub fn hour_of_consumption(&self) -> u32 {
        self.hour_of_consumption
    }

    pub fn minute_of_consumption(&self) -> u32 {
        self.minute_of_consumption
    }

    pub fn formatted_time(&self) -> String {
        format_time_of_consumption(self.hour_of_consumption as i64, self.minute_of_consumption as i64)
    }
}

/// Renders `HH:MM AM|PM`. An hour outside 0..=23 renders as `-1` without a suffix,
/// a minute outside 0..=59 renders as `-1`.
pub fn format_time_of_consumption(hours: i64, minutes: i64) -> String {
    let (hours_token, suffix) = match hours {
        0..=11 => (format!("{:02}", hours), "AM"),
        12..=23 => (format!("{:02}", hours - 12), "PM"),
        _ => (String::from("-1"), "")
    };
    let minutes_token = match minutes {
        0..=59 => format!("{:02}", minutes),
        _ => String::from("-1")
    };
    format!("{}:{} {}", hours_token, minutes_token, suffix)
}
