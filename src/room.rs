// Hotel rooms and the fixed catalog the desk starts with

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    number: u32,
    room_type: RoomType,
    amenities: BTreeSet<String>,
    nightly_rate: Decimal,
    available: bool,
}

impl Room {
    // Rooms always start out available
    pub fn new<I, S>(number: u32, room_type: RoomType, amenities: I, nightly_rate: Decimal) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            number,
            room_type,
            amenities: amenities.into_iter().map(Into::into).collect(),
            nightly_rate,
            available: true,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn amenities(&self) -> &BTreeSet<String> {
        &self.amenities
    }

    pub fn nightly_rate(&self) -> Decimal {
        self.nightly_rate
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn summary(&self, currency: &str) -> String {
        format!(
            "Room {} - {} - {}{} - Available: {}",
            self.number,
            self.room_type,
            currency,
            self.nightly_rate,
            if self.available { "True" } else { "False" }
        )
    }
}

pub fn default_catalog() -> Vec<Room> {
    vec![
        Room::new(101, RoomType::Single, ["Wi-Fi", "TV"], Decimal::from(300)),
        Room::new(102, RoomType::Double, ["Wi-Fi", "Mini-Bar"], Decimal::from(450)),
        Room::new(201, RoomType::Suite, ["Wi-Fi", "Jacuzzi"], Decimal::from(800)),
    ]
}
