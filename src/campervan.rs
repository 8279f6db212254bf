//! Two unrelated parents combined into one type. No shared ancestor, so no
//! deduplication is needed; the campervan simply owns both parts.

use crate::profile::{Describe, Profile};

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    rooms: u32,
}

impl House {
    pub fn new(rooms: u32) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    fn render(&self, profile: Profile) -> Profile {
        profile.field("Rooms", self.rooms)
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Describe for House {
    fn describe(&self) -> Profile {
        self.render(Profile::new("House"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Van {
    engine_cc: f64,
}

impl Van {
    pub fn new(engine_cc: f64) -> Self {
        Self { engine_cc }
    }

    pub fn engine_cc(&self) -> f64 {
        self.engine_cc
    }

    fn render(&self, profile: Profile) -> Profile {
        profile.field("Engine", format!("{} cc", self.engine_cc))
    }
}

impl Default for Van {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

impl Describe for Van {
    fn describe(&self) -> Profile {
        self.render(Profile::new("Van"))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Campervan {
    house: House,
    van: Van,
}

impl Campervan {
    pub fn new(rooms: u32, engine_cc: f64) -> Self {
        Self {
            house: House::new(rooms),
            van: Van::new(engine_cc),
        }
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn van(&self) -> &Van {
        &self.van
    }
}

impl Describe for Campervan {
    fn describe(&self) -> Profile {
        self.van.render(self.house.render(Profile::new("Campervan")))
    }
}
