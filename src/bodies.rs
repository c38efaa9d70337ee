//! Celestial body registry
//!
//! Fixed, ordered table of the central star and the eight planets. Registry
//! order defines render order and the index of each planet's speed slider.

use bevy::prelude::*;

/// Number of orbiting bodies (everything except the central star).
pub const PLANET_COUNT: usize = 8;

/// Identity of every rendered body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// Planets in registry order.
    pub const PLANETS: [BodyId; PLANET_COUNT] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Index into the speed multiplier sequence, `None` for the star.
    pub fn planet_index(self) -> Option<usize> {
        Self::PLANETS.iter().position(|&p| p == self)
    }

    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<BodyId> {
        std::iter::once(&SUN)
            .chain(PLANETS.iter())
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.id)
    }

    pub fn descriptor(self) -> &'static BodyDescriptor {
        match self.planet_index() {
            Some(index) => &PLANETS[index],
            None => &SUN,
        }
    }
}

/// Static description of a celestial body.
#[derive(Debug)]
pub struct BodyDescriptor {
    pub id: BodyId,
    pub name: &'static str,
    /// Visual size; planet spheres use half of it as their radius.
    pub size: f32,
    /// Distance from the star in world units.
    pub orbital_distance: f32,
    /// Relative orbital rate at multiplier 1.0.
    pub base_angular_speed: f32,
    /// sRGB color bytes.
    pub color: [u8; 3],
    pub description: &'static str,
}

impl BodyDescriptor {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb_u8(r, g, b)
    }

    /// Radius of the rendered sphere.
    pub fn sphere_radius(&self) -> f32 {
        match self.id {
            BodyId::Sun => self.size,
            _ => self.size * 0.5,
        }
    }

    /// Height above the body center where the hover callout is anchored.
    pub fn label_offset(&self) -> f32 {
        self.size * 0.8
    }
}

pub static SUN: BodyDescriptor = BodyDescriptor {
    id: BodyId::Sun,
    name: "Sun",
    size: 1.5,
    orbital_distance: 0.0,
    base_angular_speed: 0.0,
    color: [0xFD, 0xB8, 0x13],
    description: "The central star",
};

pub static PLANETS: [BodyDescriptor; PLANET_COUNT] = [
    BodyDescriptor {
        id: BodyId::Mercury,
        name: "Mercury",
        size: 0.38,
        orbital_distance: 4.0,
        base_angular_speed: 4.15,
        color: [0x8C, 0x78, 0x53],
        description: "Closest to the Sun",
    },
    BodyDescriptor {
        id: BodyId::Venus,
        name: "Venus",
        size: 0.95,
        orbital_distance: 5.5,
        base_angular_speed: 1.62,
        color: [0xFF, 0xC6, 0x49],
        description: "Hottest planet",
    },
    BodyDescriptor {
        id: BodyId::Earth,
        name: "Earth",
        size: 1.0,
        orbital_distance: 7.0,
        base_angular_speed: 1.0,
        color: [0x6B, 0x93, 0xD6],
        description: "Our home planet",
    },
    BodyDescriptor {
        id: BodyId::Mars,
        name: "Mars",
        size: 0.53,
        orbital_distance: 8.5,
        base_angular_speed: 0.53,
        color: [0xC1, 0x44, 0x0E],
        description: "The Red Planet",
    },
    BodyDescriptor {
        id: BodyId::Jupiter,
        name: "Jupiter",
        size: 2.5,
        orbital_distance: 12.0,
        base_angular_speed: 0.084,
        color: [0xD8, 0xCA, 0x9D],
        description: "Largest planet",
    },
    BodyDescriptor {
        id: BodyId::Saturn,
        name: "Saturn",
        size: 2.1,
        orbital_distance: 15.0,
        base_angular_speed: 0.034,
        color: [0xFA, 0xD5, 0xA5],
        description: "Has beautiful rings",
    },
    BodyDescriptor {
        id: BodyId::Uranus,
        name: "Uranus",
        size: 1.6,
        orbital_distance: 18.0,
        base_angular_speed: 0.012,
        color: [0x4F, 0xD0, 0xE7],
        description: "Ice giant",
    },
    BodyDescriptor {
        id: BodyId::Neptune,
        name: "Neptune",
        size: 1.55,
        orbital_distance: 21.0,
        base_angular_speed: 0.006,
        color: [0x4B, 0x70, 0xDD],
        description: "Farthest planet",
    },
];
