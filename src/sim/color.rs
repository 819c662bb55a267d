//! Packed RGB colors
//!
//! The engine never draws anything; colors only matter for the camouflage
//! rule (a ball passes a same-colored block without triggering listeners).

use serde::{Deserialize, Serialize};

/// A `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const LIGHT_GRAY: Color = Color(0xC0C0C0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}
