// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

use crate::animation::EasingType;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub background: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background: [0.16, 0.16, 0.18],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TileConfig {
    pub count: usize,       // Number of tiles created on fill
    pub width: f32,         // Tile width in page pixels
    pub height: f32,        // Tile height in page pixels
    pub font_size: u32,
    pub origin: [f32; 2],   // Top-left corner of the container in page space
    pub background: [f32; 4],
    pub text: [f32; 4],
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            count: 5,
            width: 60.0,
            height: 60.0,
            font_size: 24,
            origin: [200.0, 260.0],
            background: [1.0, 1.0, 1.0, 1.0],
            text: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl TileConfig {
    pub fn background_color(&self) -> Rgba {
        to_rgba(self.background)
    }

    pub fn text_color(&self) -> Rgba {
        to_rgba(self.text)
    }
}

/************************* Animation Configs ********************/

// all durations in seconds
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TimingConfig {
    pub color_duration: f32,
    pub color_end_delay: f32,  // Pause after select/deselect
    pub finish_end_delay: f32, // Pause after a tile settles
    pub swap_duration: f32,
    pub easing: EasingType,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            color_duration: 0.6,
            color_end_delay: 0.4,
            finish_end_delay: 1.0,
            swap_duration: 0.7,
            easing: EasingType::EaseInOut,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaletteConfig {
    pub select_background: [f32; 4],
    pub select_text: [f32; 4],
    pub finish_background: [f32; 4],
    pub finish_text: [f32; 4],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // #FBF38C, #A4FF4F, #1D1C1C
        Self {
            select_background: [0.984, 0.953, 0.549, 1.0],
            select_text: [0.114, 0.110, 0.110, 1.0],
            finish_background: [0.643, 1.0, 0.310, 1.0],
            finish_text: [0.114, 0.110, 0.110, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rx_port: 9010,
        }
    }
}

pub fn to_rgba(c: [f32; 4]) -> Rgba {
    rgba(c[0], c[1], c[2], c[3])
}
