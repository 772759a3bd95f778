//! Color palettes, one per [`Theme`]

use crate::components::Rgb;
use crate::config::Theme;

/// Every color a screen needs, resolved from the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
    pub menu_bg: Rgb,
    pub button: Rgb,
    pub button_hover: Rgb,
    pub paddle: Rgb,
    pub ball: Rgb,
    pub particle: Rgb,
    pub paused: Rgb,
}

const DARK: Palette = Palette {
    bg: Rgb(15, 15, 35),
    accent: Rgb(100, 200, 255),
    text: Rgb(240, 240, 240),
    menu_bg: Rgb(25, 25, 50),
    button: Rgb(40, 40, 80),
    button_hover: Rgb(80, 80, 160),
    paddle: Rgb(100, 200, 255),
    ball: Rgb(255, 150, 100),
    particle: Rgb(255, 200, 150),
    paused: Rgb(200, 50, 50),
};

const LIGHT: Palette = Palette {
    bg: Rgb(240, 240, 255),
    accent: Rgb(0, 120, 255),
    text: Rgb(30, 30, 50),
    menu_bg: Rgb(210, 220, 255),
    button: Rgb(200, 210, 230),
    button_hover: Rgb(160, 180, 230),
    paddle: Rgb(0, 120, 255),
    ball: Rgb(255, 150, 100),
    particle: Rgb(255, 200, 150),
    paused: Rgb(200, 50, 50),
};

const COLORBLIND: Palette = Palette {
    bg: Rgb(20, 20, 20),
    accent: Rgb(255, 255, 0),
    text: Rgb(255, 255, 255),
    menu_bg: Rgb(40, 40, 40),
    button: Rgb(90, 90, 90),
    button_hover: Rgb(160, 160, 60),
    paddle: Rgb(255, 255, 0),
    ball: Rgb(255, 90, 90),
    particle: Rgb(255, 220, 0),
    paused: Rgb(255, 150, 0),
};

impl Theme {
    /// Total over the enum, so a theme can never be missing its palette
    pub const fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
            Theme::Colorblind => &COLORBLIND,
        }
    }
}
