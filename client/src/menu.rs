//! Main-menu model: the item list, keyboard selection, pointer hover, and
//! the fade-in ramp. Layout mirrors what the renderer draws so hit-testing
//! and drawing can never disagree.

use game_core::{Arena, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PlayerVsAi,
    PlayerVsPlayer,
    Easy,
    Medium,
    Hard,
    SwitchTheme,
    ColorblindMode,
    ToggleSound,
    ShowHelp,
}

impl MenuItem {
    pub const ALL: [MenuItem; 9] = [
        MenuItem::PlayerVsAi,
        MenuItem::PlayerVsPlayer,
        MenuItem::Easy,
        MenuItem::Medium,
        MenuItem::Hard,
        MenuItem::SwitchTheme,
        MenuItem::ColorblindMode,
        MenuItem::ToggleSound,
        MenuItem::ShowHelp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PlayerVsAi => "Player vs AI",
            MenuItem::PlayerVsPlayer => "Player vs Player",
            MenuItem::Easy => "Easy",
            MenuItem::Medium => "Medium",
            MenuItem::Hard => "Hard",
            MenuItem::SwitchTheme => "Switch Theme",
            MenuItem::ColorblindMode => "Colorblind Mode",
            MenuItem::ToggleSound => "Toggle Sound",
            MenuItem::ShowHelp => "Show Help",
        }
    }
}

const BUTTON_WIDTH: i32 = 300;
const BUTTON_HEIGHT: i32 = 58;
const BUTTON_GAP: i32 = 38;
pub const TITLE_POS: (i32, i32) = (60, 60);
const TITLE_SIZE: i32 = 54;
const DIVIDER_GAP: i32 = 18;
const FOOTER_RESERVED: i32 = 140;
const FADE_STEP: i32 = 8;

#[derive(Debug)]
pub struct Menu {
    pub selected: usize,
    pub hovered: Option<usize>,
    pub alpha: i32,
    fade_in: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            hovered: None,
            alpha: 0,
            fade_in: true,
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Restart the fade-in ramp (fresh arrival at the menu)
    pub fn begin_fade(&mut self) {
        self.alpha = 0;
        self.fade_in = true;
    }

    pub fn tick_fade(&mut self) {
        if self.fade_in {
            self.alpha = (self.alpha + FADE_STEP).min(255);
            if self.alpha >= 255 {
                self.fade_in = false;
            }
        }
    }

    pub fn divider_y(&self) -> i32 {
        TITLE_POS.1 + TITLE_SIZE + DIVIDER_GAP
    }

    /// Button rects top to bottom. When the stack would not fit above the
    /// footer, button height and gap shrink proportionally.
    pub fn layout(&self, arena: &Arena) -> Vec<Rect> {
        let count = MenuItem::ALL.len() as i32;
        let start_y = self.divider_y() + 60;

        let mut height = BUTTON_HEIGHT;
        let mut gap = BUTTON_GAP;
        let total = count * height + (count - 1) * gap;
        let available = arena.height - start_y - FOOTER_RESERVED;
        if total > available && total > 0 {
            height = height * available / total;
            gap = gap * available / total;
        }

        let x = arena.width / 2 - BUTTON_WIDTH / 2;
        (0..count)
            .map(|i| Rect::new(x, start_y + i * (height + gap), BUTTON_WIDTH, height))
            .collect()
    }

    pub fn hit_test(&self, arena: &Arena, point: (i32, i32)) -> Option<usize> {
        self.layout(arena)
            .iter()
            .position(|rect| rect.contains(point.0, point.1))
    }

    pub fn update_hover(&mut self, arena: &Arena, pointer: (i32, i32)) {
        self.hovered = self.hit_test(arena, pointer);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
