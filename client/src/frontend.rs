//! Collaborator seams: rendering, audio, input, and the frame limiter.
//!
//! The game logic only ever talks to these traits. A windowing backend
//! implements them against a real surface; the headless implementations
//! here back the tests and the demo binary, and double as the degraded
//! path when a subsystem (audio, fonts) is unavailable.

use std::time::{Duration, Instant};

use game_core::{InputState, Rect, Rgb};

/// RGBA color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn opaque(color: Rgb) -> Self {
        Self::with_alpha(color, 255)
    }

    pub fn with_alpha(color: Rgb, a: u8) -> Self {
        Self {
            r: color.0,
            g: color.1,
            b: color.2,
            a,
        }
    }
}

/// Where a text draw is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Drawing capability the game renders through. The core never touches a
/// pixel buffer; it emits these calls and a backend does the rest.
pub trait Renderer {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba, corner_radius: i32);
    fn outline_rect(&mut self, rect: Rect, color: Rgba, width: i32, corner_radius: i32);
    fn ellipse(&mut self, rect: Rect, color: Rgba);
    fn circle(&mut self, center: (i32, i32), radius: i32, color: Rgba);
    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba, width: i32);
    /// Full-screen translucent wash
    fn overlay(&mut self, color: Rgba);
    fn text(&mut self, text: &str, pos: (i32, i32), anchor: TextAnchor, size: i32, color: Rgba);
}

/// Fire-and-forget sound triggers; absence of audio never affects logic
pub trait AudioSink {
    fn play_hit(&mut self);
}

/// Discrete input events, one frame's worth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    NavUp,
    NavDown,
    Confirm,
    TogglePause,
    ToggleHelp,
    Click { x: i32, y: i32 },
    Quit,
}

/// Everything sampled from the input collaborator for one frame
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub held: InputState,
    pub pointer: (i32, i32),
    pub events: Vec<InputEvent>,
}

/// Renderer that ignores every call
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _color: Rgba) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Rgba, _corner_radius: i32) {}
    fn outline_rect(&mut self, _rect: Rect, _color: Rgba, _width: i32, _corner_radius: i32) {}
    fn ellipse(&mut self, _rect: Rect, _color: Rgba) {}
    fn circle(&mut self, _center: (i32, i32), _radius: i32, _color: Rgba) {}
    fn line(&mut self, _from: (i32, i32), _to: (i32, i32), _color: Rgba, _width: i32) {}
    fn overlay(&mut self, _color: Rgba) {}
    fn text(&mut self, _text: &str, _pos: (i32, i32), _anchor: TextAnchor, _size: i32, _color: Rgba) {
    }
}

/// Silent sink used when the audio subsystem is unavailable
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_hit(&mut self) {}
}

/// Fixed-cadence limiter for the cooperative loop
pub struct FrameLimiter {
    target: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let target = Duration::from_secs(1) / fps;
        Self {
            target,
            next: Instant::now() + target,
        }
    }

    /// Sleep out the remainder of the frame, then schedule the next one.
    /// Falls forward rather than bursting after a long frame.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
        }
        self.next += self.target;
        let now = Instant::now();
        if self.next < now {
            self.next = now + self.target;
        }
    }
}
