//! Screen color picker
//!
//! A tooltip follows the mouse and shows the color of the pixel under it.
//! The first left click copies that color's hex code to the clipboard and
//! ends the loop. Screen access, pointer input and drawing are provided by
//! the host through the traits below.

pub mod tooltip;

use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::color::Color;
use crate::config::PickerConfig;
use crate::providers::Clipboard;

pub use tooltip::{label_for, place_near, Tooltip, TooltipMetrics};

/// Errors from a screen backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("cannot read pixel at ({x}, {y})")]
    PixelUnavailable { x: i32, y: i32 },
    #[error("screen unavailable: {0}")]
    ScreenUnavailable(String),
}

/// Pixel access to the screen
pub trait Screen {
    /// Screen size in pixels
    fn size(&self) -> (i32, i32);
    /// Color of the pixel at `(x, y)`
    fn pixel(&mut self, x: i32, y: i32) -> Result<Color, PickerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub pressed: bool,
}

/// Result of polling the pointer for input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPoll {
    /// Nothing pending
    Idle,
    Click(ClickEvent),
    /// The input source is gone; the picker stops without copying
    Closed,
}

/// Global pointer input
pub trait PointerEvents {
    /// Current cursor position in screen coordinates
    fn cursor_position(&mut self) -> (i32, i32);
    /// Next pending click, without blocking
    fn poll_click(&mut self) -> PointerPoll;
}

/// Draws the tooltip window
pub trait TooltipView {
    fn show(&mut self, tooltip: &Tooltip);
    fn hide(&mut self);
}

/// What one tick of the picker loop decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Picked(Color),
    Closed,
}

/// The picker loop state
pub struct ColorPicker {
    config: PickerConfig,
    metrics: TooltipMetrics,
    current: Color,
}

impl ColorPicker {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            metrics: TooltipMetrics::default(),
            current: Color::BLACK,
        }
    }

    pub fn with_metrics(mut self, metrics: TooltipMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Color shown by the most recent tick
    pub fn current(&self) -> Color {
        self.current
    }

    /// Sample the pixel under the cursor and redraw the tooltip
    ///
    /// Pixel read failures show black.
    pub fn refresh(
        &mut self,
        screen: &mut dyn Screen,
        pointer: &mut dyn PointerEvents,
        view: &mut dyn TooltipView,
    ) -> Tooltip {
        let (x, y) = pointer.cursor_position();
        self.current = screen.pixel(x, y).unwrap_or_else(|e| {
            tracing::trace!("{}", e);
            Color::BLACK
        });

        let tooltip = Tooltip::new(
            self.current,
            (x, y),
            (self.config.offset_x, self.config.offset_y),
            screen.size(),
            &self.metrics,
        );
        view.show(&tooltip);
        tooltip
    }

    /// Refresh, then handle pending clicks
    pub fn tick(
        &mut self,
        screen: &mut dyn Screen,
        pointer: &mut dyn PointerEvents,
        view: &mut dyn TooltipView,
        clipboard: &mut dyn Clipboard,
    ) -> TickOutcome {
        self.refresh(screen, pointer, view);

        loop {
            match pointer.poll_click() {
                PointerPoll::Idle => return TickOutcome::Continue,
                PointerPoll::Closed => return TickOutcome::Closed,
                PointerPoll::Click(ClickEvent {
                    button: MouseButton::Left,
                    pressed: true,
                }) => {
                    let hex = self.current.to_hex();
                    if let Err(e) = clipboard.set_text(&hex) {
                        tracing::warn!("Failed to copy {} to clipboard: {}", hex, e);
                    } else {
                        tracing::info!("Copied {} to clipboard", hex);
                    }
                    return TickOutcome::Picked(self.current);
                }
                PointerPoll::Click(other) => {
                    tracing::trace!(?other, "Ignoring click");
                }
            }
        }
    }

    /// Run until a color is picked or input closes
    pub fn run(
        &mut self,
        screen: &mut dyn Screen,
        pointer: &mut dyn PointerEvents,
        view: &mut dyn TooltipView,
        clipboard: &mut dyn Clipboard,
    ) -> Option<Color> {
        let interval = Duration::from_millis(self.config.poll_interval_ms);
        tracing::debug!("Color picker started, polling every {:?}", interval);

        let picked = loop {
            match self.tick(screen, pointer, view, clipboard) {
                TickOutcome::Continue => thread::sleep(interval),
                TickOutcome::Picked(color) => break Some(color),
                TickOutcome::Closed => break None,
            }
        };

        view.hide();
        picked
    }
}
