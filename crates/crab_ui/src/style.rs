//! Styling for panels and buttons.
//!
//! A [`StyleBox`] describes how a panel is drawn. Widgets hold up to three of
//! them in a [`StyleSet`] (normal, pressed, hover) and resolve the active one
//! from their [`VisualState`] whenever they render.

use std::sync::Arc;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black. Used as "no color set".
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white. Modulate of an enabled widget.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Dimmed gray (`#848484`). Modulate of a disabled widget.
    pub const DIMMED: Self = Self::rgba(0.5176, 0.5176, 0.5176, 1.0);
    /// Default panel border.
    pub const BORDER: Self = Self::rgba(0.8, 0.8, 0.8, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from a hex value (0xRRGGBBAA).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns true if the color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a panel background and border are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBox {
    /// Fill color.
    pub background: Color,
    /// Border color.
    pub border_color: Color,
    /// Border width on every side.
    pub border_width: u32,
    /// Corner radius on every corner.
    pub corner_radius: u32,
    /// Content margin on every side.
    pub content_margin: f32,
    /// Blend the border into the background.
    pub border_blend: bool,
    /// Fill the center.
    pub draw_center: bool,
}

impl StyleBox {
    /// Border-only box, as used by icon menu panels.
    #[must_use]
    pub fn outline(border_color: Color, border_width: u32, corner_radius: u32) -> Self {
        Self {
            border_color,
            border_width,
            corner_radius,
            draw_center: false,
            ..Self::default()
        }
    }

    /// Returns a copy with a different border color.
    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Default for StyleBox {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.1, 0.1, 0.12, 0.9),
            border_color: Color::BORDER,
            border_width: 0,
            corner_radius: 0,
            content_margin: 8.0,
            border_blend: false,
            draw_center: true,
        }
    }
}

/// Named style slot on a panel or container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// Idle style.
    Normal,
    /// Style while pressed.
    Pressed,
    /// Style while hovered and not pressed.
    Hover,
}

/// Interaction state that selects the active style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Neither hovered nor pressed.
    #[default]
    Normal,
    /// Pointer over the widget, not pressed.
    Hovered,
    /// Pressed. Hover is still tracked but does not affect styling.
    Pressed,
}

/// The three style slots of one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSet {
    /// Idle style.
    pub normal: Option<Arc<StyleBox>>,
    /// Pressed style.
    pub pressed: Option<Arc<StyleBox>>,
    /// Hover style.
    pub hover: Option<Arc<StyleBox>>,
}

impl StyleSet {
    /// Returns the style in `slot`.
    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> Option<&Arc<StyleBox>> {
        match slot {
            StyleSlot::Normal => self.normal.as_ref(),
            StyleSlot::Pressed => self.pressed.as_ref(),
            StyleSlot::Hover => self.hover.as_ref(),
        }
    }

    /// Replaces the style in `slot`.
    pub fn set(&mut self, slot: StyleSlot, style: Option<Arc<StyleBox>>) {
        match slot {
            StyleSlot::Normal => self.normal = style,
            StyleSlot::Pressed => self.pressed = style,
            StyleSlot::Hover => self.hover = style,
        }
    }

    /// Resolves the style to draw for `state`.
    ///
    /// Pressed and hover fall back to normal when their slot is empty.
    #[must_use]
    pub fn resolve(&self, state: VisualState) -> Option<&Arc<StyleBox>> {
        match state {
            VisualState::Pressed => self.pressed.as_ref().or(self.normal.as_ref()),
            VisualState::Hovered => self.hover.as_ref().or(self.normal.as_ref()),
            VisualState::Normal => self.normal.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);

        assert!((Color::DIMMED.r - 0x84 as f32 / 255.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_prefers_pressed_then_hover() {
        let normal = Arc::new(StyleBox::default());
        let pressed = Arc::new(StyleBox::default().with_border_color(Color::WHITE));
        let hover = Arc::new(StyleBox::default().with_border_color(Color::BLACK));

        let styles = StyleSet {
            normal: Some(Arc::clone(&normal)),
            pressed: Some(Arc::clone(&pressed)),
            hover: Some(Arc::clone(&hover)),
        };

        assert!(Arc::ptr_eq(styles.resolve(VisualState::Pressed).unwrap(), &pressed));
        assert!(Arc::ptr_eq(styles.resolve(VisualState::Hovered).unwrap(), &hover));
        assert!(Arc::ptr_eq(styles.resolve(VisualState::Normal).unwrap(), &normal));
    }

    #[test]
    fn test_resolve_falls_back_to_normal() {
        let normal = Arc::new(StyleBox::default());
        let mut styles = StyleSet::default();
        styles.set(StyleSlot::Normal, Some(Arc::clone(&normal)));

        assert!(Arc::ptr_eq(styles.resolve(VisualState::Pressed).unwrap(), &normal));
        assert!(Arc::ptr_eq(styles.resolve(VisualState::Hovered).unwrap(), &normal));

        styles.set(StyleSlot::Normal, None);
        assert!(styles.resolve(VisualState::Pressed).is_none());
    }
}
