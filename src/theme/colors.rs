//! Colors - Order Desk Theme Colors
//!
//! Semantic color tokens. Components reference these names, never raw
//! hex values, so the palette can change without touching layout code.

use gpui::{rgb, Rgba};

/// Order Desk color palette - All colors are accessed via associated functions
pub struct DeskColors;

impl DeskColors {
    // Primary colors
    /// Brand color - Fluent blue, used for the header band and accents
    pub fn brand() -> Rgba { rgb(0x0f6cbd) }
    /// Brand hover shade
    pub fn brand_hover() -> Rgba { rgb(0x115ea3) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Navigation pane background
    pub fn nav_bg() -> Rgba { rgb(0xfafafa) }
    /// Navigation list band background
    pub fn nav_list_bg() -> Rgba { rgb(0xebf3fc) }
    /// Notice panel background - dark slate
    pub fn notice_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x242424) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x616161) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Header band text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x107c10) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xd13438) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xd1d1d1) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x0f6cbd) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x0f6cbd) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x616161) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf0f0f0) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xebf3fc) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d1d1) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }

    // Selection colors
    /// Selected navigation row background
    pub fn row_selected_bg() -> Rgba { rgb(0xcfe4fa) }
}
