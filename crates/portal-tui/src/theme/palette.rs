//! Color palette.
//!
//! Named terminal colors only, so the UI follows the user's terminal scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Section backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Clean validation, success
pub const STATUS_RED: Color = Color::Red; // Issues, errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Busy, key hints

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Editor ---
pub const CURSOR_FG: Color = Color::Black;
pub const CURSOR_BG: Color = Color::White;
pub const CODE_FG: Color = Color::LightBlue;
