//! Color palette
//!
//! Named colors for the Pikachu-inspired look of the original archive:
//! yellow cards, red accents, black borders.

use ratatui::style::Color;

pub const PIKACHU_YELLOW: Color = Color::Yellow;
pub const POKEBALL_RED: Color = Color::Red;
pub const ARCHIVE_TEXT: Color = Color::White;
pub const MUTED: Color = Color::DarkGray;
pub const CARD_INACTIVE: Color = Color::Gray;
