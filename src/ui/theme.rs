use crossterm::style::Color;

/// Design tokens for the treeselect UI.
///
/// All icons and colors must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
}

pub mod icons {
    // Check states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    // Node icons.
    pub const BRANCH: &str = "▤";
    pub const LEAF: &str = "▪";

    // Selection marker.
    pub const SELECTED: &str = "»";

    // Connector lines.
    pub const LINE_PIPE: &str = "│  ";
    pub const LINE_TEE: &str = "├─ ";
    pub const LINE_ELBOW: &str = "└─ ";

    pub const SEPARATOR: &str = "─";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const EXPAND: &str = "v";
    pub const COLLAPSE: &str = ">";

    pub const BRANCH: &str = "+";
    pub const LEAF: &str = "-";

    pub const SELECTED: &str = "*";

    pub const LINE_PIPE: &str = "|  ";
    pub const LINE_TEE: &str = "|- ";
    pub const LINE_ELBOW: &str = "`- ";

    pub const SEPARATOR: &str = "-";
    pub const ELLIPSIS: &str = "...";
}

/// The glyph set used for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub partial: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub branch: &'static str,
    pub leaf: &'static str,
    pub selected: &'static str,
    pub line_pipe: &'static str,
    pub line_tee: &'static str,
    pub line_elbow: &'static str,
    pub separator: &'static str,
    pub ellipsis: &'static str,
}

impl Glyphs {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    pub fn unicode() -> Self {
        Self {
            checked: icons::CHECKED,
            unchecked: icons::UNCHECKED,
            partial: icons::PARTIAL,
            expand: icons::EXPAND,
            collapse: icons::COLLAPSE,
            branch: icons::BRANCH,
            leaf: icons::LEAF,
            selected: icons::SELECTED,
            line_pipe: icons::LINE_PIPE,
            line_tee: icons::LINE_TEE,
            line_elbow: icons::LINE_ELBOW,
            separator: icons::SEPARATOR,
            ellipsis: icons::ELLIPSIS,
        }
    }

    pub fn ascii() -> Self {
        Self {
            checked: icons_ascii::CHECKED,
            unchecked: icons_ascii::UNCHECKED,
            partial: icons_ascii::PARTIAL,
            expand: icons_ascii::EXPAND,
            collapse: icons_ascii::COLLAPSE,
            branch: icons_ascii::BRANCH,
            leaf: icons_ascii::LEAF,
            selected: icons_ascii::SELECTED,
            line_pipe: icons_ascii::LINE_PIPE,
            line_tee: icons_ascii::LINE_TEE,
            line_elbow: icons_ascii::LINE_ELBOW,
            separator: icons_ascii::SEPARATOR,
            ellipsis: icons_ascii::ELLIPSIS,
        }
    }
}
