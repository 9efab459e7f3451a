//! Named accent swatches offered in the settings panel

/// A named accent swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Swatches in display order
pub const NAMED_COLORS: &[NamedColor] = &[
    NamedColor { name: "RED", hex: "#FF0000" },
    NamedColor { name: "GREEN", hex: "#00FF00" },
    NamedColor { name: "BLUE", hex: "#0000FF" },
    NamedColor { name: "MAGENTA", hex: "#FF00FF" },
    NamedColor { name: "YELLOW", hex: "#FFFF00" },
    NamedColor { name: "CYAN", hex: "#00FFFF" },
    NamedColor { name: "BLACK", hex: "#000000" },
    NamedColor { name: "WHITE", hex: "#FFFFFF" },
    NamedColor { name: "CLEAR", hex: "#00000000" },
    NamedColor { name: "GRAY", hex: "#808080" },
    NamedColor { name: "LIGHT_GRAY", hex: "#D3D3D3" },
    NamedColor { name: "DARK_GRAY", hex: "#404040" },
    NamedColor { name: "SILVER", hex: "#C0C0C0" },
    NamedColor { name: "CHARCOAL", hex: "#36454F" },
    NamedColor { name: "BEIGE", hex: "#F5F5DC" },
    NamedColor { name: "ORANGE", hex: "#FFA500" },
    NamedColor { name: "GOLD", hex: "#FFD700" },
    NamedColor { name: "CORAL", hex: "#FF7F50" },
    NamedColor { name: "CRIMSON", hex: "#DC143C" },
    NamedColor { name: "MAROON", hex: "#800000" },
    NamedColor { name: "TOMATO", hex: "#FF6347" },
    NamedColor { name: "SALMON", hex: "#FA8072" },
    NamedColor { name: "BROWN", hex: "#A52A2A" },
    NamedColor { name: "NAVY", hex: "#000080" },
    NamedColor { name: "SKY_BLUE", hex: "#87CEEB" },
    NamedColor { name: "STEEL_BLUE", hex: "#4682B4" },
    NamedColor { name: "TEAL", hex: "#008080" },
    NamedColor { name: "TURQUOISE", hex: "#40E0D0" },
    NamedColor { name: "FOREST_GREEN", hex: "#228B22" },
    NamedColor { name: "LIME", hex: "#32CD32" },
    NamedColor { name: "MINT", hex: "#98FF98" },
    NamedColor { name: "OLIVE", hex: "#808000" },
    NamedColor { name: "PURPLE", hex: "#800080" },
    NamedColor { name: "VIOLET", hex: "#EE82EE" },
    NamedColor { name: "INDIGO", hex: "#4B0082" },
    NamedColor { name: "SLATE_BLUE", hex: "#6A5ACD" },
    NamedColor { name: "LAVENDER", hex: "#E6E6FA" },
    NamedColor { name: "PINK", hex: "#FFC0CB" },
    NamedColor { name: "HOT_PINK", hex: "#FF69B4" },
];

/// Look up a swatch by name, ignoring case
pub fn named_color(name: &str) -> Option<&'static NamedColor> {
    NAMED_COLORS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Find the swatch matching a hex value, ignoring case
pub fn swatch_for(hex: &str) -> Option<&'static NamedColor> {
    NAMED_COLORS
        .iter()
        .find(|c| c.hex.eq_ignore_ascii_case(hex))
}
