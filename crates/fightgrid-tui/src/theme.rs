use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Row and column anchor names
    pub anchor: Color,
    /// Correct answer
    pub correct: Color,
    /// Incorrect answer
    pub incorrect: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Input line text
    pub input: Color,
    /// Info panel text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            anchor: Color::Rgb { r: 255, g: 255, b: 255 },
            correct: Color::Rgb { r: 90, g: 255, b: 130 },
            incorrect: Color::Rgb { r: 255, g: 90, b: 90 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            input: Color::Rgb { r: 80, g: 180, b: 255 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            anchor: Color::Rgb { r: 0, g: 0, b: 0 },
            correct: Color::Rgb { r: 40, g: 160, b: 60 },
            incorrect: Color::Rgb { r: 220, g: 50, b: 50 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            input: Color::Rgb { r: 30, g: 100, b: 200 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            anchor: Color::Yellow,
            correct: Color::Green,
            incorrect: Color::Red,
            selected_bg: Color::Blue,
            input: Color::Cyan,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Theme by its CLI/config name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "high-contrast" | "high_contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}
