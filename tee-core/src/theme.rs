//! Visual themes and the keyboard shortcut that cycles them.

/// A named set of CSS values for each style role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub font: &'static str,
}

pub const LIGHT: Theme = Theme {
    name: "LIGHT",
    background: "#f3f4f6",
    card: "#ffffff",
    text: "#1f2937",
    accent: "#3b82f6",
    accent_hover: "#2563eb",
    font: "system-ui, -apple-system, sans-serif",
};

pub const DARK: Theme = Theme {
    name: "DARK",
    background: "#111827",
    card: "#1f2937",
    text: "#e5e7eb",
    accent: "#a855f7",
    accent_hover: "#9333ea",
    font: "system-ui, -apple-system, sans-serif",
};

pub const PLAYFUL: Theme = Theme {
    name: "PLAYFUL",
    background: "#fef9c3",
    card: "#ffffff",
    text: "#3730a3",
    accent: "#ec4899",
    accent_hover: "#db2777",
    font: "ui-monospace, SFMono-Regular, Menlo, monospace",
};

/// Themes in cycling order.
pub const THEMES: [Theme; 3] = [LIGHT, DARK, PLAYFUL];

/// Index into [`THEMES`] advanced by the shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeCycler {
    index: usize,
}

impl ThemeCycler {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Theme {
        &THEMES[self.index % THEMES.len()]
    }

    /// Move to the next theme, wrapping after the last one.
    pub fn advance(&mut self) -> &'static Theme {
        self.index = (self.index + 1) % THEMES.len();
        log::info!("theme switched to {}", self.current().name);
        self.current()
    }
}

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CycleTheme,
}

impl Shortcut {
    /// Map a key press to a shortcut. Only Alt+Q is bound.
    pub fn from_key(alt: bool, key: &str) -> Option<Self> {
        (alt && key.eq_ignore_ascii_case("q")).then_some(Shortcut::CycleTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_presses_wrap_to_start() {
        let mut cycler = ThemeCycler::default();
        let mut seen = vec![cycler.index()];
        for _ in 0..3 {
            if let Some(Shortcut::CycleTheme) = Shortcut::from_key(true, "q") {
                cycler.advance();
            }
            seen.push(cycler.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert_eq!(cycler.current().name, "LIGHT");
    }

    #[test]
    fn themes_are_in_order() {
        let names: Vec<&str> = THEMES.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["LIGHT", "DARK", "PLAYFUL"]);
    }

    #[test]
    fn only_alt_q_is_bound() {
        assert_eq!(Shortcut::from_key(true, "Q"), Some(Shortcut::CycleTheme));
        assert_eq!(Shortcut::from_key(false, "q"), None);
        assert_eq!(Shortcut::from_key(true, "w"), None);
        assert_eq!(Shortcut::from_key(true, "Alt"), None);
    }
}
