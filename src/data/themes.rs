//! Theme palettes
//!
//! Colors are `#rrggbb` strings; renderers translate them as they see fit.

use crate::session::ThemeId;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub prompt: &'static str,
    pub accent: &'static str,
}

const fn palette(background: &'static str, text: &'static str, prompt: &'static str, accent: &'static str) -> Palette {
    Palette {
        background,
        text,
        prompt,
        accent,
    }
}

/// Palette for a theme
pub fn palette_for(theme: ThemeId) -> Palette {
    match theme {
        ThemeId::Matrix => palette("#000000", "#4ade80", "#facc15", "#166534"),
        ThemeId::Solarized => palette("#002b36", "#839496", "#b58900", "#268bd2"),
        ThemeId::Dracula => palette("#282a36", "#f8f8f2", "#ff79c6", "#bd93f9"),
        ThemeId::Hacker => palette("#0a0a0a", "#00ff00", "#00ff00", "#003300"),
        ThemeId::Cyberpunk => palette("#0d0221", "#f706cf", "#2de2e6", "#fd1d53"),
        ThemeId::Monokai => palette("#272822", "#f8f8f2", "#a6e22e", "#f92672"),
        ThemeId::Nord => palette("#2e3440", "#d8dee9", "#88c0d0", "#5e81ac"),
        ThemeId::TerminalClassic => palette("#000000", "#c0c0c0", "#ffffff", "#808080"),
        ThemeId::Whiteout => palette("#ffffff", "#111111", "#2563eb", "#e5e7eb"),
        ThemeId::Abyss => palette("#000c18", "#6688cc", "#ddbb88", "#225588"),
        ThemeId::Ocean => palette("#0b1d33", "#7dd3fc", "#38bdf8", "#0369a1"),
        ThemeId::Forest => palette("#0f1f0f", "#a3d9a5", "#d9f99d", "#166534"),
        ThemeId::Sunset => palette("#2d1b2e", "#fdba74", "#f472b6", "#c2410c"),
        ThemeId::Neon => palette("#0a0014", "#39ff14", "#ff00ff", "#00ffff"),
        ThemeId::Pastel => palette("#fdf2f8", "#6b21a8", "#db2777", "#fbcfe8"),
        ThemeId::Midnight => palette("#0f172a", "#cbd5e1", "#818cf8", "#1e293b"),
        ThemeId::Retro => palette("#1c1300", "#ffb000", "#ffcc00", "#805500"),
        ThemeId::Arctic => palette("#eef6fb", "#0c4a6e", "#0284c7", "#bae6fd"),
        ThemeId::Lava => palette("#1a0500", "#ff6b35", "#ffd23f", "#b91c1c"),
        ThemeId::Twilight => palette("#1e1b2e", "#c4b5fd", "#f0abfc", "#4c1d95"),
    }
}
