//! Mindhaven branding
//!
//! Branding constants shared by every screen.

/// Application name
pub const APP_NAME: &str = "Mindhaven";

/// Home screen title
pub const HOME_TITLE: &str = "Mindfulness";

/// Application tagline
pub const APP_TAGLINE: &str = "A quiet moment, whenever you need one";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Brand colors
pub mod colors {
    /// Primary accent (mint)
    pub const PRIMARY: &str = "#00C7BE";

    /// Inactive indicator and hint text
    pub const MUTED: &str = "#8E8E93";

    /// Card surface
    pub const SURFACE: &str = "#FFFFFF";
}
