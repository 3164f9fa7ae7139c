//! Presentation settings
//!
//! The layout engine itself takes no configuration. These options only shape
//! how [`crate::render`] draws a symbol, and can be seeded from `QR_LAYOUT_*`
//! environment variables before CLI flags override them.

use std::env;

/// Largest accepted pixels-per-module factor
pub const MAX_SCALE: u32 = 64;
/// Widest accepted quiet zone, in modules
pub const MAX_QUIET_ZONE: u32 = 16;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Rendering options for debug images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module (1..=64)
    pub scale: u32,
    /// Light border around the symbol, in modules
    pub quiet_zone: u32,
    /// Skip structural modules when painting codeword blocks
    pub exclude_reserved: bool,
}

impl RenderOptions {
    /// Defaults overridden by `QR_LAYOUT_SCALE`, `QR_LAYOUT_QUIET_ZONE` and
    /// `QR_LAYOUT_EXCLUDE_RESERVED`. Unparseable values fall back silently.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scale: parse_env_u32("QR_LAYOUT_SCALE", defaults.scale),
            quiet_zone: parse_env_u32("QR_LAYOUT_QUIET_ZONE", defaults.quiet_zone),
            exclude_reserved: parse_env_bool_u8(
                "QR_LAYOUT_EXCLUDE_RESERVED",
                defaults.exclude_reserved,
            ),
        }
        .normalized()
    }

    /// Clamp `scale` into 1..=64 and `quiet_zone` into 0..=16
    pub fn normalized(self) -> Self {
        Self {
            scale: self.scale.clamp(1, MAX_SCALE),
            quiet_zone: self.quiet_zone.min(MAX_QUIET_ZONE),
            ..self
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            quiet_zone: 0,
            exclude_reserved: false,
        }
    }
}
