//! The theming contract: the named style variables the component forwards to
//! its rendered nodes.
//!
//! This table is pure pass-through configuration — the engine never reads
//! these values; hosts expose them for downstream styling and substitute
//! their own defaults. Names and defaults follow the component's documented
//! theming surface.

/// One themable style variable and its default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyleVariable {
    pub name: &'static str,
    pub default: &'static str,
}

/// The full theming surface, forwarded unmodified to the rendered nodes.
pub const STYLE_VARIABLES: &[StyleVariable] = &[
    // Transitions
    StyleVariable { name: "--fade-in-transition-duration", default: "150ms" },
    StyleVariable { name: "--fade-out-transition-duration", default: "800ms" },
    StyleVariable { name: "--fade-out-transition-delay", default: "300ms" },
    StyleVariable { name: "--fill-color-transition-duration", default: "150ms" },
    // Viewport scroll policies
    StyleVariable { name: "--viewport-overflow-x", default: "auto" },
    StyleVariable { name: "--viewport-overflow-y", default: "auto" },
    StyleVariable { name: "--viewport-scroll-snap-type", default: "none" },
    StyleVariable { name: "--viewport-scroll-behavior", default: "auto" },
    StyleVariable { name: "--viewport-overscroll-behavior", default: "auto" },
    // Scrollbar geometry and fills
    StyleVariable { name: "--scrollbar-width", default: "16px" },
    StyleVariable { name: "--scrollbar-padding", default: "2px" },
    StyleVariable { name: "--scrollbar-fill-color", default: "transparent" },
    StyleVariable { name: "--scrollbar-fill-color-hover", default: "transparent" },
    StyleVariable { name: "--scrollbar-border-width", default: "0" },
    StyleVariable { name: "--scrollbar-border-style", default: "none" },
    StyleVariable { name: "--scrollbar-border-color", default: "#999" },
    StyleVariable { name: "--scrollbar-border-radius", default: "0" },
    StyleVariable { name: "--scrollbar-box-shadow", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-background", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-background-size", default: "auto" },
    StyleVariable { name: "--horizontal-scrollbar-background", default: "none" },
    StyleVariable { name: "--horizontal-scrollbar-background-size", default: "auto" },
    // Track
    StyleVariable { name: "--scrollbar-track-fill-color", default: "transparent" },
    StyleVariable { name: "--scrollbar-track-fill-color-hover", default: "transparent" },
    StyleVariable { name: "--scrollbar-track-border-width", default: "0" },
    StyleVariable { name: "--scrollbar-track-border-style", default: "none" },
    StyleVariable { name: "--scrollbar-track-border-color", default: "#999" },
    StyleVariable { name: "--scrollbar-track-border-radius", default: "0" },
    StyleVariable { name: "--scrollbar-track-box-shadow", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-track-background", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-track-background-size", default: "auto" },
    StyleVariable { name: "--horizontal-scrollbar-track-background", default: "none" },
    StyleVariable { name: "--horizontal-scrollbar-track-background-size", default: "auto" },
    // Thumb
    StyleVariable { name: "--scrollbar-thumb-fill-color", default: "#ccc" },
    StyleVariable { name: "--scrollbar-thumb-fill-color-hover", default: "#aaa" },
    StyleVariable { name: "--scrollbar-thumb-border-width", default: "0" },
    StyleVariable { name: "--scrollbar-thumb-border-style", default: "none" },
    StyleVariable { name: "--scrollbar-thumb-border-color", default: "#999" },
    StyleVariable { name: "--scrollbar-thumb-border-radius", default: "var(--scrollbar-width)" },
    StyleVariable { name: "--scrollbar-thumb-box-shadow", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-thumb-background", default: "none" },
    StyleVariable { name: "--vertical-scrollbar-thumb-background-size", default: "auto" },
    StyleVariable { name: "--horizontal-scrollbar-thumb-background", default: "none" },
    StyleVariable { name: "--horizontal-scrollbar-thumb-background-size", default: "auto" },
    // Content
    StyleVariable { name: "--content-padding", default: "0" },
];

/// Looks up the default value of a style variable by name.
pub fn style_variable_default(name: &str) -> Option<&'static str> {
    STYLE_VARIABLES
        .iter()
        .find(|v| v.name == name)
        .map(|v| v.default)
}
