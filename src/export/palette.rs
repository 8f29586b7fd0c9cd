// src/export/palette.rs

/// Fixed display palette; author `n` gets entry `n % PALETTE.len()`.
pub const PALETTE: [&str; 20] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
    "#808000", "#ffd8b1", "#000075", "#808080",
];

pub fn color_for(ordinal: usize) -> &'static str {
    PALETTE[ordinal % PALETTE.len()]
}
