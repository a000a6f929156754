/// Proportions used by [`FixedMetrics`](crate::FixedMetrics), all relative to
/// the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal advance of every character.
    ///
    /// Defaults to `0.5`, roughly the average advance of a proportional sans
    /// font.
    pub advance_ratio: f32,
    /// Extra advance factor applied to bold text. Defaults to `1.1`.
    pub bold_factor: f32,
    /// Defaults to `0.8`.
    pub ascent_ratio: f32,
    /// Defaults to `0.2`.
    pub descent_ratio: f32,
    /// Inter-line gap. Defaults to `0.0`.
    pub leading_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            bold_factor: 1.1,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
            leading_ratio: 0.0,
        }
    }
}
