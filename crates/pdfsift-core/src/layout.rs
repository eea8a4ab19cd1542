/// Layout analysis parameters forwarded verbatim to the content extractor.
///
/// pdfsift does no layout analysis of its own; these knobs control how the
/// extractor groups characters into the text fragments it hands back.
/// Defaults match the conventional values used by layout analysers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    /// Two characters whose vertical overlap exceeds this fraction of the
    /// smaller height are on the same line.
    pub line_overlap: f64,
    /// Maximum gap between characters of one line, relative to char width.
    pub char_margin: f64,
    /// Maximum gap between lines of one text box, relative to line height.
    pub line_margin: f64,
    /// Gap (relative to char width) above which a space is inserted.
    pub word_margin: f64,
    /// Weight of horizontal versus vertical position when ordering text boxes.
    /// `None` disables box ordering.
    pub boxes_flow: Option<f64>,
    /// Whether vertical text should be detected.
    pub detect_vertical: bool,
    /// Include text found inside figures.
    pub all_texts: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_overlap: 0.5,
            char_margin: 2.0,
            line_margin: 0.5,
            word_margin: 0.1,
            boxes_flow: Some(0.5),
            detect_vertical: false,
            all_texts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_params_default() {
        let params = LayoutParams::default();
        assert_eq!(params.line_overlap, 0.5);
        assert_eq!(params.char_margin, 2.0);
        assert_eq!(params.line_margin, 0.5);
        assert_eq!(params.word_margin, 0.1);
        assert_eq!(params.boxes_flow, Some(0.5));
        assert!(!params.detect_vertical);
        assert!(!params.all_texts);
    }
}
