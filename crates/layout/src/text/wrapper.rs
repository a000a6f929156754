use lectern_style::FontSpec;
use lectern_traits::{FontMetrics, TextMeasurer};

/// One wrapped line of a text item.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout<'a> {
    /// The slice of the source text on this line, including any trailing
    /// spaces consumed by the break but excluding the `\n` that ended it.
    pub text: &'a str,
    /// Advance of the line without its trailing spaces.
    pub width: f32,
    pub metrics: FontMetrics,
}

impl LineLayout<'_> {
    pub fn height(&self) -> f32 {
        self.metrics.line_height()
    }
}

/// Greedy line breaker over `text`, yielding lines no wider than `max_width`.
///
/// Lines break at spaces; `\n` forces a break; a word wider than the whole
/// line is split between characters. Every line consumes at least one
/// character, so the iterator is finite for any width. Build a new breaker to
/// restart.
pub struct LineBreaker<'t, 'm> {
    text: &'t str,
    measurer: &'m dyn TextMeasurer,
    font: FontSpec,
    metrics: FontMetrics,
    max_width: f32,
    pos: usize,
    done: bool,
}

impl<'t, 'm> LineBreaker<'t, 'm> {
    pub fn new(
        text: &'t str,
        measurer: &'m dyn TextMeasurer,
        font: FontSpec,
        max_width: f32,
    ) -> Self {
        let metrics = measurer.metrics(&font);
        Self {
            text,
            measurer,
            font,
            metrics,
            max_width,
            pos: 0,
            done: false,
        }
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    fn width_of(&self, s: &str) -> f32 {
        self.measurer.advance(s, &self.font)
    }

    /// Number of bytes of `para` that go on the next line.
    fn fit(&self, para: &str) -> usize {
        if para.is_empty() || self.width_of(para) <= self.max_width {
            return para.len();
        }

        let mut best = None;
        for (i, ch) in para.char_indices() {
            if ch != ' ' || para[..i].trim_start_matches(' ').is_empty() {
                continue;
            }
            if self.width_of(&para[..i]) <= self.max_width {
                best = Some(i + 1);
            } else {
                break;
            }
        }
        if let Some(end) = best {
            // The break swallows the whole space run so the next line starts
            // on a word.
            let run = para[end..].len() - para[end..].trim_start_matches(' ').len();
            return end + run;
        }

        // No break opportunity fits: split the leading word by characters.
        let mut end = 0;
        for (i, ch) in para.char_indices() {
            let next = i + ch.len_utf8();
            if end > 0 && self.width_of(&para[..next]) > self.max_width {
                break;
            }
            end = next;
        }
        end
    }
}

impl<'t> Iterator for LineBreaker<'t, '_> {
    type Item = LineLayout<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let text: &'t str = self.text;
        let rest = &text[self.pos..];
        let para_end = rest.find('\n').unwrap_or(rest.len());
        let para = &rest[..para_end];
        let take = self.fit(para);
        let line = &para[..take];

        if take < para.len() {
            self.pos += take;
        } else if para_end < rest.len() {
            self.pos += take + 1;
        } else {
            self.pos += take;
            self.done = true;
        }

        let visible = line.trim_end_matches(' ');
        let measured = if visible.is_empty() { line } else { visible };
        Some(LineLayout {
            text: line,
            width: self.width_of(measured),
            metrics: self.metrics,
        })
    }
}
