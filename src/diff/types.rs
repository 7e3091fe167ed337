//! Marked version strings produced by the highlighter

/// Which side of an upgrade a highlighted segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// Part of the installed version that goes away
    Removed,
    /// Part of the available version that comes in
    Added,
}

/// A slice of a version string, optionally marked as changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub change: Option<Change>,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, change: None }
    }

    pub fn changed(text: &'a str, change: Change) -> Self {
        Self {
            text,
            change: Some(change),
        }
    }
}

/// A version string split into plain and changed segments
///
/// Concatenating the segment texts always yields the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedVersion<'a> {
    source: &'a str,
    region_start: usize,
    segments: Vec<Segment<'a>>,
}

impl<'a> MarkedVersion<'a> {
    pub(crate) fn new(source: &'a str, region_start: usize, segments: Vec<Segment<'a>>) -> Self {
        Self {
            source,
            region_start,
            segments,
        }
    }

    /// The version string this marking was computed for
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset where the highlighted region begins
    pub fn region_start(&self) -> usize {
        self.region_start
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The common prefix shown without highlighting
    pub fn unchanged(&self) -> &'a str {
        &self.source[..self.region_start]
    }

    /// Everything from the region start to the end, separators included
    pub fn highlighted(&self) -> &'a str {
        &self.source[self.region_start..]
    }

    /// Render the segments, passing each changed segment through `style`
    ///
    /// Plain segments are emitted verbatim. Changed segments are emitted even
    /// when empty so a renderer can still mark the position.
    pub fn render<F>(&self, style: F) -> String
    where
        F: Fn(&str, Change) -> String,
    {
        self.segments
            .iter()
            .map(|segment| match segment.change {
                Some(change) => style(segment.text, change),
                None => segment.text.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarkedVersion<'static> {
        MarkedVersion::new(
            "1.2.3-4",
            4,
            vec![
                Segment::plain("1.2."),
                Segment::changed("3", Change::Removed),
                Segment::plain("-"),
                Segment::changed("4", Change::Removed),
            ],
        )
    }

    #[test]
    fn unchanged_and_highlighted_split_at_region_start() {
        let marked = sample();
        assert_eq!(marked.unchanged(), "1.2.");
        assert_eq!(marked.highlighted(), "3-4");
    }

    #[test]
    fn render_styles_only_changed_segments() {
        let rendered = sample().render(|text, _| format!("[{text}]"));
        assert_eq!(rendered, "1.2.[3]-[4]");
    }

    #[test]
    fn render_keeps_empty_changed_segments() {
        let marked = MarkedVersion::new(
            "1.0",
            3,
            vec![Segment::plain("1.0"), Segment::changed("", Change::Added)],
        );
        assert_eq!(marked.render(|text, _| format!("<{text}>")), "1.0<>");
    }
}
