//! Section positions on the scrolling page and jump targets.

use crate::models::SectionId;

use super::reveal::Span;

/// Row ranges of every section, measured for the current terminal width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    sections: Vec<(SectionId, Span)>,
    viewport_height: u16,
}

impl PageLayout {
    /// Stacks sections of the given heights, in order, starting at row 0.
    #[must_use]
    pub fn stack(heights: &[(SectionId, u16)], viewport_height: u16) -> Self {
        let mut start: u16 = 0;
        let sections = heights
            .iter()
            .map(|&(id, height)| {
                let span = Span::new(start, height);
                start = start.saturating_add(height);
                (id, span)
            })
            .collect();
        Self {
            sections,
            viewport_height,
        }
    }

    /// Total page height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.sections.last().map_or(0, |(_, span)| span.end())
    }

    /// Rows visible at once.
    #[must_use]
    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest offset that still fills the viewport.
    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.height().saturating_sub(self.viewport_height)
    }

    /// Clamps an offset into the scrollable range.
    #[must_use]
    pub fn clamp(&self, offset: u16) -> u16 {
        offset.min(self.max_offset())
    }

    /// Row span of `section`.
    #[must_use]
    pub fn span(&self, section: SectionId) -> Option<Span> {
        self.sections
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, span)| *span)
    }

    /// Sections with their spans, in page order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Span)> + '_ {
        self.sections.iter().copied()
    }

    /// Offset that brings `section` to the top of the viewport.
    #[must_use]
    pub fn offset_of(&self, section: SectionId) -> Option<u16> {
        self.span(section).map(|span| self.clamp(span.start))
    }

    /// Jump target for an anchor id such as `projects`.
    ///
    /// Unknown anchors, and sections not on the page, return `None` and the
    /// caller leaves the scroll position alone.
    #[must_use]
    pub fn scroll_to_section(&self, anchor: &str) -> Option<u16> {
        let target = SectionId::from_anchor(anchor).and_then(|id| self.offset_of(id));
        if target.is_none() {
            tracing::debug!(anchor, "no section to scroll to");
        }
        target
    }

    /// Section occupying the top row of the viewport at `offset`.
    ///
    /// At the bottom of the page the last section wins, so short trailing
    /// sections can still become active.
    #[must_use]
    pub fn active_section(&self, offset: u16) -> Option<SectionId> {
        if offset >= self.max_offset() && self.max_offset() > 0 {
            return self.sections.last().map(|(id, _)| *id);
        }
        self.sections
            .iter()
            .rev()
            .find(|(_, span)| span.start <= offset)
            .map(|(id, _)| *id)
    }

    /// The viewport span at `offset`.
    #[must_use]
    pub const fn viewport(&self, offset: u16) -> Span {
        Span::new(offset, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::stack(
            &[
                (SectionId::Home, 30),
                (SectionId::About, 25),
                (SectionId::Skills, 40),
                (SectionId::Projects, 35),
                (SectionId::Contact, 20),
            ],
            24,
        )
    }

    #[test]
    fn test_stack_assigns_consecutive_spans() {
        let layout = layout();
        assert_eq!(layout.span(SectionId::Home), Some(Span::new(0, 30)));
        assert_eq!(layout.span(SectionId::About), Some(Span::new(30, 25)));
        assert_eq!(layout.span(SectionId::Contact), Some(Span::new(130, 20)));
        assert_eq!(layout.height(), 150);
        assert_eq!(layout.max_offset(), 126);
    }

    #[test]
    fn test_scroll_to_known_section() {
        let layout = layout();
        assert_eq!(layout.scroll_to_section("projects"), Some(95));
        assert_eq!(layout.scroll_to_section("home"), Some(0));
        // Contact starts below the last full viewport
        assert_eq!(layout.scroll_to_section("contact"), Some(126));
    }

    #[test]
    fn test_scroll_to_unknown_section_is_none() {
        let layout = layout();
        assert_eq!(layout.scroll_to_section("blog"), None);
        assert_eq!(layout.scroll_to_section(""), None);
        assert_eq!(PageLayout::default().scroll_to_section("about"), None);
    }

    #[test]
    fn test_active_section() {
        let layout = layout();
        assert_eq!(layout.active_section(0), Some(SectionId::Home));
        assert_eq!(layout.active_section(29), Some(SectionId::Home));
        assert_eq!(layout.active_section(30), Some(SectionId::About));
        assert_eq!(layout.active_section(100), Some(SectionId::Projects));
        assert_eq!(layout.active_section(126), Some(SectionId::Contact));
    }

    #[test]
    fn test_short_page_never_scrolls() {
        let layout = PageLayout::stack(&[(SectionId::Home, 10)], 24);
        assert_eq!(layout.max_offset(), 0);
        assert_eq!(layout.clamp(50), 0);
        assert_eq!(layout.active_section(0), Some(SectionId::Home));
    }
}
