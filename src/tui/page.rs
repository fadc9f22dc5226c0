//! The scrolling page: measuring sections and drawing the visible slice.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::models::{Portfolio, SectionId};
use crate::services::{PageLayout, ProjectFilter};

use super::sections::{self, SectionContext, SectionView};
use super::{AppState, Theme};

/// Measures every section for `width` and stacks them into a layout.
///
/// Heights do not depend on animation state, so the result only changes with
/// the terminal size or the project filter.
#[must_use]
pub fn measure(
    portfolio: &Portfolio,
    theme: &Theme,
    filter: &ProjectFilter,
    width: u16,
    viewport_height: u16,
) -> PageLayout {
    let heights: Vec<(SectionId, u16)> = SectionId::ALL
        .iter()
        .map(|&section| {
            let ctx = SectionContext {
                portfolio,
                theme,
                filter,
                width,
                viewport_height,
                revealed_for: None,
                clock: Duration::ZERO,
                reduced_motion: true,
            };
            (section, sections::build(section, &ctx).height())
        })
        .collect();
    let layout = PageLayout::stack(&heights, viewport_height);
    tracing::debug!(width, viewport_height, height = layout.height(), "page measured");
    layout
}

/// Builds `section` as it looks right now.
fn build_section(state: &AppState, theme: &Theme, section: SectionId) -> SectionView {
    let ctx = SectionContext {
        portfolio: &state.portfolio,
        theme,
        filter: &state.filter,
        width: state.page_area.width,
        viewport_height: state.page_area.height,
        revealed_for: state
            .reveals
            .get(section)
            .and_then(|reveal| reveal.elapsed(state.clock)),
        clock: state.clock,
        reduced_motion: state.config.ui.reduced_motion,
    };
    sections::build(section, &ctx)
}

/// Draws the rows of the page currently inside the viewport.
pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let viewport = state.layout.viewport(state.offset);
    let mut rows: Vec<Line<'static>> = Vec::with_capacity(usize::from(area.height));
    for (section, span) in state.layout.sections() {
        if span.end() <= viewport.start || span.start >= viewport.end() {
            continue;
        }
        let view = build_section(state, theme, section);
        let skip = viewport.start.saturating_sub(span.start);
        let take = viewport.end().min(span.end()) - span.start.max(viewport.start);
        rows.extend(
            view.lines
                .into_iter()
                .skip(usize::from(skip))
                .take(usize::from(take)),
        );
    }

    f.render_widget(
        Paragraph::new(rows).style(Style::default().bg(theme.background)),
        area,
    );
}

/// Section a click on a page link at screen position `(col, row)` leads to.
#[must_use]
pub fn link_at(state: &AppState, theme: &Theme, col: u16, row: u16) -> Option<SectionId> {
    let area = state.page_area;
    if row < area.y || row >= area.bottom() {
        return None;
    }
    let page_row = state.offset + (row - area.y);
    let (section, span) = state
        .layout
        .sections()
        .find(|(_, span)| span.contains(page_row))?;
    let local_row = page_row - span.start;
    build_section(state, theme, section)
        .links
        .into_iter()
        .find(|link| link.row == local_row && link.hit(col))
        .map(|link| link.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_stacks_all_sections() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let filter = ProjectFilter::new(&portfolio.projects);
        let layout = measure(&portfolio, &theme, &filter, 100, 30);

        let order: Vec<SectionId> = layout.sections().map(|(id, _)| id).collect();
        assert_eq!(order, SectionId::ALL.to_vec());
        assert_eq!(layout.offset_of(SectionId::Home), Some(0));
        assert!(layout.span(SectionId::Home).unwrap().height >= 30);
        assert!(layout.max_offset() > 0);
    }

    #[test]
    fn test_filter_shrinks_projects() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let mut filter = ProjectFilter::new(&portfolio.projects);
        let all = measure(&portfolio, &theme, &filter, 100, 30);
        filter.select(Some("SQL"));
        let filtered = measure(&portfolio, &theme, &filter, 100, 30);

        assert!(
            filtered.span(SectionId::Projects).unwrap().height
                < all.span(SectionId::Projects).unwrap().height
        );
        assert_eq!(
            filtered.span(SectionId::About),
            all.span(SectionId::About)
        );
    }
}
