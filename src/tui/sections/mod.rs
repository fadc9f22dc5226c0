//! Line builders for the page sections.
//!
//! Each section turns the static content into pre-wrapped lines for a given
//! width. Heights therefore only depend on the width (and the project
//! filter), never on animation state, so the page layout stays stable while
//! sections fade in.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::Duration;

use crate::models::{Portfolio, SectionId};
use crate::services::{ProjectFilter, Transition};

use super::Theme;

/// Widest the text column gets on large terminals
pub const MAX_CONTENT_WIDTH: u16 = 88;

/// A clickable range on one row of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Row inside the section
    pub row: u16,
    /// First column
    pub col: u16,
    /// Number of columns
    pub width: u16,
    /// Section to scroll to
    pub target: SectionId,
}

impl PageLink {
    /// Whether the link covers `col`.
    #[must_use]
    pub const fn hit(&self, col: u16) -> bool {
        col >= self.col && col < self.col + self.width
    }
}

/// Rendered lines of one section plus its clickable ranges.
#[derive(Debug, Clone, Default)]
pub struct SectionView {
    /// Lines, top to bottom
    pub lines: Vec<Line<'static>>,
    /// Clickable ranges
    pub links: Vec<PageLink>,
}

impl SectionView {
    /// Height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    fn next_row(&self) -> u16 {
        self.height()
    }
}

/// Everything a section needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Page content
    pub portfolio: &'a Portfolio,
    /// Active palette
    pub theme: &'a Theme,
    /// Active project filter
    pub filter: &'a ProjectFilter,
    /// Full terminal width
    pub width: u16,
    /// Rows available to the page
    pub viewport_height: u16,
    /// Time since this section was revealed, `None` while hidden
    pub revealed_for: Option<Duration>,
    /// Time since the application started (whole-page fade, looping effects)
    pub clock: Duration,
    /// Skip every transition
    pub reduced_motion: bool,
}

impl SectionContext<'_> {
    /// Width of the centered text column.
    #[must_use]
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH)
    }

    /// Left margin of the text column.
    #[must_use]
    pub fn margin(&self) -> u16 {
        self.width.saturating_sub(self.content_width()) / 2
    }

    /// Whether the terminal is wide enough for side-by-side layouts.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.width >= crate::constants::MOBILE_BREAKPOINT_COLS
    }

    /// Opacity of an element using `transition`, including the page fade.
    #[must_use]
    pub fn opacity(&self, transition: &Transition) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        let page = Transition::PAGE.progress(self.clock);
        let own = self
            .revealed_for
            .map_or(0.0, |elapsed| transition.progress(elapsed));
        page * own
    }

    /// Raw progress of `transition` (for bar fills), ignoring the page fade.
    #[must_use]
    pub fn progress(&self, transition: &Transition) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        self.revealed_for
            .map_or(0.0, |elapsed| transition.progress(elapsed))
    }

    /// Foreground style faded by `opacity`.
    #[must_use]
    pub fn fg(&self, color: Color, opacity: f32) -> Style {
        Style::default().fg(self.theme.fade(color, opacity))
    }

    /// Indents a line into the text column.
    #[must_use]
    pub fn indent(&self, line: Line<'static>) -> Line<'static> {
        indent(line, self.margin())
    }

    /// Centers a line across the full width. Returns the line and its left padding.
    #[must_use]
    pub fn center(&self, line: Line<'static>) -> (Line<'static>, u16) {
        let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        let pad = self.width.saturating_sub(line_width) / 2;
        (indent(line, pad), pad)
    }

    /// Standard section heading: centered title and accent underline.
    #[must_use]
    pub fn heading(&self, title: &str) -> Vec<Line<'static>> {
        let opacity = self.opacity(&Transition::ITEM);
        let title = Line::from(Span::styled(
            title.to_string(),
            self.fg(self.theme.text, opacity)
                .add_modifier(Modifier::BOLD),
        ));
        let bar = Line::from(Span::styled(
            "━━━━━━━━━━".to_string(),
            self.fg(self.theme.accent, opacity),
        ));
        vec![self.center(title).0, self.center(bar).0]
    }

    /// Subheading inside the text column.
    #[must_use]
    pub fn subheading(&self, title: &str, opacity: f32) -> Line<'static> {
        self.indent(Line::from(Span::styled(
            title.to_string(),
            self.fg(self.theme.text, opacity)
                .add_modifier(Modifier::BOLD),
        )))
    }

    /// Wrapped paragraph inside the text column.
    #[must_use]
    pub fn paragraph(&self, text: &str, color: Color, opacity: f32) -> Vec<Line<'static>> {
        wrap(text, usize::from(self.content_width()))
            .into_iter()
            .map(|row| self.indent(Line::from(Span::styled(row, self.fg(color, opacity)))))
            .collect()
    }
}

/// Builds the lines of `section`.
#[must_use]
pub fn build(section: SectionId, ctx: &SectionContext<'_>) -> SectionView {
    match section {
        SectionId::Home => hero::build(ctx),
        SectionId::About => about::build(ctx),
        SectionId::Skills => skills::build(ctx),
        SectionId::Projects => projects::build(ctx),
        SectionId::Contact => contact::build(ctx),
    }
}

/// Greedy word wrap. Words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let extra = if current_len == 0 { word.len() } else { word.len() + 1 };
        if current_len + extra > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Places chips (`[ label ]`-style spans) on as many rows as needed.
///
/// Returns the rows and, for each chip, its (row, column, width) inside the
/// returned block.
#[must_use]
pub fn flow(chips: Vec<Span<'static>>, width: u16, gap: u16) -> (Vec<Line<'static>>, Vec<(u16, u16, u16)>) {
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut positions = Vec::with_capacity(chips.len());
    let mut col: u16 = 0;

    for chip in chips {
        let chip_width = u16::try_from(chip.width()).unwrap_or(u16::MAX);
        if col > 0 && col + gap + chip_width > width {
            rows.push(Vec::new());
            col = 0;
        }
        if col > 0 {
            if let Some(row) = rows.last_mut() {
                row.push(Span::raw(" ".repeat(usize::from(gap))));
            }
            col += gap;
        }
        let row_index = u16::try_from(rows.len() - 1).unwrap_or(u16::MAX);
        positions.push((row_index, col, chip_width));
        col = col.saturating_add(chip_width);
        if let Some(row) = rows.last_mut() {
            row.push(chip);
        }
    }

    (rows.into_iter().map(Line::from).collect(), positions)
}

/// Puts two blocks of lines next to each other.
#[must_use]
pub fn side_by_side(
    left: Vec<Line<'static>>,
    left_width: u16,
    right: Vec<Line<'static>>,
    gap: u16,
) -> Vec<Line<'static>> {
    let height = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..height)
        .map(|_| {
            let mut spans = left.next().map(|l| l.spans).unwrap_or_default();
            let used: usize = spans.iter().map(Span::width).sum();
            let pad = usize::from(left_width + gap).saturating_sub(used);
            spans.push(Span::raw(" ".repeat(pad)));
            if let Some(r) = right.next() {
                spans.extend(r.spans);
            }
            Line::from(spans)
        })
        .collect()
}

fn indent(mut line: Line<'static>, by: u16) -> Line<'static> {
    if by > 0 {
        line.spans.insert(0, Span::raw(" ".repeat(usize::from(by))));
    }
    line
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Context with every transition finished.
    pub fn settled<'a>(
        portfolio: &'a Portfolio,
        theme: &'a Theme,
        filter: &'a ProjectFilter,
        width: u16,
    ) -> SectionContext<'a> {
        SectionContext {
            portfolio,
            theme,
            filter,
            width,
            viewport_height: 24,
            revealed_for: Some(Duration::from_secs(60)),
            clock: Duration::from_secs(60),
            reduced_motion: false,
        }
    }

    /// Plain text of a line.
    pub fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }
}
