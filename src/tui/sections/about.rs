//! About section: portrait card, biography and quick facts.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use std::time::Duration;

use crate::models::SectionId;
use crate::services::Transition;

use super::{SectionContext, SectionView};

const PORTRAIT_WIDTH: u16 = 24;
const COLUMN_GAP: u16 = 4;

fn portrait_transition() -> Transition {
    Transition::ITEM.delayed(Duration::from_millis(200))
}

fn text_transition() -> Transition {
    Transition::ITEM.delayed(Duration::from_millis(400))
}

/// Framed monogram standing in for the profile photo.
fn portrait(ctx: &SectionContext<'_>, opacity: f32) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let profile = &ctx.portfolio.profile;
    let initials: String = profile
        .name
        .split_whitespace()
        .filter(|part| part.chars().next().is_some_and(char::is_uppercase))
        .filter_map(|part| part.chars().next())
        .collect();

    let inner = usize::from(PORTRAIT_WIDTH - 2);
    let frame = ctx.fg(theme.accent, opacity);
    let mut lines = vec![Line::from(Span::styled(format!("╭{}╮", "─".repeat(inner)), frame))];
    for row in 0..7 {
        let content = if row == 3 {
            format!("{initials:^inner$}")
        } else {
            " ".repeat(inner)
        };
        lines.push(Line::from(vec![
            Span::styled("│", frame),
            Span::styled(
                content,
                ctx.fg(theme.primary, opacity).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", frame),
        ]));
    }
    lines.push(Line::from(Span::styled(format!("╰{}╯", "─".repeat(inner)), frame)));
    lines
}

fn biography(ctx: &SectionContext<'_>, width: u16, opacity: f32) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let profile = &ctx.portfolio.profile;
    let width = usize::from(width);
    let mut lines = vec![
        Line::from(Span::styled(
            profile.about_heading.clone(),
            ctx.fg(theme.text, opacity).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for paragraph in &profile.about {
        lines.extend(
            super::wrap(paragraph, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, ctx.fg(theme.text_secondary, opacity)))),
        );
        lines.push(Line::default());
    }

    // Facts in two columns when they fit
    let column = width / 2;
    let fact_cells: Vec<Vec<Span<'static>>> = profile
        .facts
        .iter()
        .map(|fact| {
            vec![
                Span::styled(
                    format!("{}: ", fact.label),
                    ctx.fg(theme.text, opacity).add_modifier(Modifier::BOLD),
                ),
                Span::styled(fact.value.clone(), ctx.fg(theme.text_secondary, opacity)),
            ]
        })
        .collect();
    let fits_two = fact_cells
        .iter()
        .all(|cell| cell.iter().map(Span::width).sum::<usize>() < column);

    if fits_two {
        for pair in fact_cells.chunks(2) {
            let mut spans = pair[0].clone();
            if let Some(right) = pair.get(1) {
                let used: usize = spans.iter().map(Span::width).sum();
                spans.push(Span::raw(" ".repeat(column - used)));
                spans.extend(right.iter().cloned());
            }
            lines.push(Line::from(spans));
        }
    } else {
        lines.extend(fact_cells.into_iter().map(Line::from));
    }
    lines
}

/// Builds the about lines.
#[must_use]
pub fn build(ctx: &SectionContext<'_>) -> SectionView {
    let mut view = SectionView::default();
    view.blank();
    view.extend(ctx.heading(SectionId::About.heading()));
    view.blank();

    let portrait_opacity = ctx.opacity(&portrait_transition());
    let text_opacity = ctx.opacity(&text_transition());
    let content_width = ctx.content_width();

    if ctx.is_wide() {
        let text_width = content_width.saturating_sub(PORTRAIT_WIDTH + COLUMN_GAP);
        let columns = super::side_by_side(
            portrait(ctx, portrait_opacity),
            PORTRAIT_WIDTH,
            biography(ctx, text_width, text_opacity),
            COLUMN_GAP,
        );
        view.extend(columns.into_iter().map(|line| ctx.indent(line)));
    } else {
        let pad = content_width.saturating_sub(PORTRAIT_WIDTH) / 2;
        view.extend(portrait(ctx, portrait_opacity).into_iter().map(|line| {
            let mut line = ctx.indent(line);
            line.spans.insert(0, Span::raw(" ".repeat(usize::from(pad))));
            line
        }));
        view.blank();
        view.extend(
            biography(ctx, content_width, text_opacity)
                .into_iter()
                .map(|line| ctx.indent(line)),
        );
    }

    view.blank();
    view.blank();
    view
}
