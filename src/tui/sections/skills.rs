//! Skills section: animated level bars, technology chips, approach list.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::models::SectionId;
use crate::services::Transition;

use super::{SectionContext, SectionView};

const NAME_COLUMN: usize = 14;
const PERCENT_COLUMN: usize = 5;

/// Filled cells of a bar `width` cells wide at `level` percent and `progress`.
#[must_use]
pub fn filled_cells(level: u8, progress: f32, width: u16) -> u16 {
    let fraction = f32::from(level.min(100)) / 100.0 * progress.clamp(0.0, 1.0);
    (fraction * f32::from(width)).round() as u16
}

/// Builds the skills lines.
#[must_use]
pub fn build(ctx: &SectionContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let portfolio = ctx.portfolio;
    let mut view = SectionView::default();
    view.blank();
    view.extend(ctx.heading(SectionId::Skills.heading()));
    view.blank();

    let item = ctx.opacity(&Transition::ITEM);
    view.push(ctx.subheading("Technical Skills", item));
    view.blank();

    let bar_width = ctx
        .content_width()
        .saturating_sub(u16::try_from(NAME_COLUMN + PERCENT_COLUMN + 2).unwrap_or(0))
        .max(4);
    for (index, skill) in portfolio.skills.iter().enumerate() {
        let opacity = ctx.opacity(&Transition::ITEM.staggered(index));
        let fill = ctx.progress(&Transition::SKILL_BAR.staggered(index));
        let filled = filled_cells(skill.level, fill, bar_width);
        let bar_color = skill.color.to_ratatui_color();

        view.push(ctx.indent(Line::from(vec![
            Span::styled(
                format!("{:<NAME_COLUMN$}", skill.name),
                ctx.fg(theme.text, opacity),
            ),
            Span::raw(" "),
            Span::styled(
                "█".repeat(usize::from(filled)),
                ctx.fg(bar_color, opacity),
            ),
            Span::styled(
                "░".repeat(usize::from(bar_width - filled)),
                ctx.fg(theme.border, opacity),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>4}%", skill.level),
                ctx.fg(theme.text_muted, opacity),
            ),
        ])));
    }
    view.blank();

    view.push(ctx.subheading("Other Technologies", item));
    view.blank();
    let chips = portfolio
        .technologies
        .iter()
        .map(|tech| {
            Span::styled(
                format!(" {tech} "),
                ctx.fg(theme.text, item).bg(theme.fade(theme.surface, item)),
            )
        })
        .collect();
    let (rows, _) = super::flow(chips, ctx.content_width(), 1);
    view.extend(rows.into_iter().map(|row| ctx.indent(row)));
    view.blank();

    view.push(ctx.subheading("My Approach", item));
    view.blank();
    for point in &portfolio.profile.approach {
        let width = usize::from(ctx.content_width().saturating_sub(2));
        for (i, row) in super::wrap(point, width).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            view.push(ctx.indent(Line::from(vec![
                Span::styled(bullet, ctx.fg(theme.accent, item)),
                Span::styled(row, ctx.fg(theme.text_secondary, item)),
            ])));
        }
    }
    view.blank();

    view.push(ctx.indent(Line::from(vec![
        Span::styled("Press ", ctx.fg(theme.text_muted, item)),
        Span::styled(
            "v",
            ctx.fg(theme.accent, item).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " to explore the skills visualization",
            ctx.fg(theme.text_muted, item),
        ),
    ])));
    view.blank();
    view.blank();
    view
}
