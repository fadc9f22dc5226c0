//! Projects section: tag filter chips and project cards.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::models::{Project, SectionId};
use crate::services::Transition;

use super::{SectionContext, SectionView};

/// Label of the chip that clears the filter
pub const ALL_CHIP: &str = "All";

fn chip_row(ctx: &SectionContext<'_>, opacity: f32) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let active = ctx.filter.active_tag();
    let chip = |label: &str, selected: bool| {
        let style = if selected {
            ctx.fg(theme.accent, opacity)
                .bg(theme.fade(theme.highlight_bg, opacity))
                .add_modifier(Modifier::BOLD)
        } else {
            ctx.fg(theme.text_secondary, opacity)
        };
        Span::styled(format!(" {label} "), style)
    };

    let mut chips = vec![chip(ALL_CHIP, active.is_none())];
    chips.extend(
        ctx.filter
            .tags()
            .iter()
            .map(|tag| chip(tag, active == Some(tag.as_str()))),
    );
    let (rows, _) = super::flow(chips, ctx.content_width(), 1);
    rows
}

fn card(ctx: &SectionContext<'_>, project: &Project, opacity: f32) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let width = ctx.content_width();
    let inner = usize::from(width.saturating_sub(4));
    let border = ctx.fg(theme.border, opacity);
    let edge = |content: Vec<Span<'static>>| {
        let used: usize = content.iter().map(Span::width).sum();
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(content);
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(usize::from(width.saturating_sub(2)))),
        border,
    ))];
    lines.push(edge(vec![Span::styled(
        project.title.clone(),
        ctx.fg(theme.primary, opacity).add_modifier(Modifier::BOLD),
    )]));
    for row in super::wrap(&project.description, inner) {
        lines.push(edge(vec![Span::styled(
            row,
            ctx.fg(theme.text_secondary, opacity),
        )]));
    }
    lines.push(edge(Vec::new()));

    let tags: Vec<Span<'static>> = project
        .tags
        .iter()
        .map(|tag| {
            let highlighted = ctx.filter.active_tag() == Some(tag.as_str());
            let color = if highlighted { theme.accent } else { theme.text_muted };
            Span::styled(format!("#{tag}"), ctx.fg(color, opacity))
        })
        .collect();
    let (tag_rows, _) = super::flow(tags, u16::try_from(inner).unwrap_or(u16::MAX), 1);
    lines.extend(tag_rows.into_iter().map(|row| edge(row.spans)));

    let mut links = Vec::new();
    if let Some(live) = &project.live_url {
        links.push(("Live Demo", live.clone()));
    }
    links.push(("View Code", project.source_url.clone()));
    for (label, url) in links {
        let label_text = format!("{label}: ");
        let url_width = inner.saturating_sub(label_text.len());
        let url = if url.chars().count() > url_width {
            let kept: String = url.chars().take(url_width.saturating_sub(1)).collect();
            format!("{kept}…")
        } else {
            url
        };
        lines.push(edge(vec![
            Span::styled(label_text, ctx.fg(theme.text, opacity)),
            Span::styled(
                url,
                ctx.fg(theme.primary, opacity).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(usize::from(width.saturating_sub(2)))),
        border,
    )));
    lines
}

/// Builds the projects lines.
#[must_use]
pub fn build(ctx: &SectionContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let mut view = SectionView::default();
    view.blank();
    view.extend(ctx.heading(SectionId::Projects.heading()));
    view.blank();

    let item = ctx.opacity(&Transition::ITEM);
    view.extend(chip_row(ctx, item).into_iter().map(|row| ctx.indent(row)));
    view.blank();

    let projects = ctx.filter.apply(&ctx.portfolio.projects);
    if projects.is_empty() {
        view.push(ctx.indent(Line::from(Span::styled(
            "No projects match this tag.",
            ctx.fg(theme.text_muted, item),
        ))));
    }
    for (index, project) in projects.into_iter().enumerate() {
        let opacity = ctx.opacity(&Transition::ITEM.staggered(index + 1));
        view.extend(
            card(ctx, project, opacity)
                .into_iter()
                .map(|row| ctx.indent(row)),
        );
        view.blank();
    }
    view.blank();
    view
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{settled, text};
    use super::*;
    use crate::models::Portfolio;
    use crate::services::ProjectFilter;
    use crate::tui::Theme;

    fn lines_for(filter_tag: Option<&str>) -> Vec<String> {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let mut filter = ProjectFilter::new(&portfolio.projects);
        filter.select(filter_tag);
        let ctx = settled(&portfolio, &theme, &filter, 100);
        build(&ctx).lines.iter().map(text).collect()
    }

    #[test]
    fn test_all_projects_rendered_without_filter() {
        let lines = lines_for(None);
        for title in ["WPM Typetest", "Random Word Generator API", "Fastodo", "Biblequest"] {
            assert!(lines.iter().any(|l| l.contains(title)), "{title}");
        }
    }

    #[test]
    fn test_filter_hides_other_projects() {
        let lines = lines_for(Some("SQL"));
        assert!(lines.iter().any(|l| l.contains("WPM Typetest")));
        assert!(!lines.iter().any(|l| l.contains("Fastodo")));
    }

    #[test]
    fn test_cards_show_links() {
        let lines = lines_for(Some("HTML"));
        assert!(lines.iter().any(|l| l.contains("Live Demo: https://biblequest-one.vercel.app/")));
        assert!(lines.iter().any(|l| l.contains("View Code: https://github.com/vmvangils/Biblequest")));
    }

    #[test]
    fn test_cards_have_even_width() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let filter = ProjectFilter::new(&portfolio.projects);
        let ctx = settled(&portfolio, &theme, &filter, 70);
        let view = build(&ctx);
        let widths: Vec<usize> = view
            .lines
            .iter()
            .filter(|l| text(l).trim_start().starts_with('│'))
            .map(Line::width)
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
