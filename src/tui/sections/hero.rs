//! Landing section: greeting, name, role, tagline and call-to-actions.
//!
//! Fills at least one viewport so the rest of the page starts below the fold.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use std::time::Duration;

use crate::models::SectionId;
use crate::services::Transition;

use super::{PageLink, SectionContext, SectionView};

const PRIMARY_CTA: &str = " View Projects ";
const SECONDARY_CTA: &str = "[ Contact Me ]";
const CTA_GAP: &str = "   ";

/// Period of the scroll hint bounce
const BOUNCE_PERIOD: Duration = Duration::from_millis(1500);

fn child(index: u64) -> Transition {
    Transition::ITEM.delayed(Duration::from_millis(200 * index))
}

/// Builds the hero lines.
#[must_use]
pub fn build(ctx: &SectionContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let profile = &ctx.portfolio.profile;
    let container = ctx.opacity(&Transition::HERO);
    let at = |index| container * ctx.opacity(&child(index));

    let mut body = SectionView::default();
    let mut links = Vec::new();

    let greeting = at(1);
    body.push(
        ctx.center(Line::from(Span::styled(
            profile.greeting.clone(),
            ctx.fg(theme.text_secondary, greeting),
        )))
        .0,
    );
    body.blank();

    let name = at(2);
    body.push(
        ctx.center(Line::from(vec![
            Span::styled(
                profile.first_name.clone(),
                ctx.fg(theme.primary, name).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                profile.last_name().to_string(),
                ctx.fg(theme.text, name).add_modifier(Modifier::BOLD),
            ),
        ]))
        .0,
    );

    let role = at(3);
    body.push(
        ctx.center(Line::from(Span::styled(
            profile.role.clone(),
            ctx.fg(theme.accent, role).add_modifier(Modifier::ITALIC),
        )))
        .0,
    );
    body.blank();

    let tagline = at(4);
    for row in super::wrap(&profile.tagline, usize::from(ctx.content_width().min(64))) {
        body.push(
            ctx.center(Line::from(Span::styled(
                row,
                ctx.fg(theme.text_secondary, tagline),
            )))
            .0,
        );
    }
    body.blank();

    let buttons = at(5);
    let primary = Span::styled(
        PRIMARY_CTA,
        ctx.fg(theme.background, buttons)
            .bg(theme.fade(theme.accent, buttons))
            .add_modifier(Modifier::BOLD),
    );
    let secondary = Span::styled(SECONDARY_CTA, ctx.fg(theme.primary, buttons));
    let (cta_line, pad) = ctx.center(Line::from(vec![primary, Span::raw(CTA_GAP), secondary]));
    let cta_row = body.next_row();
    let primary_width = width_of(PRIMARY_CTA);
    links.push(PageLink {
        row: cta_row,
        col: pad,
        width: primary_width,
        target: SectionId::Projects,
    });
    links.push(PageLink {
        row: cta_row,
        col: pad + primary_width + width_of(CTA_GAP),
        width: width_of(SECONDARY_CTA),
        target: SectionId::Contact,
    });
    body.push(cta_line);
    body.blank();

    // Scroll hint bobs between two rows
    let hint = at(5);
    let arrow = Line::from(Span::styled("↓", ctx.fg(theme.text_muted, hint)));
    let bounce_down = !ctx.reduced_motion
        && (ctx.clock.as_millis() % BOUNCE_PERIOD.as_millis()) >= BOUNCE_PERIOD.as_millis() / 2;
    let (arrow, arrow_pad) = ctx.center(arrow);
    let arrow_row = body.next_row() + u16::from(bounce_down);
    if bounce_down {
        body.blank();
        body.push(arrow);
    } else {
        body.push(arrow);
        body.blank();
    }
    links.push(PageLink {
        row: arrow_row,
        col: arrow_pad,
        width: 1,
        target: SectionId::About,
    });

    // Center vertically inside one viewport
    let content_height = body.height();
    let total = ctx.viewport_height.max(content_height + 2);
    let top = (total - content_height) / 2;

    let mut view = SectionView::default();
    for _ in 0..top {
        view.blank();
    }
    view.extend(body.lines);
    while view.height() < total {
        view.blank();
    }
    view.links = links
        .into_iter()
        .map(|link| PageLink {
            row: link.row + top,
            ..link
        })
        .collect();
    view
}

fn width_of(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{settled, text};
    use super::*;
    use crate::models::Portfolio;
    use crate::services::ProjectFilter;
    use crate::tui::Theme;

    #[test]
    fn test_hero_fills_viewport() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let filter = ProjectFilter::new(&portfolio.projects);
        let mut ctx = settled(&portfolio, &theme, &filter, 100);
        ctx.viewport_height = 40;
        assert_eq!(build(&ctx).height(), 40);
    }

    #[test]
    fn test_hero_links_point_at_buttons() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let filter = ProjectFilter::new(&portfolio.projects);
        let ctx = settled(&portfolio, &theme, &filter, 100);
        let view = build(&ctx);

        let projects = view
            .links
            .iter()
            .find(|l| l.target == SectionId::Projects)
            .unwrap();
        let row = text(&view.lines[usize::from(projects.row)]);
        let label: String = row
            .chars()
            .skip(usize::from(projects.col))
            .take(usize::from(projects.width))
            .collect();
        assert_eq!(label, PRIMARY_CTA);

        let contact = view
            .links
            .iter()
            .find(|l| l.target == SectionId::Contact)
            .unwrap();
        let label: String = row
            .chars()
            .skip(usize::from(contact.col))
            .take(usize::from(contact.width))
            .collect();
        assert_eq!(label, SECONDARY_CTA);
    }

    #[test]
    fn test_hero_shows_name() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::light();
        let filter = ProjectFilter::new(&portfolio.projects);
        let ctx = settled(&portfolio, &theme, &filter, 80);
        let view = build(&ctx);
        assert!(view.lines.iter().any(|l| text(l).contains("Vasco van Gils")));
    }
}
