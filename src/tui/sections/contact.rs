//! Contact section and page footer.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::models::SectionId;
use crate::services::Transition;

use super::{SectionContext, SectionView};

const LABEL_COLUMN: usize = 10;

/// Builds the contact lines.
#[must_use]
pub fn build(ctx: &SectionContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let profile = &ctx.portfolio.profile;
    let mut view = SectionView::default();
    view.blank();
    view.extend(ctx.heading(SectionId::Contact.heading()));
    view.blank();

    let intro = ctx.opacity(&Transition::ITEM);
    view.push(ctx.subheading("Contact Information", intro));
    view.extend(ctx.paragraph(&profile.contact_blurb, theme.text_secondary, intro));
    view.blank();

    let details = ctx.opacity(&Transition::ITEM.staggered(1));
    for entry in &profile.contacts {
        let value_style = if entry.href.is_some() {
            ctx.fg(theme.primary, details).add_modifier(Modifier::UNDERLINED)
        } else {
            ctx.fg(theme.text_secondary, details)
        };
        view.push(ctx.indent(Line::from(vec![
            Span::styled(
                format!("{:<LABEL_COLUMN$}", entry.label),
                ctx.fg(theme.text, details).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.value.clone(), value_style),
        ])));
    }
    view.blank();

    let social = ctx.opacity(&Transition::ITEM.staggered(2));
    view.push(ctx.subheading("Connect With Me", social));
    for link in &profile.links {
        let (target, style) = if link.placeholder {
            (
                "(not available yet)".to_string(),
                ctx.fg(theme.text_muted, social).add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                link.href.clone(),
                ctx.fg(theme.primary, social).add_modifier(Modifier::UNDERLINED),
            )
        };
        let label_width = LABEL_COLUMN.max(link.label.len() + 1);
        view.push(ctx.indent(Line::from(vec![
            Span::styled(
                format!("{:<label_width$}", link.label),
                ctx.fg(theme.text, social).add_modifier(Modifier::BOLD),
            ),
            Span::styled(target, style),
        ])));
    }
    view.blank();
    view.blank();

    let footer = ctx.fg(theme.text_muted, ctx.opacity(&Transition::ITEM.staggered(3)));
    view.push(
        ctx.center(Line::from(Span::styled(
            "─".repeat(usize::from(ctx.content_width())),
            ctx.fg(theme.border, ctx.opacity(&Transition::ITEM)),
        )))
        .0,
    );
    view.push(
        ctx.center(Line::from(Span::styled(
            format!("© {}. All rights reserved.", profile.name),
            footer,
        )))
        .0,
    );
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

    #[test]
    fn test_contact_details_and_inert_cv() {
        let portfolio = Portfolio::embedded().unwrap();
        let theme = Theme::dark();
        let filter = ProjectFilter::new(&portfolio.projects);
        let ctx = settled(&portfolio, &theme, &filter, 100);
        let lines: Vec<String> = build(&ctx).lines.iter().map(text).collect();

        assert!(lines.iter().any(|l| l.contains("vmvangils@gmail.com")));
        assert!(lines.iter().any(|l| l.contains("+31 615410923")));
        assert!(lines.iter().any(|l| l.contains("https://github.com/vmvangils")));
        let cv = lines.iter().find(|l| l.contains("Download CV")).unwrap();
        assert!(cv.contains("not available yet"));
        assert!(!cv.contains('#'));
    }
}
