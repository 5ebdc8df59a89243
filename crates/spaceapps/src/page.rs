//! Page sections drawn over the background.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use spaceapps_fonts::{banner_width, build_banner};

use crate::content::{self, FAQS, FEATURES, LinkTarget, NAV_LINKS, TEAM};
use crate::faq::FaqState;

const ACCENT: Color = Color::Rgb(96, 165, 250);
const MUTED: Color = Color::Rgb(156, 163, 175);

/// Navigable page sections, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Hero,
    About,
    Faq,
    Team,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::About, Section::Faq, Section::Team];

    pub fn next(self) -> Self {
        match self {
            Section::Hero => Section::About,
            Section::About => Section::Faq,
            Section::Faq => Section::Team,
            Section::Team => Section::Hero,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Section::Hero => Section::Team,
            Section::About => Section::Hero,
            Section::Faq => Section::About,
            Section::Team => Section::Faq,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Faq => "FAQ",
            Section::Team => "Team",
        }
    }
}

/// Render one section into `area`.
pub fn render_section(frame: &mut Frame, area: Rect, section: Section, faq: &FaqState) {
    match section {
        Section::Hero => render_hero(frame, area),
        Section::About => render_about(frame, area),
        Section::Faq => render_faq(frame, area, faq),
        Section::Team => render_team(frame, area),
    }
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let banner_lines = if banner_width(content::BANNER) as u16 <= area.width {
        build_banner(content::BANNER)
    } else {
        Vec::new()
    };

    let [_, banner_area, _, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(banner_lines.len() as u16),
        Constraint::Length(1),
        Constraint::Length(5 + NAV_LINKS.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);

    let banner: Vec<Line> = banner_lines
        .into_iter()
        .map(|line| Line::from(line).style(Style::new().fg(Color::White)))
        .collect();
    frame.render_widget(Paragraph::new(banner).centered(), banner_area);

    let mut text = vec![
        Line::from(content::EVENT_TITLE.bold().white()),
        Line::from(vec![
            "◉ ".red(),
            Span::styled(content::LOCATION, Style::new().bold().white()),
        ]),
        Line::default(),
        Line::from(vec![
            "Powered by ".fg(MUTED),
            content::POWERED_BY.bold().white(),
        ]),
        Line::default(),
    ];
    text.extend(NAV_LINKS.iter().map(|link| {
        let target = match link.target {
            LinkTarget::External(url) | LinkTarget::SitePath(url) => url.fg(ACCENT).underlined(),
            LinkTarget::Team => "press c for the team".fg(ACCENT),
        };
        Line::from(vec![format!("{}: ", link.label).fg(MUTED), target])
    }));
    frame.render_widget(Paragraph::new(text).centered(), text_area);
}

fn render_about(frame: &mut Frame, area: Rect) {
    let [intro_area, cards_area] =
        Layout::vertical([Constraint::Length(10), Constraint::Fill(1)]).areas(area);

    let intro = Text::from(vec![
        Line::from(content::ABOUT_HEADING.bold().white()),
        Line::default(),
        Line::from(content::ABOUT_INTRO.white()),
        Line::default(),
        Line::from(vec!["Register officially on ".fg(MUTED)]),
        Line::from(content::LOCAL_EVENT_URL.fg(ACCENT).underlined()),
        Line::from(vec!["then secure your spot via ".fg(MUTED)]),
        Line::from(content::UNSTOP_URL.fg(ACCENT).underlined()),
    ]);
    frame.render_widget(
        Paragraph::new(intro)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        intro_area.inner(Margin::new(2, 0)),
    );

    let columns = Layout::horizontal(FEATURES.iter().map(|_| Constraint::Length(30)))
        .flex(Flex::Center)
        .spacing(2)
        .split(cards_area);
    for (feature, column) in FEATURES.iter().zip(columns.iter()) {
        let [card] = Layout::vertical([Constraint::Max(6)]).areas(*column);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(MUTED))
            .title(feature.title.bold().white());
        frame.render_widget(
            Paragraph::new(feature.description.white())
                .wrap(Wrap { trim: true })
                .block(block),
            card,
        );
    }
}

fn render_faq(frame: &mut Frame, area: Rect, faq: &FaqState) {
    let mut lines = vec![Line::from("FAQ".bold().white()).centered(), Line::default()];

    for (idx, entry) in FAQS.iter().enumerate() {
        let open = faq.is_open(idx);
        let marker = if open { "−" } else { "+" };
        let question = if idx == faq.selected() {
            Line::from(vec![
                "▶ ".fg(ACCENT),
                entry.question.bold().fg(ACCENT),
                format!("  {marker}").fg(ACCENT),
            ])
        } else {
            Line::from(vec![
                "  ".into(),
                entry.question.bold().white(),
                format!("  {marker}").white(),
            ])
        };
        lines.push(question);
        if open {
            lines.push(Line::from(vec!["    ".into(), entry.answer.fg(MUTED)]));
        }
        lines.push(Line::default());
    }

    let [column] = Layout::horizontal([Constraint::Max(90)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), column);
}

fn render_team(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Our Team".bold().white()).centered(),
        Line::default(),
    ];

    for section in TEAM {
        lines.push(Line::from(section.title.bold().fg(ACCENT)).centered());
        let members: Vec<Span> = section
            .members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| {
                let sep = if i == 0 { "" } else { "    ·    " };
                [
                    Span::from(sep).fg(MUTED),
                    member.name.bold().white(),
                    Span::from(format!(" ({})", member.role)).fg(MUTED),
                ]
            })
            .collect();
        lines.push(Line::from(members).centered());
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle() {
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
        }
        assert_eq!(Section::Team.next(), Section::Hero);
        assert_eq!(Section::Hero.previous(), Section::Team);
    }
}
