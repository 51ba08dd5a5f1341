use super::panel::{ButtonContent, PanelView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const PANEL_WIDTH: u16 = 52;

const LOGO: [&str; 2] = ["▗▟▙▖", "▝▜▛▘"];
const LOGO_HEIGHT: u16 = 2;
const DESCRIPTION_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

/// Outer height of the modal needed to show `view`, borders included.
pub fn panel_height(view: &PanelView) -> u16 {
    let banner = if view.error_banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };
    // logo, home link, heading, description, spacer, banner, button, modal borders
    LOGO_HEIGHT + 1 + 1 + DESCRIPTION_HEIGHT + 1 + banner + BUTTON_HEIGHT + 2
}

pub fn loading_dots(frame: usize) -> Line<'static> {
    let active = frame % 3;
    let spans = (0..3)
        .map(|i| {
            let style = if i == active {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled("● ", style)
        })
        .collect::<Vec<_>>();
    Line::from(spans).centered()
}

/// Draws the panel into `area` and returns the button rect.
pub fn render_panel(frame: &mut Frame, area: Rect, view: &PanelView, dots_frame: usize) -> Rect {
    let banner = if view.error_banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(banner),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let logo = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::White))).centered())
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(logo), rows[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.home_url.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        )))
        .centered(),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.heading,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .centered(),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(view.description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .centered(),
        rows[3],
    );

    if let Some(ref message) = view.error_banner {
        frame.render_widget(
            Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" alert "),
                ),
            rows[5],
        );
    }

    let (border_style, text_style) = if view.button.disabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::White),
        )
    };

    let label = match &view.button.content {
        ButtonContent::Loading => loading_dots(dots_frame),
        ButtonContent::Label { icon, text } => Line::from(vec![
            Span::styled(
                format!("[{icon}]"),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(text.clone(), text_style),
        ])
        .centered(),
    };

    frame.render_widget(
        Paragraph::new(label).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        ),
        rows[6],
    );

    rows[6]
}
