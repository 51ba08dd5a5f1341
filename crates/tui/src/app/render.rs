use super::*;

const HELP_WIDTH: u16 = 56;
const HELP_HEIGHT: u16 = 22;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Body => self.render_body(frame, panel.rect),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect),
            }
        }

        self.sign_in_modal.render(frame, area);

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Paragraph};

        let text = format!(
            " ● Precedent   {}   [?] help",
            if self.sign_in_modal.is_visible() {
                "[Esc] close"
            } else {
                "[s] sign in"
            }
        );
        frame.render_widget(Paragraph::new(text).block(Block::default()), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let text = format!(
            "\n\n  Precedent\n\n  An opinionated collection of components, hooks, and utilities.\n\n  Press [s] to sign in with {}.\n",
            self.config.auth.provider.display_name()
        );
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" precedent ")),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::style::{Color, Style};
        use ratatui::widgets::Paragraph;

        let pending = self
            .sign_in_modal
            .panel()
            .is_some_and(|panel| panel.is_pending());
        let text = if pending {
            format!(
                " Waiting for {} in your browser...",
                self.config.auth.provider.display_name()
            )
        } else {
            format!(" Auth: {}", self.config.auth.base_url)
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};
        let help_text = self.keybinds.help_text();
        let popup_area = Modal::popup_area(area, HELP_WIDTH, HELP_HEIGHT);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }
}
