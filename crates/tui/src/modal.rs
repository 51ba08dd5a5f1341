use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear};
use ratatui::Frame;

/// Generic popup overlay. Knows how to draw itself over whatever is below
/// and how to be dismissed; the content is up to the caller.
pub struct Modal;

impl Modal {
    /// Centered rect of a fixed size, shrunk to fit small terminals.
    pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Draws the overlay and hands the inner area to `body`. Returns the
    /// outer popup rect so the host can hit-test clicks against it.
    pub fn render<F>(frame: &mut Frame, area: Rect, width: u16, height: u16, body: F) -> Rect
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let popup = Self::popup_area(area, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .title_bottom(" Esc to close ");
        let inner = block.inner(popup);

        frame.render_widget(Clear, popup);
        frame.render_widget(block, popup);
        body(frame, inner);
        popup
    }

    /// Esc dismisses. Returns true when the key was consumed.
    pub fn handle_key(key: &KeyEvent, set_show: impl FnOnce(bool)) -> bool {
        if key.code == KeyCode::Esc {
            set_show(false);
            return true;
        }
        false
    }

    pub fn contains(popup: Rect, column: u16, row: u16) -> bool {
        popup.contains(Position::new(column, row))
    }
}
