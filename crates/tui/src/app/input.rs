use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => Ok(false),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.show_help {
            if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.sign_in_modal.is_visible() {
            if self.sign_in_modal.handle_key(&key) {
                return Ok(false);
            }
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start_sign_in(),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('s') => self.sign_in_modal.set_show_sign_in_modal(true),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }

        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.sign_in_modal.is_visible()
        {
            return Ok(false);
        }

        // Help covers the modal; clicks go nowhere until it is closed.
        if self.show_help {
            return Ok(false);
        }

        if self.sign_in_modal.button_contains(mouse.column, mouse.row) {
            self.start_sign_in();
        } else if !self.sign_in_modal.popup_contains(mouse.column, mouse.row) {
            self.sign_in_modal.set_show_sign_in_modal(false);
        }

        Ok(false)
    }
}
