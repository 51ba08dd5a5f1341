pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Account:
  s             Open sign-in
  Enter / Space Sign in with the configured provider
  Esc           Close sign-in

Mouse:
  Click button  Sign in
  Click outside Close sign-in

General:
  ?             Toggle this help
  q             Quit (when sign-in is closed)
  Ctrl + Q      Quit
"#
        .to_string()
    }
}
