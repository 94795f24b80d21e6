use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use formask_core::FormState;

#[derive(Debug, Clone)]
pub struct App {
    pub form: FormState,
    pub focus: usize,
    pub status: Option<String>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            focus: 0,
            status: None,
            error: None,
            should_quit: false,
        }
    }

    fn field_count(&self) -> usize {
        self.form.len()
    }

    // Focus cycles through the fields, then [Submit], then [Reset].
    pub fn focus_next(&mut self) {
        let total = self.field_count() + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = self.field_count() + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_submit_focus(&self) -> bool {
        self.focus == self.field_count()
    }

    pub fn is_reset_focus(&self) -> bool {
        self.focus == self.field_count() + 1
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => {
                if self.is_submit_focus() {
                    self.submit();
                } else if self.is_reset_focus() {
                    self.reset();
                } else {
                    self.focus_next();
                }
            }
            _ => {
                let index = self.focus;
                if index < self.field_count() {
                    self.edit_field(index, key);
                }
            }
        }
    }

    fn edit_field(&mut self, index: usize, key: KeyEvent) {
        let current = match self.form.field(index) {
            Ok(field) => field.value.clone(),
            Err(_) => return,
        };

        let raw = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => String::new(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut raw = current;
                raw.push(ch);
                raw
            }
            KeyCode::Backspace => {
                let mut raw = current;
                raw.pop();
                raw
            }
            _ => return,
        };

        match self.form.apply_input(index, &raw) {
            Ok(()) => {
                self.status = None;
                self.error = None;
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    fn submit(&mut self) {
        let summary: Vec<String> = self
            .form
            .fields()
            .iter()
            .map(|field| {
                let value = if field.value.is_empty() {
                    "(empty)"
                } else {
                    field.value.as_str()
                };
                format!("{}: {}", field.spec.label, value)
            })
            .collect();
        self.status = Some(format!("Submitted  {}", summary.join("  ")));
        self.error = None;
    }

    fn reset(&mut self) {
        self.form.reset();
        self.focus = 0;
        self.status = Some("Form cleared".to_string());
        self.error = None;
    }
}
