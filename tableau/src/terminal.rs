use std::{cell::RefCell, collections::HashMap};

pub type StyleId = u8;

/// Applies styles to the standard output. Without a terminal (or with colors disabled) styles
/// are ignored.
pub struct Stylus {
    styles: HashMap<StyleId, Style>,
    term: RefCell<Option<Box<term::StdoutTerminal>>>,
}

impl Stylus {
    pub fn new(color: bool) -> Self {
        Self {
            styles: HashMap::new(),
            term: RefCell::new(if color { term::stdout() } else { None }),
        }
    }

    pub fn insert_style(&mut self, id: StyleId, style: Style) {
        self.styles.insert(id, style);
    }

    pub fn set(&self, id: StyleId) {
        if let Some(style) = self.styles.get(&id) {
            self.set_style(style);
        }
    }

    pub fn set_style(&self, style: &Style) {
        self.clear();
        if let Some(term) = self.term.borrow_mut().as_mut() {
            if let Some(color) = style.color {
                let _ = term.fg(color);
            }
            if let Some(attr) = style.attr {
                let _ = term.attr(attr);
            }
        }
    }

    pub fn clear(&self) {
        if let Some(term) = self.term.borrow_mut().as_mut() {
            let _ = term.reset();
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Clone, Default)]
pub struct Style {
    color: Option<term::color::Color>,
    attr: Option<term::Attr>,
}

impl Style {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn foreground(self, color: term::color::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn attribute(self, attr: term::Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}
