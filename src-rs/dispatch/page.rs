use std::sync::RwLock;

/// A named text cell the dispatcher reads from or renders into.
#[derive(Debug)]
pub struct Field {
    name: &'static str,
    text: RwLock<String>,
}

impl Field {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            text: RwLock::new(String::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> String {
        match self.text.read() {
            Ok(text) => text.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_text(&self, value: impl Into<String>) {
        let value = value.into();
        match self.text.write() {
            Ok(mut text) => *text = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    pub fn push_line(&self, line: &str) {
        match self.text.write() {
            Ok(mut text) => append_line(&mut text, line),
            Err(poisoned) => append_line(&mut poisoned.into_inner(), line),
        }
    }
}

fn append_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push('\n');
}

/// The hosting environment: one input field and two output fields.
#[derive(Debug)]
pub struct Page {
    pub src: Field,
    pub out: Field,
    pub log: Field,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            src: Field::new("src"),
            out: Field::new("out"),
            log: Field::new("log"),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        match name {
            "src" => Some(&self.src),
            "out" => Some(&self.out),
            "log" => Some(&self.log),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_start_empty_and_are_addressable() {
        let page = Page::new();
        assert_eq!(page.src.text(), "");
        assert_eq!(page.field("out").map(Field::name), Some("out"));
        assert!(page.field("listing").is_none());
    }

    #[test]
    fn push_line_keeps_every_line() {
        let field = Field::new("src");
        field.push_line("");
        field.push_line("mov r1, 1");
        field.push_line("");
        field.push_line("halt");
        assert_eq!(field.text(), "\nmov r1, 1\n\nhalt\n");
        field.set_text("");
        assert_eq!(field.text(), "");
    }
}
