//! Text input with "touched" tracking.
//!
//! A field is touched once focus has left it. Inline errors are shown only
//! for touched fields, never on first render.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormField {
    value: String,
    touched: bool,
}

impl FormField {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Required fields must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.touched && !self.is_valid()
    }

    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// Mark the field as left by the user.
    pub fn blur(&mut self) {
        self.touched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_empty_field_shows_no_error() {
        let field = FormField::default();
        assert!(!field.is_valid());
        assert!(!field.has_error());
    }

    #[test]
    fn blurred_empty_field_shows_error() {
        let mut field = FormField::default();
        field.blur();
        assert!(field.has_error());
    }

    #[test]
    fn whitespace_is_not_a_value() {
        let mut field = FormField::with_value("   ");
        field.blur();
        assert!(!field.is_valid());
        assert!(field.has_error());
    }

    #[test]
    fn editing_clears_error() {
        let mut field = FormField::default();
        field.blur();
        field.push('a');
        assert!(field.is_valid());
        assert!(!field.has_error());
        field.pop();
        assert!(field.has_error());
    }
}
