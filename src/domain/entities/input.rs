/// The text field the user types into before pressing send
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when there is nothing worth sending
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
