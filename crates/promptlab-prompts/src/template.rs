/// A flat prompt template with `{name}` placeholders.
///
/// Rendering replaces each placeholder with its value, one pair at a time
/// and in the order given, so a value substituted early is itself subject
/// to later replacements. Placeholders with no matching pair are left
/// verbatim; rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut output = self.template.clone();
        for (key, value) in values {
            output = output.replace(&format!("{{{key}}}"), value);
        }
        output
    }
}
