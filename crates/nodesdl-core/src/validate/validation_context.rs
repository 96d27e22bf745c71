use std::fmt::Display;

/// Message attribution threaded through recursive validation: a caller
/// specific prefix and suffix, and the path of the value being validated
/// (`address.zip`, `tags[2]`).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationContext {
    path: String,
    prefix: String,
    suffix: String,
}
impl ValidationContext {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            path: String::new(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The context for the property `name` of the current value.
    pub fn field(&self, name: &str) -> Self {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        };
        Self {
            path,
            ..self.clone()
        }
    }

    /// The context for element `index` of the current (list) value.
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{index}]", self.path),
            ..self.clone()
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Renders `{prefix}{body}{suffix}.`
    pub fn message(&self, body: impl Display) -> String {
        format!("{}{body}{}.", self.prefix, self.suffix)
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_str()
    }
}
