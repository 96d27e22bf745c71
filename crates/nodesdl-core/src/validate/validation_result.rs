use crate::validate::Context;
use thiserror::Error;

/// What every validator returns: the context it ran with and the
/// violations it found, in the order they were found.
#[derive(Clone, Debug)]
pub struct ValidationResult<'s> {
    pub context: Context<'s>,
    pub results: Vec<String>,
}
impl ValidationResult<'_> {
    pub fn is_valid(&self) -> bool {
        self.results.is_empty()
    }
}

/// A non-empty [`ValidationResult`] turned into an error.
///
/// Renders as a header followed by a numbered list of violations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{}", self.render())]
pub struct ValidationFailed {
    header: String,
    results: Vec<String>,
}
impl ValidationFailed {
    pub fn header(&self) -> &str {
        self.header.as_str()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    fn render(&self) -> String {
        let mut rendered = self.header.to_string();
        for (idx, result) in self.results.iter().enumerate() {
            rendered.push_str(&format!("\n{}. {result}", idx + 1));
        }
        rendered
    }
}

/// Fails when `result` has any violations.
///
/// The header names the hook, permission function or mutation the
/// validation ran for, if any.
pub fn throw_on_errors(result: ValidationResult<'_>) -> Result<(), ValidationFailed> {
    if result.is_valid() {
        return Ok(());
    }

    let header = match &result.context.mutation {
        Some(mutation) if mutation.is_hook => {
            format!("Hook \"{}\" produced invalid data:", mutation.name)
        },
        Some(mutation) if mutation.is_permission => {
            format!("Permission function \"{}\" produced invalid filter:", mutation.name)
        },
        Some(mutation) => format!("Mutation \"{}\" failed validation:", mutation.name),
        None => "Validation failed:".to_string(),
    };
    Err(ValidationFailed {
        header,
        results: result.results,
    })
}
