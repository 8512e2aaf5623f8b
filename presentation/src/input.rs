//! Input-boundary validation
//!
//! The orchestrator trusts the [`ProblemInput`] it receives; every entry
//! point (CLI, chat, web API) checks raw input here first.

use scamper_domain::{DomainError, ProblemInput};
use serde_json::Value;
use thiserror::Error;

/// Minimum problem length accepted from the terminal
pub const CLI_MIN_PROBLEM_CHARS: usize = 10;

/// Minimum problem length accepted by the web API
pub const WEB_MIN_PROBLEM_CHARS: usize = 5;

/// Rejected user input. Messages are shown to end users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("El campo 'problem' es obligatorio.")]
    MissingProblem,

    #[error("El problema debe ser un texto de al menos 5 caracteres.")]
    InvalidProblem,

    #[error("El contexto debe ser un texto.")]
    InvalidContext,

    #[error("Por favor, describe un problema válido.")]
    EmptyProblem,

    #[error("Por favor, proporciona más detalles (mínimo {minimum} caracteres).")]
    ProblemTooShort { minimum: usize },
}

impl From<DomainError> for InputError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyProblem => InputError::EmptyProblem,
            DomainError::ProblemTooShort { minimum, .. } => InputError::ProblemTooShort { minimum },
        }
    }
}

/// Validate a problem typed on the command line or in chat mode.
pub fn cli_input(problem: &str, context: Option<&str>) -> Result<ProblemInput, InputError> {
    Ok(ProblemInput::with_min_length(
        problem,
        context,
        CLI_MIN_PROBLEM_CHARS,
    )?)
}

/// Validate a `POST /api/scamper` body.
///
/// `problem` must be a string of at least five characters once trimmed;
/// `context` may be absent, null or a string.
pub fn web_input(body: &Value) -> Result<ProblemInput, InputError> {
    let object = body.as_object().filter(|o| !o.is_empty());
    let Some(problem) = object.and_then(|o| o.get("problem")) else {
        return Err(InputError::MissingProblem);
    };

    let problem = problem
        .as_str()
        .map(str::trim)
        .filter(|p| p.chars().count() >= WEB_MIN_PROBLEM_CHARS)
        .ok_or(InputError::InvalidProblem)?;

    let context = match object.and_then(|o| o.get("context")) {
        None | Some(Value::Null) => None,
        Some(Value::String(context)) => Some(context.as_str()),
        Some(_) => return Err(InputError::InvalidContext),
    };

    ProblemInput::new(problem, context).map_err(|_| InputError::InvalidProblem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cli_input_accepts_long_problem() {
        let input = cli_input("  Reducir la rotación de personal ", Some("  ")).unwrap();
        assert_eq!(input.problem(), "Reducir la rotación de personal");
        assert!(input.context().is_none());
    }

    #[test]
    fn test_cli_input_rejects_short_problem() {
        assert_eq!(
            cli_input("corto", None),
            Err(InputError::ProblemTooShort { minimum: 10 })
        );
        assert_eq!(cli_input("   ", None), Err(InputError::EmptyProblem));
    }

    #[test]
    fn test_cli_input_counts_characters() {
        // 10 characters, 12 bytes
        assert!(cli_input("ñandú rojo", None).is_ok());
    }

    #[test]
    fn test_web_input_valid() {
        let input = web_input(&json!({"problem": " Mejorar ventas ", "context": " retail "})).unwrap();
        assert_eq!(input.problem(), "Mejorar ventas");
        assert_eq!(input.context(), Some("retail"));
    }

    #[test]
    fn test_web_input_missing_problem() {
        assert_eq!(web_input(&json!({})), Err(InputError::MissingProblem));
        assert_eq!(web_input(&json!(null)), Err(InputError::MissingProblem));
        assert_eq!(
            web_input(&json!({"context": "x"})),
            Err(InputError::MissingProblem)
        );
    }

    #[test]
    fn test_web_input_invalid_problem() {
        assert_eq!(
            web_input(&json!({"problem": "abc"})),
            Err(InputError::InvalidProblem)
        );
        assert_eq!(
            web_input(&json!({"problem": "   abcd   "})),
            Err(InputError::InvalidProblem)
        );
        assert_eq!(
            web_input(&json!({"problem": 12345})),
            Err(InputError::InvalidProblem)
        );
        assert_eq!(
            web_input(&json!({"problem": null})),
            Err(InputError::InvalidProblem)
        );
    }

    #[test]
    fn test_web_input_context_rules() {
        assert!(web_input(&json!({"problem": "Mejorar ventas", "context": null})).is_ok());
        assert_eq!(
            web_input(&json!({"problem": "Mejorar ventas", "context": 42})),
            Err(InputError::InvalidContext)
        );
        let blank = web_input(&json!({"problem": "Mejorar ventas", "context": ""})).unwrap();
        assert!(blank.context().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::MissingProblem.to_string(),
            "El campo 'problem' es obligatorio."
        );
        assert_eq!(
            InputError::InvalidProblem.to_string(),
            "El problema debe ser un texto de al menos 5 caracteres."
        );
        assert_eq!(
            InputError::InvalidContext.to_string(),
            "El contexto debe ser un texto."
        );
    }
}
