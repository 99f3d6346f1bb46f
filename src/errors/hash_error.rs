use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error único del núcleo de hashing.
///
/// Se lanza de forma síncrona en el momento en que el recorrido alcanza un
/// `HashValue::Handle`, ya sea como sujeto top-level o anidado a cualquier
/// profundidad dentro de una secuencia o de los campos de un objeto. No se
/// recupera internamente: no existe fingerprint parcial ni de mejor esfuerzo.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum HashError {
    #[error("no se puede hashear un recurso: {0}")]
    UnsupportedValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_format() {
        let err = HashError::UnsupportedValue("tmpfile".into());
        assert_eq!(err.to_string(), "no se puede hashear un recurso: tmpfile");
    }
}
