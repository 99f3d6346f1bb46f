//! Clasificación de valores.
//!
//! `classify` es total y pura: nunca falla para un valor alcanzable. El fallo
//! por handle se difiere al encoding. `contains_objects` decide qué camino de
//! encoding toma una secuencia (serialización en una pasada vs recursión por
//! elemento).
use crate::model::{HashValue, SeqKey};

/// Clase de un valor a efectos del encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Handle,
    Sequence,
    Object,
}

/// Clasifica un valor arbitrario.
pub fn classify(value: &HashValue) -> ValueKind {
    match value {
        HashValue::Null
        | HashValue::Bool(_)
        | HashValue::Int(_)
        | HashValue::Float(_)
        | HashValue::Text(_) => ValueKind::Scalar,
        HashValue::Seq(_) => ValueKind::Sequence,
        HashValue::Object(_) => ValueKind::Object,
        HashValue::Handle(_) => ValueKind::Handle,
    }
}

/// Indica si una secuencia contiene algún objeto compuesto, directamente o
/// dentro de sub-secuencias a cualquier profundidad.
pub fn contains_objects(entries: &[(SeqKey, HashValue)]) -> bool {
    entries.iter().any(|(_, item)| match item {
                      HashValue::Object(_) => true,
                      HashValue::Seq(inner) => contains_objects(inner),
                      _ => false,
                  })
}
