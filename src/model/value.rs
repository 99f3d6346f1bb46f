//! Taxonomía de valores hasheables.
//!
//! `HashValue` es la unión etiquetada que el encoder discrimina:
//! - escalares con representación canónica independiente del locale;
//! - `Seq`: pares (clave, valor) ordenados — cubre contenedores tipo lista y
//!   tipo mapa; el orden de iteración es significativo;
//! - `Object`: objeto compuesto con identidad (ver `model::object`). Anidado,
//!   aporta solo su token de identidad al encoding, nunca su contenido;
//! - `Handle`: recurso vivo del sistema. Hashearlo es un error, no un hash
//!   degradado.
use std::fmt;

use crate::model::object::ObjectRef;

/// Clave de un elemento de secuencia: índice posicional o nombre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqKey {
    Index(usize),
    Name(String),
}

/// Recurso vivo del sistema (descriptor de archivo, socket, ...) sin
/// representación estable de contenido. Solo lleva una etiqueta descriptiva
/// que se reporta en el error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueHandle {
    kind: String,
}

impl OpaqueHandle {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Valor arbitrario, potencialmente anidado, sobre el que se calcula un
/// fingerprint.
#[derive(Clone)]
pub enum HashValue {
    /// Marcador de ausencia de valor. Su forma canónica es fija y distinta de
    /// la de cualquier otro escalar.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Secuencia ordenada de pares (clave, valor).
    Seq(Vec<(SeqKey, HashValue)>),
    /// Referencia a un objeto compuesto (identidad, no contenido).
    Object(ObjectRef),
    /// Recurso vivo: encodearlo falla con `HashError::UnsupportedValue`.
    Handle(OpaqueHandle),
}

impl HashValue {
    /// Construye una secuencia tipo lista con claves posicionales 0..n.
    pub fn list(items: impl IntoIterator<Item = HashValue>) -> Self {
        HashValue::Seq(items.into_iter()
                            .enumerate()
                            .map(|(i, v)| (SeqKey::Index(i), v))
                            .collect())
    }

    /// Construye una secuencia tipo mapa con claves nombradas, en el orden
    /// dado (el orden es información: reordenar cambia el fingerprint).
    pub fn map(pairs: impl IntoIterator<Item = (String, HashValue)>) -> Self {
        HashValue::Seq(pairs.into_iter()
                            .map(|(k, v)| (SeqKey::Name(k), v))
                            .collect())
    }

    /// Envuelve un objeto compuesto.
    pub fn object(obj: ObjectRef) -> Self {
        HashValue::Object(obj)
    }

    /// Envuelve un handle de recurso con una etiqueta descriptiva.
    pub fn handle(kind: impl Into<String>) -> Self {
        HashValue::Handle(OpaqueHandle::new(kind))
    }

    /// Puente desde `serde_json::Value`: arrays como secuencias indexadas y
    /// objetos JSON como secuencias nombradas. Útil para fingerprintear datos
    /// JSON ya deserializados sin reconstruirlos a mano.
    ///
    /// Números fuera del rango de `i64` (u64 grandes, decimales) se mapean a
    /// `Float`.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => HashValue::Null,
            Value::Bool(b) => HashValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    HashValue::Int(i)
                } else {
                    HashValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => HashValue::Text(s.clone()),
            Value::Array(arr) => HashValue::list(arr.iter().map(HashValue::from_json)),
            Value::Object(map) => {
                HashValue::map(map.iter().map(|(k, v)| (k.clone(), HashValue::from_json(v))))
            }
        }
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashValue::Null => write!(f, "Null"),
            HashValue::Bool(b) => write!(f, "Bool({b})"),
            HashValue::Int(i) => write!(f, "Int({i})"),
            HashValue::Float(x) => write!(f, "Float({x})"),
            HashValue::Text(s) => write!(f, "Text({s:?})"),
            HashValue::Seq(entries) => f.debug_tuple("Seq").field(entries).finish(),
            // Un objeto se identifica por su token, nunca por sus campos.
            HashValue::Object(obj) => write!(f, "Object({})", obj.identity().token()),
            HashValue::Handle(h) => write!(f, "Handle({})", h.kind()),
        }
    }
}

impl From<bool> for HashValue {
    fn from(b: bool) -> Self {
        HashValue::Bool(b)
    }
}

impl From<i64> for HashValue {
    fn from(i: i64) -> Self {
        HashValue::Int(i)
    }
}

impl From<i32> for HashValue {
    fn from(i: i32) -> Self {
        HashValue::Int(i as i64)
    }
}

impl From<f64> for HashValue {
    fn from(x: f64) -> Self {
        HashValue::Float(x)
    }
}

impl From<&str> for HashValue {
    fn from(s: &str) -> Self {
        HashValue::Text(s.to_string())
    }
}

impl From<String> for HashValue {
    fn from(s: String) -> Self {
        HashValue::Text(s)
    }
}
