//! Encoder estructural: contenido para escalares y secuencias, identidad para
//! objetos compuestos.
//!
//! Gramática del encoding (interna, ningún consumidor la parsea):
//! - escalares en forma canónica independiente del locale: `null`,
//!   `true`/`false`, enteros decimales, floats en forma mínima de Rust,
//!   strings entre comillas con escapes JSON;
//! - secuencias como `{clave:valor,clave:valor,...}` en orden de iteración
//!   (las claves NO se ordenan: el orden es información);
//! - objetos compuestos como su token de identidad, nunca su contenido. Este
//!   corte es lo que hace seguros los grafos cíclicos: la recursión jamás
//!   entra a los campos de un objeto alcanzado durante el recorrido.
//!
//! Ambos caminos de secuencia (serialización en una pasada cuando no hay
//! objetos, recursión por elemento cuando los hay) comparten esta gramática y
//! producen bytes idénticos sobre entrada sin objetos.
use crate::errors::HashError;
use crate::hashing::classify::contains_objects;
use crate::model::{HashValue, SeqKey};

/// Encodea un valor a su representación canónica de bytes.
///
/// Falla con `HashError::UnsupportedValue` si un handle de recurso es
/// alcanzable en cualquier punto del valor.
pub fn encode(value: &HashValue) -> Result<String, HashError> {
    match value {
        HashValue::Handle(h) => Err(HashError::UnsupportedValue(h.kind().to_string())),
        HashValue::Object(obj) => Ok(obj.identity().token()),
        HashValue::Seq(entries) => {
            if contains_objects(entries) {
                encode_seq_recursive(entries)
            } else {
                // Camino rápido: una sola pasada sobre un buffer único.
                let mut out = String::new();
                serialize_plain(entries, &mut out)?;
                Ok(out)
            }
        }
        scalar => Ok(scalar_form(scalar)),
    }
}

/// Forma canónica de un escalar. Solo se llama con variantes escalares.
fn scalar_form(value: &HashValue) -> String {
    match value {
        HashValue::Null => "null".to_string(),
        HashValue::Bool(b) => b.to_string(),
        HashValue::Int(i) => i.to_string(),
        HashValue::Float(x) => x.to_string(),
        HashValue::Text(s) => serde_json::to_string(s).unwrap(),
        _ => unreachable!("scalar_form recibe solo escalares"),
    }
}

fn push_key(key: &SeqKey, out: &mut String) {
    match key {
        SeqKey::Index(i) => out.push_str(&i.to_string()),
        SeqKey::Name(n) => out.push_str(&serde_json::to_string(n).unwrap()),
    }
}

/// Camino recursivo: cada elemento pasa de nuevo por `encode`, de modo que
/// los objetos anidados (a cualquier profundidad) aportan su token de
/// identidad y las sub-secuencias sin objetos toman el camino rápido.
fn encode_seq_recursive(entries: &[(SeqKey, HashValue)]) -> Result<String, HashError> {
    let mut out = String::from("{");
    for (i, (key, item)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_key(key, &mut out);
        out.push(':');
        out.push_str(&encode(item)?);
    }
    out.push('}');
    Ok(out)
}

/// Camino rápido: serializa la secuencia completa en una pasada. Mantiene la
/// misma gramática que el camino recursivo (el brazo de objeto no se alcanza
/// tras `contains_objects == false`, pero emite el token igual para conservar
/// la equivalencia byte a byte).
fn serialize_plain(entries: &[(SeqKey, HashValue)], out: &mut String) -> Result<(), HashError> {
    out.push('{');
    for (i, (key, item)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_key(key, out);
        out.push(':');
        match item {
            HashValue::Handle(h) => {
                return Err(HashError::UnsupportedValue(h.kind().to_string()));
            }
            HashValue::Object(obj) => out.push_str(&obj.identity().token()),
            HashValue::Seq(inner) => serialize_plain(inner, out)?,
            scalar => out.push_str(&scalar_form(scalar)),
        }
    }
    out.push('}');
    Ok(())
}
