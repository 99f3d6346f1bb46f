//! StructHash Rust Library
//!
//! Fingerprint estable (digest hex de largo fijo) para valores arbitrarios,
//! potencialmente anidados, bajo una regla de igualdad estructural asimétrica:
//! - escalares y secuencias se identifican por contenido;
//! - objetos compuestos alcanzados durante el recorrido se identifican por su
//!   token de identidad, nunca por el contenido de sus campos;
//! - solo cuando el objeto compuesto es el sujeto top-level sus propios pares
//!   (nombre, valor) entran por contenido.
//!
//! Caso de uso: claves de memoización / detección de cambios sobre grafos de
//! objetos interconectados ("¿cambió la forma propia de este objeto?") sin
//! invalidarse porque mutó algo alcanzable a través de él. El corte por
//! identidad además hace seguros los grafos auto-referenciados y cíclicos sin
//! visited-sets.
//!
//! Módulos:
//! - `model`: taxonomía de valores (`HashValue`), identidad e introspección.
//! - `hashing`: clasificación, encoder estructural y digester.
//! - `errors`: el único error del núcleo (`HashError::UnsupportedValue`).

pub mod errors;
pub mod hashing;
pub mod model;

pub use errors::HashError;
pub use hashing::{fingerprint, Blake3Digest, DigestPrimitive, Fingerprinter, Sha1Digest,
                  Sha256Digest};
pub use model::{DynObject, HashValue, InstanceId, Introspect, ObjectRef, OpaqueHandle, SeqKey};
