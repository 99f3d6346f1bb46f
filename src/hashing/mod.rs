//! Núcleo de hashing estructural.
//!
//! Tres responsabilidades que componen top-down sobre un valor a la vez:
//! - `classify`: decide qué es cada valor y si una secuencia contiene objetos
//!   de forma transitiva.
//! - `encode`: produce el encoding canónico de contenido, sustituyendo cada
//!   objeto compuesto alcanzado por su token de identidad.
//! - `digest`: reduce el encoding a un digest hex de largo fijo; el caso
//!   top-level de un objeto compuesto hashea sus propios campos por contenido.

pub mod classify;
pub mod digest;
pub mod encode;

pub use classify::{classify, contains_objects, ValueKind};
pub use digest::{fingerprint, Blake3Digest, DigestPrimitive, Fingerprinter, Sha1Digest, Sha256Digest};
pub use encode::encode;
