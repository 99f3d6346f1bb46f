//! Digester: reduce el encoding estructural a un digest hex de largo fijo.
//!
//! La primitiva de digest es una abstracción para poder cambiar de algoritmo
//! sin tocar el resto del núcleo. El default es SHA-1 (160 bits, 40 hex) por
//! el tamaño de salida de referencia; `Sha256Digest` y `Blake3Digest` son
//! alternativas drop-in. La resistencia a colisiones se hereda de la
//! primitiva, no forma parte del contrato del núcleo.
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::errors::HashError;
use crate::hashing::classify::{classify, ValueKind};
use crate::hashing::encode::encode;
use crate::model::{HashValue, Introspect};

/// Primitiva de digest: bytes → hex determinista de largo fijo.
pub trait DigestPrimitive {
    fn reduce(&self, data: &[u8]) -> String;
}

/// SHA-1: 40 caracteres hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Digest;

impl DigestPrimitive for Sha1Digest {
    fn reduce(&self, data: &[u8]) -> String {
        let digest = Sha1::digest(data);
        format!("{digest:x}")
    }
}

/// SHA-256: 64 caracteres hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl DigestPrimitive for Sha256Digest {
    fn reduce(&self, data: &[u8]) -> String {
        let digest = Sha256::digest(data);
        format!("{digest:x}")
    }
}

/// BLAKE3: 64 caracteres hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Digest;

impl DigestPrimitive for Blake3Digest {
    fn reduce(&self, data: &[u8]) -> String {
        blake3::hash(data).to_hex().to_string()
    }
}

/// Punto de entrada del hashing estructural.
///
/// Caso top-level de objeto compuesto: se enumeran sus campos vía
/// introspección y cada par aporta `nombre ++ encoding(valor)` al acumulador
/// que se reduce. Cualquier otro valor se encodea completo y se reduce
/// directo. Un objeto compuesto anidado más abajo siempre aporta solo su
/// token de identidad (ver `hashing::encode`).
pub struct Fingerprinter<D = Sha1Digest> {
    digest: D,
}

impl Fingerprinter<Sha1Digest> {
    pub fn new() -> Self {
        Self { digest: Sha1Digest }
    }
}

impl Default for Fingerprinter<Sha1Digest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DigestPrimitive> Fingerprinter<D> {
    /// Construye un fingerprinter sobre otra primitiva de digest.
    pub fn with_digest(digest: D) -> Self {
        Self { digest }
    }

    /// Calcula el fingerprint de un valor.
    ///
    /// Falla con `HashError::UnsupportedValue` si un handle de recurso es
    /// alcanzable en cualquier punto del grafo; ningún otro error existe.
    pub fn fingerprint(&self, value: &HashValue) -> Result<String, HashError> {
        if classify(value) == ValueKind::Object {
            if let HashValue::Object(obj) = value {
                return self.fingerprint_object(obj.as_ref());
            }
        }
        Ok(self.digest.reduce(encode(value)?.as_bytes()))
    }

    fn fingerprint_object(&self, obj: &dyn Introspect) -> Result<String, HashError> {
        let mut acc = String::new();
        for (name, field) in obj.fields() {
            acc.push_str(&name);
            acc.push_str(&encode(&field)?);
        }
        Ok(self.digest.reduce(acc.as_bytes()))
    }
}

/// Conveniencia: fingerprint con la primitiva default (SHA-1, 40 hex).
pub fn fingerprint(value: &HashValue) -> Result<String, HashError> {
    Fingerprinter::new().fingerprint(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_is_deterministic() {
        let d = Sha1Digest;
        assert_eq!(d.reduce(b"abc"), d.reduce(b"abc"));
        assert_ne!(d.reduce(b"abc"), d.reduce(b"abd"));
    }

    #[test]
    fn digest_lengths_are_fixed() {
        assert_eq!(Sha1Digest.reduce(b"x").len(), 40);
        assert_eq!(Sha256Digest.reduce(b"x").len(), 64);
        assert_eq!(Blake3Digest.reduce(b"x").len(), 64);
        assert_eq!(Sha1Digest.reduce(b"").len(), 40);
    }

    #[test]
    fn alternative_digest_is_drop_in() {
        let fp = Fingerprinter::with_digest(Sha256Digest);
        let value = HashValue::list([1.into(), 2.into()]);
        assert_eq!(fp.fingerprint(&value).unwrap().len(), 64);
    }
}
