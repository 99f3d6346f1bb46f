//! Objetos compuestos: identidad por instancia e introspección de campos.
//!
//! Rol en el hashing:
//! - `InstanceId` es el token de identidad asignado en la construcción. No
//!   depende del contenido de los campos: mutar un objeto referenciado no
//!   cambia el fingerprint de quien lo referencia; reemplazar la referencia
//!   por otra instancia sí.
//! - `Introspect` es la interfaz de introspección: entrega los pares
//!   (nombre, valor) en un orden estable, incluyendo campos que la API
//!   pública del tipo no expone. Solo el Digester la recorre, y solo cuando
//!   el objeto es el sujeto top-level.
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::value::HashValue;

/// Identidad por instancia, única durante la vida de la instancia y estable
/// entre llamadas repetidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Acuña una identidad nueva. Los implementadores de `Introspect` deben
    /// crearla en la construcción de la instancia y devolverla sin cambios
    /// durante toda su vida.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Forma textual del token tal como entra al encoding. Por construcción
    /// es distinta de la forma canónica de cualquier escalar (no va entre
    /// comillas, no es numérica y no es `null`).
    pub fn token(&self) -> String {
        self.0.to_string()
    }
}

/// Interfaz de introspección de un objeto compuesto.
///
/// Se implementa por tipo compuesto (capability), en lugar de depender de un
/// mecanismo de reflexión del lenguaje. El contrato del núcleo solo necesita
/// pares (nombre, valor) ordenados y un token de identidad.
pub trait Introspect: Send + Sync {
    /// Token de identidad de la instancia.
    fn identity(&self) -> InstanceId;

    /// Pares (nombre de campo, valor) en orden de enumeración estable.
    fn fields(&self) -> Vec<(String, HashValue)>;
}

/// Referencia compartida a un objeto compuesto. `Arc` permite que el mismo
/// objeto aparezca en varios puntos del grafo (incluyendo auto-referencias).
pub type ObjectRef = Arc<dyn Introspect>;

/// Objeto compuesto genérico: bolsa de campos nombrados, mutable y con orden
/// de inserción preservado. Sirve como compuesto dinámico para callers que no
/// quieren implementar `Introspect` a mano, y como doble de prueba.
pub struct DynObject {
    id: InstanceId,
    fields: RwLock<Vec<(String, HashValue)>>,
}

impl DynObject {
    /// Crea una instancia vacía con identidad nueva.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { id: InstanceId::new(),
                        fields: RwLock::new(Vec::new()) })
    }

    /// Asigna un campo. Si ya existe se reemplaza en su posición original
    /// (el orden de enumeración no cambia por re-asignar).
    pub fn set(&self, name: impl Into<String>, value: HashValue) {
        let name = name.into();
        let mut fields = self.fields.write().expect("fields lock poisoned");
        if let Some(entry) = fields.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            fields.push((name, value));
        }
    }

    /// Valor actual de un campo, si existe.
    pub fn get(&self, name: &str) -> Option<HashValue> {
        let fields = self.fields.read().expect("fields lock poisoned");
        fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }
}

impl Introspect for DynObject {
    fn identity(&self) -> InstanceId {
        self.id
    }

    fn fields(&self) -> Vec<(String, HashValue)> {
        self.fields.read().expect("fields lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_unique_per_instance() {
        let a = DynObject::new();
        let b = DynObject::new();
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn identity_token_is_stable() {
        let a = DynObject::new();
        let t1 = a.identity().token();
        a.set("x", 1.into());
        assert_eq!(t1, a.identity().token());
    }

    #[test]
    fn set_replaces_in_place_preserving_order() {
        let obj = DynObject::new();
        obj.set("a", 1.into());
        obj.set("b", 2.into());
        obj.set("a", 3.into());
        let fields = obj.fields();
        assert_eq!(fields[0].0, "a");
        assert!(matches!(fields[0].1, HashValue::Int(3)));
        assert_eq!(fields[1].0, "b");
    }
}
