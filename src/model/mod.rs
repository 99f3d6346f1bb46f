//! Modelo de valores (HashValue, SeqKey, objetos compuestos e identidad).

pub mod object;
pub mod value;

pub use object::{DynObject, InstanceId, Introspect, ObjectRef};
pub use value::{HashValue, OpaqueHandle, SeqKey};
