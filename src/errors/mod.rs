//! Errores del crate.
//!
//! El núcleo de hashing tiene un único modo de fallo: encontrar un handle de
//! recurso vivo en cualquier punto del grafo de valores. Todo lo demás (grafos
//! cíclicos incluidos) termina sin error gracias al corte por identidad.

pub mod hash_error;

pub use hash_error::HashError;
