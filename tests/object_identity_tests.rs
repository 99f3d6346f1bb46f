use std::sync::Arc;

use structhash_rust::{fingerprint, DynObject, HashError, HashValue};

fn hash_of(obj: &Arc<DynObject>) -> String {
    fingerprint(&HashValue::object(obj.clone())).expect("fingerprint de objeto")
}

/// Calcula el hash del objeto, aplica una modificación y devuelve el hash
/// previo para comparar contra el recalculado.
fn hash_and_modify(obj: &Arc<DynObject>, modify: impl FnOnce()) -> String {
    let hash = hash_of(obj);
    modify();
    hash
}

fn assert_hash_remains(obj: &Arc<DynObject>, modify: impl FnOnce()) {
    let before = hash_and_modify(obj, modify);
    assert_eq!(before, hash_of(obj), "el fingerprint no debía cambiar");
}

fn assert_hash_differs(obj: &Arc<DynObject>, modify: impl FnOnce()) {
    let before = hash_and_modify(obj, modify);
    assert_ne!(before, hash_of(obj), "el fingerprint debía cambiar");
}

#[test]
fn object_fingerprint_has_40_characters() {
    let dummy = DynObject::new();
    dummy.set("a", 1.into());
    assert_eq!(hash_of(&dummy).len(), 40);
}

#[test]
fn hashing_object_with_self_reference_terminates() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::object(dummy.clone()));

    // Lo que se verifica es que el recorrido no entra en bucle infinito.
    assert_eq!(hash_of(&dummy).len(), 40);
}

#[test]
fn hashing_object_with_mutual_references_terminates() {
    let left = DynObject::new();
    let right = DynObject::new();
    left.set("other", HashValue::object(right.clone()));
    right.set("other", HashValue::object(left.clone()));

    assert_eq!(hash_of(&left).len(), 40);
    assert_ne!(hash_of(&left), hash_of(&right));
}

#[test]
fn detects_modified_scalar_attribute() {
    let dummy = DynObject::new();
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || d.set("a", 42.into()));
}

#[test]
fn detects_modified_array_attribute() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::list([1.into(), 2.into()]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || d.set("a", HashValue::list([1.into(), 42.into()])));
}

#[test]
fn detects_modified_nested_array_attribute() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::list([1.into(), HashValue::list([1.into(), 2.into()])]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || {
        d.set("a", HashValue::list([1.into(), HashValue::list([1.into(), 42.into()])]));
    });
}

#[test]
fn modifying_related_object_does_not_change_hash() {
    let dummy = DynObject::new();
    let related = DynObject::new();
    dummy.set("a", HashValue::object(related.clone()));
    assert_hash_remains(&dummy, move || related.set("a", 42.into()));
}

#[test]
fn modifying_related_object_in_array_does_not_change_hash() {
    let dummy = DynObject::new();
    let related = DynObject::new();
    dummy.set("a", HashValue::list([1.into(), HashValue::object(related.clone())]));
    assert_hash_remains(&dummy, move || related.set("a", 42.into()));
}

#[test]
fn modifying_related_object_in_nested_array_does_not_change_hash() {
    let dummy = DynObject::new();
    let related = DynObject::new();
    let inner = HashValue::list([1.into(), HashValue::object(related.clone())]);
    dummy.set("a", HashValue::list([1.into(), inner]));
    assert_hash_remains(&dummy, move || related.set("a", 42.into()));
}

#[test]
fn unsetting_related_object_changes_hash() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::object(DynObject::new()));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || d.set("a", HashValue::Null));
}

#[test]
fn unsetting_related_object_in_array_changes_hash() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::list([1.into(), HashValue::object(DynObject::new())]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || {
        d.set("a", HashValue::list([1.into(), HashValue::Null]));
    });
}

#[test]
fn unsetting_related_object_in_nested_array_changes_hash() {
    let dummy = DynObject::new();
    let inner = HashValue::list([1.into(), HashValue::object(DynObject::new())]);
    dummy.set("a", HashValue::list([1.into(), inner]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || {
        d.set("a", HashValue::list([1.into(), HashValue::list([1.into(), HashValue::Null])]));
    });
}

#[test]
fn replacing_related_object_changes_hash() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::object(DynObject::new()));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || d.set("a", HashValue::object(DynObject::new())));
}

#[test]
fn replacing_related_object_in_array_changes_hash() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::list([1.into(), HashValue::object(DynObject::new())]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || {
        d.set("a", HashValue::list([1.into(), HashValue::object(DynObject::new())]));
    });
}

#[test]
fn replacing_related_object_in_nested_array_changes_hash() {
    let dummy = DynObject::new();
    let inner = HashValue::list([1.into(), HashValue::object(DynObject::new())]);
    dummy.set("a", HashValue::list([1.into(), inner]));
    let d = dummy.clone();
    assert_hash_differs(&dummy, move || {
        let inner = HashValue::list([1.into(), HashValue::object(DynObject::new())]);
        d.set("a", HashValue::list([1.into(), inner]));
    });
}

#[test]
fn handle_inside_object_field_fails() {
    let dummy = DynObject::new();
    dummy.set("a", HashValue::handle("tmpfile"));
    let result = fingerprint(&HashValue::object(dummy));
    assert_eq!(result, Err(HashError::UnsupportedValue("tmpfile".into())));
}

#[test]
fn renaming_object_field_changes_hash() {
    let a = DynObject::new();
    a.set("x", 1.into());
    let b = DynObject::new();
    b.set("y", 1.into());
    assert_ne!(hash_of(&a), hash_of(&b));
}

#[test]
fn object_identity_never_depends_on_field_content() {
    // Dos instancias con campos idénticos nunca son iguales por contenido
    // cuando se las referencia: aportan tokens distintos.
    let a = DynObject::new();
    a.set("x", 1.into());
    let b = DynObject::new();
    b.set("x", 1.into());

    let holder_a = fingerprint(&HashValue::list([HashValue::object(a)])).unwrap();
    let holder_b = fingerprint(&HashValue::list([HashValue::object(b)])).unwrap();
    assert_ne!(holder_a, holder_b);
}
