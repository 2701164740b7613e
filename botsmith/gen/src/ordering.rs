//! Deterministic iteration over an API description.
//!
//! [`ApiDescription`] keys methods and types in hash maps, whose iteration
//! order changes between runs. Every component that produces output walks the
//! description through these functions so that the same description always
//! yields byte-identical output.

use botsmith_define::{ApiDescription, MethodDescription, TypeDescription};

/// Returns all methods sorted by name.
pub fn ordered_methods(api: &ApiDescription) -> Vec<&MethodDescription> {
    let mut methods: Vec<_> = api.methods.values().collect();
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    methods
}

/// Returns all types sorted by name.
pub fn ordered_types(api: &ApiDescription) -> Vec<&TypeDescription> {
    let mut types: Vec<_> = api.types.values().collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));
    types
}
