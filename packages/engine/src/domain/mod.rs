//! Domain - what the materials are (definitions, base pack, catalog)

pub mod builtin;
pub mod content;
pub mod elements;
