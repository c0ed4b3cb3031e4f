pub mod attributes;
pub mod collections;
pub mod mass_triple;
