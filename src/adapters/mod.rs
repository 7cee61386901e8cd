// Adapters layer: concrete implementations for external collaborators.

pub mod faker;
