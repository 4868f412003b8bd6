pub mod config;
pub mod pudelko;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use pudelko::{Pudelko, PudelkoError, UnitOfMeasure};
