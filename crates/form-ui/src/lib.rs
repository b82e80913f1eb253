pub mod binder;
pub mod components;
pub mod form;

#[cfg(test)]
mod testing;

pub use binder::*;
pub use form::*;
