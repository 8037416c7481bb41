pub mod error;
pub mod model;
pub mod service;
pub mod validate;
pub mod wasm;
