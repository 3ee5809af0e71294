//! pacsiolib — запись ISO 20022 `GroupHeader3` и её XML/JSON-кодеки.

pub mod components;
pub mod error;
pub mod model;
pub mod traits;
pub mod types;
pub mod wire;

pub mod formats {
    pub mod json;
    pub mod xml;
}

pub use model::GroupHeader3;
