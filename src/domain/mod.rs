pub mod api_key;
pub mod error;
pub mod headers;

pub use api_key::*;
pub use error::*;
pub use headers::*;
