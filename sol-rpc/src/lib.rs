pub mod calls;
pub mod error;
pub mod retrying;
pub mod traits;
pub mod types;

mod http_client;

pub use error::Error;
