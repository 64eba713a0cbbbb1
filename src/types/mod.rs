pub mod ids;
pub mod models;
pub mod request;
pub mod response;

pub use ids::*;
pub use models::*;
pub use request::*;
pub use response::*;
