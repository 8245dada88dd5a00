mod model;
mod routes;

pub use model::{CreateWordRequest, WordResponse, WordsResponse};
pub use routes::routes;
