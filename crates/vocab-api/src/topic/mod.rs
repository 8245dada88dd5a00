mod model;
mod routes;

pub use model::{CreateTopicRequest, TopicResponse, TopicsResponse};
pub use routes::routes;
