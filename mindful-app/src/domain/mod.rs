mod chat_request;
mod service_response;

pub use chat_request::ChatRequest;
pub use service_response::{ServiceResponse, Status};
