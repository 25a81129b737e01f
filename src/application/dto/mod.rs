/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod notice_request;
mod notice_response;

pub use notice_request::{
    NoticeRequest, NoticeRequestBuilder, DEFAULT_FILE_NAME, DEFAULT_INDENT,
    DEFAULT_NOTICE_TEMPLATE, DEFAULT_PLACEHOLDER, MAX_INDENT,
};
pub use notice_response::NoticeResponse;
