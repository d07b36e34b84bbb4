pub mod notice_request;

pub use notice_request::NoticeRequest;
