//! Chat-completion request assembly and response interpretation.
//!
//! Both halves are pure: [`build_request`] turns call parameters into bytes
//! and headers, [`classify`] turns whatever the transport produced into text
//! or a [`ClientError`](crate::ClientError). The client glues them around a
//! single transport call.

pub(crate) mod request;
pub(crate) mod response;

pub use request::{PreparedRequest, build_request};
pub use response::classify;
