//! HTTP plumbing: form bodies and the signed POST transport.

pub mod form;
pub mod http;

pub use form::FormBody;
pub use http::{HttpTransport, RawResponse, TransportError};
