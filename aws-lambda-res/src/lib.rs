//! Response formatter for AWS Lambda functions behind an API Gateway
//! proxy integration.
//!
//! The entry point is [`response`]: fix a status code, then build the
//! wire record from a body and headers.
//!
//! ```
//! use aws_lambda_res::response;
//!
//! let res = response(200)
//!     .with(Some(&serde_json::json!({ "message": "hello" })), None)
//!     .unwrap();
//! assert_eq!(res.status_code, 200);
//! assert!(!res.is_base64_encoded);
//! ```

pub mod errors;
pub mod response;

pub use errors::{ResponseError, ResponseResult};
pub use response::{response, Response, ResponseBuilder};
