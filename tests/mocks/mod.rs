//! Test doubles shared by the integration tests.

mod mock_submitter;

#[allow(unused_imports)]
pub use mock_submitter::{MockResponse, MockSubmitter};
