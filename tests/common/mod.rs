#![allow(dead_code)]
#![allow(unused_imports)]

use std::error::Error;

pub use dagman_test_utils::builders;
pub use dagman_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn Error>>;
