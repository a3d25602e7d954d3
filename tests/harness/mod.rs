#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::{SAMPLE_LUNG_CANCER_PROMPT, TestContext};
