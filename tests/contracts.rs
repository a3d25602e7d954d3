//! Contract tests for the `clinprompt` binary and public library API.

mod cli;
mod harness;
mod library;
