//! Integration tests for tsync

mod helpers;

mod cli_test;
mod source_test;
