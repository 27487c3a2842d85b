//! Integration Tests Module
//!
//! Runs the compiled binary and checks what it prints.
