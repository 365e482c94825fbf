// Integration tests
// Run with: cargo test --test integration

mod api_tests;
mod settings_tests;
