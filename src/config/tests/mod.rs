mod loader_tests;
mod schema_tests;
mod types_tests;
