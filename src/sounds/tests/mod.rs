mod builder_tests;
mod catalog_tests;
