mod field_tests;
mod fragment_tests;
