mod augment_tests;
mod replace_tests;
