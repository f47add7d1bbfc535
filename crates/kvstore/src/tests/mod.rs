mod helpers;
mod mem_tests;
