//! Integration test entry point

mod helpers;
mod test_develop;
mod test_init;
mod test_release;
mod test_status;
