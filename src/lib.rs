// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - fn_params_excessive_bools: Scan toggles are naturally boolean
// - needless_pass_by_value: Sometimes clearer semantically
// - module_name_repetitions: Wire types are named after the contract
#![allow(
    clippy::missing_errors_doc,
    clippy::fn_params_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::module_name_repetitions
)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod query;
pub mod scan;
