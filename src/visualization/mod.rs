mod tables;

pub use tables::{format_estimate, format_species_table, print_estimate, print_species_table};
