//! Integration tests for the mdwiki tree, page and CLI surfaces

mod cli_commands;
mod ordering_properties;
mod tree_ordering;
mod tree_structure;
