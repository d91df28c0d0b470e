//! Command-line interface

pub mod args;
pub mod display;

#[cfg(test)]
mod tests;
