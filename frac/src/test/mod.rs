#[macro_use]
mod common;
