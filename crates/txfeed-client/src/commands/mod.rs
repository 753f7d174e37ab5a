pub mod demo;
pub mod feed;

mod common;
