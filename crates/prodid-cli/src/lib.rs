//! Library components of the `prodid` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod settings;
