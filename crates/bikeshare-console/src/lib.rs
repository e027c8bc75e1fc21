//! Console layer for the bikeshare explorer.
//!
//! Menu prompts, the four statistics reports, the row pager and the session
//! loop, all written against an injectable [`Console`].

pub mod console;
pub mod pager;
pub mod prompt;
pub mod reports;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
pub use console::Console;
