pub mod ansi;
pub mod memory;
pub mod types;

pub use ansi::AnsiStrip;
pub use memory::MemoryStrip;
pub use types::LampStrip;
