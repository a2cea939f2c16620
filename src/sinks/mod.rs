//! Destinations a log system can write to

pub mod console;
pub mod discard;
pub mod file;
pub mod memory;

pub use console::ConsoleSink;
pub use discard::DiscardSink;
pub use file::FileSink;
pub use memory::MemorySink;
