//! Production byte sources for the message parser: blocking readers over
//! sockets, files, and anything else `std::io::Read`.
mod read_source;

pub use read_source::ReadSource;
