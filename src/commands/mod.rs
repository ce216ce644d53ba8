pub mod demo;
pub mod init;
pub mod nth;
pub mod sequence;
