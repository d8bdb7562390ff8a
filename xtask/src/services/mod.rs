pub mod discovery;
pub mod protoc;
pub mod rewrite;
pub mod utils;
