pub mod console;
pub mod http;
