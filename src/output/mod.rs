mod plain;
mod response;

pub use plain::print_plain;
pub use response::print_result;
