pub mod err;
pub mod read;
