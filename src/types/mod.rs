//! Contains the wire data types a properties field is made of.

mod binary;
mod int;
pub mod string;

pub use binary::MqttBinary;
pub use int::{VarByteInt, read_var_int_unbounded};
pub use string::Utf8Violation;
