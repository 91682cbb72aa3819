#![allow(dead_code)]

use std::sync::Once;

pub mod wire;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A field making use of every property kind, including repeated properties.
pub fn every_kind() -> Vec<u8> {
    wire::PropertiesBuilder::new()
        .byte(0x01, 1)
        .u32(0x02, 120)
        .string(0x03, "text/plain")
        .string(0x08, "reply/here")
        .binary(0x09, b"correlation")
        .var_int(0x0B, 1)
        .var_int(0x0B, 16_384)
        .u16(0x23, 3)
        .pair(0x26, "region", "eu")
        .pair(0x26, "tenant", "7")
        .build()
}
