pub mod xml_utils;

pub use xml_utils::{parse_xml, parse_xml_bytes, write_xml, Lookup, WireElement};
