pub mod apm;

pub use self::apm::XmlMessage;
