pub mod connectors;
pub mod types;
pub mod utils;

pub use connectors::XmlMessage;
pub use types::WireMapping;
