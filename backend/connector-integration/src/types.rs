use crate::utils::WireElement;

/// Encode/decode pair between one domain type and its element in the wire tree.
///
/// Encoding never fails and leaves out everything absent or empty. Decoding is lenient:
/// missing keys and unexpected shapes come back as `None` instead of an error, so a
/// structurally odd response still yields whatever fields could be read.
pub trait WireMapping: Sized {
    /// Element name this type is written under.
    const ELEMENT: &'static str;

    fn to_wire(&self) -> WireElement;

    /// `None` when the element carries nothing this type can use.
    fn from_wire(element: &WireElement) -> Option<Self>;
}
