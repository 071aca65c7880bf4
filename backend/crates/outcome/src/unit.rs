//! Zero-information success marker.

use serde::{Deserialize, Serialize};

/// Success marker for operations that produce no payload.
///
/// `Unit` serialises as JSON `null`, which the transport adapter renders as
/// an empty response body.
///
/// # Examples
/// ```
/// use outcome::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// assert_eq!(serde_json::to_value(Unit).unwrap(), serde_json::Value::Null);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Unit;

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}
