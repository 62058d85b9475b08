use serde::{Serialize, Serializer};

use crate::U4;

/// Serializes as a bare unsigned integer: `U4::new(4)` becomes `4` in JSON.
impl Serialize for U4 {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.get())
    }
}
