#[inline(always)]
#[cold]
pub(crate) const fn cold_path() {}

/// The four bits a nibble may occupy.
pub(crate) const NIBBLE_MASK: u8 = 0x0f;

/// Panics with the message of `error`, keeping the formatting machinery off
/// the hot path of the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_range(error: crate::Error) -> ! {
    panic!("{error}")
}
