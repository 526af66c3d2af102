//! Rolling sequence identifier allocation.

/// Number of slots in the actuator's rolling sequence counter.
pub const SEQ_SLOTS: u8 = 4;

/// Next sequence identifier after the last one the safety layer accepted.
///
/// The identifier is derived from the last *accepted* value rather than a
/// free-running counter: after a disengagement gap the safety layer's
/// state may have advanced or reset, and the next issued identifier must
/// be contiguous with what the actuator actually accepted.
///
/// # Example
///
/// ```
/// use opensteer_sync::next_seq;
///
/// assert_eq!(next_seq(0), 1);
/// assert_eq!(next_seq(3), 0);
/// ```
#[inline]
pub fn next_seq(last_accepted: u8) -> u8 {
    last_accepted.wrapping_add(1) % SEQ_SLOTS
}
