// all-ones masks for bit widths 0..=64. the full width is spelled out
// explicitly since a 64-bit shift of a u64 is not defined.
pub(crate) const MASKS: [u64; 65] = {
    let mut masks = [0u64; 65];
    let mut bits = 0;
    while bits < 64 {
        masks[bits] = (1u64 << bits) - 1;
        bits += 1;
    }
    masks[64] = u64::MAX;
    masks
};

/// widens the low `bits` bits of `raw` as a two's-complement value.
/// flipping the sign bit and subtracting it back out works at any width
/// without depending on the storage type's own width.
#[inline(always)]
pub(crate) const fn sign_extend64(raw: u64, bits: usize) -> i64 {
    if bits == 0 {
        return 0;
    }
    let m = 1u64 << (bits - 1);
    (raw ^ m).wrapping_sub(m) as i64
}
