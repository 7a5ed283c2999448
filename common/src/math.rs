multiversx_sc::imports!();

/// Fixed-point scale of every ratio exposed by the contracts (1.0 = 10^18).
pub const PRECISION: u64 = 1_000_000_000_000_000_000;

/// `floor(a * b / denominator)`.
///
/// The caller guarantees `denominator > 0`; the VM aborts the transaction
/// on a division by zero.
pub fn mul_div_floor<M: ManagedTypeApi>(
    a: &BigUint<M>,
    b: &BigUint<M>,
    denominator: &BigUint<M>,
) -> BigUint<M> {
    (a * b) / denominator
}

/// `numerator / denominator` scaled by [`PRECISION`], rounded down.
/// Returns zero for an empty denominator.
pub fn scaled_ratio<M: ManagedTypeApi>(
    numerator: &BigUint<M>,
    denominator: &BigUint<M>,
) -> BigUint<M> {
    if *denominator == 0u64 {
        return BigUint::zero();
    }
    mul_div_floor(numerator, &BigUint::from(PRECISION), denominator)
}
