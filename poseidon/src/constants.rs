//! Parameters of a Poseidon2 instance, fixed at the type level.

use crate::env::SBox;
use ark_ff::Field;

/// Round constants, S-box and internal diagonal of a Poseidon2 instance of
/// width `WIDTH`.
///
/// The number of rounds of each kind is the number of constants given for
/// it: `RCB.len()` external rounds at the beginning, `RCP.len()` internal
/// rounds and `RCE.len()` external rounds at the end.
pub trait Poseidon2Params<F: Field, const WIDTH: usize> {
    const SBOX: SBox;

    /// Constants of the external rounds before the internal ones
    const RCB: &'static [[F; WIDTH]];

    /// Constants of the internal rounds, added to lane 0 only
    const RCP: &'static [F];

    /// Constants of the external rounds after the internal ones
    const RCE: &'static [[F; WIDTH]];

    /// Diagonal of the internal matrix, `M_I = diag(M) + 1`
    const M: [F; WIDTH];
}
