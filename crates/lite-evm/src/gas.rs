//! Gas cost table

use lite_primitives::Gas;

/// Gas costs and limits
pub mod cost {
    use lite_primitives::Gas;

    /// Flat cost charged for every executed instruction
    pub const STEP: Gas = 1;

    /// Max stack size
    pub const MAX_STACK_SIZE: usize = 1024;
    /// Scratch memory size in bytes
    pub const MEMORY_SIZE: usize = 1024;
}

/// Static cost of every byte value.
///
/// Indexed by the raw code byte rather than by [`crate::Opcode`] so that an
/// undefined byte is still metered before it is rejected.
pub static INSTRUCTION_COSTS: [Gas; 256] = [cost::STEP; 256];

/// Get the static gas cost of the instruction at a code byte
#[inline]
pub fn instruction_cost(byte: u8) -> Gas {
    INSTRUCTION_COSTS[byte as usize]
}
