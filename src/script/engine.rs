use crate::core::ChainHash;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Verification flags handed to the engine at construction.
///
/// Bit positions follow btcd's `txscript.ScriptFlags`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScriptFlags(u32);

impl ScriptFlags {
    pub const NONE: ScriptFlags = ScriptFlags(0);
    /// Evaluate pay-to-script-hash redeem scripts.
    pub const BIP16: ScriptFlags = ScriptFlags(1 << 0);
    pub const STRICT_MULTISIG: ScriptFlags = ScriptFlags(1 << 1);
    pub const DISCOURAGE_UPGRADABLE_NOPS: ScriptFlags = ScriptFlags(1 << 2);
    pub const VERIFY_DER_SIGNATURES: ScriptFlags = ScriptFlags(1 << 6);

    /// Flags the harness runs every transaction with.
    pub const fn harness() -> ScriptFlags {
        ScriptFlags(
            Self::BIP16.0
                | Self::VERIFY_DER_SIGNATURES.0
                | Self::STRICT_MULTISIG.0
                | Self::DISCOURAGE_UPGRADABLE_NOPS.0,
        )
    }

    pub const fn from_bits(bits: u32) -> ScriptFlags {
        ScriptFlags(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: ScriptFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ScriptFlags {
    type Output = ScriptFlags;

    fn bitor(self, rhs: ScriptFlags) -> ScriptFlags {
        ScriptFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ScriptFlags {
    fn bitor_assign(&mut self, rhs: ScriptFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ScriptFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A transaction the harness can name in its diagnostics.
pub trait ScriptTx {
    fn tx_hash(&self) -> ChainHash;
}

/// Single-stepping Bitcoin script virtual machine.
///
/// Implementations wrap a real interpreter. Errors are the engine's own and
/// pass through the harness untouched so tests can match on them.
pub trait ScriptEngine: Sized {
    type Tx: ScriptTx;
    type Error;

    /// Prepare to run input `tx_index` of `tx` against `script_pub_key`.
    fn new(
        script_pub_key: &[u8],
        tx: &Self::Tx,
        tx_index: usize,
        flags: ScriptFlags,
    ) -> Result<Self, Self::Error>;

    /// Execute one opcode. Returns `true` once every script has run.
    fn step(&mut self) -> Result<bool, Self::Error>;

    /// Disassembly of the opcode at the program counter.
    fn disasm_pc(&self) -> Result<String, Self::Error>;

    /// Snapshot of the data stack, bottom first.
    fn stack(&self) -> Vec<Vec<u8>>;

    /// Final verdict once stepping is done.
    fn check_error_condition(&mut self, final_script: bool) -> Result<(), Self::Error>;
}
