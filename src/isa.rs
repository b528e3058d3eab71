//! Instruction-set extensions and the ISA capability oracle.
//!
//! Answers the two questions the pipeline asks about an extension as a
//! whole: is it fully implemented by this backend (so `get_IsSupported`
//! folds to a constant `true` and fallback paths become dead code), and
//! does it operate purely on general-purpose registers (so vector-tuned
//! containment heuristics must stay away). The AVX2 gather family is
//! special-cased here because its operand shape (base + index vector +
//! scale) fits no generic memory category.

use thiserror::Error;

use crate::intrinsic::{HwIntrinsicInfo, NamedIntrinsic};

/// A hardware capability group gating a set of intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionSet {
    Sse,
    Sse2,
    Sse3,
    Ssse3,
    Sse41,
    Sse42,
    Avx,
    Avx2,
    Aes,
    Bmi1,
    Bmi2,
    Fma,
    Lzcnt,
    Pclmulqdq,
    Popcnt,
}

impl InstructionSet {
    /// The public class name the front-end resolves against.
    pub fn class_name(&self) -> &'static str {
        match self {
            InstructionSet::Sse => "Sse",
            InstructionSet::Sse2 => "Sse2",
            InstructionSet::Sse3 => "Sse3",
            InstructionSet::Ssse3 => "Ssse3",
            InstructionSet::Sse41 => "Sse41",
            InstructionSet::Sse42 => "Sse42",
            InstructionSet::Avx => "Avx",
            InstructionSet::Avx2 => "Avx2",
            InstructionSet::Aes => "Aes",
            InstructionSet::Bmi1 => "Bmi1",
            InstructionSet::Bmi2 => "Bmi2",
            InstructionSet::Fma => "Fma",
            InstructionSet::Lzcnt => "Lzcnt",
            InstructionSet::Pclmulqdq => "Pclmulqdq",
            InstructionSet::Popcnt => "Popcnt",
        }
    }

    /// Exact-match resolution of a class name. `None` is the
    /// "not recognized" sentinel: the caller treats the call as an ordinary
    /// method invocation, never as an error.
    pub fn from_class_name(class_name: &str) -> Option<InstructionSet> {
        match class_name {
            "Sse" => Some(InstructionSet::Sse),
            "Sse2" => Some(InstructionSet::Sse2),
            "Sse3" => Some(InstructionSet::Sse3),
            "Ssse3" => Some(InstructionSet::Ssse3),
            "Sse41" => Some(InstructionSet::Sse41),
            "Sse42" => Some(InstructionSet::Sse42),
            "Avx" => Some(InstructionSet::Avx),
            "Avx2" => Some(InstructionSet::Avx2),
            "Aes" => Some(InstructionSet::Aes),
            "Bmi1" => Some(InstructionSet::Bmi1),
            "Bmi2" => Some(InstructionSet::Bmi2),
            "Fma" => Some(InstructionSet::Fma),
            "Lzcnt" => Some(InstructionSet::Lzcnt),
            "Pclmulqdq" => Some(InstructionSet::Pclmulqdq),
            "Popcnt" => Some(InstructionSet::Popcnt),
            _ => None,
        }
    }

    /// Whether the backend implements every intrinsic of this extension.
    /// Only then may a `get_IsSupported` property fold to constant `true`.
    pub fn is_fully_implemented(&self) -> bool {
        match self {
            InstructionSet::Sse
            | InstructionSet::Sse2
            | InstructionSet::Sse3
            | InstructionSet::Ssse3
            | InstructionSet::Sse41
            | InstructionSet::Sse42
            | InstructionSet::Avx
            | InstructionSet::Avx2
            | InstructionSet::Aes
            | InstructionSet::Lzcnt
            | InstructionSet::Pclmulqdq
            | InstructionSet::Popcnt => true,
            // Partial coverage: scalar BMI forms and the FMA family still
            // have unimplemented overloads in this backend.
            InstructionSet::Bmi1 | InstructionSet::Bmi2 | InstructionSet::Fma => false,
        }
    }

    /// Whether the extension operates exclusively through general-purpose
    /// registers.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            InstructionSet::Bmi1
                | InstructionSet::Bmi2
                | InstructionSet::Lzcnt
                | InstructionSet::Popcnt
        )
    }
}

/// General-purpose register width of the compilation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArch {
    X86,
    X64,
}

impl TargetArch {
    /// Width of a general-purpose register in bits.
    pub fn gp_width(&self) -> u32 {
        match self {
            TargetArch::X86 => 32,
            TargetArch::X64 => 64,
        }
    }
}

/// Target/configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsaError {
    #[error("intrinsic {0:?} requires 64-bit general-purpose registers")]
    Requires64BitTarget(NamedIntrinsic),
}

/// Rejects 64-bit-only intrinsics on targets with narrower general-purpose
/// registers. A caller/configuration error, not an internal failure.
pub fn validate_target(info: &HwIntrinsicInfo, target: TargetArch) -> Result<(), IsaError> {
    if info.flags.sixty_four_bit_only && target.gp_width() < 64 {
        return Err(IsaError::Requires64BitTarget(info.id));
    }
    Ok(())
}

/// The AVX2 gather family: base address + index vector + scale does not fit
/// the generic memory-load category, so containment and addressing logic
/// recognize these by identity.
pub fn is_avx2_gather(id: NamedIntrinsic) -> bool {
    matches!(
        id,
        NamedIntrinsic::Avx2GatherVector128
            | NamedIntrinsic::Avx2GatherVector256
            | NamedIntrinsic::Avx2GatherMaskVector128
            | NamedIntrinsic::Avx2GatherMaskVector256
    )
}
