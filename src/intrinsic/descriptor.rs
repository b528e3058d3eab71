//! The immutable per-intrinsic descriptor record.
//!
//! One `HwIntrinsicInfo` exists per `NamedIntrinsic`, authored as static
//! data in `table.rs` and never mutated. The opcode row holds one slot per
//! scalar element type; unsupported types hold the explicit
//! `Ins::Invalid` sentinel rather than an uninitialized slot.

use super::category::HwIntrinsicCategory;
use super::flags::HwIntrinsicFlags;
use super::NamedIntrinsic;
use crate::isa::InstructionSet;

/// Scalar element types a vector intrinsic can operate over.
///
/// The ordinals index the descriptor's opcode row, so the set is closed:
/// integer widths through double-precision float, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    I8 = 0,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ElementType {
    pub const COUNT: usize = 10;

    /// All element types, in opcode-row order.
    pub const ALL: [ElementType; ElementType::COUNT] = [
        ElementType::I8,
        ElementType::U8,
        ElementType::I16,
        ElementType::U16,
        ElementType::I32,
        ElementType::U32,
        ElementType::I64,
        ElementType::U64,
        ElementType::F32,
        ElementType::F64,
    ];

    /// Size of one element in bits.
    pub fn bits(&self) -> u32 {
        match self {
            ElementType::I8 | ElementType::U8 => 8,
            ElementType::I16 | ElementType::U16 => 16,
            ElementType::I32 | ElementType::U32 | ElementType::F32 => 32,
            ElementType::I64 | ElementType::U64 | ElementType::F64 => 64,
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, ElementType::F32 | ElementType::F64)
    }
}

/// Native instruction mnemonics the authored table maps element types to.
///
/// `Invalid` is the "unsupported for this element type" sentinel. The same
/// mnemonic covers legacy and VEX encodings; the emitter picks the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Ins {
    Invalid,
    Addpd,
    Addps,
    Aesenc,
    Aeskeygenassist,
    Andn,
    Blendpd,
    Blendps,
    Cmppd,
    Cmpps,
    Crc32,
    Cvtsd2si,
    Cvtss2si,
    Dppd,
    Dpps,
    Extractps,
    Haddpd,
    Haddps,
    Insertps,
    Lzcnt,
    Maskmovdqu,
    Movdqu,
    Movmskps,
    Movq,
    Movupd,
    Movups,
    Mulpd,
    Mulps,
    Pabsb,
    Pabsd,
    Pabsw,
    Paddb,
    Paddd,
    Paddq,
    Paddw,
    Palignr,
    Pblendw,
    Pclmulqdq,
    Pdep,
    Pext,
    Pextrw,
    Pinsrw,
    Popcnt,
    Pshufd,
    Pslld,
    Psllq,
    Psllw,
    Ptest,
    Roundpd,
    Roundps,
    Shufpd,
    Shufps,
    Sqrtps,
    Sqrtss,
    Subps,
    Tzcnt,
    Vextractf128,
    Vextracti128,
    Vfmadd213pd,
    Vfmadd213ps,
    Vfmadd213sd,
    Vfmadd213ss,
    Vgatherdpd,
    Vgatherdps,
    Vinsertf128,
    Vpermilpd,
    Vpermilps,
    Vpermpd,
    Vpermq,
    Vpgatherdd,
    Vpgatherdq,
    Vtestpd,
    Vtestps,
}

impl Ins {
    /// Whether this slot names a real instruction.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Ins::Invalid)
    }
}

/// Operand count stored in a descriptor row. Negative means the intrinsic
/// has optional or variadic operands and the live call node is
/// authoritative (`node::num_args`).
pub const NUM_ARGS_VARIABLE: i8 = -1;

/// Value stored in `immediate_default` when the intrinsic has no default
/// immediate or special-codegen discriminator.
pub const IVAL_UNUSED: i32 = -1;

/// Full descriptor for one hardware intrinsic.
///
/// Built once into the static table before any compilation unit runs and
/// shared read-only across all concurrently compiled units.
#[derive(Debug, Clone, Copy)]
pub struct HwIntrinsicInfo {
    /// The identifier this row describes; must equal the row's position in
    /// the table.
    pub id: NamedIntrinsic,
    /// Method name as it appears on the ISA class, used for resolution and
    /// diagnostics.
    pub name: &'static str,
    /// The instruction-set extension that owns this intrinsic.
    pub isa: InstructionSet,
    /// Default immediate or special-codegen discriminator; `IVAL_UNUSED`
    /// when the category gives it no meaning.
    pub immediate_default: i32,
    /// Nominal vector width in bits. Authoritative only when
    /// `flags.unfixed_simd_size` is clear; 0 for scalar-register intrinsics.
    pub simd_size: u32,
    /// Nominal operand count, or `NUM_ARGS_VARIABLE`.
    pub operand_count: i8,
    /// Native opcode per element type, `Ins::Invalid` where unsupported.
    pub ins: [Ins; ElementType::COUNT],
    pub category: HwIntrinsicCategory,
    pub flags: HwIntrinsicFlags,
}

impl HwIntrinsicInfo {
    /// Opcode for the given base element type.
    pub fn ins_for(&self, ty: ElementType) -> Ins {
        self.ins[ty as usize]
    }

    /// Whether the intrinsic supports the given base element type at all.
    pub fn supports_type(&self, ty: ElementType) -> bool {
        self.ins_for(ty).is_valid()
    }

    // Polarity-inverting accessors: the stored flag names the exception,
    // the predicate names the common case.

    /// False only for intrinsics that must be rewritten before emission.
    pub fn requires_codegen(&self) -> bool {
        !self.flags.skip_codegen
    }

    /// Whether the stored `simd_size` can be trusted without consulting the
    /// call signature.
    pub fn has_fixed_simd_size(&self) -> bool {
        !self.flags.unfixed_simd_size
    }

    /// Whether the optimizer may fold this intrinsic as a memory operand.
    pub fn supports_containment(&self) -> bool {
        !self.flags.no_containment
    }

    /// Whether the destination operand is implicitly also a source.
    pub fn has_rmw_semantics(&self) -> bool {
        !self.flags.no_rmw_semantics
    }

    /// Whether emission must mark the enclosing function as touching
    /// floating-point state.
    pub fn is_floating_point_used(&self) -> bool {
        !self.flags.no_floating_point_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_ordinals_are_dense() {
        for (idx, ty) in ElementType::ALL.iter().enumerate() {
            assert_eq!(*ty as usize, idx);
        }
    }

    #[test]
    fn test_element_type_bits() {
        assert_eq!(ElementType::I8.bits(), 8);
        assert_eq!(ElementType::U16.bits(), 16);
        assert_eq!(ElementType::F32.bits(), 32);
        assert_eq!(ElementType::U64.bits(), 64);
        assert!(ElementType::F64.is_floating_point());
        assert!(!ElementType::I32.is_floating_point());
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(!Ins::Invalid.is_valid());
        assert!(Ins::Addps.is_valid());
    }

    #[test]
    fn test_inverted_predicates() {
        let info = HwIntrinsicInfo {
            id: NamedIntrinsic::SseAdd,
            name: "Add",
            isa: InstructionSet::Sse,
            immediate_default: IVAL_UNUSED,
            simd_size: 128,
            operand_count: 2,
            ins: [Ins::Invalid; ElementType::COUNT],
            category: HwIntrinsicCategory::SimpleSimd,
            flags: HwIntrinsicFlags::NONE.skip_codegen().no_rmw_semantics(),
        };
        assert!(!info.requires_codegen());
        assert!(!info.has_rmw_semantics());
        assert!(info.has_fixed_simd_size());
        assert!(info.supports_containment());
        assert!(info.is_floating_point_used());
    }
}
