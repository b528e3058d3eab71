//! The authored descriptor table.
//!
//! One row per `NamedIntrinsic`, in declaration order: the registry
//! validates on startup that each row's id ordinal equals its index, so
//! row order here is load-bearing. Row shape is the build-time contract
//! named in the registry docs: identifier, method name, owning ISA,
//! default immediate, nominal SIMD width, nominal operand count, one
//! opcode slot per element type, category, flag set.

use super::category::HwIntrinsicCategory as Cat;
use super::descriptor::{
    ElementType, HwIntrinsicInfo, Ins, IVAL_UNUSED, NUM_ARGS_VARIABLE,
};
use super::flags::HwIntrinsicFlags as F;
use super::NamedIntrinsic as N;
use crate::isa::InstructionSet as Isa;

const NA: Ins = Ins::Invalid;

const fn row_none() -> [Ins; ElementType::COUNT] {
    [NA; ElementType::COUNT]
}

const fn row_all(i: Ins) -> [Ins; ElementType::COUNT] {
    [i; ElementType::COUNT]
}

const fn row_f32(i: Ins) -> [Ins; ElementType::COUNT] {
    [NA, NA, NA, NA, NA, NA, NA, NA, i, NA]
}

const fn row_fp(f32_ins: Ins, f64_ins: Ins) -> [Ins; ElementType::COUNT] {
    [NA, NA, NA, NA, NA, NA, NA, NA, f32_ins, f64_ins]
}

const fn row_ints(b: Ins, w: Ins, d: Ins, q: Ins) -> [Ins; ElementType::COUNT] {
    [b, b, w, w, d, d, q, q, NA, NA]
}

#[allow(clippy::too_many_arguments)]
const fn def(
    id: N,
    name: &'static str,
    isa: Isa,
    immediate_default: i32,
    simd_size: u32,
    operand_count: i8,
    ins: [Ins; ElementType::COUNT],
    category: Cat,
    flags: F,
) -> HwIntrinsicInfo {
    HwIntrinsicInfo {
        id,
        name,
        isa,
        immediate_default,
        simd_size,
        operand_count,
        ins,
        category,
        flags,
    }
}

/// `get_IsSupported` property row for an ISA class.
const fn supported(id: N, isa: Isa) -> HwIntrinsicInfo {
    def(
        id,
        "get_IsSupported",
        isa,
        IVAL_UNUSED,
        0,
        0,
        row_none(),
        Cat::IsSupportedProperty,
        F::NONE,
    )
}

/// The descriptor table. Index with a `NamedIntrinsic` ordinal.
#[rustfmt::skip]
pub static TABLE: [HwIntrinsicInfo; N::COUNT] = [
    // Sse
    supported(N::SseIsSupported, Isa::Sse),
    def(N::SseAdd,            "Add",            Isa::Sse, IVAL_UNUSED, 128, 2, row_f32(Ins::Addps),     Cat::SimpleSimd,  F::NONE.commutative()),
    def(N::SseCompareEqual,   "CompareEqual",   Isa::Sse, 0,           128, 2, row_f32(Ins::Cmpps),     Cat::SimpleSimd,  F::NONE.commutative()),
    def(N::SseConvertToInt32, "ConvertToInt32", Isa::Sse, IVAL_UNUSED, 128, 1, row_f32(Ins::Cvtss2si),  Cat::SimdScalar,  F::NONE.base_type_from_first_arg().no_rmw_semantics()),
    def(N::SseLoadVector128,  "LoadVector128",  Isa::Sse, IVAL_UNUSED, 128, 1, row_f32(Ins::Movups),    Cat::MemoryLoad,  F::NONE.no_containment()),
    def(N::SseMoveMask,       "MoveMask",       Isa::Sse, IVAL_UNUSED, 128, 1, row_f32(Ins::Movmskps),  Cat::Special,     F::NONE.base_type_from_first_arg().no_containment().no_rmw_semantics()),
    def(N::SseMultiply,       "Multiply",       Isa::Sse, IVAL_UNUSED, 128, 2, row_f32(Ins::Mulps),     Cat::SimpleSimd,  F::NONE.commutative()),
    def(N::SseShuffle,        "Shuffle",        Isa::Sse, IVAL_UNUSED, 128, 3, row_f32(Ins::Shufps),    Cat::Imm,         F::NONE.full_range_imm()),
    def(N::SseSqrt,           "Sqrt",           Isa::Sse, IVAL_UNUSED, 128, 1, row_f32(Ins::Sqrtps),    Cat::SimpleSimd,  F::NONE),
    def(N::SseSqrtScalar,     "SqrtScalar",     Isa::Sse, IVAL_UNUSED, 128, NUM_ARGS_VARIABLE, row_f32(Ins::Sqrtss), Cat::SimdScalar, F::NONE.copy_upper_bits()),
    def(N::SseStaticCast,     "StaticCast",     Isa::Sse, IVAL_UNUSED, 128, 1, row_none(),              Cat::Helper,      F::NONE.two_type_generic().skip_codegen()),
    def(N::SseStore,          "Store",          Isa::Sse, IVAL_UNUSED, 128, 2, row_f32(Ins::Movups),    Cat::MemoryStore, F::NONE.no_containment()),
    def(N::SseSubtract,       "Subtract",       Isa::Sse, IVAL_UNUSED, 128, 2, row_f32(Ins::Subps),     Cat::SimpleSimd,  F::NONE),

    // Sse2
    supported(N::Sse2IsSupported, Isa::Sse2),
    def(N::Sse2Add,            "Add",            Isa::Sse2, IVAL_UNUSED, 128, 2,
        [Ins::Paddb, Ins::Paddb, Ins::Paddw, Ins::Paddw, Ins::Paddd, Ins::Paddd, Ins::Paddq, Ins::Paddq, NA, Ins::Addpd],
        Cat::SimpleSimd, F::NONE.commutative()),
    def(N::Sse2ConvertToInt64, "ConvertToInt64", Isa::Sse2, IVAL_UNUSED, 128, 1,
        [NA, NA, NA, NA, NA, NA, Ins::Movq, Ins::Movq, NA, Ins::Cvtsd2si],
        Cat::SimdScalar, F::NONE.base_type_from_first_arg().sixty_four_bit_only().no_rmw_semantics()),
    def(N::Sse2Extract,        "Extract",        Isa::Sse2, IVAL_UNUSED, 128, 2,
        [NA, NA, NA, Ins::Pextrw, NA, NA, NA, NA, NA, NA],
        Cat::Imm, F::NONE),
    def(N::Sse2Insert,         "Insert",         Isa::Sse2, IVAL_UNUSED, 128, 3,
        [NA, NA, Ins::Pinsrw, Ins::Pinsrw, NA, NA, NA, NA, NA, NA],
        Cat::Imm, F::NONE),
    def(N::Sse2LoadVector128,  "LoadVector128",  Isa::Sse2, IVAL_UNUSED, 128, 1,
        [Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, NA, Ins::Movupd],
        Cat::MemoryLoad, F::NONE.no_containment()),
    def(N::Sse2MaskMove,       "MaskMove",       Isa::Sse2, IVAL_UNUSED, 128, 3,
        [Ins::Maskmovdqu, Ins::Maskmovdqu, NA, NA, NA, NA, NA, NA, NA, NA],
        Cat::MemoryStore, F::NONE.no_containment().special_codegen()),
    def(N::Sse2ShiftLeftLogical, "ShiftLeftLogical", Isa::Sse2, IVAL_UNUSED, 128, 2,
        [NA, NA, Ins::Psllw, Ins::Psllw, Ins::Pslld, Ins::Pslld, Ins::Psllq, Ins::Psllq, NA, NA],
        Cat::Imm, F::NONE.full_range_imm().maybe_imm()),
    def(N::Sse2Shuffle,        "Shuffle",        Isa::Sse2, IVAL_UNUSED, 128, NUM_ARGS_VARIABLE,
        [NA, NA, NA, NA, Ins::Pshufd, Ins::Pshufd, NA, NA, NA, Ins::Shufpd],
        Cat::Imm, F::NONE.full_range_imm()),
    def(N::Sse2Store,          "Store",          Isa::Sse2, IVAL_UNUSED, 128, 2,
        [Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, NA, Ins::Movupd],
        Cat::MemoryStore, F::NONE.no_containment()),

    // Sse3
    supported(N::Sse3IsSupported, Isa::Sse3),
    def(N::Sse3HorizontalAdd, "HorizontalAdd", Isa::Sse3, IVAL_UNUSED, 128, 2, row_fp(Ins::Haddps, Ins::Haddpd), Cat::SimpleSimd, F::NONE),

    // Ssse3
    supported(N::Ssse3IsSupported, Isa::Ssse3),
    def(N::Ssse3Abs,        "Abs",        Isa::Ssse3, IVAL_UNUSED, 128, 1,
        [NA, Ins::Pabsb, NA, Ins::Pabsw, NA, Ins::Pabsd, NA, NA, NA, NA],
        Cat::SimpleSimd, F::NONE.base_type_from_first_arg()),
    def(N::Ssse3AlignRight, "AlignRight", Isa::Ssse3, IVAL_UNUSED, 128, 3,
        [Ins::Palignr, Ins::Palignr, NA, NA, NA, NA, NA, NA, NA, NA],
        Cat::Imm, F::NONE.full_range_imm()),

    // Sse41
    supported(N::Sse41IsSupported, Isa::Sse41),
    def(N::Sse41Blend,      "Blend",      Isa::Sse41, IVAL_UNUSED, 128, 3,
        [NA, NA, Ins::Pblendw, Ins::Pblendw, NA, NA, NA, NA, Ins::Blendps, Ins::Blendpd],
        Cat::Imm, F::NONE.full_range_imm()),
    def(N::Sse41DotProduct, "DotProduct", Isa::Sse41, IVAL_UNUSED, 128, 3, row_fp(Ins::Dpps, Ins::Dppd), Cat::Imm, F::NONE.full_range_imm()),
    def(N::Sse41Extract,    "Extract",    Isa::Sse41, IVAL_UNUSED, 128, 2, row_f32(Ins::Extractps), Cat::Imm, F::NONE),
    def(N::Sse41Insert,     "Insert",     Isa::Sse41, IVAL_UNUSED, 128, 3, row_f32(Ins::Insertps),  Cat::Imm, F::NONE.full_range_imm()),
    def(N::Sse41RoundToNearestInteger, "RoundToNearestInteger", Isa::Sse41, 8, 128, 1, row_fp(Ins::Roundps, Ins::Roundpd), Cat::SimpleSimd, F::NONE),
    def(N::Sse41TestAllOnes, "TestAllOnes", Isa::Sse41, IVAL_UNUSED, 128, 1, row_none(), Cat::Helper, F::NONE.multi_ins()),

    // Sse42
    supported(N::Sse42IsSupported, Isa::Sse42),
    def(N::Sse42Crc32, "Crc32", Isa::Sse42, IVAL_UNUSED, 0, 2,
        [NA, Ins::Crc32, NA, Ins::Crc32, NA, Ins::Crc32, NA, Ins::Crc32, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used().second_arg_maybe_64bit().base_type_from_second_arg()),

    // Avx
    supported(N::AvxIsSupported, Isa::Avx),
    def(N::AvxAdd,              "Add",              Isa::Avx, IVAL_UNUSED, 256, 2, row_fp(Ins::Addps, Ins::Addpd), Cat::SimpleSimd, F::NONE.commutative().no_rmw_semantics()),
    def(N::AvxCompare,          "Compare",          Isa::Avx, IVAL_UNUSED, 256, 3, row_fp(Ins::Cmpps, Ins::Cmppd), Cat::Imm,        F::NONE.no_rmw_semantics()),
    def(N::AvxExtractVector128, "ExtractVector128", Isa::Avx, IVAL_UNUSED, 256, 2, row_all(Ins::Vextractf128),     Cat::Imm,        F::NONE.maybe_memory_store().no_rmw_semantics()),
    def(N::AvxInsertVector128,  "InsertVector128",  Isa::Avx, IVAL_UNUSED, 256, 3, row_all(Ins::Vinsertf128),      Cat::Imm,        F::NONE.maybe_memory_load().no_rmw_semantics()),
    def(N::AvxLoadVector256,    "LoadVector256",    Isa::Avx, IVAL_UNUSED, 256, 1,
        [Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movups, Ins::Movupd],
        Cat::MemoryLoad, F::NONE.no_containment()),
    def(N::AvxMultiply,         "Multiply",         Isa::Avx, IVAL_UNUSED, 256, 2, row_fp(Ins::Mulps, Ins::Mulpd), Cat::SimpleSimd, F::NONE.commutative().no_rmw_semantics()),
    def(N::AvxPermute,          "Permute",          Isa::Avx, IVAL_UNUSED, 128, 2, row_fp(Ins::Vpermilps, Ins::Vpermilpd), Cat::Imm, F::NONE.full_range_imm().unfixed_simd_size().no_rmw_semantics()),
    def(N::AvxSetAllVector256,  "SetAllVector256",  Isa::Avx, IVAL_UNUSED, 256, 1, row_none(), Cat::Helper, F::NONE.one_type_generic().skip_codegen()),
    def(N::AvxStore,            "Store",            Isa::Avx, IVAL_UNUSED, 256, 2,
        [Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movdqu, Ins::Movups, Ins::Movupd],
        Cat::MemoryStore, F::NONE.no_containment()),
    def(N::AvxTestZ,            "TestZ",            Isa::Avx, IVAL_UNUSED, 128, 2,
        [Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Ptest, Ins::Vtestps, Ins::Vtestpd],
        Cat::Special, F::NONE.unfixed_simd_size().base_type_from_first_arg().multi_ins().no_rmw_semantics()),

    // Avx2
    supported(N::Avx2IsSupported, Isa::Avx2),
    def(N::Avx2Add,              "Add",              Isa::Avx2, IVAL_UNUSED, 256, 2, row_ints(Ins::Paddb, Ins::Paddw, Ins::Paddd, Ins::Paddq), Cat::SimpleSimd, F::NONE.commutative().no_rmw_semantics()),
    def(N::Avx2ExtractVector128, "ExtractVector128", Isa::Avx2, IVAL_UNUSED, 256, 2, row_ints(Ins::Vextracti128, Ins::Vextracti128, Ins::Vextracti128, Ins::Vextracti128), Cat::Imm, F::NONE.maybe_memory_store().no_rmw_semantics()),
    def(N::Avx2GatherVector128, "GatherVector128", Isa::Avx2, IVAL_UNUSED, 128, 3,
        [NA, NA, NA, NA, Ins::Vpgatherdd, Ins::Vpgatherdd, Ins::Vpgatherdq, Ins::Vpgatherdq, Ins::Vgatherdps, Ins::Vgatherdpd],
        Cat::Special, F::NONE.special_import().no_containment().no_rmw_semantics()),
    def(N::Avx2GatherVector256, "GatherVector256", Isa::Avx2, IVAL_UNUSED, 256, 3,
        [NA, NA, NA, NA, Ins::Vpgatherdd, Ins::Vpgatherdd, Ins::Vpgatherdq, Ins::Vpgatherdq, Ins::Vgatherdps, Ins::Vgatherdpd],
        Cat::Special, F::NONE.special_import().no_containment().no_rmw_semantics()),
    def(N::Avx2GatherMaskVector128, "GatherMaskVector128", Isa::Avx2, IVAL_UNUSED, 128, 5,
        [NA, NA, NA, NA, Ins::Vpgatherdd, Ins::Vpgatherdd, Ins::Vpgatherdq, Ins::Vpgatherdq, Ins::Vgatherdps, Ins::Vgatherdpd],
        Cat::Special, F::NONE.special_import().special_codegen().no_containment().no_rmw_semantics()),
    def(N::Avx2GatherMaskVector256, "GatherMaskVector256", Isa::Avx2, IVAL_UNUSED, 256, 5,
        [NA, NA, NA, NA, Ins::Vpgatherdd, Ins::Vpgatherdd, Ins::Vpgatherdq, Ins::Vpgatherdq, Ins::Vgatherdps, Ins::Vgatherdpd],
        Cat::Special, F::NONE.special_import().special_codegen().no_containment().no_rmw_semantics()),
    def(N::Avx2Permute4x64, "Permute4x64", Isa::Avx2, IVAL_UNUSED, 256, 2,
        [NA, NA, NA, NA, NA, NA, Ins::Vpermq, Ins::Vpermq, NA, Ins::Vpermpd],
        Cat::Imm, F::NONE.full_range_imm().no_rmw_semantics()),
    def(N::Avx2ShiftLeftLogical, "ShiftLeftLogical", Isa::Avx2, IVAL_UNUSED, 256, 2,
        [NA, NA, Ins::Psllw, Ins::Psllw, Ins::Pslld, Ins::Pslld, Ins::Psllq, Ins::Psllq, NA, NA],
        Cat::Imm, F::NONE.full_range_imm().maybe_imm().no_rmw_semantics()),

    // Aes
    supported(N::AesIsSupported, Isa::Aes),
    def(N::AesEncrypt,       "Encrypt",       Isa::Aes, IVAL_UNUSED, 128, 2,
        [NA, Ins::Aesenc, NA, NA, NA, NA, NA, NA, NA, NA],
        Cat::SimpleSimd, F::NONE),
    def(N::AesKeygenAssist,  "KeygenAssist",  Isa::Aes, IVAL_UNUSED, 128, 2,
        [NA, Ins::Aeskeygenassist, NA, NA, NA, NA, NA, NA, NA, NA],
        Cat::Imm, F::NONE.full_range_imm().no_jmp_table_imm()),

    // Bmi1
    supported(N::Bmi1IsSupported, Isa::Bmi1),
    def(N::Bmi1AndNot,            "AndNot",            Isa::Bmi1, IVAL_UNUSED, 0, 2,
        [NA, NA, NA, NA, NA, Ins::Andn, NA, Ins::Andn, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used().no_rmw_semantics()),
    def(N::Bmi1TrailingZeroCount, "TrailingZeroCount", Isa::Bmi1, IVAL_UNUSED, 0, 1,
        [NA, NA, NA, NA, NA, Ins::Tzcnt, NA, Ins::Tzcnt, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used()),

    // Bmi2
    supported(N::Bmi2IsSupported, Isa::Bmi2),
    def(N::Bmi2ParallelBitDeposit, "ParallelBitDeposit", Isa::Bmi2, IVAL_UNUSED, 0, 2,
        [NA, NA, NA, NA, NA, Ins::Pdep, NA, Ins::Pdep, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used().no_rmw_semantics()),
    def(N::Bmi2ParallelBitExtract, "ParallelBitExtract", Isa::Bmi2, IVAL_UNUSED, 0, 2,
        [NA, NA, NA, NA, NA, Ins::Pext, NA, Ins::Pext, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used().no_rmw_semantics()),

    // Fma
    supported(N::FmaIsSupported, Isa::Fma),
    def(N::FmaMultiplyAdd,       "MultiplyAdd",       Isa::Fma, IVAL_UNUSED, 128, 3, row_fp(Ins::Vfmadd213ps, Ins::Vfmadd213pd), Cat::SimpleSimd, F::NONE.unfixed_simd_size()),
    def(N::FmaMultiplyAddScalar, "MultiplyAddScalar", Isa::Fma, IVAL_UNUSED, 128, 3, row_fp(Ins::Vfmadd213ss, Ins::Vfmadd213sd), Cat::SimdScalar, F::NONE.copy_upper_bits()),

    // Lzcnt
    supported(N::LzcntIsSupported, Isa::Lzcnt),
    def(N::LzcntLeadingZeroCount, "LeadingZeroCount", Isa::Lzcnt, IVAL_UNUSED, 0, 1,
        [NA, NA, NA, NA, NA, Ins::Lzcnt, NA, Ins::Lzcnt, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used()),

    // Pclmulqdq
    supported(N::PclmulqdqIsSupported, Isa::Pclmulqdq),
    def(N::PclmulqdqCarrylessMultiply, "CarrylessMultiply", Isa::Pclmulqdq, IVAL_UNUSED, 128, 3,
        [NA, NA, NA, NA, NA, NA, Ins::Pclmulqdq, Ins::Pclmulqdq, NA, NA],
        Cat::Imm, F::NONE.full_range_imm().no_jmp_table_imm()),

    // Popcnt
    supported(N::PopcntIsSupported, Isa::Popcnt),
    def(N::PopcntPopCount, "PopCount", Isa::Popcnt, IVAL_UNUSED, 0, 1,
        [NA, NA, NA, NA, NA, Ins::Popcnt, NA, Ins::Popcnt, NA, NA],
        Cat::Scalar, F::NONE.no_floating_point_used()),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_length_matches_identifier_count() {
        assert_eq!(TABLE.len(), N::COUNT);
    }

    #[test]
    fn test_rows_are_in_ordinal_order() {
        for (idx, info) in TABLE.iter().enumerate() {
            assert_eq!(
                info.id.ordinal(),
                idx,
                "row {} holds {:?} ({})",
                idx,
                info.id,
                info.name
            );
        }
    }

    #[test]
    fn test_every_isa_has_a_supported_property() {
        for info in TABLE.iter().filter(|i| i.category == Cat::IsSupportedProperty) {
            assert_eq!(info.name, "get_IsSupported");
            assert_eq!(info.operand_count, 0);
        }
        let property_isas: Vec<_> = TABLE
            .iter()
            .filter(|i| i.category == Cat::IsSupportedProperty)
            .map(|i| i.isa)
            .collect();
        for info in TABLE.iter() {
            assert!(
                property_isas.contains(&info.isa),
                "{:?} has no get_IsSupported row for {:?}",
                info.id,
                info.isa
            );
        }
    }
}
