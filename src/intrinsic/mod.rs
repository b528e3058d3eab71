//! Hardware-intrinsic identifiers and their descriptor data model.
//!
//! `NamedIntrinsic` is the dense identifier every other component keys on.
//! Declaration order here IS the row order of the static table in
//! `table.rs`; the registry validates that correspondence when it builds
//! its name index, so `TABLE[id as usize]` is a total lookup.

pub mod category;
pub mod descriptor;
pub mod flags;
pub mod table;

pub use category::HwIntrinsicCategory;
pub use descriptor::{
    ElementType, HwIntrinsicInfo, Ins, IVAL_UNUSED, NUM_ARGS_VARIABLE,
};
pub use flags::HwIntrinsicFlags;

/// Identifier of one hardware intrinsic.
///
/// Opaque and dense: the ordinal is a table index, nothing more. Variants
/// are grouped by owning ISA class in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NamedIntrinsic {
    // Sse
    SseIsSupported = 0,
    SseAdd,
    SseCompareEqual,
    SseConvertToInt32,
    SseLoadVector128,
    SseMoveMask,
    SseMultiply,
    SseShuffle,
    SseSqrt,
    SseSqrtScalar,
    SseStaticCast,
    SseStore,
    SseSubtract,

    // Sse2
    Sse2IsSupported,
    Sse2Add,
    Sse2ConvertToInt64,
    Sse2Extract,
    Sse2Insert,
    Sse2LoadVector128,
    Sse2MaskMove,
    Sse2ShiftLeftLogical,
    Sse2Shuffle,
    Sse2Store,

    // Sse3
    Sse3IsSupported,
    Sse3HorizontalAdd,

    // Ssse3
    Ssse3IsSupported,
    Ssse3Abs,
    Ssse3AlignRight,

    // Sse41
    Sse41IsSupported,
    Sse41Blend,
    Sse41DotProduct,
    Sse41Extract,
    Sse41Insert,
    Sse41RoundToNearestInteger,
    Sse41TestAllOnes,

    // Sse42
    Sse42IsSupported,
    Sse42Crc32,

    // Avx
    AvxIsSupported,
    AvxAdd,
    AvxCompare,
    AvxExtractVector128,
    AvxInsertVector128,
    AvxLoadVector256,
    AvxMultiply,
    AvxPermute,
    AvxSetAllVector256,
    AvxStore,
    AvxTestZ,

    // Avx2
    Avx2IsSupported,
    Avx2Add,
    Avx2ExtractVector128,
    Avx2GatherVector128,
    Avx2GatherVector256,
    Avx2GatherMaskVector128,
    Avx2GatherMaskVector256,
    Avx2Permute4x64,
    Avx2ShiftLeftLogical,

    // Aes
    AesIsSupported,
    AesEncrypt,
    AesKeygenAssist,

    // Bmi1
    Bmi1IsSupported,
    Bmi1AndNot,
    Bmi1TrailingZeroCount,

    // Bmi2
    Bmi2IsSupported,
    Bmi2ParallelBitDeposit,
    Bmi2ParallelBitExtract,

    // Fma
    FmaIsSupported,
    FmaMultiplyAdd,
    FmaMultiplyAddScalar,

    // Lzcnt
    LzcntIsSupported,
    LzcntLeadingZeroCount,

    // Pclmulqdq
    PclmulqdqIsSupported,
    PclmulqdqCarrylessMultiply,

    // Popcnt
    PopcntIsSupported,
    PopcntPopCount,
}

impl NamedIntrinsic {
    /// Number of registered intrinsics; equals the static table length.
    pub const COUNT: usize = 75;

    /// Table-row ordinal of this identifier.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}
