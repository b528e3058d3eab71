//! Call-node view of one intrinsic call site.
//!
//! The IR importer owns the real tree node; this module only defines the
//! slice of it the descriptor engine consumes — the operand list and
//! which operands are already known to be compile-time constants. Nothing
//! here is shared between compilation units.

use crate::intrinsic::{HwIntrinsicCategory, NamedIntrinsic};
use crate::registry;

/// One operand of an intrinsic call, as the engine needs to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOperand {
    /// Known compile-time constant.
    Const(i64),
    /// Anything else: register value, memory operand, unresolved.
    Value,
}

impl CallOperand {
    pub fn is_const(&self) -> bool {
        matches!(self, CallOperand::Const(_))
    }

    pub fn const_value(&self) -> Option<i64> {
        match self {
            CallOperand::Const(value) => Some(*value),
            CallOperand::Value => None,
        }
    }
}

/// An intrinsic call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwIntrinsicCall {
    pub id: NamedIntrinsic,
    pub operands: Vec<CallOperand>,
}

impl HwIntrinsicCall {
    pub fn new(id: NamedIntrinsic, operands: Vec<CallOperand>) -> Self {
        HwIntrinsicCall { id, operands }
    }

    /// Operand count for this call. The table value is nominal; intrinsics
    /// with optional or variadic operands store a negative count and the
    /// live operand list is authoritative.
    pub fn num_args(&self) -> usize {
        let stored = registry::lookup(self.id).operand_count;
        if stored >= 0 {
            stored as usize
        } else {
            self.operands.len()
        }
    }

    /// The trailing operand — where the immediate goes for `Imm`-category
    /// intrinsics.
    pub fn last_op(&self) -> Option<&CallOperand> {
        self.operands.last()
    }

    /// Whether the operand at `index` is this call's required-immediate
    /// position: the trailing operand of an `Imm`-category (or
    /// immediate-overload `maybe_imm`) intrinsic.
    pub fn is_imm_operand(&self, index: usize) -> bool {
        let info = registry::lookup(self.id);
        let takes_imm = info.category == HwIntrinsicCategory::Imm || info.flags.maybe_imm;
        takes_imm && !self.operands.is_empty() && index == self.operands.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_operand_count_wins_over_node() {
        // Sse.Add is a fixed two-operand intrinsic.
        let call = HwIntrinsicCall::new(
            NamedIntrinsic::SseAdd,
            vec![CallOperand::Value, CallOperand::Value],
        );
        assert_eq!(call.num_args(), 2);
    }

    #[test]
    fn test_variable_operand_count_comes_from_node() {
        // Sse2.Shuffle has a two-operand integer form and a three-operand
        // double form behind one identifier.
        let two = HwIntrinsicCall::new(
            NamedIntrinsic::Sse2Shuffle,
            vec![CallOperand::Value, CallOperand::Const(0b0101)],
        );
        assert_eq!(two.num_args(), 2);

        let three = HwIntrinsicCall::new(
            NamedIntrinsic::Sse2Shuffle,
            vec![CallOperand::Value, CallOperand::Value, CallOperand::Const(1)],
        );
        assert_eq!(three.num_args(), 3);
    }

    #[test]
    fn test_last_op() {
        let call = HwIntrinsicCall::new(
            NamedIntrinsic::SseShuffle,
            vec![CallOperand::Value, CallOperand::Value, CallOperand::Const(27)],
        );
        assert_eq!(call.last_op(), Some(&CallOperand::Const(27)));

        let empty = HwIntrinsicCall::new(NamedIntrinsic::SseIsSupported, vec![]);
        assert_eq!(empty.last_op(), None);
    }

    #[test]
    fn test_imm_operand_position() {
        let call = HwIntrinsicCall::new(
            NamedIntrinsic::SseShuffle,
            vec![CallOperand::Value, CallOperand::Value, CallOperand::Const(27)],
        );
        assert!(call.is_imm_operand(2));
        assert!(!call.is_imm_operand(0));
        assert!(!call.is_imm_operand(1));
    }

    #[test]
    fn test_non_imm_intrinsic_has_no_imm_operand() {
        let call = HwIntrinsicCall::new(
            NamedIntrinsic::SseAdd,
            vec![CallOperand::Value, CallOperand::Value],
        );
        assert!(!call.is_imm_operand(1));
    }

    #[test]
    fn test_maybe_imm_trailing_operand() {
        // Shift by constant resolves to the immediate overload.
        let call = HwIntrinsicCall::new(
            NamedIntrinsic::Sse2ShiftLeftLogical,
            vec![CallOperand::Value, CallOperand::Const(3)],
        );
        assert!(call.is_imm_operand(1));
    }
}
