//! Symbol lookups the decoders query but do not own.
//!
//! Keycode names and macro opcode tables live with the tool that ships them;
//! the decoders only see them through [`Symbols`].

use std::borrow::Cow;

/// How a macro step's argument byte is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// The argument byte is ignored.
    Nothing,
    /// A HID keycode.
    Keycode,
    /// A bitmask of the eight hand-specific modifiers.
    Modifiers,
    /// A literal delay value.
    Delay,
}

pub trait Symbols {
    /// Script name of a HID keycode.
    fn key_name(&self, code: u8) -> Cow<'static, str>;

    /// Script name of a macro opcode (push-modifiers bit already stripped).
    fn macro_op_name(&self, op: u8) -> Cow<'static, str>;

    /// Argument kind declared for a macro opcode, `None` if unrecognized.
    fn macro_arg_kind(&self, op: u8) -> Option<ArgKind>;
}
