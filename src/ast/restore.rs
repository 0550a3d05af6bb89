use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::ast::RestoreError;

/// Rendering modes for [`Restore::restore`].
///
/// This is an open bit set: a node only looks at the bits it understands and
/// ignores the rest, so callers may carry bits defined by newer layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestoreFlag(u32);

impl RestoreFlag {
    pub const DEFAULT: RestoreFlag = RestoreFlag(0);
    /// Rewrite system variables removed in MySQL 8.0 to their replacements.
    pub const COMPAT_80: RestoreFlag = RestoreFlag(1);
    /// Backtick-quote every identifier, not only the ones that need it.
    pub const QUOTE_IDENTIFIERS: RestoreFlag = RestoreFlag(1 << 1);

    pub const fn from_bits(bits: u32) -> Self {
        RestoreFlag(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn has(self, other: RestoreFlag) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn with(self, other: RestoreFlag) -> Self {
        RestoreFlag(self.0 | other.0)
    }

    pub const fn without(self, other: RestoreFlag) -> Self {
        RestoreFlag(self.0 & !other.0)
    }
}

impl BitOr for RestoreFlag {
    type Output = RestoreFlag;

    fn bitor(self, rhs: RestoreFlag) -> RestoreFlag {
        self.with(rhs)
    }
}

impl BitOrAssign for RestoreFlag {
    fn bitor_assign(&mut self, rhs: RestoreFlag) {
        *self = self.with(rhs);
    }
}

/// Reconstructs canonical SQL text for a node.
///
/// Text is appended to `sb`. When `args` is present, every placeholder met
/// during the walk pushes its index, in output order.
pub trait Restore {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError>;
}

impl<T: Restore + ?Sized> Restore for Box<T> {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        (**self).restore(flag, sb, args)
    }
}

/// Renders a child node, tagging any failure with the child's slot and the
/// output length at the point of failure.
pub(crate) fn restore_child<R: Restore + ?Sized>(
    node: &R,
    slot: &'static str,
    flag: RestoreFlag,
    sb: &mut String,
    args: Option<&mut Vec<usize>>,
) -> Result<(), RestoreError> {
    node.restore(flag, sb, args).map_err(|err| err.within(slot, sb.len()))
}

/// Renders `node` into a fresh buffer, collecting placeholder indices.
pub fn restore_to_string<R: Restore + ?Sized>(flag: RestoreFlag, node: &R) -> Result<(String, Vec<usize>), RestoreError> {
    let mut sb = String::new();
    let mut args = vec![];

    tracing::trace!(flag = flag.bits(), "restoring node");

    match node.restore(flag, &mut sb, Some(&mut args)) {
        Ok(()) => Ok((sb, args)),
        Err(err) => {
            tracing::warn!(error = %err, written = sb.len(), "failed to restore node, discarding partial output");
            Err(err)
        }
    }
}

/// Like [`restore_to_string`] but for trees known to be renderable; a failure
/// here means the parser handed over a malformed tree.
pub fn must_restore_to_string<R: Restore + ?Sized>(flag: RestoreFlag, node: &R) -> String {
    let mut sb = String::new();
    if let Err(err) = node.restore(flag, &mut sb, None) {
        panic!("cannot restore node: {}", err);
    }
    sb
}

#[cfg(test)]
mod tests {
    use crate::ast::RestoreFlag;

    #[test]
    pub fn test_flag_has() {
        let flag = RestoreFlag::COMPAT_80 | RestoreFlag::QUOTE_IDENTIFIERS;

        assert!(flag.has(RestoreFlag::COMPAT_80));
        assert!(flag.has(RestoreFlag::QUOTE_IDENTIFIERS));
        assert!(!RestoreFlag::DEFAULT.has(RestoreFlag::COMPAT_80));
        assert!(!flag.has(RestoreFlag::DEFAULT));
    }

    #[test]
    pub fn test_flag_keeps_unknown_bits() {
        let flag = RestoreFlag::from_bits(1 << 20) | RestoreFlag::COMPAT_80;

        assert_eq!(flag.bits(), (1 << 20) | 1);
        assert!(flag.has(RestoreFlag::from_bits(1 << 20)));
        assert_eq!(flag.without(RestoreFlag::COMPAT_80).bits(), 1 << 20);
    }

    #[test]
    pub fn test_flag_serde_is_plain_number() {
        let flag = RestoreFlag::COMPAT_80 | RestoreFlag::QUOTE_IDENTIFIERS;

        let json = serde_json::to_string(&flag).expect("Failed to serialize flag");
        assert_eq!(json, "3");

        let back: RestoreFlag = serde_json::from_str(&json).expect("Failed to deserialize flag");
        assert_eq!(back, flag);
    }
}
