use crate::blocks::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Blocks inserted, updated or moved by the command
    pub changed: Vec<BlockId>,
    /// Block the editor should select after the command
    pub selection: Option<BlockId>,
    pub version: u64,
}
