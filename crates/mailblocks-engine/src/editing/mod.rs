//! Edit commands for templates.
//!
//! The UI never mutates a [`Template`](crate::models::Template) directly.
//! Every change is a [`Cmd`] passed to `Template::apply`, which returns a
//! [`Patch`] describing what changed and which block to select next.

pub mod commands;
pub mod patch;

pub use commands::Cmd;
pub use patch::Patch;

use crate::blocks::{BlockId, BlockKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),
    #[error("Block {id} is a {expected} block and cannot become a {found} block")]
    KindMismatch {
        id: BlockId,
        expected: BlockKind,
        found: BlockKind,
    },
}
