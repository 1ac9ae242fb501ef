use crate::blocks::{Block, BlockContent, BlockId};
use crate::editing::{EditError, Patch};
use crate::models::{Template, TemplateSettings};

/// Editing commands accepted by [`Template::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Insert a new block; `index` is clamped to the block count
    InsertBlock { index: usize, content: BlockContent },
    RemoveBlock { id: BlockId },
    /// Move a block to position `to`, clamped to the last position
    MoveBlock { id: BlockId, to: usize },
    /// Replace a block's attributes; the kind must not change
    UpdateBlock { id: BlockId, content: BlockContent },
    /// Insert a copy of a block directly after it
    DuplicateBlock { id: BlockId },
    UpdateSettings { settings: TemplateSettings },
}

impl Template {
    /// Apply a command, bumping the version on success.
    /// A failed command leaves the template untouched.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        log::debug!("applying {cmd:?} to template {}", self.id);

        let (changed, selection) = match cmd {
            Cmd::InsertBlock { index, content } => {
                let block = Block::new(content);
                let id = block.id;
                let index = index.min(self.blocks.len());
                self.blocks.insert(index, block);
                (vec![id], Some(id))
            }
            Cmd::RemoveBlock { id } => {
                let index = self.index_of(id)?;
                self.blocks.remove(index);
                // Select the block that slid into the gap, or the new last block
                let next = self
                    .blocks
                    .get(index)
                    .or_else(|| self.blocks.last())
                    .map(|b| b.id);
                (vec![id], next)
            }
            Cmd::MoveBlock { id, to } => {
                let from = self.index_of(id)?;
                let block = self.blocks.remove(from);
                let to = to.min(self.blocks.len());
                self.blocks.insert(to, block);
                (vec![id], Some(id))
            }
            Cmd::UpdateBlock { id, content } => {
                let index = self.index_of(id)?;
                self.blocks[index].update(content)?;
                (vec![id], Some(id))
            }
            Cmd::DuplicateBlock { id } => {
                let index = self.index_of(id)?;
                let copy = Block::new(self.blocks[index].content.clone());
                let copy_id = copy.id;
                self.blocks.insert(index + 1, copy);
                (vec![copy_id], Some(copy_id))
            }
            Cmd::UpdateSettings { settings } => {
                self.settings = settings;
                (Vec::new(), None)
            }
        };

        self.version += 1;
        Ok(Patch {
            changed,
            selection,
            version: self.version,
        })
    }

    fn index_of(&self, id: BlockId) -> Result<usize, EditError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(EditError::BlockNotFound(id))
    }
}
