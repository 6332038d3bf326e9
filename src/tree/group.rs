//! Base-name grouping of directory entries
//!
//! A markdown file and a directory that share a base name collapse into one
//! group, which the builder renders as a single node.

use crate::tree::path::markdown_base_name;
use crate::tree::walker::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

/// Entries sharing one base name. There is no empty case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryGroup {
    /// Only `<base>.md` exists
    Page { file: PathBuf },
    /// Only the directory `<base>` exists
    Folder { dir: PathBuf },
    /// Both exist; the folder label links to the page
    FolderWithPage { dir: PathBuf, page: PathBuf },
}

impl EntryGroup {
    fn with_page(self, file: PathBuf) -> Self {
        match self {
            EntryGroup::Folder { dir } | EntryGroup::FolderWithPage { dir, .. } => {
                EntryGroup::FolderWithPage { dir, page: file }
            }
            EntryGroup::Page { .. } => EntryGroup::Page { file },
        }
    }

    fn with_dir(self, dir: PathBuf) -> Self {
        match self {
            EntryGroup::Page { file: page } | EntryGroup::FolderWithPage { page, .. } => {
                EntryGroup::FolderWithPage { dir, page }
            }
            EntryGroup::Folder { .. } => EntryGroup::Folder { dir },
        }
    }
}

/// Groups of one directory, keyed by base name.
///
/// Keys keep the order in which they were first seen, so unlisted groups
/// come out in filesystem enumeration order. Groups are handed out at most
/// once.
#[derive(Debug, Default)]
pub struct GroupSet {
    slots: Vec<(String, Option<EntryGroup>)>,
    index: HashMap<String, usize>,
}

impl GroupSet {
    /// Group visible entries. Files without the `.md` suffix are dropped.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut set = GroupSet::default();
        for entry in entries {
            match entry {
                Entry::Directory { name, path } => set.insert_dir(name, path),
                Entry::File { name, path } => {
                    if let Some(base) = markdown_base_name(&name) {
                        set.insert_page(base.to_string(), path);
                    }
                }
            }
        }
        set
    }

    fn insert_dir(&mut self, base: String, dir: PathBuf) {
        match self.index.get(&base).copied() {
            Some(idx) => self.update(idx, |group| group.with_dir(dir)),
            None => self.push(base, EntryGroup::Folder { dir }),
        }
    }

    fn insert_page(&mut self, base: String, file: PathBuf) {
        match self.index.get(&base).copied() {
            Some(idx) => self.update(idx, |group| group.with_page(file)),
            None => self.push(base, EntryGroup::Page { file }),
        }
    }

    fn update(&mut self, idx: usize, f: impl FnOnce(EntryGroup) -> EntryGroup) {
        let slot = &mut self.slots[idx].1;
        *slot = slot.take().map(f);
    }

    fn push(&mut self, base: String, group: EntryGroup) {
        self.index.insert(base.clone(), self.slots.len());
        self.slots.push((base, Some(group)));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Take the group for `base` if it exists and was not taken yet.
    pub fn take(&mut self, base: &str) -> Option<(String, EntryGroup)> {
        let idx = *self.index.get(base)?;
        let (name, slot) = &mut self.slots[idx];
        slot.take().map(|group| (name.clone(), group))
    }

    /// Take every group not handed out yet, in first-seen order.
    pub fn take_remaining(&mut self) -> Vec<(String, EntryGroup)> {
        self.slots
            .iter_mut()
            .filter_map(|(name, slot)| slot.take().map(|group| (name.clone(), group)))
            .collect()
    }
}
