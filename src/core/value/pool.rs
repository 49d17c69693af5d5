use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicUsize, Ordering},
};

use serde::{Deserialize, Serialize};

use super::{Process, ProcessContext};
use crate::{
    core::{
        output::RenderedOutput,
        random::SharedRandom,
        walk::{Definition, PlaceholderStyle, Walk},
    },
    error::{LangError, LangResult},
};

/// How a [`StringPool`] picks its next entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolMode {
    /// Uniformly random entry on every poll; the cursor is untouched.
    #[default]
    Random,
    /// Entries in order, wrapping to the first after the last.
    Sequential,
    /// Entries in reverse order, wrapping to the last after the first.
    SequentialReversed,
}

impl fmt::Display for PoolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolMode::Random => write!(f, "RANDOM"),
            PoolMode::Sequential => write!(f, "SEQUENTIAL"),
            PoolMode::SequentialReversed => write!(f, "SEQUENTIAL_REVERSED"),
        }
    }
}

impl FromStr for PoolMode {
    type Err = String;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "RANDOM" => Ok(PoolMode::Random),
            "SEQUENTIAL" => Ok(PoolMode::Sequential),
            "SEQUENTIAL_REVERSED" => Ok(PoolMode::SequentialReversed),
            _ => Err(format!("unknown pool mode \"{s}\"")),
        }
    }
}

/// An ordered set of interchangeable strings polled according to a [`PoolMode`].
///
/// The cursor is the only state that resolution mutates in place. It is an
/// atomic so a pool can sit inside a shared store; concurrent sequential
/// polls each observe a distinct cursor position, but their interleaving is
/// not ordered.
///
/// # Cursor reset rule
///
/// [`StringPool::push`] resets the cursor to `0`, except in
/// [`PoolMode::SequentialReversed`] where it moves to the new last index.
/// [`StringPool::with_entries`] always starts at `0`. A reversed pool built
/// from a list therefore polls `a, c, b, a` over `[a, b, c]`, while one built
/// by pushing polls `c, b, a, c`.
#[derive(Debug)]
pub struct StringPool {
    mode: PoolMode,
    entries: Vec<String>,
    cursor: AtomicUsize,
}

impl StringPool {
    pub fn new(mode: PoolMode) -> Self {
        Self::with_entries(mode, Vec::new())
    }

    pub fn with_entries(mode: PoolMode, entries: Vec<String>) -> Self {
        Self {
            mode,
            entries,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn mode(&self) -> PoolMode {
        self.mode
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index the next sequential poll will return.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Add an entry and reset the cursor (see the type docs).
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        *self.cursor.get_mut() = match self.mode {
            PoolMode::SequentialReversed => self.entries.len() - 1,
            PoolMode::Random | PoolMode::Sequential => 0,
        };
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        *self.cursor.get_mut() = 0;
    }

    /// Return the next entry.
    ///
    /// Fails with [`LangError::EmptyPool`] when the pool has no entries.
    pub fn poll(&self, random: &SharedRandom) -> LangResult<&str> {
        let index = self.roll(random).ok_or(LangError::EmptyPool)?;
        Ok(&self.entries[index])
    }

    /// Pick the next index and advance the cursor. `None` when empty.
    fn roll(&self, random: &SharedRandom) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let index = match self.mode {
            PoolMode::Random => random.next_index(len),
            PoolMode::Sequential => self.advance(|c| if c + 1 >= len { 0 } else { c + 1 }),
            PoolMode::SequentialReversed => {
                self.advance(|c| if c == 0 { len - 1 } else { (c - 1).min(len - 1) })
            }
        };
        Some(index % len)
    }

    fn advance(&self, step: impl Fn(usize) -> usize) -> usize {
        match self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| Some(step(c)))
        {
            Ok(previous) | Err(previous) => previous,
        }
    }
}

impl Clone for StringPool {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            entries: self.entries.clone(),
            cursor: AtomicUsize::new(self.cursor()),
        }
    }
}

impl Walk for StringPool {
    fn walk(&self, definition: &Definition<'_>) -> Self {
        Self {
            mode: self.mode,
            entries: definition.walk_lines(&self.entries),
            cursor: AtomicUsize::new(self.cursor()),
        }
    }

    fn needs_walk(&self, style: PlaceholderStyle) -> bool {
        style.needs_walk_any(&self.entries)
    }
}

impl Process for StringPool {
    /// Polls once, then binds arguments into the polled entry. An empty pool
    /// renders as empty text.
    fn process(&self, ctx: &ProcessContext<'_>) -> RenderedOutput {
        match self.poll(ctx.random) {
            Ok(entry) => RenderedOutput::text(ctx.definition.walk_str(entry)),
            Err(_) => RenderedOutput::default(),
        }
    }
}
