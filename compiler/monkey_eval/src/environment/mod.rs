//! Lexical environments.
//!
//! Frames live in an arena and refer to their enclosing frame by index, so
//! a closure stored in the very frame it captured (a recursive `let`) forms
//! no ownership cycle.
//!
//! # Reclamation
//!
//! Frames are allocated in stack order. A caller takes an [`ArenaMark`]
//! before evaluating a call and hands it back to [`EnvArena::release_to`]
//! afterwards; the frames allocated since the mark are dropped unless a
//! closure captured one of them, in which case they are kept for the life
//! of the arena.

use rustc_hash::FxHashMap;

use crate::Value;

/// Handle to a frame in an [`EnvArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnvId(u32);

impl EnvId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena length at some point in time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaMark(usize);

/// A single scope: bindings plus the enclosing frame.
#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<String, Value>,
    outer: Option<EnvId>,
}

/// Owner of every environment frame.
///
/// Retention is tracked by a single high-water mark, not per frame: once a
/// closure captures a frame, every frame allocated before it stays alive
/// too. Recursive code that builds closures at each level therefore keeps
/// all of its call frames until the arena is dropped.
#[derive(Debug, Default)]
pub struct EnvArena {
    frames: Vec<Frame>,
    /// Highest frame referenced by a closure or macro. Frames up to and
    /// including it are never released.
    captured_high: Option<EnvId>,
}

impl EnvArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame with no enclosing frame.
    pub fn new_root(&mut self) -> EnvId {
        self.alloc(None)
    }

    /// A frame whose lookups fall through to `outer`.
    pub fn new_enclosed(&mut self, outer: EnvId) -> EnvId {
        self.alloc(Some(outer))
    }

    fn alloc(&mut self, outer: Option<EnvId>) -> EnvId {
        let id = EnvId(u32::try_from(self.frames.len()).unwrap_or(u32::MAX));
        self.frames.push(Frame {
            bindings: FxHashMap::default(),
            outer,
        });
        id
    }

    /// Look `name` up in `env`, then in each enclosing frame.
    pub fn get(&self, env: EnvId, name: &str) -> Option<&Value> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = self.frames.get(id.index())?;
            if let Some(value) = frame.bindings.get(name) {
                return Some(value);
            }
            current = frame.outer;
        }
        None
    }

    /// Bind `name` in `env` itself, shadowing any outer binding.
    pub fn set(&mut self, env: EnvId, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.get_mut(env.index()) {
            frame.bindings.insert(name.into(), value);
        }
    }

    /// Number of live frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pin `env` (and everything allocated before it): a closure or macro
    /// now refers to it.
    pub fn capture(&mut self, env: EnvId) {
        if self.captured_high.map_or(true, |high| env > high) {
            self.captured_high = Some(env);
        }
    }

    pub fn mark(&self) -> ArenaMark {
        ArenaMark(self.frames.len())
    }

    /// Drop the frames allocated since `mark`, unless one of them has been
    /// captured. Returns whether anything was released.
    pub fn release_to(&mut self, mark: ArenaMark) -> bool {
        let pinned = self
            .captured_high
            .is_some_and(|high| high.index() >= mark.0);
        if pinned || mark.0 >= self.frames.len() {
            return false;
        }
        self.frames.truncate(mark.0);
        true
    }
}
