//! Environment frames for variable scoping.
//!
//! Frames live in an arena and refer to their enclosing frame by
//! [`FrameId`]. The enclosing link is lookup-only; it never owns or frees
//! anything.
//!
//! # Reclamation
//!
//! A frame's parent always has a lower index than the frame itself. When a
//! block or call exits, its frame is released (marked dead) and any run of
//! dead frames at the tail of the arena is truncated, so loops and
//! recursion do not grow the arena. Frames captured by a closure are
//! pinned and never truncated, which keeps every parent of a pinned frame
//! alive as well.

use rustc_hash::FxHashMap;
use tracing::trace;

use hyper_ir::Token;

use crate::errors::{undefined_variable, EvalError};
use crate::Value;

/// Handle to a frame in an [`Environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u32);

impl FrameId {
    /// The global frame. Always present, never released.
    pub const GLOBAL: FrameId = FrameId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One scope's bindings plus a link to its enclosing scope.
#[derive(Debug, Default)]
struct Frame {
    values: FxHashMap<String, Value>,
    enclosing: Option<FrameId>,
    live: bool,
    pinned: bool,
}

/// Arena of frames plus the frame statements currently execute in.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
    current: FrameId,
}

impl Environment {
    pub fn new() -> Self {
        let global = Frame {
            live: true,
            pinned: true,
            ..Frame::default()
        };
        Environment {
            frames: vec![global],
            current: FrameId::GLOBAL,
        }
    }

    #[inline]
    pub fn current(&self) -> FrameId {
        self.current
    }

    #[inline]
    pub fn set_current(&mut self, frame: FrameId) {
        self.current = frame;
    }

    /// Number of frames in the arena, live or not.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Allocate an empty frame enclosed by `enclosing`.
    pub fn push(&mut self, enclosing: FrameId) -> FrameId {
        let id = FrameId(u32::try_from(self.frames.len()).unwrap_or(u32::MAX));
        self.frames.push(Frame {
            values: FxHashMap::default(),
            enclosing: Some(enclosing),
            live: true,
            pinned: false,
        });
        trace!(frame = id.0, enclosing = enclosing.0, "push frame");
        id
    }

    /// Mark `frame` dead and truncate dead, unpinned frames from the tail.
    pub fn release(&mut self, frame: FrameId) {
        if frame == FrameId::GLOBAL {
            return;
        }
        if let Some(slot) = self.frames.get_mut(frame.index()) {
            slot.live = false;
        }
        while let Some(last) = self.frames.last() {
            if last.live || last.pinned {
                break;
            }
            self.frames.pop();
        }
        trace!(frame = frame.0, remaining = self.frames.len(), "release frame");
    }

    /// Keep `frame` for as long as the environment exists.
    pub fn pin(&mut self, frame: FrameId) {
        if let Some(slot) = self.frames.get_mut(frame.index()) {
            slot.pinned = true;
        }
    }

    /// Bind `name` in the current frame, overwriting any existing binding
    /// there. Enclosing frames are untouched.
    pub fn define(&mut self, name: &str, value: Value) {
        self.define_in(self.current, name, value);
    }

    pub fn define_in(&mut self, frame: FrameId, name: &str, value: Value) {
        if let Some(slot) = self.frames.get_mut(frame.index()) {
            slot.values.insert(name.to_string(), value);
        }
    }

    /// Value of the nearest binding of `name`, starting at the current frame.
    pub fn get(&self, name: &Token) -> Result<Value, EvalError> {
        self.lookup(&name.lexeme)
            .cloned()
            .ok_or_else(|| undefined_variable(&name.lexeme, name.line))
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), EvalError> {
        let Some(frame) = self.resolve(&name.lexeme) else {
            return Err(undefined_variable(&name.lexeme, name.line));
        };
        if let Some(slot) = self.frames[frame.index()].values.get_mut(&name.lexeme) {
            *slot = value;
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let frame = self.resolve(name)?;
        self.frames[frame.index()].values.get(name)
    }

    /// Frame holding the nearest binding of `name`.
    fn resolve(&self, name: &str) -> Option<FrameId> {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let frame = self.frames.get(id.index())?;
            if frame.values.contains_key(name) {
                return Some(id);
            }
            cursor = frame.enclosing;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
