//! Animation frame tables supplied by the asset side.
//!
//! The simulation only needs each archetype's frame count and frame time;
//! the source rectangles are carried through untouched for the renderer.

use crate::components::Archetype;
use crate::constants::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FrameTableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse frame tables: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("frame table '{0}' has no frames")]
    Empty(String),
    #[error("frame table '{0}' has a non-positive frame time")]
    BadFrameTime(String),
    #[error("no frame table for '{0}'")]
    Missing(String),
}

/// Source rectangle on a sprite sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SourceRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Ordered animation frames for one archetype
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameTable {
    pub sheet: String,
    pub time_per_frame: f32,
    pub frames: Vec<SourceRect>,
}

impl FrameTable {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame to draw; indices past the end wrap
    pub fn frame(&self, index: usize) -> Option<&SourceRect> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(index % self.frames.len())
    }
}

/// Frame tables for every archetype
#[derive(Debug, Clone)]
pub struct FrameTables {
    tables: HashMap<Archetype, FrameTable>,
}

impl FrameTables {
    /// Load tables from a JSON file keyed by archetype name
    pub fn load(path: &Path) -> Result<Self, FrameTableError> {
        let json_str = std::fs::read_to_string(path).map_err(|source| FrameTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json_str)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, FrameTableError> {
        let mut raw: HashMap<String, FrameTable> = serde_json::from_str(json_str)?;

        let mut tables = HashMap::new();
        for archetype in Archetype::ALL {
            let key = archetype.key();
            let table = raw.remove(key).ok_or_else(|| FrameTableError::Missing(key.to_string()))?;
            if table.frames.is_empty() {
                return Err(FrameTableError::Empty(key.to_string()));
            }
            if table.time_per_frame <= 0.0 || !table.time_per_frame.is_finite() {
                return Err(FrameTableError::BadFrameTime(key.to_string()));
            }
            tables.insert(archetype, table);
        }

        Ok(Self { tables })
    }

    /// Frames for the bundled sprite sheets
    pub fn builtin() -> Self {
        let strip = |sheet: &str, time_per_frame: f32, row: f32, count: usize| FrameTable {
            sheet: sheet.to_string(),
            time_per_frame,
            frames: (0..count)
                .map(|i| SourceRect {
                    x: i as f32 * TILE_WIDTH,
                    y: row * TILE_HEIGHT,
                    w: TILE_WIDTH,
                    h: TILE_HEIGHT,
                })
                .collect(),
        };

        let tables = HashMap::from([
            (Archetype::Player, strip("creatures", DEFAULT_TIME_PER_FRAME, 0.0, 2)),
            (Archetype::Skeleton, strip("creatures", DEFAULT_TIME_PER_FRAME, 4.0, 2)),
            (Archetype::Slice, strip("fx", SLICE_TIME_PER_FRAME, 0.0, 3)),
        ]);
        Self { tables }
    }

    pub fn get(&self, archetype: Archetype) -> &FrameTable {
        // Construction guarantees every archetype is present
        &self.tables[&archetype]
    }
}

impl Default for FrameTables {
    fn default() -> Self {
        Self::builtin()
    }
}
