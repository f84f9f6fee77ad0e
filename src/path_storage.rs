//! Path storage: a minimal path-command producer.
//!
//! Stores straight-segment paths as tagged vertices and replays them
//! through `VertexSource`. Curves are expected to be flattened before they
//! get here.

use crate::basics::{
    is_vertex, Real, VertexR, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO,
    PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};

/// Ordered sequence of tagged vertices, possibly holding several sub-paths
/// separated by move-to commands.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<VertexR>,
    iterator: usize,
}

impl PathStorage {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
        }
    }

    /// Remove all vertices (keeps allocated memory).
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.iterator = 0;
    }

    pub fn move_to(&mut self, x: Real, y: Real) {
        self.vertices.push(VertexR::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: Real, y: Real) {
        self.vertices.push(VertexR::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add an end_poly command with `flags`, unless the path is empty or
    /// already terminated.
    pub fn end_poly(&mut self, flags: u32) {
        if is_vertex(self.last_command()) {
            self.vertices
                .push(VertexR::new(0.0, 0.0, PATH_CMD_END_POLY | flags));
        }
    }

    /// Close the current polygon.
    pub fn close_polygon(&mut self) {
        self.end_poly(PATH_FLAGS_CLOSE);
    }

    /// Append a polyline given as `[x0, y0, x1, y1, ...]`, optionally closed.
    pub fn concat_poly(&mut self, data: &[Real], closed: bool) {
        for (i, pair) in data.chunks_exact(2).enumerate() {
            if i == 0 {
                self.move_to(pair[0], pair[1]);
            } else {
                self.line_to(pair[0], pair[1]);
            }
        }
        if closed {
            self.close_polygon();
        }
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Last command, or `PATH_CMD_STOP` if empty.
    pub fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    pub fn vertices(&self) -> &[VertexR] {
        &self.vertices
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        let Some(v) = self.vertices.get(self.iterator) else {
            return PATH_CMD_STOP;
        };
        self.iterator += 1;
        *x = v.x;
        *y = v.y;
        v.cmd
    }
}

// ===================================================================
// Adaptors
// ===================================================================

/// Borrowed flat coordinate slice `[x0, y0, x1, y1, ...]` as a
/// `VertexSource`.
#[derive(Debug, Clone)]
pub struct PolyPlainAdaptor<'a> {
    data: &'a [Real],
    index: usize,
    closed: bool,
    stop: bool,
}

impl<'a> PolyPlainAdaptor<'a> {
    pub fn new(data: &'a [Real], closed: bool) -> Self {
        Self {
            data,
            index: 0,
            closed,
            stop: false,
        }
    }
}

impl VertexSource for PolyPlainAdaptor<'_> {
    fn rewind(&mut self, _path_id: u32) {
        self.index = 0;
        self.stop = false;
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        if self.index + 1 < self.data.len() {
            let first = self.index == 0;
            *x = self.data[self.index];
            *y = self.data[self.index + 1];
            self.index += 2;
            return if first {
                PATH_CMD_MOVE_TO
            } else {
                PATH_CMD_LINE_TO
            };
        }
        *x = 0.0;
        *y = 0.0;
        if self.closed && !self.stop {
            self.stop = true;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        PATH_CMD_STOP
    }
}
