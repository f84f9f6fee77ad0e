//! Generic adapter connecting a vertex source to a vertex generator.
//!
//! Splits the source into sub-paths at every move-to, feeds each sub-path to
//! the generator and then yields the generated vertices before moving on.

use crate::basics::{
    is_end_poly, is_move_to, is_stop, is_vertex, PointR, Real, VertexSource, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP,
};

// ============================================================================
// VcgenGenerator trait
// ============================================================================

/// Accumulate-then-generate interface used by `ConvAdaptorVcgen`.
pub trait VcgenGenerator {
    fn remove_all(&mut self);
    fn add_vertex(&mut self, x: Real, y: Real, cmd: u32);
    fn rewind(&mut self, path_id: u32);
    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32;
}

// ============================================================================
// ConvAdaptorVcgen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    Accumulate,
    Generate,
}

/// Adapter feeding a `VertexSource` into a `VcgenGenerator`, one sub-path
/// at a time.
///
/// A sub-path starts at a move-to (or at the first vertex following an
/// end-of-polygon command) and runs up to the next move-to, end-of-polygon
/// or stop. Each sub-path is fed to the generator in one batch; the
/// generated vertices are then passed through before the next batch.
#[derive(Debug)]
pub struct ConvAdaptorVcgen<VS: VertexSource, Gen: VcgenGenerator> {
    source: VS,
    generator: Gen,
    status: Status,
    /// Start of the next sub-path, already read from the source.
    pending: Option<PointR>,
}

impl<VS: VertexSource, Gen: VcgenGenerator> ConvAdaptorVcgen<VS, Gen> {
    pub fn new(source: VS, generator: Gen) -> Self {
        Self {
            source,
            generator,
            status: Status::Initial,
            pending: None,
        }
    }

    pub fn generator(&self) -> &Gen {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut Gen {
        &mut self.generator
    }

    pub fn source(&self) -> &VS {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut VS {
        &mut self.source
    }

    /// Read ahead to the first vertex of the next sub-path, skipping stray
    /// end-of-polygon commands. `None` once the source is exhausted.
    fn next_start(&mut self) -> Option<PointR> {
        let (mut x, mut y) = (0.0, 0.0);
        loop {
            let cmd = self.source.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                return None;
            }
            if is_vertex(cmd) {
                return Some(PointR::new(x, y));
            }
        }
    }

    /// Feed the pending sub-path to the generator. Returns `false` when
    /// there is nothing left to feed.
    fn accumulate(&mut self) -> bool {
        let Some(start) = self.pending.take() else {
            return false;
        };
        self.generator.remove_all();
        self.generator.add_vertex(start.x, start.y, PATH_CMD_MOVE_TO);

        let (mut x, mut y) = (0.0, 0.0);
        loop {
            let cmd = self.source.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_move_to(cmd) {
                self.pending = Some(PointR::new(x, y));
                break;
            }
            self.generator.add_vertex(x, y, cmd);
            if is_end_poly(cmd) {
                self.pending = self.next_start();
                break;
            }
        }
        self.generator.rewind(0);
        true
    }
}

impl<VS: VertexSource, Gen: VcgenGenerator> VertexSource for ConvAdaptorVcgen<VS, Gen> {
    fn rewind(&mut self, path_id: u32) {
        self.source.rewind(path_id);
        self.pending = None;
        self.status = Status::Initial;
    }

    fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
        loop {
            match self.status {
                Status::Initial => {
                    self.pending = self.next_start();
                    self.status = Status::Accumulate;
                }
                Status::Accumulate => {
                    if !self.accumulate() {
                        return PATH_CMD_STOP;
                    }
                    self.status = Status::Generate;
                }
                Status::Generate => {
                    let cmd = self.generator.vertex(x, y);
                    if !is_stop(cmd) {
                        return cmd;
                    }
                    self.status = Status::Accumulate;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{collect_vertices, VertexR, PATH_CMD_LINE_TO};
    use crate::path_storage::PathStorage;

    /// Records every sub-path it is fed and echoes it back.
    #[derive(Default)]
    struct EchoGenerator {
        vertices: Vec<VertexR>,
        idx: usize,
        batches: usize,
    }

    impl VcgenGenerator for EchoGenerator {
        fn remove_all(&mut self) {
            self.vertices.clear();
            self.batches += 1;
        }
        fn add_vertex(&mut self, x: Real, y: Real, cmd: u32) {
            self.vertices.push(VertexR::new(x, y, cmd));
        }
        fn rewind(&mut self, _path_id: u32) {
            self.idx = 0;
        }
        fn vertex(&mut self, x: &mut Real, y: &mut Real) -> u32 {
            let Some(v) = self.vertices.get(self.idx) else {
                return PATH_CMD_STOP;
            };
            self.idx += 1;
            *x = v.x;
            *y = v.y;
            v.cmd
        }
    }

    #[test]
    fn test_empty_source() {
        let mut adaptor = ConvAdaptorVcgen::new(PathStorage::new(), EchoGenerator::default());
        assert!(collect_vertices(&mut adaptor, 0).is_empty());
        assert_eq!(adaptor.generator().batches, 0);
    }

    #[test]
    fn test_passthrough_with_echo() {
        let mut path = PathStorage::new();
        path.move_to(10.0, 20.0);
        path.line_to(30.0, 40.0);

        let mut adaptor = ConvAdaptorVcgen::new(path, EchoGenerator::default());
        let verts = collect_vertices(&mut adaptor, 0);
        assert_eq!(
            verts,
            vec![
                VertexR::new(10.0, 20.0, PATH_CMD_MOVE_TO),
                VertexR::new(30.0, 40.0, PATH_CMD_LINE_TO),
            ]
        );
    }

    #[test]
    fn test_closed_sub_path_then_open_one() {
        let mut path = PathStorage::new();
        path.concat_poly(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0], true);
        path.concat_poly(&[10.0, 0.0, 12.0, 0.0], false);

        let mut adaptor = ConvAdaptorVcgen::new(path, EchoGenerator::default());
        let verts = collect_vertices(&mut adaptor, 0);
        assert_eq!(adaptor.generator().batches, 2);
        assert_eq!(verts.len(), 6);
        assert!(is_end_poly(verts[3].cmd));
        assert_eq!(verts[4], VertexR::new(10.0, 0.0, PATH_CMD_MOVE_TO));
    }

    #[test]
    fn test_line_to_after_close_starts_new_sub_path() {
        let mut path = PathStorage::new();
        path.concat_poly(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0], true);
        path.line_to(8.0, 8.0);
        path.line_to(9.0, 8.0);

        let mut adaptor = ConvAdaptorVcgen::new(path, EchoGenerator::default());
        let verts = collect_vertices(&mut adaptor, 0);
        assert_eq!(adaptor.generator().batches, 2);
        assert_eq!(verts[4], VertexR::new(8.0, 8.0, PATH_CMD_MOVE_TO));
        assert_eq!(verts[5], VertexR::new(9.0, 8.0, PATH_CMD_LINE_TO));
    }

    #[test]
    fn test_rewind_restarts_from_first_sub_path() {
        let mut path = PathStorage::new();
        path.concat_poly(&[0.0, 0.0, 1.0, 0.0], false);
        path.concat_poly(&[5.0, 5.0, 6.0, 5.0], false);

        let mut adaptor = ConvAdaptorVcgen::new(path, EchoGenerator::default());
        let (mut x, mut y) = (0.0, 0.0);
        adaptor.rewind(0);
        adaptor.vertex(&mut x, &mut y);
        adaptor.vertex(&mut x, &mut y);
        adaptor.vertex(&mut x, &mut y);
        assert_eq!((x, y), (5.0, 5.0));

        let verts = collect_vertices(&mut adaptor, 0);
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[0], VertexR::new(0.0, 0.0, PATH_CMD_MOVE_TO));
    }

    #[test]
    fn test_splits_sub_paths() {
        let mut path = PathStorage::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        path.move_to(5.0, 5.0);
        path.line_to(6.0, 5.0);
        path.line_to(6.0, 6.0);

        let mut adaptor = ConvAdaptorVcgen::new(path, EchoGenerator::default());
        let verts = collect_vertices(&mut adaptor, 0);
        assert_eq!(verts.len(), 5);
        assert_eq!(adaptor.generator().batches, 2);
        assert_eq!(verts[2], VertexR::new(5.0, 5.0, PATH_CMD_MOVE_TO));
    }
}
