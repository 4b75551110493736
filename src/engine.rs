use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::mesh::grid::expected_vertex_count;
use crate::mesh::surface::SurfaceMesh;

pub type HeightFn = Arc<dyn Fn(f32, f32) -> f32 + Send + Sync>;

pub enum MeshCommand {
    BuildSurface {
        height: HeightFn,
        origin: (f32, f32),
        step: (f32, f32),
        steps: (usize, usize),
    },
    Stop,
}

pub enum MeshResult {
    Surface(SurfaceMesh),
    Error(String),
}

/// Builds surface meshes on a worker thread so a caller's frame loop never
/// blocks on a large grid. Results come back over a bounded channel.
pub struct MeshEngine {
    tx_cmd: Sender<MeshCommand>,
    rx_result: Receiver<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MeshEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<MeshCommand>();
        let (tx_result, rx_result) = channel::bounded::<MeshResult>(2);
        let last_error = Arc::new(Mutex::new(None));
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::spawn(move || {
            mesh_thread(rx_cmd, tx_result, last_error_clone);
        });

        Self {
            tx_cmd,
            rx_result,
            last_error,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn build_surface(
        &self,
        height: HeightFn,
        origin: (f32, f32),
        step: (f32, f32),
        steps: (usize, usize),
    ) {
        let _ = self.tx_cmd.send(MeshCommand::BuildSurface {
            height,
            origin,
            step,
            steps,
        });
    }

    pub fn try_recv_result(&self) -> Option<MeshResult> {
        self.rx_result.try_recv().ok()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
    }
}

impl Default for MeshEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn mesh_thread(
    rx_cmd: Receiver<MeshCommand>,
    tx_result: Sender<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    loop {
        let cmd = match rx_cmd.recv() {
            Ok(c) => c,
            Err(_) => return,
        };

        match cmd {
            MeshCommand::BuildSurface {
                height,
                origin,
                step,
                steps,
            } => {
                *last_error.lock() = None;

                match build_surface(height, origin, step, steps) {
                    Ok(mesh) => {
                        log::debug!(
                            "surface built: {} vertices, {} triangles",
                            mesh.vertex_count(),
                            mesh.triangle_count()
                        );
                        let _ = tx_result.send(MeshResult::Surface(mesh));
                    }
                    Err(e) => {
                        log::warn!("surface build failed: {e}");
                        *last_error.lock() = Some(e.clone());
                        let _ = tx_result.send(MeshResult::Error(e));
                    }
                }
            }
            MeshCommand::Stop => return,
        }
    }
}

fn build_surface(
    height: HeightFn,
    origin: (f32, f32),
    step: (f32, f32),
    steps: (usize, usize),
) -> Result<SurfaceMesh, String> {
    if !origin.0.is_finite() || !origin.1.is_finite() {
        return Err(format!(
            "origin must be finite, got ({}, {})",
            origin.0, origin.1
        ));
    }
    if !step.0.is_finite() || !step.1.is_finite() {
        return Err(format!("step must be finite, got ({}, {})", step.0, step.1));
    }

    let vertex_count = expected_vertex_count(steps.0, steps.1);
    if vertex_count > u32::MAX as usize {
        return Err(format!(
            "grid of {}x{} cells needs {} vertices, more than u32 indices can address",
            steps.0, steps.1, vertex_count
        ));
    }

    Ok(SurfaceMesh::build(origin, step, steps, |x, y| height(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn recv_blocking(engine: &MeshEngine) -> MeshResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = engine.try_recv_result() {
                return result;
            }
            assert!(Instant::now() < deadline, "engine produced no result");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn build_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();

        let engine = MeshEngine::new();
        engine.build_surface(Arc::new(|x, y| x.sin() * y.sin()), (0.0, 0.0), (0.1, 0.1), (8, 8));

        match recv_blocking(&engine) {
            MeshResult::Surface(mesh) => {
                assert_eq!(mesh.vertex_count(), 81);
                assert_eq!(mesh.indices.len(), 6 * 8 * 8);
            }
            MeshResult::Error(e) => panic!("unexpected build error: {e}"),
        }
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn non_finite_step_is_reported() {
        let engine = MeshEngine::new();
        engine.build_surface(Arc::new(|_, _| 0.0), (0.0, 0.0), (f32::NAN, 1.0), (2, 2));

        match recv_blocking(&engine) {
            MeshResult::Error(e) => assert!(e.contains("finite"), "unexpected message: {e}"),
            MeshResult::Surface(_) => panic!("NaN step should not build"),
        }
        assert!(engine.last_error().is_some());
    }

    #[test]
    fn error_clears_on_next_build() {
        let engine = MeshEngine::new();
        engine.build_surface(Arc::new(|_, _| 0.0), (f32::INFINITY, 0.0), (1.0, 1.0), (1, 1));
        let _ = recv_blocking(&engine);
        assert!(engine.last_error().is_some());

        engine.build_surface(Arc::new(|_, _| 0.0), (0.0, 0.0), (1.0, 1.0), (1, 1));
        match recv_blocking(&engine) {
            MeshResult::Surface(mesh) => assert_eq!(mesh.vertex_count(), 4),
            MeshResult::Error(e) => panic!("unexpected build error: {e}"),
        }
        assert!(engine.last_error().is_none());
    }
}
