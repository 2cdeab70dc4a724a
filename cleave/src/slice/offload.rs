//! Running slices off the calling thread, on the rayon pool.

use super::error::Result;
use super::hull::SlicedHull;
use super::mesh::MeshData;
use super::plane::Plane;
use super::settings::SliceSettings;
use super::slicer::Slicer;
use rayon::prelude::*;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

/// The result of a job handed to [`submit`], delivered once the job finishes.
#[derive(Debug)]
pub struct Pending<T> {
    rx: Receiver<T>,
}

impl<T> Pending<T> {
    /// Takes the result if the job is done. Suits polling from a frame or event loop.
    /// Returns None while the job runs, and after the result has been taken.
    pub fn try_take(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until the job is done. None if the job panicked.
    pub fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }
}

/// Runs `job` on the rayon pool.
pub fn submit<T, F>(job: F) -> Pending<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = channel();
    rayon::spawn(move || {
        // the receiver may be gone already, nobody is waiting then
        let _ = tx.send(job());
    });
    Pending { rx }
}

/// Runs `job` on the rayon pool and passes its result to `on_done`, on the worker thread.
pub fn submit_with<T, F, C>(job: F, on_done: C)
where
    F: FnOnce() -> T + Send + 'static,
    C: FnOnce(T) + Send + 'static,
{
    rayon::spawn(move || on_done(job()));
}

/// One mesh and the plane to cut it with.
#[derive(Debug, Clone, Copy)]
pub struct SliceJob<'a> {
    pub mesh: &'a MeshData,
    pub plane: Plane,
}

/// Slices independent jobs in parallel, one [`Slicer`] per worker. Results come back in job order.
pub fn slice_batch(jobs: &[SliceJob<'_>], settings: &SliceSettings) -> Vec<Result<Option<SlicedHull>>> {
    jobs.par_iter()
        .map_init(
            || Slicer::new(*settings),
            |slicer, job| match slicer {
                Ok(slicer) => slicer.slice(job.mesh, &job.plane),
                Err(err) => Err(err.clone()),
            },
        )
        .collect()
}
