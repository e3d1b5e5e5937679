use crate::{ApplyOutcome, CaptureTicket, CubeSession, SessionError};
use cube_scan_core::FaceId;
use cube_scan_face::FaceValidation;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, thread-safe handle to one [`CubeSession`].
///
/// Every method takes the lock once, so each update is a single
/// read-modify-write. Validation itself runs outside the lock.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<CubeSession>>,
}

impl SharedSession {
    pub fn new(session: CubeSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CubeSession>, SessionError> {
        self.inner.lock().map_err(|_| SessionError::Poisoned)
    }

    pub fn begin_capture(&self, face: FaceId) -> Result<CaptureTicket, SessionError> {
        Ok(self.lock()?.begin_capture(face))
    }

    pub fn apply(
        &self,
        ticket: CaptureTicket,
        validation: &FaceValidation,
        image_ref: Option<String>,
    ) -> Result<ApplyOutcome, SessionError> {
        self.lock()?.apply(ticket, validation, image_ref)
    }

    pub fn reset(&self) -> Result<(), SessionError> {
        self.lock()?.reset();
        Ok(())
    }

    pub fn is_complete(&self) -> Result<bool, SessionError> {
        Ok(self.lock()?.is_complete())
    }

    /// Run `f` against a consistent view of the session.
    pub fn read<R>(&self, f: impl FnOnce(&CubeSession) -> R) -> Result<R, SessionError> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> Result<CubeSession, SessionError> {
        self.read(CubeSession::clone)
    }
}
