use crate::completeness::{color_counts, is_cube_complete};
use crate::{Face, SessionError};
use cube_scan_core::{ColorCounts, FaceId};
use cube_scan_face::FaceValidation;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Handle for one in-flight face capture.
///
/// Only the most recently issued ticket of a face may update it; results
/// carried by older tickets are dropped as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureTicket {
    pub session: u64,
    pub face: FaceId,
    pub seq: u64,
}

/// What happened to a validation result handed to [`CubeSession::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The face was replaced.
    Applied {
        face: FaceId,
        validated: bool,
        complete: bool,
    },
    /// A newer capture superseded this ticket (or it was already applied);
    /// the result was ignored.
    Stale { face: FaceId, seq: u64 },
}

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(0);

/// Six faces plus the capture bookkeeping needed to reject late results.
///
/// A clone keeps the session id, so it accepts the same tickets.
#[derive(Clone, Debug)]
pub struct CubeSession {
    id: u64,
    faces: [Face; 6],
    /// Latest unapplied ticket per face slot.
    pending: [Option<u64>; 6],
    next_seq: u64,
}

impl Default for CubeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSession {
    pub fn new() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            faces: FaceId::ALL.map(Face::new),
            pending: [None; 6],
            next_seq: 0,
        }
    }

    /// Start a capture of `face`, superseding any capture still in flight.
    pub fn begin_capture(&mut self, face: FaceId) -> CaptureTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(old) = self.pending[face.slot()].replace(seq) {
            log::debug!("capture #{old} of face {face} superseded by #{seq}");
        }
        CaptureTicket {
            session: self.id,
            face,
            seq,
        }
    }

    /// Apply a validation result for `ticket`, replacing the face atomically.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, validation, image_ref), fields(face = ticket.face.get(), seq = ticket.seq))
    )]
    pub fn apply(
        &mut self,
        ticket: CaptureTicket,
        validation: &FaceValidation,
        image_ref: Option<String>,
    ) -> Result<ApplyOutcome, SessionError> {
        if ticket.session != self.id || ticket.seq >= self.next_seq {
            return Err(SessionError::UnknownTicket {
                face: ticket.face,
                seq: ticket.seq,
            });
        }

        let slot = ticket.face.slot();
        if self.pending[slot] != Some(ticket.seq) {
            log::warn!(
                "ignoring stale result #{} for face {}",
                ticket.seq,
                ticket.face
            );
            return Ok(ApplyOutcome::Stale {
                face: ticket.face,
                seq: ticket.seq,
            });
        }

        self.faces[slot] = self.faces[slot].with_validation(validation, image_ref);
        self.pending[slot] = None;

        let validated = self.faces[slot].is_validated();
        let complete = self.is_complete();
        log::info!(
            "face {} captured (validated={validated}, confidence={:.3}); {}/6 validated{}",
            ticket.face,
            validation.confidence,
            self.validated_count(),
            if complete { ", cube complete" } else { "" }
        );
        Ok(ApplyOutcome::Applied {
            face: ticket.face,
            validated,
            complete,
        })
    }

    /// `begin_capture` + `apply` for callers that validate synchronously.
    pub fn capture(
        &mut self,
        face: FaceId,
        validation: &FaceValidation,
        image_ref: Option<String>,
    ) -> Result<ApplyOutcome, SessionError> {
        let ticket = self.begin_capture(face);
        self.apply(ticket, validation, image_ref)
    }

    /// Return every face to "uncaptured". Tickets issued before the reset
    /// become stale.
    pub fn reset(&mut self) {
        self.faces = FaceId::ALL.map(Face::new);
        self.pending = [None; 6];
        log::info!("session reset");
    }

    /// Process-unique id stamped on every ticket this session issues.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.slot()]
    }

    /// Faces in id order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// True while a capture of `face` has been started but not applied.
    pub fn is_pending(&self, face: FaceId) -> bool {
        self.pending[face.slot()].is_some()
    }

    /// Recomputed on every call; never cached.
    pub fn is_complete(&self) -> bool {
        is_cube_complete(&self.faces)
    }

    pub fn color_counts(&self) -> ColorCounts {
        color_counts(&self.faces)
    }

    pub fn validated_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_validated()).count()
    }

    pub fn captured_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_captured()).count()
    }

    /// Lowest-id face that has not been captured yet.
    pub fn next_face_to_capture(&self) -> Option<FaceId> {
        self.faces.iter().find(|f| !f.is_captured()).map(Face::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_scan_core::{Color, ColorGrid};

    fn accept(c: Color) -> FaceValidation {
        FaceValidation::accepted(ColorGrid::uniform(c))
    }

    fn fill_solved(session: &mut CubeSession) {
        for (id, c) in FaceId::ALL.into_iter().zip(Color::ALL) {
            session.capture(id, &accept(c), None).expect("capture");
        }
    }

    #[test]
    fn fresh_session_has_six_uncaptured_faces() {
        let s = CubeSession::new();
        assert_eq!(s.faces().len(), 6);
        assert_eq!(s.captured_count(), 0);
        assert_eq!(s.next_face_to_capture(), Some(FaceId::FRONT));
        assert!(!s.is_complete());
        for (f, id) in s.faces().iter().zip(FaceId::ALL) {
            assert_eq!(f.id(), id);
        }
    }

    #[test]
    fn completes_after_six_valid_faces() {
        let mut s = CubeSession::new();
        for (i, (id, c)) in FaceId::ALL.into_iter().zip(Color::ALL).enumerate() {
            let out = s.capture(id, &accept(c), None).expect("capture");
            assert_eq!(
                out,
                ApplyOutcome::Applied {
                    face: id,
                    validated: true,
                    complete: i == 5,
                }
            );
        }
        assert!(s.is_complete());
        assert_eq!(s.validated_count(), 6);
        assert_eq!(s.next_face_to_capture(), None);
    }

    #[test]
    fn completeness_tracks_later_failures() {
        let mut s = CubeSession::new();
        fill_solved(&mut s);
        assert!(s.is_complete());
        s.capture(FaceId::RIGHT, &FaceValidation::rejected(0.2), None)
            .expect("capture");
        assert!(!s.is_complete());
        assert_eq!(s.validated_count(), 5);
        assert_eq!(s.captured_count(), 6);
        assert!(s.face(FaceId::RIGHT).colors().is_none());
    }

    #[test]
    fn superseded_result_is_ignored() {
        let mut s = CubeSession::new();
        let first = s.begin_capture(FaceId::TOP);
        let second = s.begin_capture(FaceId::TOP);

        let out = s
            .apply(second, &accept(Color::Green), None)
            .expect("apply");
        assert!(matches!(out, ApplyOutcome::Applied { .. }));

        // The slow first validation arrives late and must not overwrite.
        let out = s
            .apply(first, &accept(Color::Red), None)
            .expect("apply");
        assert_eq!(
            out,
            ApplyOutcome::Stale {
                face: FaceId::TOP,
                seq: first.seq
            }
        );
        assert_eq!(
            s.face(FaceId::TOP).colors(),
            Some(&ColorGrid::uniform(Color::Green))
        );
    }

    #[test]
    fn ticket_applies_only_once() {
        let mut s = CubeSession::new();
        let t = s.begin_capture(FaceId::LEFT);
        assert!(s.is_pending(FaceId::LEFT));
        s.apply(t, &accept(Color::Blue), None).expect("apply");
        assert!(!s.is_pending(FaceId::LEFT));
        let again = s.apply(t, &accept(Color::Red), None).expect("apply");
        assert!(matches!(again, ApplyOutcome::Stale { .. }));
    }

    #[test]
    fn tickets_of_different_faces_are_independent() {
        let mut s = CubeSession::new();
        let a = s.begin_capture(FaceId::FRONT);
        let b = s.begin_capture(FaceId::BACK);
        s.apply(b, &accept(Color::Red), None).expect("apply");
        let out = s.apply(a, &accept(Color::White), None).expect("apply");
        assert!(matches!(out, ApplyOutcome::Applied { .. }));
        assert_eq!(s.validated_count(), 2);
    }

    #[test]
    fn ticket_from_another_session_is_refused() {
        let mut a = CubeSession::new();
        let mut b = CubeSession::new();
        assert_ne!(a.id(), b.id());
        let ta = a.begin_capture(FaceId::FRONT);
        let tb = b.begin_capture(FaceId::FRONT);
        assert_eq!((ta.face, ta.seq), (tb.face, tb.seq));

        assert_eq!(
            b.apply(ta, &accept(Color::Red), None),
            Err(SessionError::UnknownTicket {
                face: FaceId::FRONT,
                seq: 0
            })
        );
        assert!(b.is_pending(FaceId::FRONT));

        let own = b.apply(tb, &accept(Color::White), None).expect("apply");
        assert!(matches!(own, ApplyOutcome::Applied { .. }));
        assert_eq!(
            b.face(FaceId::FRONT).colors(),
            Some(&ColorGrid::uniform(Color::White))
        );
    }

    #[test]
    fn foreign_ticket_is_an_error() {
        let mut s = CubeSession::new();
        let forged = CaptureTicket {
            session: s.id(),
            face: FaceId::FRONT,
            seq: 42,
        };
        assert_eq!(
            s.apply(forged, &accept(Color::Red), None),
            Err(SessionError::UnknownTicket {
                face: FaceId::FRONT,
                seq: 42
            })
        );
    }

    #[test]
    fn reset_discards_faces_and_in_flight_tickets() {
        let mut s = CubeSession::new();
        fill_solved(&mut s);
        let late = s.begin_capture(FaceId::FRONT);
        s.reset();
        assert_eq!(s.captured_count(), 0);
        assert!(!s.is_complete());
        let out = s.apply(late, &accept(Color::Red), None).expect("apply");
        assert!(matches!(out, ApplyOutcome::Stale { .. }));
        assert!(!s.face(FaceId::FRONT).is_captured());

        let fresh = s.begin_capture(FaceId::FRONT);
        assert!(fresh.seq > late.seq);
    }
}
