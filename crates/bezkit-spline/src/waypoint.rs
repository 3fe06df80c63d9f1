//! Waypoints and handle-coupling constraints.

use bezkit_core::{BezError, Result, Tolerance};
use bezkit_core::traits::Validate;
use bezkit_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// How a waypoint's two handles relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Continuity {
    /// Handles stay collinear and opposed; magnitudes are independent.
    #[default]
    Connected,
    /// Handles are exact mirrors of each other.
    Symmetric,
    /// Handles are fully independent.
    Broken,
}

/// A single control point on a [`BezierPath`](crate::BezierPath).
///
/// `handle_in` and `handle_out` are offsets from `position` giving the
/// incoming/outgoing Bezier control points. Fields are public: writing them
/// directly bypasses constraint propagation (raw edits from a host editing
/// layer), while [`set_handle_in`](Waypoint::set_handle_in) and
/// [`set_handle_out`](Waypoint::set_handle_out) keep the sibling handle
/// coupled per `continuity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Point3,
    pub handle_in: Vector3,
    pub handle_out: Vector3,
    pub continuity: Continuity,
}

/// Default handle offsets: half a unit backward/forward along z.
pub const DEFAULT_HANDLE_IN: Vector3 = Vector3::new(0.0, 0.0, -0.5);
pub const DEFAULT_HANDLE_OUT: Vector3 = Vector3::new(0.0, 0.0, 0.5);

/// Re-derive the coupled handle after its sibling was set to `edited`.
///
/// `current` is the coupled handle's present value, returned unchanged when
/// the mode imposes no relationship or when `edited` has no direction to
/// mirror (zero-length, under `Connected`).
fn coupled_handle(edited: Vector3, current: Vector3, continuity: Continuity) -> Vector3 {
    match continuity {
        Continuity::Connected => match edited.try_normalize() {
            Some(dir) => -dir * current.length(),
            None => current,
        },
        Continuity::Symmetric => -edited,
        Continuity::Broken => current,
    }
}

impl Waypoint {
    /// Waypoint at `position` with default handles and `Connected` mode.
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            handle_in: DEFAULT_HANDLE_IN,
            handle_out: DEFAULT_HANDLE_OUT,
            continuity: Continuity::Connected,
        }
    }

    /// Waypoint from explicit raw state; no constraint is enforced.
    pub fn with_handles(
        position: Point3,
        handle_in: Vector3,
        handle_out: Vector3,
        continuity: Continuity,
    ) -> Self {
        Self {
            position,
            handle_in,
            handle_out,
            continuity,
        }
    }

    /// Set the incoming handle and re-derive the outgoing one.
    ///
    /// Under `Connected` a zero-length `offset` leaves `handle_out`
    /// untouched (there is no direction to mirror); this is not an error.
    pub fn set_handle_in(&mut self, offset: Vector3) {
        self.handle_in = offset;
        self.handle_out = coupled_handle(offset, self.handle_out, self.continuity);
    }

    /// Set the outgoing handle and re-derive the incoming one.
    pub fn set_handle_out(&mut self, offset: Vector3) {
        self.handle_out = offset;
        self.handle_in = coupled_handle(offset, self.handle_in, self.continuity);
    }

    /// Switch the continuity mode.
    ///
    /// Lazy policy: existing handles are left as they are; the new mode
    /// takes effect on the next `set_handle_in`/`set_handle_out` call.
    pub fn set_continuity(&mut self, continuity: Continuity) {
        self.continuity = continuity;
    }

    /// Restore default handles and continuity; `position` is kept.
    pub fn reset(&mut self) {
        self.handle_in = DEFAULT_HANDLE_IN;
        self.handle_out = DEFAULT_HANDLE_OUT;
        self.continuity = Continuity::Connected;
    }

    /// Absolute incoming control point (`position + handle_in`).
    pub fn control_in(&self) -> Point3 {
        self.position + self.handle_in
    }

    /// Absolute outgoing control point (`position + handle_out`).
    pub fn control_out(&self) -> Point3 {
        self.position + self.handle_out
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Self::new(Point3::ZERO)
    }
}

impl Validate for Waypoint {
    /// Check that the handles satisfy the continuity mode.
    ///
    /// `Connected` accepts a zero handle on either side (no direction
    /// defined); otherwise the handles must be opposed within angular
    /// tolerance. `Symmetric` requires an exact mirror within linear
    /// tolerance. `Broken` always passes.
    fn validate(&self, tol: &Tolerance) -> Result<()> {
        match self.continuity {
            Continuity::Connected => {
                if tol.is_zero(self.handle_in.length()) || tol.is_zero(self.handle_out.length()) {
                    return Ok(());
                }
                let angle = self.handle_out.angle_between(-self.handle_in);
                if !tol.angular_eq(angle, 0.0) {
                    return Err(BezError::Continuity(format!(
                        "Connected handles deviate by {angle} rad"
                    )));
                }
                Ok(())
            }
            Continuity::Symmetric => {
                let gap = (self.handle_in + self.handle_out).length();
                if !tol.is_zero(gap) {
                    return Err(BezError::Continuity(format!(
                        "Symmetric handles differ by {gap}"
                    )));
                }
                Ok(())
            }
            Continuity::Broken => Ok(()),
        }
    }
}
