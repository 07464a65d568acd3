//! Collision detection and elastic response between circular bodies
//!
//! Detection is a full ordered scan: every body is checked against every
//! other body, so a colliding pair is seen once from each side.

use super::body::{Body, Collidable, MassPoint};
use super::vector::Vector2d;
use super::world::BodyId;
use crate::error::SimError;

/// Are `a` and `b` interpenetrating (distance < sum of radii)?
#[inline]
pub fn is_colliding<A: Collidable + ?Sized, B: Collidable + ?Sized>(a: &A, b: &B) -> bool {
    a.overlaps(b)
}

/// Every ordered colliding pair among live bodies
///
/// Self-pairs are skipped; `(i, j)` and `(j, i)` are both reported.
pub fn colliding_pairs(bodies: &[Body]) -> Vec<(BodyId, BodyId)> {
    let mut pairs = Vec::new();
    for (i, body) in bodies.iter().enumerate() {
        if !body.exists {
            continue;
        }
        for (j, other) in bodies.iter().enumerate() {
            if i == j || !other.exists {
                continue;
            }
            if is_colliding(body, other) {
                pairs.push((BodyId(i), BodyId(j)));
            }
        }
    }
    pairs
}

/// Two distinct mutable slots of the same slice
///
/// Panics if `i == j` or either index is out of range.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "a body cannot collide with itself");
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Mass-ratio term `2·m_other / (m_self + m_other)`
#[inline]
pub fn collision_scale_factor<S: MassPoint + ?Sized, O: MassPoint + ?Sized>(
    this: &S,
    other: &O,
) -> f64 {
    2.0 * other.mass() / (this.mass() + other.mass())
}

/// Velocity change `this` receives from an elastic collision with `other`
///
/// `Δv = n̂ · scale · (Δx · Δv) / |Δx|`, to be subtracted from `this`'s
/// velocity. Fails when the centers coincide.
pub fn velocity_change<S, O>(this: &S, other: &O) -> Result<Vector2d, SimError>
where
    S: MassPoint + Collidable + ?Sized,
    O: MassPoint + Collidable + ?Sized,
{
    let scale = collision_scale_factor(this, other);
    let diff_pos = this.position() - other.position();
    let diff_vel = this.velocity() - other.velocity();
    let direction = diff_pos.normalize()?;
    Ok(direction * (scale * diff_pos.inner_product(diff_vel) / diff_pos.norm()))
}

/// Are the two bodies moving toward each other?
#[inline]
pub fn approaching<A, B>(a: &A, b: &B) -> bool
where
    A: MassPoint + Collidable + ?Sized,
    B: MassPoint + Collidable + ?Sized,
{
    let diff_pos = a.position() - b.position();
    let diff_vel = a.velocity() - b.velocity();
    diff_pos.inner_product(diff_vel) < 0.0
}

/// Apply the 2D elastic impulse to both bodies in place
///
/// `first` is resolved against `second`, then `second` against a snapshot of
/// `first` taken before any mutation. Returns `Ok(false)` without touching
/// either body when they are already separating.
pub fn resolve_pair(first: &mut Body, second: &mut Body) -> Result<bool, SimError> {
    if !approaching(&*first, &*second) {
        return Ok(false);
    }

    let original = first.snapshot();
    let change = velocity_change(&*first, &*second)?;
    first.vel -= change;

    let change = velocity_change(&*second, &original)?;
    second.vel -= change;
    Ok(true)
}
