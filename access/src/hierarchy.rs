//! Hierarchy queries over the fixed role order.
//!
//! One comparison rule applies everywhere, selected by
//! [`STRICT_SUBORDINATE_ONLY`]: a target is accessible only when it sits
//! strictly below the actor in authority. Same-level access is denied.
//! The inclusive (`>=`) check found in one legacy panel is considered a bug
//! and is not replicated.

use crate::role::Role;

/// Comparison policy for every hierarchy check. `true` means the strict
/// form (`target.index() > actor.index()`); the inclusive form would also
/// admit same-level targets.
pub const STRICT_SUBORDINATE_ONLY: bool = true;

fn subordinate(actor: Role, target: Role) -> bool {
    if STRICT_SUBORDINATE_ONLY {
        target.index() > actor.index()
    } else {
        target.index() >= actor.index()
    }
}

/// Whether `actor` may view or manage `target`.
///
/// Two carve-outs sit on top of the generic rule: `Owner` is administered
/// through a separate control surface and never routes through this policy,
/// so `Owner` as actor is always denied here and `Owner` is never a valid
/// target. Note this is a management check and never admits self; contrast
/// [`accessible_roles`], which is a listing query.
pub fn can_access_role(actor: Role, target: Role) -> bool {
    if actor == Role::Owner || target == Role::Owner {
        return false;
    }
    subordinate(actor, target)
}

/// The role tiers that may appear in `actor`'s listings, in authority order.
///
/// - `Owner`: empty (control-surface carve-out, as in [`can_access_role`]).
/// - `User`: only its own tier — a user sees itself and nothing else.
/// - Everyone else: the strictly subordinate tiers, never `actor` itself.
pub fn accessible_roles(actor: Role) -> Vec<Role> {
    match actor {
        Role::Owner => Vec::new(),
        Role::User => vec![Role::User],
        _ => Role::ALL[actor.index() + 1..].to_vec(),
    }
}

fn parse_or_warn(claim: &str) -> Option<Role> {
    match Role::from_claim(claim) {
        Ok(role) => Some(role),
        Err(_) => {
            tracing::warn!(claim, "unknown role claim; treating as no access");
            None
        }
    }
}

/// Hierarchy index for a raw claim string; `None` for unknown claims.
pub fn hierarchy_index_for(claim: &str) -> Option<usize> {
    parse_or_warn(claim).map(Role::index)
}

/// Claim-string variant of [`accessible_roles`]; unknown claims get the
/// empty set.
pub fn accessible_roles_for(claim: &str) -> Vec<Role> {
    parse_or_warn(claim).map(accessible_roles).unwrap_or_default()
}

/// Claim-string variant of [`can_access_role`]; any unknown claim denies.
pub fn can_access_role_for(actor: &str, target: &str) -> bool {
    match (parse_or_warn(actor), parse_or_warn(target)) {
        (Some(actor), Some(target)) => can_access_role(actor, target),
        _ => false,
    }
}
