use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by the access policy.
///
/// Request paths never surface these: the `*_for` query functions resolve
/// unknown input to "no access". They exist for the two places that should
/// fail loudly — session validation at the auth boundary and policy config
/// validation at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("unknown role claim: {claim}")]
    UnknownRole { claim: String },
    #[error("unknown feature key: {key}")]
    UnknownFeature { key: String },
}

/// Platform roles in authority order.
///
/// The discriminant is the hierarchy index: 0 (`Owner`) is the highest
/// authority, 8 (`User`) the lowest. The wire form is the platform's
/// claim string (`"SUB_OWN"`, `"MAS_AGENT"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    #[serde(rename = "OWNER")]
    Owner = 0,
    #[serde(rename = "SUB_OWN")]
    SubOwner = 1,
    #[serde(rename = "SUP_ADM")]
    SuperAdmin = 2,
    #[serde(rename = "ADMIN")]
    Admin = 3,
    #[serde(rename = "SUB_ADM")]
    SubAdmin = 4,
    #[serde(rename = "MAS_AGENT")]
    MasterAgent = 5,
    #[serde(rename = "SUP_AGENT")]
    SuperAgent = 6,
    #[serde(rename = "AGENT")]
    Agent = 7,
    #[serde(rename = "USER")]
    User = 8,
}

impl Role {
    /// Every role, in authority order. Index 0 is the highest authority.
    pub const ALL: [Role; 9] = [
        Role::Owner,
        Role::SubOwner,
        Role::SuperAdmin,
        Role::Admin,
        Role::SubAdmin,
        Role::MasterAgent,
        Role::SuperAgent,
        Role::Agent,
        Role::User,
    ];

    /// Position in the fixed authority order; lower means more authority.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a session claim string. This is the single fallible boundary
    /// for role input; everything downstream operates on the enum.
    pub fn from_claim(claim: &str) -> Result<Self, AccessError> {
        match claim {
            "OWNER" => Ok(Role::Owner),
            "SUB_OWN" => Ok(Role::SubOwner),
            "SUP_ADM" => Ok(Role::SuperAdmin),
            "ADMIN" => Ok(Role::Admin),
            "SUB_ADM" => Ok(Role::SubAdmin),
            "MAS_AGENT" => Ok(Role::MasterAgent),
            "SUP_AGENT" => Ok(Role::SuperAgent),
            "AGENT" => Ok(Role::Agent),
            "USER" => Ok(Role::User),
            _ => Err(AccessError::UnknownRole {
                claim: claim.to_string(),
            }),
        }
    }

    /// The claim string carried in sessions and JSON bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::SubOwner => "SUB_OWN",
            Role::SuperAdmin => "SUP_ADM",
            Role::Admin => "ADMIN",
            Role::SubAdmin => "SUB_ADM",
            Role::MasterAgent => "MAS_AGENT",
            Role::SuperAgent => "SUP_AGENT",
            Role::Agent => "AGENT",
            Role::User => "USER",
        }
    }

    /// Human-readable label for panel display.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::SubOwner => "Sub Owner",
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::SubAdmin => "Sub Admin",
            Role::MasterAgent => "Master Agent",
            Role::SuperAgent => "Super Agent",
            Role::Agent => "Agent",
            Role::User => "User",
        }
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_claim(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for a raw claim string. Unknown input echoes back
/// unchanged; the panels show whatever the session carried.
pub fn display_name_for(claim: &str) -> String {
    match Role::from_claim(claim) {
        Ok(role) => role.display_name().to_string(),
        Err(_) => claim.to_string(),
    }
}
