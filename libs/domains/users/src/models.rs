use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Roles a user can hold. Wire values are the lowercase names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Administrator,
    Manager,
    Support,
    Player,
    Coach,
    Official,
    Referee,
    Broker,
    Sale,
    Writer,
    #[default]
    Guest,
}

/// Account status. Stored as the single-letter codes the platform has always
/// used; the enum names are the readable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "B")]
    Blocked,
    #[serde(rename = "C")]
    Closed,
    #[default]
    #[serde(rename = "I")]
    Inactive,
    #[serde(rename = "V")]
    PendingVerification,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Blocked => write!(f, "blocked"),
            UserStatus::Closed => write!(f, "closed"),
            UserStatus::Inactive => write!(f, "inactive"),
            UserStatus::PendingVerification => write!(f, "pending-verification"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" | "A" => Ok(UserStatus::Active),
            "blocked" | "B" => Ok(UserStatus::Blocked),
            "closed" | "C" => Ok(UserStatus::Closed),
            "inactive" | "I" => Ok(UserStatus::Inactive),
            "pending-verification" | "V" => Ok(UserStatus::PendingVerification),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

fn default_role() -> Vec<UserRole> {
    vec![UserRole::Guest]
}

/// User identity record as persisted in the `users` collection.
///
/// The serde view of this struct IS the stored document (BSON field names
/// included), so the credential and verification secrets are present here.
/// Nothing outside the store boundary may serialize a `User` directly;
/// external representations go through [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; `None` until the record is inserted
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub nickname: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    /// Verification token (salted hash of a one-off nonce), never exposed
    #[serde(rename = "vToken", default)]
    pub v_token: String,
    /// Numeric verification code, never exposed
    #[serde(rename = "vCode", default)]
    pub v_code: String,
    #[serde(default)]
    pub phone: String,
    /// Profile photo URL
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub phone_verified: bool,
    /// Always non-empty; new accounts start as guests
    #[serde(default = "default_role")]
    pub role: Vec<UserRole>,
    /// Argon2 hash, never the plaintext
    pub password: String,
    /// Tag names this user follows, in insertion order
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub status: UserStatus,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl User {
    /// Assemble a registration record: guest role, nothing verified, empty
    /// profile fields. The store layer assigns `_id` and re-stamps the
    /// timestamps at insert.
    pub fn new(email: String, password_hash: String, v_token: String, v_code: String) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            firstname: String::new(),
            lastname: String::new(),
            nickname: String::new(),
            email,
            email_verified: false,
            v_token,
            v_code,
            phone: String::new(),
            photo: String::new(),
            phone_verified: false,
            role: vec![UserRole::Guest],
            password: password_hash,
            favorites: Vec::new(),
            status: UserStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for the creation operation. The excluded transport layer is
/// responsible for validating presence and shape of both fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}

/// Partial-field lookup criteria: every set field must equal the stored
/// value (conjunctive equality). `role` matches records holding that role.
#[derive(Debug, Clone, Default)]
pub struct UserCriteria {
    pub id: Option<ObjectId>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub email_verified: Option<bool>,
    pub phone_verified: Option<bool>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub v_token: Option<String>,
    pub v_code: Option<String>,
}

impl UserCriteria {
    /// Whether a record satisfies every set field of the criteria
    pub fn matches(&self, user: &User) -> bool {
        if let Some(id) = self.id {
            if user.id != Some(id) {
                return false;
            }
        }
        if let Some(ref firstname) = self.firstname {
            if &user.firstname != firstname {
                return false;
            }
        }
        if let Some(ref lastname) = self.lastname {
            if &user.lastname != lastname {
                return false;
            }
        }
        if let Some(ref nickname) = self.nickname {
            if &user.nickname != nickname {
                return false;
            }
        }
        if let Some(ref email) = self.email {
            if &user.email != email {
                return false;
            }
        }
        if let Some(ref phone) = self.phone {
            if &user.phone != phone {
                return false;
            }
        }
        if let Some(email_verified) = self.email_verified {
            if user.email_verified != email_verified {
                return false;
            }
        }
        if let Some(phone_verified) = self.phone_verified {
            if user.phone_verified != phone_verified {
                return false;
            }
        }
        if let Some(role) = self.role {
            if !user.role.contains(&role) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if user.status != status {
                return false;
            }
        }
        if let Some(ref v_token) = self.v_token {
            if &user.v_token != v_token {
                return false;
            }
        }
        if let Some(ref v_code) = self.v_code {
            if &user.v_code != v_code {
                return false;
            }
        }
        true
    }
}

/// Public projection of a user record, applied at every boundary where a
/// record leaves the core. Carries no `password`, `vToken`, or `vCode` at
/// the type level; the id is the hex form of the store identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub nickname: String,
    pub email: String,
    pub email_verified: bool,
    pub phone: String,
    pub photo: String,
    pub phone_verified: bool,
    pub role: Vec<UserRole>,
    pub favorites: Vec<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored datetimes are i64 milliseconds; values written by this crate are
/// always in chrono's representable range
fn datetime_to_chrono(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or(DateTime::UNIX_EPOCH)
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            email_verified: user.email_verified,
            phone: user.phone.clone(),
            photo: user.photo.clone(),
            phone_verified: user.phone_verified,
            role: user.role.clone(),
            favorites: user.favorites.clone(),
            status: user.status,
            created_at: datetime_to_chrono(user.created_at),
            updated_at: datetime_to_chrono(user.updated_at),
        }
    }
}

/// Pure projection function; alias for [`PublicUser::from`]
pub fn to_public_view(user: &User) -> PublicUser {
    PublicUser::from(user)
}
