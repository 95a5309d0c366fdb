use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::DirectoryError;
use crate::identity::models::CreateUserCommand;
use crate::identity::models::LoginRequest;
use crate::identity::models::User;
use crate::identity::ports::CredentialDirectory;

/// In-memory credential directory.
///
/// Development backend and integration-test double for the directory port.
/// Principals live in a process-local map keyed by id and do not survive
/// restarts. Passwords are stored as Argon2 hashes only.
pub struct InMemoryCredentialDirectory {
    records: RwLock<HashMap<String, DirectoryRecord>>,
    hasher: PasswordHasher,
}

#[derive(Clone)]
struct DirectoryRecord {
    user: User,
    password_hash: String,
}

impl InMemoryCredentialDirectory {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            hasher: PasswordHasher::new(),
        }
    }
}

impl Default for InMemoryCredentialDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DirectoryError {
    DirectoryError::Backend("directory lock poisoned".to_string())
}

#[async_trait]
impl CredentialDirectory for InMemoryCredentialDirectory {
    async fn authenticate(
        &self,
        credentials: &LoginRequest,
    ) -> Result<Option<User>, DirectoryError> {
        // Clone the record out so the lock is not held across the hash check
        let record = {
            let records = self.records.read().map_err(poisoned)?;
            records
                .values()
                .find(|r| r.user.username == credentials.username)
                .cloned()
        };

        let Some(record) = record else {
            return Ok(None);
        };

        if self.hasher.verify(&credentials.password, &record.password_hash) {
            Ok(Some(record.user))
        } else {
            Ok(None)
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(id).map(|r| r.user.clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .find(|r| r.user.username == username)
            .map(|r| r.user.clone()))
    }

    async fn create(&self, command: CreateUserCommand) -> Result<User, DirectoryError> {
        // Hash before taking the write lock; hashing is deliberately slow
        let password_hash = self
            .hasher
            .hash(&command.password)
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;

        let mut records = self.records.write().map_err(poisoned)?;

        if records.values().any(|r| r.user.username == command.username) {
            return Err(DirectoryError::UsernameTaken(command.username));
        }
        if records.values().any(|r| r.user.email == command.email) {
            return Err(DirectoryError::EmailTaken(command.email.to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: command.username,
            email: command.email,
            is_active: true,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };

        records.insert(
            user.id.clone(),
            DirectoryRecord {
                user: user.clone(),
                password_hash,
            },
        );

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DirectoryError> {
        let mut records = self.records.write().map_err(poisoned)?;

        let Some(record) = records.get_mut(&user.id) else {
            return Err(DirectoryError::NotFound(user.id));
        };

        // id, username, created_at and the stored hash stay as created
        record.user.email = user.email;
        record.user.is_active = user.is_active;
        record.user.is_admin = user.is_admin;
        record.user.updated_at = Utc::now();

        Ok(record.user.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DirectoryError> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(id).is_some())
    }
}
