//! Transaction demarcation port.
//!
//! Every mutating use case runs inside exactly one unit of work: begin at
//! operation entry, commit on success, roll back on any failure path. Read
//! operations take no transaction beyond a single consistent read.

use async_trait::async_trait;

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TxPort: Send + Sync {
    /// Open a unit of work spanning all persistence writes until the handle
    /// is committed or rolled back.
    async fn begin(&self) -> Result<Box<dyn TxHandle>, RepoError>;
}

/// An open unit of work. Consumed on either exit path so a handle cannot be
/// committed twice or used after rollback.
#[async_trait]
pub trait TxHandle: Send {
    async fn commit(self: Box<Self>) -> Result<(), RepoError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepoError>;
}
