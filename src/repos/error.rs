/*
 * Responsibility
 * - What the repo layer reports upward: a persistence fault.
 * - "row not found" is not an error here; repos return Option/bool for that.
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}
