use crate::breaches::BreachedAccounts;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;


pub fn write_report(path: &Path, accounts: &BreachedAccounts) -> AppResult<()> {
    let contents = serde_json::to_vec(accounts)?;

    fs::write(path, contents).map_err(|source| AppError::OutputUnwritable {
        path: path.display().to_string(),
        source,
    })
}
