//! SeaORM entities for the booking store plus connection and schema helpers.

pub mod errors;
pub mod db;
pub mod customer;
pub mod restaurant;
pub mod reservation;

/// Customer and restaurant names only need to be present; whitespace counts.
pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
