use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All record invariants live here, not scattered across entities. Every
/// check runs before any state is touched.
pub struct DomainValidator;

impl DomainValidator {
    /// Trim a player name, rejecting blank input.
    pub fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    /// Check raw at-bats / hits input and narrow it to stored widths.
    ///
    /// Order: sign, magnitude, then `hits <= at_bats`.
    pub fn validate_stats(at_bats: i64, hits: i64) -> Result<(u32, u32), DomainError> {
        let at_bats = Self::validate_count("At bats", at_bats)?;
        let hits = Self::validate_count("Hits", hits)?;

        if hits > at_bats {
            return Err(DomainError::HitsExceedAtBats { hits, at_bats });
        }

        Ok((at_bats, hits))
    }

    fn validate_count(field: &'static str, value: i64) -> Result<u32, DomainError> {
        if value < 0 {
            return Err(DomainError::NegativeStat { field, value });
        }
        u32::try_from(value).map_err(|_| DomainError::StatTooLarge { field, value })
    }
}
