use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("storage.data_file must not be empty")]
    EmptyDataFile,

    #[error("circulation.loan_period must be at least one day")]
    ZeroLoanPeriod,
}

pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.storage.data_file.as_os_str().is_empty() {
        return Err(ValidationError::EmptyDataFile);
    }

    if config.circulation.loan_period.days() == 0 {
        return Err(ValidationError::ZeroLoanPeriod);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn validate_rejects_empty_data_file() {
        let mut config = Config::default();
        config.storage.data_file = std::path::PathBuf::new();

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyDataFile));
    }

    #[test]
    fn validate_rejects_zero_loan_period() {
        let mut config = Config::default();
        config.circulation.loan_period = crate::humanize::LoanPeriod(0);

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::ZeroLoanPeriod));
    }
}
