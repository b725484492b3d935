/// Errors the command loop knows how to report.
///
/// Store and handler code returns `anyhow::Result`; these variants are
/// recovered with `downcast_ref` at the loop's catch point.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("{0} is not a valid number. Try again")]
    InvalidNumber(String),

    #[error("{0} is not a valid decimal number.")]
    InvalidDecimal(String),

    #[error("a {0} is required")]
    MissingValue(&'static str),

    #[error("Project with ID={0} does not exist.")]
    NotFound(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let err = ProjectError::InvalidNumber("abc".into());
        assert_eq!(err.to_string(), "abc is not a valid number. Try again");

        let err = ProjectError::NotFound(7);
        assert!(err.to_string().contains("ID=7"));
    }
}
