use crate::types::RequestParams;
use crate::Error;

/// Looks up a required parameter.
pub fn require_param<'a>(params: &'a RequestParams, name: &str) -> Result<&'a str, Error> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingParameter(name.to_string()))
}

/// Rejects empty and whitespace-only values.
pub fn require_not_blank<'a>(name: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        return Err(Error::BlankParameter(name.to_string()));
    }

    Ok(value)
}

/// Parses a 32-bit signed integer, tolerating surrounding whitespace.
///
/// An empty value binds to nothing, so it is reported as a missing parameter.
pub fn parse_int_param(name: &str, value: &str) -> Result<i32, Error> {
    let value = value.trim();

    if value.is_empty() {
        return Err(Error::MissingParameter(name.to_string()));
    }

    value
        .parse::<i32>()
        .map_err(|_| Error::TypeMismatch {
            parameter: name.to_string(),
            expected_type: "int".to_string(),
        })
}

/// Rejects zero and negative values.
pub fn require_positive(name: &str, value: i32) -> Result<usize, Error> {
    if value <= 0 {
        return Err(Error::NonPositiveParameter(name.to_string()));
    }

    usize::try_from(value).map_err(|_| Error::NonPositiveParameter(name.to_string()))
}

/// Folds the failed constraint checks of one request into a single error.
///
/// One failure is returned as is; several are reported together, in the order given.
pub fn combine_violations<I>(violations: I) -> Error
where
    I: IntoIterator<Item = Option<Error>>,
{
    let mut violations: Vec<Error> = violations.into_iter().flatten().collect();

    if violations.len() == 1 {
        violations.remove(0)
    } else {
        Error::ConstraintViolations(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RequestParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_require_param() {
        let params = params(&[("text", "hello")]);
        assert_eq!(require_param(&params, "text").unwrap(), "hello");
        assert!(matches!(
            require_param(&params, "word"),
            Err(Error::MissingParameter(name)) if name == "word"
        ));
    }

    #[test]
    fn test_require_not_blank() {
        assert!(require_not_blank("text", "a").is_ok());
        assert!(matches!(
            require_not_blank("text", ""),
            Err(Error::BlankParameter(_))
        ));
        assert!(matches!(
            require_not_blank("text", " \t\n"),
            Err(Error::BlankParameter(_))
        ));
    }

    #[test]
    fn test_parse_int_param() {
        assert_eq!(parse_int_param("n", " 3 ").unwrap(), 3);
        assert_eq!(parse_int_param("n", "-1").unwrap(), -1);
        assert!(matches!(
            parse_int_param("n", "three"),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            parse_int_param("n", "3000000000"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_int_param_is_missing() {
        assert!(matches!(
            parse_int_param("n", ""),
            Err(Error::MissingParameter(name)) if name == "n"
        ));
        assert!(matches!(
            parse_int_param("n", "   "),
            Err(Error::MissingParameter(_))
        ));
    }

    #[test]
    fn test_combine_violations() {
        let single = combine_violations([None, Some(Error::BlankParameter("word".to_string()))]);
        assert!(matches!(single, Error::BlankParameter(name) if name == "word"));

        let combined = combine_violations([
            Some(Error::BlankParameter("text".to_string())),
            Some(Error::NonPositiveParameter("n".to_string())),
        ]);
        assert!(matches!(&combined, Error::ConstraintViolations(v) if v.len() == 2));
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("n", 5).unwrap(), 5);
        assert!(matches!(
            require_positive("n", 0),
            Err(Error::NonPositiveParameter(_))
        ));
        assert!(matches!(
            require_positive("n", -4),
            Err(Error::NonPositiveParameter(_))
        ));
    }
}
