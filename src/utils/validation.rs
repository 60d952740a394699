use crate::utils::error::{ActivityError, Result};
use std::collections::HashSet;
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(ActivityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ActivityError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ActivityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| ActivityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ActivityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查清單中沒有重複的值（大小寫敏感）
pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(ActivityError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}

/// 單一活動的初始資料：名稱非空，參加者 email 非空且不重複
pub fn validate_activity_seed(name: &str, participants: &[String]) -> Result<()> {
    validate_non_empty_string("activities.name", name)?;
    let field = format!("activities[{}].participants", name);
    for email in participants {
        validate_non_empty_string(&field, email)?;
    }
    validate_unique(&field, participants.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "0.0.0.0:0").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
        assert!(validate_socket_addr("server.bind", "").is_err());
    }

    #[test]
    fn test_validate_unique_is_case_sensitive() {
        assert!(validate_unique("names", ["Chess Club", "chess club"]).is_ok());
        assert!(validate_unique("names", ["Chess Club", "Gym Class", "Chess Club"]).is_err());
    }

    #[test]
    fn test_validate_activity_seed() {
        let ok = vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()];
        assert!(validate_activity_seed("Chess Club", &ok).is_ok());
        assert!(validate_activity_seed("Chess Club", &[]).is_ok());
        assert!(validate_activity_seed(" ", &ok).is_err());

        let blank = vec!["a@mergington.edu".to_string(), "".to_string()];
        assert!(validate_activity_seed("Chess Club", &blank).is_err());

        let dup = vec!["a@mergington.edu".to_string(), "a@mergington.edu".to_string()];
        assert!(validate_activity_seed("Chess Club", &dup).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Chess Club").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
