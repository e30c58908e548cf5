use serde::{Deserialize, Serialize};
use std::fmt;

/// Which phrasing `Person::greet_with` uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStyle {
    /// "... and I'm 30 years old."
    #[default]
    Contracted,
    /// "... and I am 30 years old."
    Formal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email,
        }
    }

    pub fn greet_with(&self, style: GreetingStyle) -> String {
        let verb = match style {
            GreetingStyle::Contracted => "I'm",
            GreetingStyle::Formal => "I am",
        };
        format!(
            "Hello, my name is {} and {} {} years old.",
            self.name, verb, self.age
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let email = match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => "N/A",
        };
        write!(
            f,
            "Person(name: {}, age: {}, email: {})",
            self.name, self.age, email
        )
    }
}

/// Output of `process_numbers`. Field order is the printed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedNumbers {
    pub squared: Vec<i128>,
    pub evens: Vec<i64>,
    pub total: i128,
    pub doubled: Vec<i128>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub status: String,
}

impl FetchResult {
    pub const SUCCESS: &'static str = "success";

    pub fn success(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: Self::SUCCESS.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new("Alice", 30, Some("alice@example.com".to_string()))
    }

    #[test]
    fn test_greet_contracted() {
        assert_eq!(
            alice().greet_with(GreetingStyle::Contracted),
            "Hello, my name is Alice and I'm 30 years old."
        );
    }

    #[test]
    fn test_greet_formal() {
        assert_eq!(
            alice().greet_with(GreetingStyle::Formal),
            "Hello, my name is Alice and I am 30 years old."
        );
    }

    #[test]
    fn test_display_with_and_without_email() {
        assert_eq!(
            alice().to_string(),
            "Person(name: Alice, age: 30, email: alice@example.com)"
        );

        let bob = Person::new("Bob", -1, None);
        assert_eq!(bob.to_string(), "Person(name: Bob, age: -1, email: N/A)");

        let carol = Person::new("Carol", 41, Some(String::new()));
        assert!(carol.to_string().ends_with("email: N/A)"));
    }

    #[test]
    fn test_fetch_result_serializes_url_and_status() {
        let result = FetchResult::success("https://example.com/1");
        assert!(result.is_success());
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"url":"https://example.com/1","status":"success"}"#
        );
    }
}
