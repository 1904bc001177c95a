use std::fmt;

use serde::Serialize;

/// The variants produced from one blog post, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Summary,
    Tweet,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Facebook,
    Newsletter,
}

impl OutputKind {
    pub const ALL: [OutputKind; 5] = [
        OutputKind::Summary,
        OutputKind::Tweet,
        OutputKind::LinkedIn,
        OutputKind::Facebook,
        OutputKind::Newsletter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutputKind::Summary => "summary",
            OutputKind::Tweet => "tweet",
            OutputKind::LinkedIn => "LinkedIn post",
            OutputKind::Facebook => "Facebook post",
            OutputKind::Newsletter => "newsletter email",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_report_keys() {
        let names: Vec<String> = OutputKind::ALL
            .iter()
            .map(|kind| serde_json::to_value(kind).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["summary", "tweet", "linkedin", "facebook", "newsletter"]);
    }
}
