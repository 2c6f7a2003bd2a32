use serde::{Deserialize, Serialize};

/// Inbound payload: the ticket to process. The description is untrusted
/// free text and must only ever be treated as data.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRequest {
    pub id: String,
    pub description: String,
}

/// Subject matter of a ticket. Closed set; anything else coming back from
/// the model is a contract violation, not a fourth category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technical,
    Billing,
    Commercial,
}

impl Category {
    pub const LABELS: [&'static str; 3] = ["Technical", "Billing", "Commercial"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Billing => "Billing",
            Category::Commercial => "Commercial",
        }
    }
}

/// Emotional tone of a ticket. Same closed-set rules as [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const LABELS: [&'static str; 3] = ["Positive", "Neutral", "Negative"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// The classification result. Built whole from a validated model response;
/// never partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAnalysis {
    pub category: Category,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_inside_the_closed_sets() {
        let analysis: TicketAnalysis =
            serde_json::from_str(r#"{"category":"Technical","sentiment":"Negative"}"#)
                .expect("valid labels should parse");
        assert_eq!(analysis.category, Category::Technical);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn rejects_labels_outside_the_closed_sets() {
        let result: Result<TicketAnalysis, _> =
            serde_json::from_str(r#"{"category":"Sales","sentiment":"Negative"}"#);
        assert!(result.is_err());

        let result: Result<TicketAnalysis, _> =
            serde_json::from_str(r#"{"category":"Billing","sentiment":"angry"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let result: Result<TicketAnalysis, _> = serde_json::from_str(r#"{"category":"Billing"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_the_exact_wire_labels() {
        let analysis = TicketAnalysis {
            category: Category::Commercial,
            sentiment: Sentiment::Positive,
        };
        let json = serde_json::to_value(analysis).expect("serializable");
        assert_eq!(json["category"], "Commercial");
        assert_eq!(json["sentiment"], "Positive");
    }
}
