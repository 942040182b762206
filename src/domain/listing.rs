use serde::Deserialize;
use thiserror::Error;

const EXCERPT_CHARS: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Bitte füllen Sie mindestens Titel, Ort und Maklername aus.")]
pub struct IncompleteQuery;

/// What the user typed into the form. Fixed for the whole analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub headline: String,
    pub address: Option<String>,
    pub location: String,
    pub broker_name: String,
}

impl ListingQuery {
    pub fn new(
        headline: &str,
        address: Option<&str>,
        location: &str,
        broker_name: &str,
    ) -> Result<Self, IncompleteQuery> {
        let required = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());

        Ok(Self {
            headline: required(headline).ok_or(IncompleteQuery)?,
            address: address.and_then(required),
            location: required(location).ok_or(IncompleteQuery)?,
            broker_name: required(broker_name).ok_or(IncompleteQuery)?,
        })
    }
}

/// The listing as the pre-scan found it on the broker's site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreScanResult {
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "brokerLink")]
    pub broker_link: String,
    #[serde(rename = "preis", default)]
    pub price: Option<String>,
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
    #[serde(rename = "livingSpace", default)]
    pub living_space: Option<String>,
}

impl PreScanResult {
    /// Trims every field and turns blank optionals into `None`.
    pub fn normalized(self) -> Self {
        let optional = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        Self {
            headline: self.headline.trim().to_string(),
            description: self.description.trim().to_string(),
            broker_link: self.broker_link.trim().to_string(),
            price: optional(self.price),
            property_type: optional(self.property_type),
            living_space: optional(self.living_space),
        }
    }

    /// A match is only usable if it names the listing and where it was found.
    pub fn is_confident(&self) -> bool {
        !self.headline.is_empty() && !self.broker_link.is_empty()
    }

    pub fn description_excerpt(&self) -> String {
        if self.description.chars().count() > EXCERPT_CHARS {
            let cut: String = self.description.chars().take(EXCERPT_CHARS).collect();
            format!("{cut}...")
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_and_drops_blank_address() {
        let q = ListingQuery::new("  Altbau  ", Some("   "), " 80331 München ", "Muster").unwrap();
        assert_eq!(q.headline, "Altbau");
        assert_eq!(q.address, None);
        assert_eq!(q.location, "80331 München");
    }

    #[test]
    fn query_keeps_address_when_given() {
        let q = ListingQuery::new("Altbau", Some(" Hauptstr. 1 "), "München", "Muster").unwrap();
        assert_eq!(q.address.as_deref(), Some("Hauptstr. 1"));
    }

    #[test]
    fn query_requires_headline_location_and_broker() {
        assert_eq!(ListingQuery::new("", None, "München", "Muster"), Err(IncompleteQuery));
        assert_eq!(ListingQuery::new("Altbau", None, " ", "Muster"), Err(IncompleteQuery));
        assert_eq!(ListingQuery::new("Altbau", None, "München", ""), Err(IncompleteQuery));
    }

    #[test]
    fn prescan_parses_with_optional_fields_missing() {
        let raw = r#"{"headline":"Altbau","description":"Schön","brokerLink":"https://x.de/1"}"#;
        let p: PreScanResult = serde_json::from_str(raw).unwrap();
        let p = p.normalized();
        assert!(p.is_confident());
        assert_eq!(p.price, None);
        assert_eq!(p.property_type, None);
        assert_eq!(p.living_space, None);
    }

    #[test]
    fn blank_optionals_become_none() {
        let raw = r#"{"headline":"A","brokerLink":"l","preis":"  ","type":"ETW","livingSpace":""}"#;
        let p: PreScanResult = serde_json::from_str::<PreScanResult>(raw).unwrap().normalized();
        assert_eq!(p.price, None);
        assert_eq!(p.property_type.as_deref(), Some("ETW"));
        assert_eq!(p.living_space, None);
        assert_eq!(p.description, "");
    }

    #[test]
    fn blank_link_is_not_confident() {
        let raw = r#"{"headline":"A","description":"d","brokerLink":"  "}"#;
        let p = serde_json::from_str::<PreScanResult>(raw).unwrap().normalized();
        assert!(!p.is_confident());
    }

    #[test]
    fn long_descriptions_are_cut_on_char_boundaries() {
        let p = PreScanResult {
            headline: "A".into(),
            description: "ä".repeat(300),
            broker_link: "l".into(),
            price: None,
            property_type: None,
            living_space: None,
        };
        let excerpt = p.description_excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 253);
    }
}
