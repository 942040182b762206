// src/analysis/prompts.rs

use crate::domain::analysis::NOT_SPECIFIED;
use crate::domain::{ListingQuery, PreScanResult};
use serde_json::{json, Value};

pub fn prescan_prompt(query: &ListingQuery) -> String {
    let address = query
        .address
        .as_deref()
        .map(|a| format!(" (Adresse: \"{a}\")"))
        .unwrap_or_default();

    format!(
        "Identifiziere das Immobilienangebot auf der offiziellen Homepage des Maklers \"{broker}\" \
         für \"{headline}\" in \"{location}\"{address}. \
         Extrahiere Link, Preis, Typ und Wohnfläche. Antworte ausschließlich im JSON Format.",
        broker = query.broker_name,
        headline = query.headline,
        location = query.location,
    )
}

pub fn prescan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "headline": { "type": "STRING" },
            "description": { "type": "STRING" },
            "brokerLink": { "type": "STRING" },
            "preis": { "type": "STRING" },
            "type": { "type": "STRING" },
            "livingSpace": { "type": "STRING" }
        },
        "required": ["headline", "description", "brokerLink"]
    })
}

pub fn analysis_prompt(query: &ListingQuery, prescan: &PreScanResult) -> String {
    let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string());

    format!(
        "Führe eine tiefgreifende Immobilien-Expertenanalyse durch für:
Objekt: {headline}
Makler: {broker}
Standort: {location}
Adresse: {address}
Preis: {price}
Typ: {kind}
Wohnfläche: {space}

KATEGORIEN FÜR DIE BEWERTUNG:
1. Marktanalyse (Preis-Leistung)
2. Makrolage
3. Mikrolage
4. Bauzustand & Ausstattung
5. Energieeffizienz

STRUKTUR:
- Dashboard-Zusammenfassungen: Max. 10 Zeilen.
- Premium-Details: Gigantische Ausführlichkeit (min. 500 Wörter pro Sektion).
- Alle numerischen Scores: 1.0 bis 7.0.

Antworte ausschließlich im JSON-Format.",
        headline = prescan.headline,
        broker = query.broker_name,
        location = query.location,
        address = query.address.as_deref().unwrap_or(NOT_SPECIFIED),
        price = or_unknown(&prescan.price),
        kind = or_unknown(&prescan.property_type),
        space = or_unknown(&prescan.living_space),
    )
}

pub fn analysis_schema() -> Value {
    let text = json!({ "type": "STRING" });

    json!({
        "type": "OBJECT",
        "properties": {
            "headline": text,
            "ort": text,
            "preis": text,
            "type": text,
            "livingSpace": text,
            "marketAnalysis": text,
            "macroLocation": text,
            "microLocation": text,
            "objectCondition": text,
            "energyEfficiency": text,
            "fazit": text,
            "totalScore": { "type": "NUMBER" },
            "totalScoreExplanation": text,
            "scores": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": text,
                        "value": { "type": "NUMBER" },
                        "description": text
                    },
                    "required": ["label", "value", "description"]
                }
            },
            "premiumDetails": {
                "type": "OBJECT",
                "properties": {
                    "marketDetails": text,
                    "macroDetails": text,
                    "microDetails": text,
                    "objectDetails": text,
                    "energyDetails": text
                },
                "required": ["marketDetails", "macroDetails", "microDetails", "objectDetails", "energyDetails"]
            }
        },
        "required": [
            "headline", "ort", "marketAnalysis", "macroLocation", "microLocation",
            "objectCondition", "energyEfficiency", "fazit", "totalScore", "scores", "premiumDetails"
        ]
    })
}
