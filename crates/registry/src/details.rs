use serde::Serialize;
use serde_json::{Map, Value};

use crate::identifier::CompanyIdentifier;

pub const VAT_NUMBER_FALLBACK: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetails {
    pub identification: Identification,
    pub status: Status,
    pub activity: Activity,
    pub directors: Vec<Value>,
    pub headquarters: Value,
    pub establishments: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identification {
    pub siren: Option<String>,
    pub siret: Option<String>,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub vat_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub administrative_state: Option<String>,
    pub creation_date: Option<String>,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub primary_code: Option<String>,
    pub employee_range: Option<String>,
    pub category: Option<String>,
}

impl CompanyDetails {
    /// Projects one registry search record. Never fails: missing fields
    /// become `None` or an empty collection, except the SIREN which is
    /// taken from the requested identifier.
    pub fn from_record(record: &Value, identifier: &CompanyIdentifier) -> Self {
        let siret = if identifier.is_siret() {
            Some(identifier.as_str().to_string())
        } else {
            text_at(record, "/siege/siret")
        };

        Self {
            identification: Identification {
                siren: text_at(record, "/siren")
                    .or_else(|| Some(identifier.siren().to_string())),
                siret,
                name: text_at(record, "/nom_complet"),
                legal_name: text_at(record, "/nom_raison_sociale"),
                vat_number: text_at(record, "/siege/tva_intra")
                    .unwrap_or_else(|| VAT_NUMBER_FALLBACK.to_string()),
            },
            status: Status {
                administrative_state: text_at(record, "/etat_administratif"),
                creation_date: text_at(record, "/date_creation"),
                last_modified: text_at(record, "/date_mise_a_jour"),
            },
            activity: Activity {
                primary_code: text_at(record, "/activite_principale"),
                employee_range: text_at(record, "/tranche_effectif_salarie"),
                category: text_at(record, "/categorie_entreprise"),
            },
            directors: array_at(record, "/dirigeants"),
            headquarters: record
                .pointer("/siege")
                .filter(|v| v.is_object())
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
            establishments: array_at(record, "/matching_etablissements"),
        }
    }

    /// Heading line, e.g. `Company details: CARREFOUR`. Establishment
    /// lookups append the head office postal code when it is known.
    pub fn title(&self, identifier: &CompanyIdentifier) -> String {
        let name = self.identification.name.as_deref().unwrap_or("unknown");
        let postal_code = self.headquarters.get("code_postal").and_then(scalar_text);

        match postal_code {
            Some(code) if identifier.is_siret() => format!("Company details: {name} - {code}"),
            _ => format!("Company details: {name}"),
        }
    }
}

fn text_at(record: &Value, pointer: &str) -> Option<String> {
    record.pointer(pointer).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn array_at(record: &Value, pointer: &str) -> Vec<Value> {
    record
        .pointer(pointer)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn carrefour_record() -> Value {
        json!({
            "siren": "652014051",
            "nom_complet": "CARREFOUR",
            "nom_raison_sociale": "CARREFOUR SA",
            "siege": {
                "siret": "65201405100033",
                "tva_intra": "FR11652014051",
                "code_postal": "91300"
            },
            "etat_administratif": "A",
            "date_creation": "1959-07-11",
            "date_mise_a_jour": "2024-03-30T09:17:33",
            "activite_principale": "70.10Z",
            "tranche_effectif_salarie": "41",
            "categorie_entreprise": "GE",
            "dirigeants": [{ "nom": "BOMPARD", "qualite": "Président-directeur général" }],
            "matching_etablissements": [{ "siret": "65201405100033", "est_siege": true }]
        })
    }

    #[test]
    fn test_projects_full_record() {
        let identifier = CompanyIdentifier::parse("652014051").unwrap();
        let details = CompanyDetails::from_record(&carrefour_record(), &identifier);

        assert_eq!(details.identification.siren.as_deref(), Some("652014051"));
        assert_eq!(details.identification.siret.as_deref(), Some("65201405100033"));
        assert_eq!(details.identification.name.as_deref(), Some("CARREFOUR"));
        assert_eq!(details.identification.legal_name.as_deref(), Some("CARREFOUR SA"));
        assert_eq!(details.identification.vat_number, "FR11652014051");
        assert_eq!(details.status.administrative_state.as_deref(), Some("A"));
        assert_eq!(details.status.creation_date.as_deref(), Some("1959-07-11"));
        assert_eq!(details.activity.primary_code.as_deref(), Some("70.10Z"));
        assert_eq!(details.activity.employee_range.as_deref(), Some("41"));
        assert_eq!(details.activity.category.as_deref(), Some("GE"));
        assert_eq!(details.directors.len(), 1);
        assert_eq!(details.establishments.len(), 1);
        assert_eq!(details.headquarters["code_postal"], "91300");
        assert_eq!(details.title(&identifier), "Company details: CARREFOUR");
    }

    #[test]
    fn test_siret_lookup_echoes_requested_siret() {
        let identifier = CompanyIdentifier::parse("65201405100751").unwrap();
        let details = CompanyDetails::from_record(&carrefour_record(), &identifier);

        assert_eq!(details.identification.siren.as_deref(), Some("652014051"));
        assert_eq!(details.identification.siret.as_deref(), Some("65201405100751"));
        assert_eq!(
            details.title(&identifier),
            "Company details: CARREFOUR - 91300"
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let identifier = CompanyIdentifier::parse("832378541").unwrap();
        let details = CompanyDetails::from_record(&json!({ "siren": "832378541" }), &identifier);

        assert_eq!(details.identification.siret, None);
        assert_eq!(details.identification.name, None);
        assert_eq!(details.identification.vat_number, VAT_NUMBER_FALLBACK);
        assert_eq!(details.status.last_modified, None);
        assert!(details.directors.is_empty());
        assert!(details.establishments.is_empty());
        assert_eq!(details.headquarters, json!({}));
        assert_eq!(details.title(&identifier), "Company details: unknown");

        let serialized = serde_json::to_value(&details).unwrap();
        assert_eq!(serialized["identification"]["name"], Value::Null);
        assert_eq!(serialized["status"]["last_modified"], Value::Null);
        assert_eq!(serialized["activity"]["category"], Value::Null);
    }

    #[test]
    fn test_unexpected_shapes_do_not_panic() {
        let identifier = CompanyIdentifier::parse("832378541").unwrap();
        let record = json!({
            "siren": 832378541,
            "siege": "not an object",
            "dirigeants": { "nom": "DOE" },
            "matching_etablissements": null
        });
        let details = CompanyDetails::from_record(&record, &identifier);

        assert_eq!(details.identification.siren.as_deref(), Some("832378541"));
        assert_eq!(details.headquarters, json!({}));
        assert!(details.directors.is_empty());
        assert!(details.establishments.is_empty());

        let details = CompanyDetails::from_record(&Value::Null, &identifier);
        assert_eq!(details.identification.siren.as_deref(), Some("832378541"));
        assert_eq!(details.identification.name, None);
    }

    #[test]
    fn test_missing_siren_comes_from_requested_siret() {
        let identifier = CompanyIdentifier::parse("65201405100751").unwrap();
        let record = json!({ "nom_complet": "CARREFOUR" });
        let details = CompanyDetails::from_record(&record, &identifier);

        assert_eq!(details.identification.siren.as_deref(), Some("652014051"));
        assert_eq!(details.identification.siret.as_deref(), Some("65201405100751"));
    }
}
