//! Load client profiles from a CSV batch file

use super::{ClientProfile, Sex};
use crate::catalog::ProductFamily;
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Default location of the sample client batch
pub const DEFAULT_CLIENTS_PATH: &str = "data/clients.csv";

const SOURCE_NAME: &str = "clients.csv";

/// Raw CSV row matching the client batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ClientID")]
    client_id: u32,
    #[serde(rename = "Family")]
    family: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Smoker")]
    smoker: String,
    #[serde(rename = "Coverage")]
    coverage: u64,
    #[serde(rename = "Term")]
    term: Option<u32>,
    /// Semicolon-separated medication names
    #[serde(rename = "Medications", default)]
    medications: String,
    /// Semicolon-separated condition names
    #[serde(rename = "Conditions", default)]
    conditions: String,
}

impl CsvRow {
    fn into_profile(self, row: usize) -> Result<ClientProfile, LoadError> {
        let field_error = |message: String| LoadError::Field {
            file: SOURCE_NAME.to_string(),
            row,
            message,
        };

        let product_family = match self.family.trim().to_ascii_lowercase().as_str() {
            "term" => ProductFamily::Term,
            "fex" | "final expense" | "final_expense" => ProductFamily::FinalExpense,
            "siul" | "iul" => ProductFamily::Siul,
            other => return Err(field_error(format!("unknown Family: {}", other))),
        };

        let sex = match self.sex.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            other => return Err(field_error(format!("unknown Sex: {}", other))),
        };

        let smoker = match self.smoker.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => true,
            "n" | "no" | "false" | "0" | "" => false,
            other => return Err(field_error(format!("unknown Smoker flag: {}", other))),
        };

        Ok(ClientProfile {
            client_id: self.client_id,
            product_family,
            age: self.age,
            sex,
            smoker,
            coverage: self.coverage,
            term: self.term,
            medications: split_list(&self.medications),
            conditions: split_list(&self.conditions),
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_clients<R: std::io::Read>(
    mut reader: Reader<R>,
    source: &Path,
) -> Result<Vec<ClientProfile>, LoadError> {
    let mut clients = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result.map_err(|source_err| LoadError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        // Header is line 1
        clients.push(row.into_profile(idx + 2)?);
    }

    Ok(clients)
}

/// Load all client profiles from a CSV file
pub fn load_clients<P: AsRef<Path>>(path: P) -> Result<Vec<ClientProfile>, LoadError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let clients = read_clients(reader, path)?;
    log::info!("loaded {} client profiles from {}", clients.len(), path.display());
    Ok(clients)
}

/// Load client profiles from any reader (e.g., string buffer, network stream)
pub fn load_clients_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ClientProfile>, LoadError> {
    read_clients(Reader::from_reader(reader), Path::new(SOURCE_NAME))
}

/// Load client profiles from the default data/clients.csv location
pub fn load_default_clients() -> Result<Vec<ClientProfile>, LoadError> {
    load_clients(DEFAULT_CLIENTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ClientID,Family,Age,Sex,Smoker,Coverage,Term,Medications,Conditions
1,term,35,Male,N,100000,20,,
2,fex,65,Female,N,10000,,,
3,siul,45,male,Y,250000,,Metformin; Lisinopril,Type 2 Diabetes (Controlled)
";

    #[test]
    fn test_load_clients_from_reader() {
        let clients = load_clients_from_reader(SAMPLE.as_bytes()).expect("sample should parse");
        assert_eq!(clients.len(), 3);

        let c1 = &clients[0];
        assert_eq!(c1.product_family, ProductFamily::Term);
        assert_eq!(c1.term, Some(20));
        assert!(c1.medications.is_empty());

        let c2 = &clients[1];
        assert_eq!(c2.product_family, ProductFamily::FinalExpense);
        assert_eq!(c2.sex, Sex::Female);
        assert_eq!(c2.term, None);

        let c3 = &clients[2];
        assert!(c3.smoker);
        assert_eq!(c3.medications, vec!["Metformin", "Lisinopril"]);
        assert_eq!(c3.conditions, vec!["Type 2 Diabetes (Controlled)"]);
    }

    #[test]
    fn test_unknown_family_reports_row() {
        let bad = "\
ClientID,Family,Age,Sex,Smoker,Coverage,Term,Medications,Conditions
1,annuity,35,Male,N,100000,,,
";
        match load_clients_from_reader(bad.as_bytes()) {
            Err(LoadError::Field { row, message, .. }) => {
                assert_eq!(row, 2);
                assert!(message.contains("annuity"));
            }
            other => panic!("expected field error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_clients() {
        let clients = load_default_clients().expect("Failed to load clients");
        assert!(!clients.is_empty());
        assert_eq!(clients[0].client_id, 1);
    }
}
