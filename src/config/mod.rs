use crate::domain::model::PersonInput;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{parse_birthdate, validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology diagnosis from a name and birthdate")]
pub struct CliConfig {
    /// Name in roman letters
    #[arg(long)]
    pub name: String,

    /// Birthdate as YYYY-MM-DD (1925-01-01 to 2025-12-31)
    #[arg(long)]
    pub birthdate: String,

    /// Partner's name, enables the compatibility diagnosis
    #[arg(long)]
    pub partner_name: Option<String>,

    /// Partner's birthdate as YYYY-MM-DD
    #[arg(long)]
    pub partner_birthdate: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn person(&self) -> Result<PersonInput> {
        validate_non_empty_string("name", &self.name)?;
        let birthdate = parse_birthdate("birthdate", &self.birthdate)?;
        Ok(PersonInput::new(self.name.trim(), birthdate))
    }

    /// Partner input, if the compatibility flags were given. Both flags must
    /// be present together.
    pub fn partner(&self) -> Result<Option<PersonInput>> {
        match (&self.partner_name, &self.partner_birthdate) {
            (None, None) => Ok(None),
            (Some(name), Some(birthdate)) => {
                validate_non_empty_string("partner_name", name)?;
                let birthdate = parse_birthdate("partner_birthdate", birthdate)?;
                Ok(Some(PersonInput::new(name.trim(), birthdate)))
            }
            (Some(_), None) => Err(NumerologyError::MissingInputError {
                field: "partner_birthdate".to_string(),
            }),
            (None, Some(_)) => Err(NumerologyError::MissingInputError {
                field: "partner_name".to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.person()?;
        self.partner()?;
        Ok(())
    }
}
