//! Prompt builders for the generative fallback and the industry classifier.
//!
//! Source records are rendered as pretty JSON after multi-value lists are
//! flattened, so the model sees one address line per source.

use firmfuse_shared::{Field, RawSourceRecord, INDUSTRY_TYPES};

/// Which instruction a field gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Description,
    Country,
    Generic(Field),
}

impl PromptKind {
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Description => PromptKind::Description,
            Field::Country => PromptKind::Country,
            other => PromptKind::Generic(other),
        }
    }
}

fn render(record: &RawSourceRecord) -> String {
    serde_json::to_string_pretty(&record.prompt_view()).unwrap_or_else(|_| "{}".to_string())
}

fn sources_block(search: &RawSourceRecord, network: &RawSourceRecord) -> String {
    format!(
        "Search Data:\n{}\n\nProfessional Network Data:\n{}",
        render(search),
        render(network)
    )
}

/// Gap-filling prompt for `field`.
pub fn fill_prompt(field: Field, search: &RawSourceRecord, network: &RawSourceRecord) -> String {
    let sources = sources_block(search, network);

    match PromptKind::for_field(field) {
        PromptKind::Description => format!(
            "You are a company data expert. Given the following two sets of company data, write a detailed, \
professional company description for the field 'Description' in 3 to 4 lines.\n\
Never respond with 'No information found', 'Unknown', 'N/A', or anything similar. If both sources are missing \
or incomplete, invent a plausible, business-like description for a company with this name and context.\n\
Always provide a complete, business-like description in 3 to 4 lines, even if you have to make an educated guess. \
Do not mention that information is missing or not found.\n\n\
{sources}\n\n\
Respond with only the company description, nothing else."
        ),
        PromptKind::Country => format!(
            "You are a company data expert. Given the following company data, extract the country name for this company.\n\
If the country is not explicitly mentioned, infer it from the address, description, or any other available context.\n\
Never respond with 'No information found', 'Unknown', 'N/A', or anything similar. Always provide a plausible \
country name, even if you have to make an educated guess.\n\n\
{sources}\n\n\
Respond with only the country name, nothing else."
        ),
        PromptKind::Generic(field) => {
            let label = field.label();
            format!(
                "You are a company data expert. Given the following two sets of company data, provide the most \
plausible or relevant value for the field '{label}'.\n\
If both sources are missing or incomplete, use your knowledge to infer, generate, or invent a value that would \
be reasonable for a company like this.\n\
Never return 'N/A', 'No information found', 'Unknown', or leave the field blank. Always provide something \
plausible, even if you have to make an educated guess.\n\n\
{sources}\n\n\
Respond with only the value for '{label}', nothing else."
            )
        }
    }
}

/// Classification prompt enumerating the full vocabulary.
pub fn industry_prompt(search: &RawSourceRecord, network: &RawSourceRecord) -> String {
    let industry_list = INDUSTRY_TYPES
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a company data expert. Given the following company data, select the single most appropriate \
industry type from this list:\n\
{industry_list}\n\n\
Only respond with the exact industry type from the list above. If unsure, choose 'General'.\n\n\
{}",
        sources_block(search, network)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> (RawSourceRecord, RawSourceRecord) {
        let search = RawSourceRecord::new()
            .with(Field::CompanyName, "Acme")
            .with(Field::Address, vec!["1 Desert Rd".to_string(), "2 Mesa Way".to_string()]);
        let network = RawSourceRecord::new().with(Field::Email, "N/A");
        (search, network)
    }

    #[test]
    fn test_prompt_kinds() {
        assert_eq!(PromptKind::for_field(Field::Description), PromptKind::Description);
        assert_eq!(PromptKind::for_field(Field::Country), PromptKind::Country);
        assert_eq!(
            PromptKind::for_field(Field::PostalCode),
            PromptKind::Generic(Field::PostalCode)
        );
    }

    #[test]
    fn test_generic_prompt_names_field_and_flattens_addresses() {
        let (search, network) = records();
        let prompt = fill_prompt(Field::PostalCode, &search, &network);
        assert!(prompt.contains("for the field 'Postal Code'"));
        assert!(prompt.contains("1 Desert Rd; 2 Mesa Way"));
        assert!(prompt.contains("\"Email\": \"N/A\""));
    }

    #[test]
    fn test_country_and_description_prompts_differ() {
        let (search, network) = records();
        assert!(fill_prompt(Field::Country, &search, &network).contains("extract the country name"));
        assert!(fill_prompt(Field::Description, &search, &network).contains("in 3 to 4 lines"));
    }

    #[test]
    fn test_industry_prompt_lists_vocabulary() {
        let (search, network) = records();
        let prompt = industry_prompt(&search, &network);
        for label in INDUSTRY_TYPES {
            assert!(prompt.contains(&format!("- {}", label)));
        }
    }
}
