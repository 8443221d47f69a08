//! Closed industry vocabulary.

/// Label used whenever classification is unsure or fails.
pub const DEFAULT_INDUSTRY: &str = "General";

pub const INDUSTRY_TYPES: [&str; 21] = [
    "Business and Marketing",
    "Automotive",
    "Finance and Banking and Insurance",
    "Chemical",
    "Electronics and Home Appliance",
    "Energy and Environment",
    "Tourism and Hotel and Catering",
    "Gaming and Video Games",
    "Medical and Healthcare",
    "Government and NPO",
    "Legal and Contracts",
    "Literary and Art and History",
    "Software and IT",
    "Telecommunications",
    "Ecommerce and Shipping",
    "Technical and Engineering",
    "Certificates",
    "Education and E-learning",
    "Patent and Intellectual Property",
    "Media and Entertainment",
    DEFAULT_INDUSTRY,
];

/// Exact, case-sensitive membership.
pub fn is_industry(label: &str) -> bool {
    INDUSTRY_TYPES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_exact() {
        assert!(is_industry("Software and IT"));
        assert!(is_industry(DEFAULT_INDUSTRY));
        assert!(!is_industry("software and it"));
        assert!(!is_industry("Software and IT."));
    }
}
