use std::collections::HashMap;

use crate::models::Company;

pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Company id -> display name, built once per report from the fetched company set.
pub struct CompanyDirectory<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> CompanyDirectory<'a> {
    pub fn new(companies: &'a [Company]) -> Self {
        let mut names = HashMap::with_capacity(companies.len());
        for company in companies {
            // Duplicate ids: the first record wins.
            names.entry(company.id.as_str()).or_insert(company.name.as_str());
        }
        Self { names }
    }

    /// Display name for `company_id`, or `"Unknown"` when the id is not in the directory.
    pub fn resolve(&self, company_id: &str) -> &'a str {
        self.names.get(company_id).copied().unwrap_or(UNKNOWN_COMPANY)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> Company {
        Company { id: id.into(), name: name.into() }
    }

    #[test]
    fn test_resolves_known_company() {
        let companies = vec![company("company1", "Company A"), company("company2", "Company B")];
        let directory = CompanyDirectory::new(&companies);
        assert_eq!(directory.resolve("company2"), "Company B");
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_unknown_company_falls_back() {
        let companies = vec![company("company1", "Company A")];
        let directory = CompanyDirectory::new(&companies);
        assert_eq!(directory.resolve("company9"), "Unknown");
        assert_eq!(directory.resolve("COMPANY1"), "Unknown");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let companies = vec![company("c1", "First"), company("c1", "Second")];
        let directory = CompanyDirectory::new(&companies);
        assert_eq!(directory.resolve("c1"), "First");
    }

    #[test]
    fn test_empty_directory() {
        let directory = CompanyDirectory::new(&[]);
        assert!(directory.is_empty());
        assert_eq!(directory.resolve("anything"), "Unknown");
    }
}
