use crate::models::{Investment, ReportRow};
use crate::services::company_directory::{CompanyDirectory, UNKNOWN_COMPANY};

/// Joins one investment against the company directory.
///
/// Holdings keep their source order; each gets its resolved company name and
/// `investmentTotal * investmentPercentage` as value.
pub fn build_row(investment: &Investment, directory: &CompanyDirectory<'_>) -> ReportRow {
    let holdings = investment.holdings();

    let mut names = Vec::with_capacity(holdings.len());
    let mut values = Vec::with_capacity(holdings.len());
    for holding in &holdings {
        let name = match holding.company_id.as_deref() {
            Some(id) => directory.resolve(id),
            None => UNKNOWN_COMPANY,
        };
        names.push(name.to_string());
        values.push(investment.holding_value(holding));
    }

    ReportRow {
        user: investment.user_id(),
        first_name: investment.first_name(),
        last_name: investment.last_name(),
        date: investment.date(),
        holdings: names,
        values,
    }
}

pub fn build_rows(investments: &[Investment], directory: &CompanyDirectory<'_>) -> Vec<ReportRow> {
    investments
        .iter()
        .map(|investment| build_row(investment, directory))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;
    use serde_json::{json, Value};

    fn companies() -> Vec<Company> {
        vec![
            Company { id: "company1".into(), name: "Company A".into() },
            Company { id: "company2".into(), name: "Company B".into() },
        ]
    }

    fn investment(total: f64, holdings: Vec<(&str, f64)>) -> Investment {
        let holdings: Vec<Value> = holdings
            .into_iter()
            .map(|(id, pct)| json!({ "id": id, "investmentPercentage": pct }))
            .collect();
        Investment::from(json!({
            "id": "1",
            "userId": "user1",
            "firstName": "John",
            "lastName": "Doe",
            "date": "2023-01-01",
            "investmentTotal": total,
            "holdings": holdings,
        }))
    }

    #[test]
    fn test_two_holdings_are_aligned() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let row = build_row(&investment(10000.0, vec![("company1", 0.5), ("company2", 0.5)]), &directory);

        assert_eq!(row.user, "user1");
        assert_eq!(row.first_name, "John");
        assert_eq!(row.last_name, "Doe");
        assert_eq!(row.date, "2023-01-01");
        assert_eq!(row.holdings, vec!["Company A", "Company B"]);
        assert_eq!(row.values, vec![5000.0, 5000.0]);
    }

    #[test]
    fn test_holding_order_is_preserved() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let row = build_row(&investment(1000.0, vec![("company2", 0.75), ("company1", 0.25)]), &directory);

        assert_eq!(row.holdings, vec!["Company B", "Company A"]);
        assert_eq!(row.values, vec![750.0, 250.0]);
    }

    #[test]
    fn test_unknown_company_keeps_position() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let row = build_row(
            &investment(200.0, vec![("company1", 0.1), ("ghost", 0.2), ("company2", 0.7)]),
            &directory,
        );

        assert_eq!(row.holdings, vec!["Company A", "Unknown", "Company B"]);
        assert_eq!(row.values.len(), 3);
        assert_eq!(row.values[1], 200.0 * 0.2);
    }

    #[test]
    fn test_out_of_range_percentage_is_used_as_is() {
        let directory = CompanyDirectory::new(&[]);
        let row = build_row(&investment(100.0, vec![("x", 1.5), ("y", -0.5)]), &directory);
        assert_eq!(row.values, vec![150.0, -50.0]);
    }

    #[test]
    fn test_no_holdings_yields_empty_lists() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let row = build_row(&investment(10000.0, vec![]), &directory);
        assert!(row.holdings.is_empty());
        assert!(row.values.is_empty());
    }

    #[test]
    fn test_sparse_record_renders_empty_cells() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let row = build_row(
            &Investment::from(json!({
                "id": "9",
                "userId": 42,
                "holdings": [{ "id": "company1" }, { "investmentPercentage": 0.5 }]
            })),
            &directory,
        );

        assert_eq!(row.user, "42");
        assert_eq!(row.first_name, "");
        assert_eq!(row.date, "");
        assert_eq!(row.holdings, vec!["Company A", "Unknown"]);
        assert_eq!(row.values, vec![0.0, 0.0]);
    }

    #[test]
    fn test_build_rows_one_per_investment() {
        let companies = companies();
        let directory = CompanyDirectory::new(&companies);
        let rows = build_rows(
            &[investment(10.0, vec![("company1", 1.0)]), investment(20.0, vec![])],
            &directory,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values, vec![10.0]);
    }
}
