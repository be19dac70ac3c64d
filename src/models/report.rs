/// Column header of the generated report, in output order.
pub const REPORT_COLUMNS: [&str; 6] = ["User", "First Name", "Last Name", "Date", "Holdings", "Values"];

/// Separator used to flatten several holdings into one cell.
pub const HOLDING_SEPARATOR: &str = "; ";

/// Flattened, display-ready view of one investment.
///
/// `holdings` and `values` are positionally aligned with the source
/// investment's holdings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub user: String,
    pub first_name: String,
    pub last_name: String,
    pub date: String,
    pub holdings: Vec<String>,
    pub values: Vec<f64>,
}

impl ReportRow {
    pub fn holdings_cell(&self) -> String {
        self.holdings.join(HOLDING_SEPARATOR)
    }

    pub fn values_cell(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(HOLDING_SEPARATOR)
    }

    pub fn to_record(&self) -> [String; 6] {
        [
            self.user.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.date.clone(),
            self.holdings_cell(),
            self.values_cell(),
        ]
    }
}
