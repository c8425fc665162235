/// Value written into `last_invoked` when the function has no log events to look at.
pub const NOT_FOUND: &str = "Not Found";

/// Report column titles, in the same order as [`FunctionRecord::row`].
pub const COLUMN_TITLES: [&str; 7] = [
    "Function Name",
    "Function ARN",
    "Function Description",
    "Last Modified",
    "IAM Role",
    "Runtime",
    "Last Invoked",
];

/// `FunctionRecord` stores the details of a listed function
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionRecord {
    /// Function name
    pub name: String,
    /// Function ARN
    pub arn: String,
    /// Free-text description, empty when the function has none
    pub description: String,
    /// Last modification time as reported by Lambda
    pub last_modified: String,
    /// Execution role ARN
    pub role: String,
    /// Runtime identifier, empty for container image functions
    pub runtime: String,
    /// `None` until the function has been looked up in CloudWatch Logs.
    pub last_invoked: Option<String>,
}

impl FunctionRecord {
    /// Report row for this function, one field per entry in [`COLUMN_TITLES`].
    pub fn row(&self) -> [&str; 7] {
        [
            &self.name,
            &self.arn,
            &self.description,
            &self.last_modified,
            &self.role,
            &self.runtime,
            self.last_invoked.as_deref().unwrap_or_default(),
        ]
    }
}
