/// Base trait for SQL builders.
pub trait SqlBuilder {
    /// Build the SQL string.
    fn build_sql(&self) -> String;

    /// Debug helper.
    fn to_sql(&self) -> String {
        self.build_sql()
    }
}
