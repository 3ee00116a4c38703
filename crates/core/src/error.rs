/// Domain-level errors shared across the workspace crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup that is contractually fatal found nothing.
    ///
    /// Most single-entity lookups in this service soft-fail to an absent
    /// value; the death-count-by-name aggregation is the one operation that
    /// fails hard when its initial search matches no record.
    #[error("no {entity} matched '{query}'")]
    NoMatch {
        /// What was being searched, e.g. `"death record"`.
        entity: &'static str,
        /// The search term that produced no match.
        query: String,
    },
}
