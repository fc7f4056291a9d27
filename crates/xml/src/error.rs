use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    /// The accumulated buffer did not re-parse as well-formed XML, either
    /// because traversal stopped with unbalanced tags or because an
    /// unencoded value corrupted the markup. Carries the raw buffer so
    /// callers can see what was produced.
    #[error("Could not parse the accumulated structure as XML: {source}")]
    MalformedOutput {
        xml: String,
        #[source]
        source: roxmltree::Error,
    },
}
