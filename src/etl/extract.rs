//! Extractor trait for pulling items out of a source

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// Implementors define how to read items from a source such as:
/// - A SQLite document store
/// - An in-memory fixture list
///
/// # Example
/// ```no_run
/// use rag_extract::etl::Extractor;
/// use eyre::Result;
///
/// struct StaticTitles(Vec<String>);
///
/// impl Extractor for StaticTitles {
///     type Item = String;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract every item from the source, in source order
    ///
    /// An empty source yields an empty vector rather than an error.
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened or read
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
