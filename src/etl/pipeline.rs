//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use eyre::Result;

/// How a pipeline run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The source yielded nothing; the transformer and loader never ran
    Empty,
    /// The loader ran and reported this many items written
    Loaded(usize),
}

impl PipelineOutcome {
    /// Items written, zero for an empty source
    pub fn loaded(&self) -> usize {
        match self {
            PipelineOutcome::Empty => 0,
            PipelineOutcome::Loaded(count) => *count,
        }
    }
}

/// ETL Pipeline that orchestrates Extract, Transform, and Load operations
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
///
/// # Example
/// ```no_run
/// use rag_extract::etl::{IdentityTransformer, Pipeline, PipelineOutcome};
/// use rag_extract::storage::{JsonArrayLoader, MemorySink};
/// use rag_extract::store::{DocumentExtractor, ExtractedRecord};
///
/// # async fn example() -> eyre::Result<()> {
/// let pipeline = Pipeline::new(
///     DocumentExtractor::new("test.db"),
///     IdentityTransformer::<ExtractedRecord>::new(),
///     JsonArrayLoader::<_, ExtractedRecord>::new(MemorySink::new(), "rag-data.json"),
/// );
///
/// match pipeline.run().await? {
///     PipelineOutcome::Empty => println!("Nothing to export"),
///     PipelineOutcome::Loaded(count) => println!("Exported {} documents", count),
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Borrow the loader, e.g. to inspect the sink after a run
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Run extract, transform and load once, in that order
    ///
    /// An empty extraction ends the run with [`PipelineOutcome::Empty`]
    /// before any transform or load happens. Otherwise the loader is invoked
    /// exactly once with every transformed item, even if the transformer
    /// produced none.
    ///
    /// # Errors
    /// Returns the first stage error; later stages do not run
    pub async fn run(&self) -> Result<PipelineOutcome> {
        let extracted = self.extractor.extract().await?;
        if extracted.is_empty() {
            log::warn!("Source is empty, skipping transform and load");
            return Ok(PipelineOutcome::Empty);
        }
        log::info!("Extracted {} items", extracted.len());

        let transformed = self.transformer.transform_many(extracted)?;
        log::debug!("Transformed into {} items", transformed.len());

        let loaded = self.loader.load(transformed).await?;
        log::info!("Loaded {} items", loaded);

        Ok(PipelineOutcome::Loaded(loaded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;
    use std::sync::{Arc, Mutex};

    struct MockExtractor(Vec<i32>);

    impl Extractor for MockExtractor {
        type Item = i32;
        async fn extract(&self) -> Result<Vec<Self::Item>> {
            Ok(self.0.clone())
        }
    }

    struct FailingExtractor;

    impl Extractor for FailingExtractor {
        type Item = i32;
        async fn extract(&self) -> Result<Vec<Self::Item>> {
            eyre::bail!("store unavailable")
        }
    }

    struct DoubleTransformer;

    impl Transformer for DoubleTransformer {
        type Input = i32;
        type Output = i32;
        fn transform(&self, input: Self::Input) -> Result<Self::Output> {
            Ok(input * 2)
        }
    }

    /// Keeps only even numbers
    struct EvenFilter;

    impl Transformer for EvenFilter {
        type Input = i32;
        type Output = i32;
        fn transform(&self, input: Self::Input) -> Result<Self::Output> {
            Ok(input)
        }
        fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
            Ok(inputs.into_iter().filter(|i| i % 2 == 0).collect())
        }
    }

    /// Records every batch it receives
    struct RecordingLoader(Arc<Mutex<Vec<Vec<i32>>>>);

    impl Loader for RecordingLoader {
        type Item = i32;
        async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
            let count = items.len();
            self.0.lock().unwrap().push(items);
            Ok(count)
        }
    }

    #[tokio::test]
    async fn test_pipeline() {
        let batches = Arc::new(Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(
            MockExtractor(vec![1, 2, 3]),
            DoubleTransformer,
            RecordingLoader(batches.clone()),
        );

        let outcome = pipeline.run().await.unwrap();
        assert_eq!(outcome, PipelineOutcome::Loaded(3));
        assert_eq!(*batches.lock().unwrap(), vec![vec![2, 4, 6]]);
    }

    #[tokio::test]
    async fn test_empty_pipeline_skips_loader() {
        let batches = Arc::new(Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(
            MockExtractor(vec![]),
            DoubleTransformer,
            RecordingLoader(batches.clone()),
        );

        let outcome = pipeline.run().await.unwrap();
        assert_eq!(outcome, PipelineOutcome::Empty);
        assert_eq!(outcome.loaded(), 0);
        assert!(batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extract_error_propagates() {
        let batches = Arc::new(Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(
            FailingExtractor,
            DoubleTransformer,
            RecordingLoader(batches.clone()),
        );

        let err = pipeline.run().await.unwrap_err();
        assert!(err.to_string().contains("store unavailable"));
        assert!(batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filtered_to_nothing_still_loads() {
        let batches = Arc::new(Mutex::new(Vec::new()));

        let pipeline = Pipeline::new(
            MockExtractor(vec![1, 3, 5]),
            EvenFilter,
            RecordingLoader(batches.clone()),
        );

        let outcome = pipeline.run().await.unwrap();
        assert_eq!(outcome, PipelineOutcome::Loaded(0));
        assert_eq!(*batches.lock().unwrap(), vec![Vec::<i32>::new()]);
    }
}
