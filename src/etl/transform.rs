//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for transforming data items
///
/// Implementors define how one item becomes another:
/// - Projection into a uniform JSON shape
/// - Format conversion
/// - Validation
///
/// # Example
/// ```no_run
/// use rag_extract::etl::Transformer;
/// use eyre::Result;
///
/// struct TitleUppercaser;
///
/// impl Transformer for TitleUppercaser {
///     type Input = String;
///     type Output = String;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.to_uppercase())
///     }
/// }
/// ```
pub trait Transformer: Send + Sync {
    /// Input item type
    type Input: Send;

    /// Output item type after transformation
    type Output: Send;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if transformation fails (validation, conversion, etc.)
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, preserving their order
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}

/// Identity transformer that passes items through unchanged
pub struct IdentityTransformer<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for IdentityTransformer<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> IdentityTransformer<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Send + Sync> Transformer for IdentityTransformer<T> {
    type Input = T;
    type Output = T;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transformer_keeps_order() {
        let transformer = IdentityTransformer::<&str>::new();
        let input = vec!["Doc 1", "Doc 2", "Doc 3"];
        let output = transformer.transform_many(input.clone()).unwrap();
        assert_eq!(input, output);
    }

    #[test]
    fn test_transform_many_stops_on_error() {
        struct RejectEmpty;

        impl Transformer for RejectEmpty {
            type Input = String;
            type Output = usize;

            fn transform(&self, input: Self::Input) -> Result<Self::Output> {
                if input.is_empty() {
                    eyre::bail!("empty input");
                }
                Ok(input.len())
            }
        }

        let result = RejectEmpty.transform_many(vec!["abc".into(), String::new()]);
        assert!(result.is_err());
    }
}
