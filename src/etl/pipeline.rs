//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Progress, Transformer};
use eyre::Result;

/// Messages recorded to the progress sink, in the order they are written
pub mod milestones {
    pub const JOB_STARTED: &str = "ETL Job Started";
    pub const EXTRACT_STARTED: &str = "Extract Phase Started";
    pub const EXTRACT_ENDED: &str = "Extract Phase Ended";
    pub const TRANSFORM_STARTED: &str = "Transformation Phase Started";
    pub const TRANSFORM_ENDED: &str = "Transformation Phase Ended";
    pub const LOAD_STARTED: &str = "Load Phase Started";
    pub const LOAD_ENDED: &str = "Load Phase Ended";
    pub const JOB_ENDED: &str = "ETL Job Ended";

    /// Every milestone of a successful run
    pub const ALL: [&str; 8] = [
        JOB_STARTED,
        EXTRACT_STARTED,
        EXTRACT_ENDED,
        TRANSFORM_STARTED,
        TRANSFORM_ENDED,
        LOAD_STARTED,
        LOAD_ENDED,
        JOB_ENDED,
    ];
}

/// ETL Pipeline that orchestrates Extract, Transform, and Load operations
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
/// - `P`: Progress sink receiving each milestone
///
/// # Example
/// ```no_run
/// use people_etl::etl::Pipeline;
/// # use people_etl::etl::{Extractor, Transformer, Loader};
/// # use people_etl::storage::ProgressLog;
/// # use eyre::Result;
/// # struct MyExtractor;
/// # impl Extractor for MyExtractor {
/// #     type Item = i32;
/// #     fn extract(&self) -> Result<Vec<Self::Item>> { Ok(vec![]) }
/// # }
/// # struct MyTransformer;
/// # impl Transformer for MyTransformer {
/// #     type Input = i32;
/// #     type Output = i32;
/// #     fn transform(&self, input: Self::Input) -> Result<Self::Output> { Ok(input) }
/// # }
/// # struct MyLoader;
/// # impl Loader for MyLoader {
/// #     type Item = i32;
/// #     fn load(&self, items: &[Self::Item]) -> Result<usize> { Ok(items.len()) }
/// # }
///
/// # fn example() -> Result<()> {
/// let pipeline = Pipeline::new(
///     MyExtractor,
///     MyTransformer,
///     MyLoader,
///     ProgressLog::new("log_file.txt"),
/// );
///
/// let loaded = pipeline.run()?;
/// println!("Processed {} items", loaded.len());
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L, P> {
    extractor: E,
    transformer: T,
    loader: L,
    progress: P,
}

impl<E, T, L, P> Pipeline<E, T, L, P>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
    P: Progress,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L, progress: P) -> Self {
        Self {
            extractor,
            transformer,
            loader,
            progress,
        }
    }

    /// Run the complete ETL pipeline
    ///
    /// Steps:
    /// 1. Extract items from source
    /// 2. Transform each item
    /// 3. Load items to destination
    ///
    /// Each phase is bracketed by a started/ended milestone. An empty
    /// extraction still runs the transform and load phases.
    ///
    /// Returns the items that were loaded
    ///
    /// # Errors
    /// Returns the first error from any stage or from the progress sink.
    /// Milestones after the failing point are never recorded.
    pub fn run(&self) -> Result<Vec<T::Output>> {
        use milestones::*;

        self.progress.record(JOB_STARTED)?;

        // Extract
        self.progress.record(EXTRACT_STARTED)?;
        let items = self.extractor.extract()?;
        log::debug!("Extracted {} items", items.len());
        if items.is_empty() {
            log::warn!("No items extracted, output will only hold a header");
        }
        self.progress.record(EXTRACT_ENDED)?;

        // Transform
        self.progress.record(TRANSFORM_STARTED)?;
        let transformed = self.transformer.transform_many(items)?;
        log::debug!("Transformed {} items", transformed.len());
        self.progress.record(TRANSFORM_ENDED)?;

        // Load
        self.progress.record(LOAD_STARTED)?;
        let count = self.loader.load(&transformed)?;
        log::debug!("Loaded {} items", count);
        self.progress.record(LOAD_ENDED)?;

        self.progress.record(JOB_ENDED)?;
        Ok(transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;
    use std::cell::{Cell, RefCell};

    struct MockExtractor(Vec<i32>);

    impl Extractor for MockExtractor {
        type Item = i32;
        fn extract(&self) -> Result<Vec<Self::Item>> {
            Ok(self.0.clone())
        }
    }

    struct FailingExtractor;

    impl Extractor for FailingExtractor {
        type Item = i32;
        fn extract(&self) -> Result<Vec<Self::Item>> {
            eyre::bail!("source unreadable")
        }
    }

    #[derive(Default)]
    struct TrackingExtractor(Cell<bool>);

    impl Extractor for TrackingExtractor {
        type Item = i32;
        fn extract(&self) -> Result<Vec<Self::Item>> {
            self.0.set(true);
            Ok(vec![1])
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

    #[derive(Default)]
    struct SumLoader(RefCell<Option<i32>>);

    impl Loader for SumLoader {
        type Item = i32;
        fn load(&self, items: &[Self::Item]) -> Result<usize> {
            *self.0.borrow_mut() = Some(items.iter().sum());
            Ok(items.len())
        }
    }

    struct FailingLoader;

    impl Loader for FailingLoader {
        type Item = i32;
        fn load(&self, _items: &[Self::Item]) -> Result<usize> {
            eyre::bail!("target unwritable")
        }
    }

    #[derive(Default)]
    struct MemoryProgress(RefCell<Vec<String>>);

    impl Progress for MemoryProgress {
        fn record(&self, message: &str) -> Result<()> {
            self.0.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    struct FailingProgress;

    impl Progress for FailingProgress {
        fn record(&self, message: &str) -> Result<()> {
            eyre::bail!("log file unwritable while recording {:?}", message)
        }
    }

    impl MemoryProgress {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn test_pipeline() {
        let loader = SumLoader::default();
        let progress = MemoryProgress::default();

        let pipeline = Pipeline::new(
            MockExtractor(vec![1, 2, 3]),
            DoubleTransformer,
            &loader,
            &progress,
        );

        let loaded = pipeline.run().unwrap();
        assert_eq!(loaded, vec![2, 4, 6]);
        assert_eq!(*loader.0.borrow(), Some(12)); // (1+2+3)*2 = 12
        assert_eq!(progress.messages(), milestones::ALL);
    }

    #[test]
    fn test_empty_pipeline_still_loads() {
        let loader = SumLoader::default();
        let progress = MemoryProgress::default();

        let pipeline = Pipeline::new(MockExtractor(vec![]), DoubleTransformer, &loader, &progress);

        let loaded = pipeline.run().unwrap();
        assert!(loaded.is_empty());
        assert_eq!(*loader.0.borrow(), Some(0));
        assert_eq!(progress.messages(), milestones::ALL);
    }

    #[test]
    fn test_extract_failure_stops_progress() {
        let progress = MemoryProgress::default();
        let pipeline = Pipeline::new(
            FailingExtractor,
            DoubleTransformer,
            SumLoader::default(),
            &progress,
        );

        let err = pipeline.run().unwrap_err();
        assert_eq!(err.to_string(), "source unreadable");
        assert_eq!(
            progress.messages(),
            vec![milestones::JOB_STARTED, milestones::EXTRACT_STARTED]
        );
    }

    #[test]
    fn test_load_failure_stops_progress() {
        let progress = MemoryProgress::default();
        let pipeline = Pipeline::new(
            MockExtractor(vec![1]),
            DoubleTransformer,
            FailingLoader,
            &progress,
        );

        assert!(pipeline.run().is_err());
        let messages = progress.messages();
        assert_eq!(messages.last().map(String::as_str), Some(milestones::LOAD_STARTED));
        assert!(!messages.iter().any(|m| m == milestones::LOAD_ENDED));
        assert!(!messages.iter().any(|m| m == milestones::JOB_ENDED));
    }

    #[test]
    fn test_progress_failure_aborts_before_extract() {
        let extractor = TrackingExtractor::default();
        let loader = SumLoader::default();

        let pipeline = Pipeline::new(&extractor, DoubleTransformer, &loader, FailingProgress);

        let err = pipeline.run().unwrap_err();
        assert!(err.to_string().contains(milestones::JOB_STARTED));
        assert!(!extractor.0.get());
        assert_eq!(*loader.0.borrow(), None);
    }
}
