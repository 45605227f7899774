use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::recolor_pipeline::{
    channels::ChannelSelection,
    color::TargetColor,
    common::error::{RecolorError, Result},
    processing::{BatchItem, CancelToken, ImageBuffer, ProcessingConfig, Progress},
    substitution::{ChannelSubstitutionEngine, Pixel, PixelSubstitution, types::CHANNELS_PER_PIXEL},
};

pub struct ImageProcessor<E: PixelSubstitution = ChannelSubstitutionEngine> {
    engine: E,
    config: ProcessingConfig,
    cancel: Option<CancelToken>,
    pool: OnceLock<ThreadPool>,
}

impl ImageProcessor<ChannelSubstitutionEngine> {
    pub fn new(config: ProcessingConfig) -> Self {
        Self {
            engine: ChannelSubstitutionEngine,
            config,
            cancel: None,
            pool: OnceLock::new(),
        }
    }
}

impl<E: PixelSubstitution> ImageProcessor<E> {
    pub fn with_custom(engine: E, config: ProcessingConfig) -> Self {
        Self {
            engine,
            config,
            cancel: None,
            pool: OnceLock::new(),
        }
    }

    /// Batches stop before their next item once `token` is cancelled.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    fn validate_dimensions(&self, buffer: &ImageBuffer) -> Result<()> {
        let (width, height) = (buffer.width, buffer.height);

        if self.config.validate_dimensions {
            if width == 0 || height == 0 {
                return Err(RecolorError::InvalidDimensions(width, height));
            }

            if let Some(max) = self.config.max_dimension {
                if width > max || height > max {
                    warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                    return Err(RecolorError::InvalidDimensions(width, height));
                }
            }
        }

        let expected = ImageBuffer::expected_len(width, height)
            .ok_or(RecolorError::InvalidDimensions(width, height))?;
        if buffer.data.len() != expected {
            return Err(RecolorError::BufferSizeMismatch {
                expected,
                actual: buffer.data.len(),
            });
        }

        Ok(())
    }

    /// Recolors one image into a new buffer of the same dimensions.
    #[instrument(skip_all, fields(width = buffer.width, height = buffer.height, mode = %selection.mode()))]
    pub fn process_image(
        &self,
        buffer: &ImageBuffer,
        selection: &ChannelSelection,
        target: &TargetColor,
    ) -> Result<ImageBuffer> {
        if selection.is_empty() {
            return Err(RecolorError::EmptySelection);
        }

        self.validate_dimensions(buffer)?;

        let output = self.substitute_pixels(buffer, selection, target);
        debug!("Image processed");
        Ok(output)
    }

    fn substitute_pixels(
        &self,
        buffer: &ImageBuffer,
        selection: &ChannelSelection,
        target: &TargetColor,
    ) -> ImageBuffer {
        let mut data = vec![0u8; buffer.data.len()];

        let apply = |src: &[u8], dst: &mut [u8]| {
            for (src_px, dst_px) in src
                .chunks_exact(CHANNELS_PER_PIXEL)
                .zip(dst.chunks_exact_mut(CHANNELS_PER_PIXEL))
            {
                let pixel = self
                    .engine
                    .substitute(Pixel::from_rgba_slice(src_px), selection, target);
                dst_px.copy_from_slice(&pixel.to_rgba());
            }
        };

        let row_len = buffer.width * CHANNELS_PER_PIXEL;
        if self.config.parallel_pixels && row_len > 0 {
            data.par_chunks_mut(row_len)
                .zip(buffer.data.par_chunks(row_len))
                .for_each(|(dst, src)| apply(src, dst));
        } else {
            apply(&buffer.data[..], &mut data[..]);
        }

        ImageBuffer {
            width: buffer.width,
            height: buffer.height,
            data,
        }
    }

    /// Recolors every item and returns the outputs in input order.
    ///
    /// Any failing item aborts the whole batch and no outputs are returned.
    /// `on_progress` fires after each finished item with a strictly
    /// increasing completed count.
    #[instrument(skip_all, fields(total = items.len(), workers = self.config.workers))]
    pub fn process_batch<F>(
        &self,
        items: &[BatchItem],
        selection: &ChannelSelection,
        target: &TargetColor,
        on_progress: F,
    ) -> Result<Vec<ImageBuffer>>
    where
        F: Fn(Progress) + Sync,
    {
        if selection.is_empty() {
            return Err(RecolorError::EmptySelection);
        }

        info!(mode = %selection.mode(), "Starting batch");
        let reporter = ProgressReporter::new(items.len(), &on_progress);
        let step = |index: usize, item: &BatchItem| {
            self.process_item(index, item, selection, target, &reporter)
        };

        let outputs = match self.worker_pool()? {
            Some(pool) => pool.install(|| {
                items
                    .par_iter()
                    .enumerate()
                    .map(|(index, item)| step(index, item))
                    .collect::<Result<Vec<_>>>()
            }),
            None => items
                .iter()
                .enumerate()
                .map(|(index, item)| step(index, item))
                .collect::<Result<Vec<_>>>(),
        }?;

        info!("Batch complete");
        Ok(outputs)
    }

    /// Like [`process_batch`](Self::process_batch), but stores each result in
    /// its item's `output`. When the batch stops early, outputs already
    /// stored stay in place.
    #[instrument(skip_all, fields(total = items.len(), workers = self.config.workers))]
    pub fn process_batch_items<F>(
        &self,
        items: &mut [BatchItem],
        selection: &ChannelSelection,
        target: &TargetColor,
        on_progress: F,
    ) -> Result<()>
    where
        F: Fn(Progress) + Sync,
    {
        if selection.is_empty() {
            return Err(RecolorError::EmptySelection);
        }

        info!(mode = %selection.mode(), "Starting batch");
        let reporter = ProgressReporter::new(items.len(), &on_progress);
        let step = |index: usize, item: &mut BatchItem| -> Result<()> {
            let output = self.process_item(index, item, selection, target, &reporter)?;
            item.output = Some(output);
            Ok(())
        };

        match self.worker_pool()? {
            Some(pool) => pool.install(|| {
                items
                    .par_iter_mut()
                    .enumerate()
                    .try_for_each(|(index, item)| step(index, item))
            }),
            None => items
                .iter_mut()
                .enumerate()
                .try_for_each(|(index, item)| step(index, item)),
        }?;

        info!("Batch complete");
        Ok(())
    }

    fn process_item<F: Fn(Progress)>(
        &self,
        index: usize,
        item: &BatchItem,
        selection: &ChannelSelection,
        target: &TargetColor,
        reporter: &ProgressReporter<'_, F>,
    ) -> Result<ImageBuffer> {
        if self.is_cancelled() {
            let completed = reporter.completed();
            warn!(completed, total = reporter.total, "Batch cancelled");
            return Err(RecolorError::Cancelled {
                completed,
                total: reporter.total,
            });
        }

        let _span = tracing::info_span!("batch_item", index, name = %item.name).entered();

        let output = self
            .process_image(&item.input, selection, target)
            .map_err(|source| {
                warn!(error = %source, "Batch item failed");
                RecolorError::ItemProcessingFault {
                    index,
                    name: item.name.clone(),
                    source: Box::new(source),
                }
            })?;

        let progress = reporter.advance();
        debug!(
            completed = progress.completed,
            total = progress.total,
            "Batch item finished"
        );
        Ok(output)
    }

    /// Batch pool, built on first parallel use and kept for later batches.
    fn worker_pool(&self) -> Result<Option<&ThreadPool>> {
        if !self.config.is_parallel_batch() {
            return Ok(None);
        }

        if let Some(pool) = self.pool.get() {
            return Ok(Some(pool));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("recolor-worker-{}", i))
            .build()
            .map_err(|e| RecolorError::WorkerPool(e.to_string()))?;
        debug!(workers = self.config.workers, "Worker pool started");

        // A concurrent first batch may have won the race; its pool is kept
        Ok(Some(self.pool.get_or_init(|| pool)))
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Replaces the configuration. The worker pool is rebuilt on the next
    /// parallel batch if the worker count changed.
    pub fn set_config(&mut self, config: ProcessingConfig) {
        if config.workers != self.config.workers {
            self.pool = OnceLock::new();
        }
        self.config = config;
    }
}

/// Serializes progress callbacks so the completed count never goes backwards,
/// even when items finish on different threads.
struct ProgressReporter<'a, F> {
    completed: Mutex<usize>,
    total: usize,
    on_progress: &'a F,
}

impl<'a, F: Fn(Progress)> ProgressReporter<'a, F> {
    fn new(total: usize, on_progress: &'a F) -> Self {
        Self {
            completed: Mutex::new(0),
            total,
            on_progress,
        }
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.completed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn completed(&self) -> usize {
        *self.lock()
    }

    fn advance(&self) -> Progress {
        let mut completed = self.lock();
        *completed += 1;
        let progress = Progress {
            completed: *completed,
            total: self.total,
        };
        (self.on_progress)(progress);
        progress
    }
}
