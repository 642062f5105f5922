//! Progress bar display management and coordination.
//!
//! This module provides the [`ProgressDisplay`] struct that manages the bars
//! of one run: a main bar counting finished tasks and one child bar per
//! in-flight transfer.
//!
//! # Examples
//!
//! ```rust
//! use gleaner::progress::{ProgressDisplay, StyleOptions};
//!
//! let progress_display = ProgressDisplay::new(StyleOptions::default(), 5);
//!
//! let file_progress = progress_display.create_child_progress(1024);
//! file_progress.set_position(512);
//! progress_display.finish_child(file_progress);
//!
//! progress_display.increment_main();
//! progress_display.finish();
//! ```

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Progress display manager that coordinates multiple progress bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// The main progress bar for overall progress.
    main: Arc<ProgressBar>,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    ///
    /// # Arguments
    /// * `style_options` - Style configuration for progress bars
    /// * `total_tasks` - Total number of tasks for the main progress bar
    pub fn new(style_options: StyleOptions, total_tasks: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        let main = Arc::new(
            multi.add(
                style_options
                    .main()
                    .clone()
                    .to_progress_bar(total_tasks as u64),
            ),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a child progress bar for an individual transfer.
    ///
    /// # Arguments
    /// * `size` - Total size for the progress bar, 0 when unknown
    pub fn create_child_progress(&self, size: u64) -> ProgressBar {
        self.multi
            .add(self.style_options.child().clone().to_progress_bar(size))
    }

    /// Increment the main progress bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish the progress display, clearing or keeping bars based on configuration.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
