//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log reconciliation
//! operations. Every event carries `component`, `op` and `event` fields
//! with canonical names from `sectiondiff_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sectiondiff_core::log_op_start;
/// log_op_start!("deliver_snapshot");
/// log_op_start!("deliver_snapshot", section_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use sectiondiff_core::log_op_end;
/// log_op_end!("deliver_snapshot", duration_ms = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error with its stable code
///
/// # Example
///
/// ```
/// # use sectiondiff_core::log_op_error;
/// # use sectiondiff_core::errors::{DiffError, KeyScope, SnapshotSide};
/// let err = DiffError::DuplicateIdentity {
///     scope: KeyScope::Section,
///     side: SnapshotSide::Target,
///     key: "\"s1\"".to_string(),
/// };
/// log_op_error!("deliver_snapshot", err, duration_ms = 2);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::DiffError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code(),
            err.message = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::DiffError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = sectiondiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code(),
            err.message = %err,
            $($field)*
        );
    }};
}
