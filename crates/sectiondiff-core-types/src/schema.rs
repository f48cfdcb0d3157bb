//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_UPDATE_ID: &str = "update_id";

// Collection sizes
pub const FIELD_SECTION_COUNT: &str = "section_count";
pub const FIELD_ITEM_COUNT: &str = "item_count";
pub const FIELD_OPERATION_COUNT: &str = "operation_count";

// Reconciliation outcome
pub const FIELD_TRANSITION: &str = "transition";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
