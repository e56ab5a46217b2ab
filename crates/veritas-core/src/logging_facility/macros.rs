//! Canonical logging macros
//!
//! Every assertion boundary logs through these so the `component`, `op` and
//! `event` fields stay uniform.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use veritas_core::log_op_start;
/// log_op_start!("assert_equal");
/// log_op_start!("assert_equal", type_name = "int");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use veritas_core::log_op_end;
/// log_op_end!("assert_equal", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation with the error's canonical kind and code
///
/// # Example
///
/// ```
/// # use veritas_core::{log_op_error, errors::VeritasError};
/// let err = VeritasError::Incomparable { type_name: "Acme.Widget".to_string() };
/// log_op_error!("assert_in_range", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            { $crate::veritas_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::veritas_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::veritas_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            { $crate::veritas_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::veritas_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            $($field)*
        );
    }};
}
