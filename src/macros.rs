//! Statement-level shorthands. Each expands to one temporary [`Line`](crate::Line)
//! that is dropped, and therefore written, at the end of the statement.

/// Logs one line on the global registry: `log!(Severity::Warning, "Pi = ", 3.14159)`.
#[macro_export]
macro_rules! log {
    ($severity:expr $(, $value:expr)* $(,)?) => {{
        $crate::line($severity)$(.append($value))*;
    }};
}

/// Logs one line on an explicit registry: `log_to!(registry, Severity::Info, "ready")`.
#[macro_export]
macro_rules! log_to {
    ($registry:expr, $severity:expr $(, $value:expr)* $(,)?) => {{
        ($registry).line($severity)$(.append($value))*;
    }};
}

#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Debug $(, $value)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Warning $(, $value)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Error $(, $value)*)
    };
}

#[macro_export]
macro_rules! critical {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Critical $(, $value)*)
    };
}
