//! Error rendering using ariadne
//!
//! Absent values found by index are rendered as a report over the snapshot
//! of the sequence, pointing at the offending item. Everything else is a
//! header line followed by a help line.

use crate::GuardError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use core::ops::Range;
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown for the rendered snapshot.
    /// Defaults to "<sequence>" if not provided.
    pub source_name: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            source_name: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Stable code identifying the kind of `error`.
pub fn error_code(error: &GuardError) -> &'static str {
    match error {
        GuardError::InvalidArgument { .. } => "N001",
        GuardError::AbsentValue { .. } => "N002",
        GuardError::Sequence(_) => "N003",
    }
}

fn help(error: &GuardError) -> &'static str {
    match error {
        GuardError::InvalidArgument { .. } => {
            "Pass a present value; absence is never a valid item or search key"
        }
        GuardError::AbsentValue { .. } => {
            "The wrapped sequence stores an absent item; fix the code that put it there"
        }
        GuardError::Sequence(_) => "Reported by the wrapped sequence itself",
    }
}

/// Render an error to stderr using default config.
///
/// # Example
/// ```no_run
/// use nonull::{NullGuardedList, render_error};
///
/// let list = NullGuardedList::new(vec![Some(1), None]);
/// if let Err(e) = list.get(1) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &GuardError) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use nonull::{NullGuardedList, RenderConfig, render_error_to};
///
/// let mut list = NullGuardedList::new(vec![Some(1)]);
/// let err = list.add(0, None).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.starts_with("[N001] Error: Item can't be NULL in #add(0,T)"));
/// ```
pub fn render_error_to(
    error: &GuardError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let source_name = config.source_name.unwrap_or("<sequence>");

    if let GuardError::AbsentValue {
        operation,
        snapshot: Some(snapshot),
    } = error
        && let Some(span) = operation.index().and_then(|index| snapshot.span(index))
    {
        return render_snapshot(error, snapshot.as_str(), span, writer, config, source_name);
    }

    writeln!(writer, "[{}] Error: {}", error_code(error), error)?;
    writeln!(writer, "Help: {}", help(error))
}

fn render_snapshot(
    error: &GuardError,
    snapshot: &str,
    span: Range<usize>,
    writer: &mut dyn Write,
    config: &RenderConfig,
    source_name: &str,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let message = error.to_string();
    Report::build(ReportKind::Error, (source_name, span.clone()))
        .with_code(error_code(error))
        .with_message(&message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((source_name, span))
                .with_message("absent item")
                .with_color(colors.next()),
        )
        .with_help(help(error))
        .finish()
        .write((source_name, Source::from(snapshot)), &mut *writer)
}
