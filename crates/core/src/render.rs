use crate::chart::Chart;

/// Displays charts and warnings.
///
/// Both methods block until the user has dismissed what was shown, so a run
/// is a sequence of display steps.
///
/// # Example
///
/// ```
/// use poisson_core::{Chart, Renderer};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl Renderer for Log {
///     type Error = std::convert::Infallible;
///
///     fn show(&mut self, chart: &Chart) -> Result<(), Self::Error> {
///         self.0.push(chart.title.clone());
///         Ok(())
///     }
///
///     fn warn(&mut self, message: &str) -> Result<(), Self::Error> {
///         self.0.push(format!("warning: {message}"));
///         Ok(())
///     }
/// }
/// ```
pub trait Renderer {
    /// Error raised when the display itself fails.
    type Error;

    /// Draws a chart in its own window and waits for it to be closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be displayed.
    fn show(&mut self, chart: &Chart) -> Result<(), Self::Error>;

    /// Shows a non-fatal warning and waits for it to be dismissed.
    ///
    /// # Errors
    ///
    /// Returns an error if the warning cannot be displayed.
    fn warn(&mut self, message: &str) -> Result<(), Self::Error>;
}

/// Allows `&mut R` to be passed where a renderer is taken by value.
impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn show(&mut self, chart: &Chart) -> Result<(), Self::Error> {
        (**self).show(chart)
    }

    fn warn(&mut self, message: &str) -> Result<(), Self::Error> {
        (**self).warn(message)
    }
}
