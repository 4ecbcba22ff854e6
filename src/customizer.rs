//! Customization hooks applied to each pool before it is connected

use sea_orm::ConnectOptions;

/// Callback invoked on each pool's connect options
///
/// Customizers run exactly once per pool, in registration order, after the
/// configured settings have been bound onto the options and before the pool
/// is connected. They therefore have the last word over any bound value.
///
/// Plain closures work as customizers:
///
/// ```
/// use sea_orm::ConnectOptions;
/// use seapool::PoolCustomizer;
///
/// fn quiet_logging() -> impl PoolCustomizer {
///     |_name: &str, options: &mut ConnectOptions| {
///         options.sqlx_logging(false);
///     }
/// }
/// # let _ = quiet_logging();
/// ```
pub trait PoolCustomizer: Send + Sync {
    /// Adjust the options of the pool registered under `name`
    fn customize(&self, name: &str, options: &mut ConnectOptions);
}

impl<F> PoolCustomizer for F
where
    F: Fn(&str, &mut ConnectOptions) + Send + Sync,
{
    fn customize(&self, name: &str, options: &mut ConnectOptions) {
        self(name, options)
    }
}
