use std::str::FromStr;

use hedron::Rgba;
use tessellator::ChannelLayout;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Mirror of [ChannelLayout] which clap can parse.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Layout {
    Fixed,
    Compact,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Fixed => f.write_str("fixed"),
            Layout::Compact => f.write_str("compact"),
        }
    }
}

impl From<Layout> for ChannelLayout {
    fn from(value: Layout) -> Self {
        match value {
            Layout::Fixed => ChannelLayout::Fixed,
            Layout::Compact => ChannelLayout::Compact,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tessellator=info,showcase=info",
        env = "SHOWCASE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Number of sides of the fan-triangulated polygon
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(3..))]
    pub sides: u32,
    /// Circumradius of the polygon
    #[arg(short, long, default_value_t = 1.0)]
    pub radius: f32,
    /// How optional vertex channels are laid out
    #[arg(long, default_value_t = Layout::Fixed)]
    pub layout: Layout,
    /// Make the block face visible from both sides
    #[arg(short, long)]
    pub double_sided: bool,
    /// Color applied to the block face
    #[arg(short, long, default_value = "1,1,1,1", value_parser = parse_rgba, value_name = "R,G,B,A")]
    pub color: Rgba,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseVectorError {
    #[error("expected {expected} comma-separated components, found {found}")]
    Arity { expected: usize, found: usize },
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
}

fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], ParseVectorError> {
    let parts = s
        .trim()
        .split(',')
        .map(|c| f32::from_str(c.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    <[f32; N]>::try_from(parts.as_slice()).map_err(|_| ParseVectorError::Arity {
        expected: N,
        found: parts.len(),
    })
}

fn parse_rgba(s: &str) -> Result<Rgba, ParseVectorError> {
    parse_components::<4>(s).map(Rgba::from)
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
