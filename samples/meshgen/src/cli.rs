use std::str::FromStr;

use nalgebra::{SVector, Scalar, Vector3, Vector4};

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

/// The mesh to start from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Shape {
    Quad,
    Cube,
    Grid,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Quad => f.write_str("quad"),
            Shape::Cube => f.write_str("cube"),
            Shape::Grid => f.write_str("grid"),
        }
    }
}

/// Build a mesh and run it through a pipeline of operations, logging the result of each step.
///
/// Steps run in the order their options are listed here.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,g3d=info,meshgen=info",
        env = "MESHGEN_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Starting mesh
    #[arg(long, default_value_t = Shape::Grid)]
    pub shape: Shape,
    /// Columns and rows of quads, for the grid shape
    #[arg(short, long, default_value = "4,4", value_parser = parse_pair, value_name = "COLS,ROWS")]
    pub grid: (usize, usize),
    /// Keep only these faces, with unused vertices removed
    #[arg(long, value_parser = parse_pair, value_name = "FROM,COUNT")]
    pub select: Option<(usize, usize)>,
    /// Split quads into triangles
    #[arg(short, long)]
    pub triangulate: bool,
    /// Reverse the winding of every face
    #[arg(short, long)]
    pub flip: bool,
    /// Add a back face for every face
    #[arg(short, long)]
    pub double_sided: bool,
    /// Scaling applied to each vertex
    #[arg(short, long, default_value = "1,1,1", value_parser = parse_vector::<f32, 3>, value_name = "X,Y,Z")]
    pub scale: Vector3<f32>,
    /// Offset applied to each vertex, after scaling
    #[arg(long, value_parser = parse_vector::<f32, 3>, value_name = "X,Y,Z")]
    pub translate: Option<Vector3<f32>>,
    /// Vertex color
    #[arg(short, long, value_parser = parse_vector::<f32, 4>, value_name = "R,G,B,A")]
    pub color: Option<Vector4<f32>>,
    /// Compute a normal for each face
    #[arg(short = 'n', long)]
    pub face_normals: bool,
}

type ParseError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn parse_vector<R: FromStr + Scalar, const N: usize>(s: &str) -> Result<SVector<R, N>, ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let parts = s
        .trim()
        .split(',')
        .map(|p| R::from_str(p.trim()))
        .collect::<Result<Vec<R>, _>>()?;
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated values, found {}", parts.len()).into());
    }
    Ok(SVector::from_column_slice(&parts))
}

fn parse_pair(s: &str) -> Result<(usize, usize), ParseError> {
    let v = parse_vector::<usize, 2>(s)?;
    Ok((v.x, v.y))
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                eprintln!("couldn't get local time offset: {e:?}");
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
